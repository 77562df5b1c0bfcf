use super::content_store::ContentStore;
use super::models::{Project, Story};
use crate::user::UserStore;
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Maximum story length in characters.
pub const MAX_STORY_CHARS: usize = 500;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("No story with id {0}")]
    StoryNotFound(usize),

    #[error("Story must be {MAX_STORY_CHARS} characters or less (got {0})")]
    ContentTooLong(usize),

    #[error("No user with id {0}")]
    UserNotFound(usize),

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}

/// Fields collected by the project form. Technologies arrive as the raw
/// comma-separated string; links may be empty.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub raw_technologies: String,
    pub project_link: Option<String>,
    pub demo_link: Option<String>,
}

#[derive(Clone, Copy)]
enum Interaction {
    Like,
    Retweet,
}

/// Story and project operations over a `ContentStore`.
pub struct ContentManager {
    content_store: Arc<dyn ContentStore>,
    user_store: Arc<dyn UserStore>,
}

impl ContentManager {
    pub fn new(content_store: Arc<dyn ContentStore>, user_store: Arc<dyn UserStore>) -> Self {
        Self {
            content_store,
            user_store,
        }
    }

    /// Creates a story authored by `actor_id`.
    ///
    /// Tags are derived by splitting `raw_tags` on whitespace and keeping
    /// only `#`-prefixed tokens; everything else is silently dropped.
    pub fn create_story(
        &self,
        actor_id: usize,
        content: &str,
        raw_tags: &str,
    ) -> Result<Story, ContentError> {
        let author = self
            .user_store
            .get_user(actor_id)?
            .ok_or(ContentError::UserNotFound(actor_id))?;

        let char_count = content.chars().count();
        if char_count > MAX_STORY_CHARS {
            return Err(ContentError::ContentTooLong(char_count));
        }

        let tags: Vec<String> = raw_tags
            .split_whitespace()
            .filter(|t| t.starts_with('#'))
            .map(str::to_string)
            .collect();

        let story = self.content_store.create_story(Story {
            id: 0, // assigned by the store
            content: content.to_string(),
            author: author.username,
            author_id: actor_id,
            tags,
            likes: 0,
            retweets: 0,
            liked_by: vec![],
            retweeted_by: vec![],
            created_at: Utc::now(),
        })?;
        info!(story_id = story.id, author_id = actor_id, "Story created");
        Ok(story)
    }

    /// Adds the actor's like if absent, removes it if present, keeping the
    /// counter in sync with the set. Two consecutive calls by the same
    /// actor restore the original state.
    pub fn toggle_like(&self, story_id: usize, actor_id: usize) -> Result<Story, ContentError> {
        self.toggle(story_id, actor_id, Interaction::Like)
    }

    /// Same contract as `toggle_like`, against the retweet set.
    pub fn toggle_retweet(&self, story_id: usize, actor_id: usize) -> Result<Story, ContentError> {
        self.toggle(story_id, actor_id, Interaction::Retweet)
    }

    fn toggle(
        &self,
        story_id: usize,
        actor_id: usize,
        interaction: Interaction,
    ) -> Result<Story, ContentError> {
        let mut story = self
            .content_store
            .get_story(story_id)?
            .ok_or(ContentError::StoryNotFound(story_id))?;

        let (set, count) = match interaction {
            Interaction::Like => (&mut story.liked_by, &mut story.likes),
            Interaction::Retweet => (&mut story.retweeted_by, &mut story.retweets),
        };
        if set.contains(&actor_id) {
            set.retain(|&id| id != actor_id);
        } else {
            set.push(actor_id);
        }
        *count = set.len();

        self.content_store.update_story(story.clone())?;
        debug!(story_id, actor_id, "Toggled story interaction");
        Ok(story)
    }

    /// Creates a project authored by `actor_id`.
    ///
    /// Technologies come from splitting the raw string on commas and
    /// trimming each segment. Empty segments are kept.
    pub fn create_project(
        &self,
        actor_id: usize,
        new_project: NewProject,
    ) -> Result<Project, ContentError> {
        let author = self
            .user_store
            .get_user(actor_id)?
            .ok_or(ContentError::UserNotFound(actor_id))?;

        let technologies: Vec<String> = new_project
            .raw_technologies
            .split(',')
            .map(|t| t.trim().to_string())
            .collect();

        let project = self.content_store.create_project(Project {
            id: 0, // assigned by the store
            title: new_project.title,
            description: new_project.description,
            technologies,
            author: author.username,
            author_id: actor_id,
            project_link: new_project.project_link,
            demo_link: new_project.demo_link,
            created_at: Utc::now(),
        })?;
        info!(project_id = project.id, author_id = actor_id, "Project created");
        Ok(project)
    }

    /// Stories sorted newest first, the feed order.
    pub fn story_feed(&self) -> Result<Vec<Story>, ContentError> {
        let mut stories = self.content_store.all_stories()?;
        stories.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(stories)
    }

    pub fn get_story(&self, story_id: usize) -> Result<Option<Story>, ContentError> {
        Ok(self.content_store.get_story(story_id)?)
    }

    pub fn projects(&self) -> Result<Vec<Project>, ContentError> {
        Ok(self.content_store.all_projects()?)
    }
}
