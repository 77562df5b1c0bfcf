use super::content_store::ContentStore;
use super::models::{Project, Story};
use anyhow::{bail, Result};
use std::sync::Mutex;

#[derive(Default)]
struct Inner {
    stories: Vec<Story>,
    projects: Vec<Project>,
}

/// In-memory `ContentStore` over plain `Vec`s, one per collection.
#[derive(Default)]
pub struct MemContentStore {
    inner: Mutex<Inner>,
}

impl MemContentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentStore for MemContentStore {
    fn create_story(&self, mut story: Story) -> Result<Story> {
        let mut inner = self.inner.lock().unwrap();
        story.id = inner.stories.len() + 1;
        inner.stories.push(story.clone());
        Ok(story)
    }

    fn get_story(&self, story_id: usize) -> Result<Option<Story>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.stories.iter().find(|s| s.id == story_id).cloned())
    }

    fn update_story(&self, story: Story) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        match inner.stories.iter_mut().find(|s| s.id == story.id) {
            Some(stored) => {
                *stored = story;
                Ok(())
            }
            None => bail!("Cannot update story, no story with id {}", story.id),
        }
    }

    fn all_stories(&self) -> Result<Vec<Story>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.stories.clone())
    }

    fn create_project(&self, mut project: Project) -> Result<Project> {
        let mut inner = self.inner.lock().unwrap();
        project.id = inner.projects.len() + 1;
        inner.projects.push(project.clone());
        Ok(project)
    }

    fn all_projects(&self) -> Result<Vec<Project>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.projects.clone())
    }
}
