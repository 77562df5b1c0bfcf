use super::models::{Project, Story};
use anyhow::Result;

/// Repository for the story and project collections.
pub trait ContentStore: Send + Sync {
    /// Stores a new story, assigning the next sequential id.
    fn create_story(&self, story: Story) -> Result<Story>;

    /// Returns Ok(None) if no story has this id.
    fn get_story(&self, story_id: usize) -> Result<Option<Story>>;

    /// Replaces the stored story with the same id.
    /// Fails if the story does not exist.
    fn update_story(&self, story: Story) -> Result<()>;

    /// Snapshot of every story, in insertion order.
    fn all_stories(&self) -> Result<Vec<Story>>;

    /// Stores a new project, assigning the next sequential id.
    fn create_project(&self, project: Project) -> Result<Project>;

    /// Snapshot of every project, in insertion order.
    fn all_projects(&self) -> Result<Vec<Project>>;
}
