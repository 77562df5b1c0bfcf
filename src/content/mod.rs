mod content_manager;
mod content_store;
mod mem_content_store;
pub mod models;

pub use content_manager::{ContentError, ContentManager, NewProject, MAX_STORY_CHARS};
pub use content_store::ContentStore;
pub use mem_content_store::MemContentStore;
pub use models::{time_ago, Project, Story};
