mod mem_social_store;
pub mod models;
mod social_graph;
mod social_store;

pub use mem_social_store::MemSocialStore;
pub use models::FriendRequest;
pub use social_graph::{SocialError, SocialGraph};
pub use social_store::SocialStore;
