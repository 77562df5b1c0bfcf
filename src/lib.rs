//! DevConnect Core Library
//!
//! In-memory core of a developer social network: identity and presence,
//! friend requests and friendship edges, and story/project content with
//! like/retweet toggles. The core never renders or performs I/O; a view
//! layer calls the operations exposed here and re-renders from the
//! returned data.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod app;
pub mod config;
pub mod content;
pub mod sample_data;
pub mod social;
pub mod user;

// Re-export commonly used types for convenience
pub use app::DevConnect;
pub use config::{AppConfig, FileConfig};
pub use content::{ContentError, ContentManager, MemContentStore, Project, Story};
pub use social::{FriendRequest, MemSocialStore, SocialError, SocialGraph};
pub use user::{
    AuthError, MemUserStore, PrimaryStack, RegistrationRequest, SkillLevel, User, UserManager,
};

/// Installs a global tracing subscriber driven by `RUST_LOG`, defaulting
/// to `info` when the variable is unset. Safe to call once per process.
pub fn init_logging() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter)
        .init();
}
