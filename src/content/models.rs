//! Story and project models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A short post in the stories feed.
///
/// Invariants maintained by the toggle operations: `likes` equals
/// `liked_by.len()`, `retweets` equals `retweeted_by.len()`, and a user id
/// appears at most once in each.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: usize,
    pub content: String,
    pub author: String,
    pub author_id: usize,
    /// Each entry keeps its `#` prefix.
    pub tags: Vec<String>,
    pub likes: usize,
    pub retweets: usize,
    pub liked_by: Vec<usize>,
    pub retweeted_by: Vec<usize>,
    pub created_at: DateTime<Utc>,
}

impl Story {
    pub fn is_liked_by(&self, user_id: usize) -> bool {
        self.liked_by.contains(&user_id)
    }

    pub fn is_retweeted_by(&self, user_id: usize) -> bool {
        self.retweeted_by.contains(&user_id)
    }
}

/// A showcased project. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: usize,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub author: String,
    pub author_id: usize,
    pub project_link: Option<String>,
    pub demo_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Relative timestamp label for feed cards ("Just now", "5m ago", ...).
pub fn time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - created_at).num_seconds().max(0);
    if seconds < 60 {
        "Just now".to_string()
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86400 {
        format!("{}h ago", seconds / 3600)
    } else {
        format!("{}d ago", seconds / 86400)
    }
}
