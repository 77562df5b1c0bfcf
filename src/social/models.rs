use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pending friend request. Requests have no terminal state: accepting or
/// declining removes them from the pending collection and no record is
/// kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendRequest {
    pub id: usize,
    pub from_user_id: usize,
    pub to_user_id: usize,
    pub created_at: DateTime<Utc>,
}
