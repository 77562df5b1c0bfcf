use super::models::FriendRequest;
use anyhow::Result;

/// Repository for the pending friend-request collection.
pub trait SocialStore: Send + Sync {
    /// Stores a new pending request, assigning the next sequential id.
    fn create_request(&self, from_user_id: usize, to_user_id: usize) -> Result<FriendRequest>;

    /// Returns Ok(None) if no pending request has this id.
    fn get_request(&self, request_id: usize) -> Result<Option<FriendRequest>>;

    /// Looks up a pending request by its ordered (from, to) pair. The
    /// reverse direction is a different pair.
    fn find_pending(&self, from_user_id: usize, to_user_id: usize)
        -> Result<Option<FriendRequest>>;

    /// Removes and returns the request, or Ok(None) if it was never there
    /// or already resolved.
    fn remove_request(&self, request_id: usize) -> Result<Option<FriendRequest>>;

    /// All pending requests addressed to a user, for the requests panel.
    fn requests_to(&self, user_id: usize) -> Result<Vec<FriendRequest>>;
}
