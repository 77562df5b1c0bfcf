use super::auth::PasswordCredentials;
use super::user_models::{NewUser, User};
use anyhow::Result;
use chrono::{DateTime, Utc};

/// Repository for the user collection and its credentials.
///
/// Callers receive a store reference instead of touching ambient shared
/// state; tests get a fresh instance each.
pub trait UserStore: Send + Sync {
    /// Stores a new user, assigning the next sequential id.
    fn create_user(&self, new_user: NewUser, is_online: bool) -> Result<User>;

    /// Returns Ok(None) if no user has this id.
    fn get_user(&self, user_id: usize) -> Result<Option<User>>;

    /// Username match is case-insensitive.
    fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Username match is exact; only the login lookup is
    /// case-insensitive.
    fn get_user_by_exact_username(&self, username: &str) -> Result<Option<User>>;

    /// Email match is exact.
    fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Snapshot of every registered user.
    fn all_users(&self) -> Result<Vec<User>>;

    fn user_count(&self) -> Result<usize>;

    /// Flips the presence flag and refreshes `last_seen`.
    /// Fails if the user does not exist.
    fn set_presence(&self, user_id: usize, is_online: bool, seen_at: DateTime<Utc>) -> Result<()>;

    /// Adds `friend_id` to the user's friends set if absent (idempotent).
    /// Symmetry is the caller's responsibility: the social graph calls this
    /// once per direction.
    fn add_friend(&self, user_id: usize, friend_id: usize) -> Result<()>;

    /// Returns Ok(None) if the user has no stored credentials.
    fn get_credentials(&self, user_id: usize) -> Result<Option<PasswordCredentials>>;

    fn set_credentials(&self, credentials: PasswordCredentials) -> Result<()>;
}
