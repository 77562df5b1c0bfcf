use super::auth::{CredentialHasher, PasswordCredentials};
use super::user_models::{NewUser, OnlineDeveloperFilter, RegistrationRequest, User};
use super::user_store::UserStore;
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Errors surfaced by identity and session operations. All are terminal
/// for the single attempted call; the view layer shows them to the user.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,

    #[error("Username not found: {0}")]
    UserNotFound(String),

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}

/// Identity and presence operations over a `UserStore`.
///
/// There is no state machine beyond the presence flag: online and offline,
/// transitioned by login and logout only.
pub struct UserManager {
    user_store: Arc<dyn UserStore>,
    hasher: CredentialHasher,
}

impl UserManager {
    pub fn new(user_store: Arc<dyn UserStore>, hasher: CredentialHasher) -> Self {
        Self { user_store, hasher }
    }

    /// Creates a new user, marked online, with the next sequential id.
    ///
    /// The duplicate-username check is exact; login lookup is the
    /// case-insensitive one.
    pub fn register(&self, request: RegistrationRequest) -> Result<User, AuthError> {
        if self
            .user_store
            .get_user_by_exact_username(&request.username)?
            .is_some()
        {
            return Err(AuthError::DuplicateUsername(request.username));
        }
        if self.user_store.get_user_by_email(&request.email)?.is_some() {
            return Err(AuthError::DuplicateEmail(request.email));
        }
        if request.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort);
        }

        let user = self.user_store.create_user(
            NewUser {
                username: request.username,
                email: request.email,
                skill_level: request.skill_level,
                primary_stack: request.primary_stack,
            },
            true,
        )?;
        let credentials = PasswordCredentials::create(user.id, self.hasher, &request.password)?;
        self.user_store.set_credentials(credentials)?;

        info!(user_id = user.id, username = %user.username, "Registered new user");
        Ok(user)
    }

    /// Username lookup is case-insensitive. On success the user is marked
    /// online and `last_seen` is refreshed.
    pub fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .user_store
            .get_user_by_username(username)?
            .ok_or_else(|| AuthError::UserNotFound(username.to_string()))?;

        let credentials = self
            .user_store
            .get_credentials(user.id)?
            .ok_or(AuthError::InvalidPassword)?;
        if !credentials.verify(password)? {
            warn!(user_id = user.id, "Login attempt with invalid password");
            return Err(AuthError::InvalidPassword);
        }

        self.user_store.set_presence(user.id, true, Utc::now())?;
        info!(user_id = user.id, username = %user.username, "User logged in");

        // Return the post-login state, presence flag included
        Ok(self.user_store.get_user(user.id)?.unwrap_or(user))
    }

    /// Marks the user offline and refreshes `last_seen`.
    pub fn logout(&self, user_id: usize) -> Result<(), AuthError> {
        self.user_store.set_presence(user_id, false, Utc::now())?;
        info!(user_id, "User logged out");
        Ok(())
    }

    pub fn get_user(&self, user_id: usize) -> Result<Option<User>, AuthError> {
        Ok(self.user_store.get_user(user_id)?)
    }

    pub fn user_count(&self) -> Result<usize, AuthError> {
        Ok(self.user_store.user_count()?)
    }

    /// Dashboard discovery: every online user except the viewer, narrowed
    /// by the optional skill and stack filters.
    pub fn online_developers(
        &self,
        viewer_id: usize,
        filter: OnlineDeveloperFilter,
    ) -> Result<Vec<User>, AuthError> {
        let developers: Vec<User> = self
            .user_store
            .all_users()?
            .into_iter()
            .filter(|u| {
                u.is_online
                    && u.id != viewer_id
                    && filter.skill_level.map_or(true, |s| u.skill_level == s)
                    && filter.primary_stack.map_or(true, |s| u.primary_stack == s)
            })
            .collect();
        debug!(
            viewer_id,
            count = developers.len(),
            "Resolved online developers"
        );
        Ok(developers)
    }
}
