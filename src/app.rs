//! Application wiring: stores, managers and the single current session.

use crate::config::AppConfig;
use crate::content::{ContentManager, MemContentStore};
use crate::sample_data;
use crate::social::{MemSocialStore, SocialGraph};
use crate::user::{AuthError, MemUserStore, RegistrationRequest, User, UserManager};
use anyhow::Result;
use std::sync::{Arc, Mutex};

/// The core the view layer holds on to.
///
/// Owns the in-memory stores, the managers that operate on them, and the
/// single current-session reference. The view layer calls an operation,
/// then re-renders from the returned data; nothing here notifies
/// observers or touches presentation.
pub struct DevConnect {
    users: UserManager,
    social: SocialGraph,
    content: ContentManager,
    session: Mutex<Option<usize>>,
}

impl DevConnect {
    pub fn new(config: AppConfig) -> Result<Self> {
        let user_store = Arc::new(MemUserStore::new());
        let social_store = Arc::new(MemSocialStore::new());
        let content_store = Arc::new(MemContentStore::new());

        if config.seed_sample_data {
            sample_data::seed(user_store.as_ref(), content_store.as_ref(), config.hasher)?;
        }

        Ok(Self {
            users: UserManager::new(user_store.clone(), config.hasher),
            social: SocialGraph::new(social_store, user_store.clone()),
            content: ContentManager::new(content_store, user_store),
            session: Mutex::new(None),
        })
    }

    /// Identity and presence operations.
    pub fn users(&self) -> &UserManager {
        &self.users
    }

    /// Friend requests and friendship edges.
    pub fn social(&self) -> &SocialGraph {
        &self.social
    }

    /// Stories and projects.
    pub fn content(&self) -> &ContentManager {
        &self.content
    }

    /// Registers and establishes the session for the new user.
    pub fn register(&self, request: RegistrationRequest) -> Result<User, AuthError> {
        let user = self.users.register(request)?;
        *self.session.lock().unwrap() = Some(user.id);
        Ok(user)
    }

    /// Logs in and establishes the session.
    pub fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let user = self.users.login(username, password)?;
        *self.session.lock().unwrap() = Some(user.id);
        Ok(user)
    }

    /// Marks the current user offline and clears the session. No-op when
    /// nobody is logged in.
    pub fn logout(&self) -> Result<(), AuthError> {
        let mut session = self.session.lock().unwrap();
        if let Some(user_id) = session.take() {
            self.users.logout(user_id)?;
        }
        Ok(())
    }

    /// Id of the current actor, if a session is active.
    pub fn current_user_id(&self) -> Option<usize> {
        *self.session.lock().unwrap()
    }

    /// Full user behind the current session.
    pub fn current_user(&self) -> Result<Option<User>, AuthError> {
        match self.current_user_id() {
            Some(user_id) => self.users.get_user(user_id),
            None => Ok(None),
        }
    }
}
