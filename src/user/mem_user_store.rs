use super::auth::PasswordCredentials;
use super::user_models::{NewUser, User};
use super::user_store::UserStore;
use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    credentials: HashMap<usize, PasswordCredentials>,
}

/// In-memory `UserStore` backed by a linear scan over a `Vec`. State
/// lives for the process lifetime.
#[derive(Default)]
pub struct MemUserStore {
    inner: Mutex<Inner>,
}

impl MemUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for MemUserStore {
    fn create_user(&self, new_user: NewUser, is_online: bool) -> Result<User> {
        let mut inner = self.inner.lock().unwrap();
        let user = User {
            // Sequential ids starting at 1
            id: inner.users.len() + 1,
            username: new_user.username,
            email: new_user.email,
            skill_level: new_user.skill_level,
            primary_stack: new_user.primary_stack,
            is_online,
            last_seen: Utc::now(),
            friends: vec![],
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    fn get_user(&self, user_id: usize) -> Result<Option<User>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.id == user_id).cloned())
    }

    fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let inner = self.inner.lock().unwrap();
        let needle = username.to_lowercase();
        Ok(inner
            .users
            .iter()
            .find(|u| u.username.to_lowercase() == needle)
            .cloned())
    }

    fn get_user_by_exact_username(&self, username: &str) -> Result<Option<User>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.username == username).cloned())
    }

    fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    fn all_users(&self) -> Result<Vec<User>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.clone())
    }

    fn user_count(&self) -> Result<usize> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.len())
    }

    fn set_presence(&self, user_id: usize, is_online: bool, seen_at: DateTime<Utc>) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        match inner.users.iter_mut().find(|u| u.id == user_id) {
            Some(user) => {
                user.is_online = is_online;
                user.last_seen = seen_at;
                Ok(())
            }
            None => bail!("Cannot set presence, no user with id {}", user_id),
        }
    }

    fn add_friend(&self, user_id: usize, friend_id: usize) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        match inner.users.iter_mut().find(|u| u.id == user_id) {
            Some(user) => {
                if !user.friends.contains(&friend_id) {
                    user.friends.push(friend_id);
                }
                Ok(())
            }
            None => bail!("Cannot add friend, no user with id {}", user_id),
        }
    }

    fn get_credentials(&self, user_id: usize) -> Result<Option<PasswordCredentials>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.credentials.get(&user_id).cloned())
    }

    fn set_credentials(&self, credentials: PasswordCredentials) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.credentials.insert(credentials.user_id, credentials);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::user_models::{PrimaryStack, SkillLevel};

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            skill_level: SkillLevel::Beginner,
            primary_stack: PrimaryStack::Other,
        }
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let store = MemUserStore::new();
        let a = store.create_user(new_user("a", "a@x.com"), true).unwrap();
        let b = store.create_user(new_user("b", "b@x.com"), true).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn username_lookup_is_case_insensitive() {
        let store = MemUserStore::new();
        store
            .create_user(new_user("Alice", "alice@x.com"), true)
            .unwrap();
        assert!(store.get_user_by_username("aLiCe").unwrap().is_some());
        assert!(store.get_user_by_exact_username("aLiCe").unwrap().is_none());
        assert!(store.get_user_by_exact_username("Alice").unwrap().is_some());
    }

    #[test]
    fn add_friend_is_idempotent() {
        let store = MemUserStore::new();
        let user = store.create_user(new_user("a", "a@x.com"), true).unwrap();
        store.add_friend(user.id, 42).unwrap();
        store.add_friend(user.id, 42).unwrap();
        let user = store.get_user(user.id).unwrap().unwrap();
        assert_eq!(user.friends, vec![42]);
    }
}
