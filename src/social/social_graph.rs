use super::models::FriendRequest;
use super::social_store::SocialStore;
use crate::user::{User, UserStore};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum SocialError {
    #[error("No user with id {0}")]
    UserNotFound(usize),

    #[error("Friend request from {from} to {to} already sent")]
    DuplicateRequest { from: usize, to: usize },

    #[error("No pending friend request with id {0}")]
    RequestNotFound(usize),

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}

/// Friend-request state machine over the pending-request and user stores.
///
/// Requests only ever exist in a pending state; accept and decline are the
/// two exits and both destroy the request.
pub struct SocialGraph {
    social_store: Arc<dyn SocialStore>,
    user_store: Arc<dyn UserStore>,
}

impl SocialGraph {
    pub fn new(social_store: Arc<dyn SocialStore>, user_store: Arc<dyn UserStore>) -> Self {
        Self {
            social_store,
            user_store,
        }
    }

    /// Creates a pending request from `actor_id` to `target_id`.
    ///
    /// The duplicate check is directional only: a pending request in the
    /// reverse direction does not count as a duplicate. That asymmetry is
    /// documented behavior, kept as-is.
    pub fn send_friend_request(
        &self,
        actor_id: usize,
        target_id: usize,
    ) -> Result<FriendRequest, SocialError> {
        if self.user_store.get_user(actor_id)?.is_none() {
            return Err(SocialError::UserNotFound(actor_id));
        }
        if self.user_store.get_user(target_id)?.is_none() {
            return Err(SocialError::UserNotFound(target_id));
        }
        if self
            .social_store
            .find_pending(actor_id, target_id)?
            .is_some()
        {
            return Err(SocialError::DuplicateRequest {
                from: actor_id,
                to: target_id,
            });
        }

        let request = self.social_store.create_request(actor_id, target_id)?;
        info!(
            request_id = request.id,
            from = actor_id,
            to = target_id,
            "Friend request sent"
        );
        Ok(request)
    }

    /// Adds each user to the other's friends set, then destroys the
    /// request. The edge insertion is idempotent so an already-present
    /// friendship is not duplicated.
    pub fn accept_friend_request(&self, request_id: usize) -> Result<(), SocialError> {
        let request = self
            .social_store
            .get_request(request_id)?
            .ok_or(SocialError::RequestNotFound(request_id))?;

        self.user_store
            .add_friend(request.to_user_id, request.from_user_id)?;
        self.user_store
            .add_friend(request.from_user_id, request.to_user_id)?;
        self.social_store.remove_request(request_id)?;

        info!(
            request_id,
            from = request.from_user_id,
            to = request.to_user_id,
            "Friend request accepted"
        );
        Ok(())
    }

    /// Destroys the request with no other side effect.
    pub fn decline_friend_request(&self, request_id: usize) -> Result<(), SocialError> {
        match self.social_store.remove_request(request_id)? {
            Some(request) => {
                debug!(
                    request_id,
                    from = request.from_user_id,
                    "Friend request declined"
                );
                Ok(())
            }
            None => Err(SocialError::RequestNotFound(request_id)),
        }
    }

    /// Pending requests addressed to `user_id`, for the requests panel.
    pub fn pending_requests_for(&self, user_id: usize) -> Result<Vec<FriendRequest>, SocialError> {
        Ok(self.social_store.requests_to(user_id)?)
    }

    /// Resolves the user's friend ids to full users. Dangling ids are
    /// skipped.
    pub fn friends_of(&self, user_id: usize) -> Result<Vec<User>, SocialError> {
        let user = self
            .user_store
            .get_user(user_id)?
            .ok_or(SocialError::UserNotFound(user_id))?;
        let mut friends = Vec::with_capacity(user.friends.len());
        for friend_id in user.friends {
            if let Some(friend) = self.user_store.get_user(friend_id)? {
                friends.push(friend);
            }
        }
        Ok(friends)
    }
}
