use super::models::FriendRequest;
use super::social_store::SocialStore;
use anyhow::Result;
use chrono::Utc;
use std::sync::Mutex;

/// In-memory `SocialStore` over a `Vec` of pending requests.
///
/// Ids are assigned sequentially and never reused within a process; a
/// resolved request's id stays unresolvable forever.
#[derive(Default)]
pub struct MemSocialStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    pending: Vec<FriendRequest>,
    next_id: usize,
}

impl MemSocialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SocialStore for MemSocialStore {
    fn create_request(&self, from_user_id: usize, to_user_id: usize) -> Result<FriendRequest> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let request = FriendRequest {
            id: inner.next_id,
            from_user_id,
            to_user_id,
            created_at: Utc::now(),
        };
        inner.pending.push(request.clone());
        Ok(request)
    }

    fn get_request(&self, request_id: usize) -> Result<Option<FriendRequest>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.pending.iter().find(|r| r.id == request_id).cloned())
    }

    fn find_pending(
        &self,
        from_user_id: usize,
        to_user_id: usize,
    ) -> Result<Option<FriendRequest>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .pending
            .iter()
            .find(|r| r.from_user_id == from_user_id && r.to_user_id == to_user_id)
            .cloned())
    }

    fn remove_request(&self, request_id: usize) -> Result<Option<FriendRequest>> {
        let mut inner = self.inner.lock().unwrap();
        match inner.pending.iter().position(|r| r.id == request_id) {
            Some(index) => Ok(Some(inner.pending.remove(index))),
            None => Ok(None),
        }
    }

    fn requests_to(&self, user_id: usize) -> Result<Vec<FriendRequest>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .pending
            .iter()
            .filter(|r| r.to_user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_request_id_is_never_reused() {
        let store = MemSocialStore::new();
        let first = store.create_request(1, 2).unwrap();
        assert_eq!(first.id, 1);
        store.remove_request(first.id).unwrap().unwrap();
        let second = store.create_request(1, 3).unwrap();
        assert_eq!(second.id, 2);
        assert!(store.get_request(first.id).unwrap().is_none());
    }

    #[test]
    fn find_pending_is_directional() {
        let store = MemSocialStore::new();
        store.create_request(1, 2).unwrap();
        assert!(store.find_pending(1, 2).unwrap().is_some());
        assert!(store.find_pending(2, 1).unwrap().is_none());
    }
}
