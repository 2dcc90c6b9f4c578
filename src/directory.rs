use async_trait::async_trait;
use dashmap::DashMap;
use ulid::Ulid;

use crate::model::{ItemView, UserView};

/// User CRUD lives outside this crate; the engine only needs existence checks
/// and the read model for joins.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn exists(&self, id: &Ulid) -> bool;
    async fn get(&self, id: &Ulid) -> Option<UserView>;
}

/// Item CRUD lives outside this crate; the engine reads the item once per
/// booking-creation attempt and snapshots what it needs.
#[async_trait]
pub trait ItemDirectory: Send + Sync {
    async fn get(&self, id: &Ulid) -> Option<ItemView>;
}

// ── In-memory backends ───────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: DashMap<Ulid, UserView>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, user: UserView) {
        self.users.insert(user.id, user);
    }

    pub fn remove(&self, id: &Ulid) {
        self.users.remove(id);
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn exists(&self, id: &Ulid) -> bool {
        self.users.contains_key(id)
    }

    async fn get(&self, id: &Ulid) -> Option<UserView> {
        self.users.get(id).map(|e| e.value().clone())
    }
}

#[derive(Default)]
pub struct InMemoryItemDirectory {
    items: DashMap<Ulid, ItemView>,
}

impl InMemoryItemDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, item: ItemView) {
        self.items.insert(item.id, item);
    }

    /// Flip availability in place. Existing bookings keep their snapshot.
    pub fn set_available(&self, id: &Ulid, available: bool) {
        if let Some(mut item) = self.items.get_mut(id) {
            item.available = available;
        }
    }
}

#[async_trait]
impl ItemDirectory for InMemoryItemDirectory {
    async fn get(&self, id: &Ulid) -> Option<ItemView> {
        self.items.get(id).map(|e| e.value().clone())
    }
}
