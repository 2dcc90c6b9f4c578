use async_trait::async_trait;
use dashmap::DashMap;
use ulid::Ulid;

use crate::model::{Booking, BookingStatus};

use super::EngineError;

/// Which side of a booking a user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Booker,
    Owner,
}

/// Persistence contract for bookings. Listing returns unordered candidates
/// scoped to one actor; filtering and ordering belong to the classifier.
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn create(&self, booking: Booking);

    async fn get(&self, id: &Ulid) -> Option<Booking>;

    /// Atomic check-and-set of the one legal transition. Fails `Conflict`
    /// unless the current status is `Waiting`, so of two racing decisions
    /// exactly one wins and the loser sees `Conflict`.
    async fn set_status_if_waiting(
        &self,
        id: &Ulid,
        next: BookingStatus,
    ) -> Result<Booking, EngineError>;

    async fn list_by_actor(&self, scope: Scope, user_id: &Ulid) -> Vec<Booking>;

    async fn list_by_item_ids(&self, ids: &[Ulid]) -> Vec<Booking>;
}

pub struct InMemoryBookingStore {
    bookings: DashMap<Ulid, Booking>,
}

impl Default for InMemoryBookingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self {
            bookings: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn create(&self, booking: Booking) {
        self.bookings.insert(booking.id, booking);
    }

    async fn get(&self, id: &Ulid) -> Option<Booking> {
        self.bookings.get(id).map(|e| e.value().clone())
    }

    async fn set_status_if_waiting(
        &self,
        id: &Ulid,
        next: BookingStatus,
    ) -> Result<Booking, EngineError> {
        // get_mut holds the shard lock for the whole read-modify-write, so
        // two racing decisions serialize here.
        let mut entry = self
            .bookings
            .get_mut(id)
            .ok_or(EngineError::NotFound(*id))?;
        if entry.status != BookingStatus::Waiting {
            return Err(EngineError::Conflict(*id));
        }
        entry.status = next;
        Ok(entry.clone())
    }

    async fn list_by_actor(&self, scope: Scope, user_id: &Ulid) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|e| match scope {
                Scope::Booker => e.booker_id == *user_id,
                Scope::Owner => e.owner_id == *user_id,
            })
            .map(|e| e.value().clone())
            .collect()
    }

    async fn list_by_item_ids(&self, ids: &[Ulid]) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|e| ids.contains(&e.item_id))
            .map(|e| e.value().clone())
            .collect()
    }
}
