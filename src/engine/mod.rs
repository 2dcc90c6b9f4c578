mod classifier;
mod clock;
mod error;
mod gate;
mod mutations;
mod queries;
mod store;

pub use classifier::StateFilter;
pub use clock::TimePosition;
pub use error::EngineError;
pub use store::{BookingStore, InMemoryBookingStore, Scope};

use std::sync::Arc;

use ulid::Ulid;

use crate::directory::{InMemoryItemDirectory, InMemoryUserDirectory, ItemDirectory, UserDirectory};
use crate::model::{Booking, BookingView};
use crate::notify::NotifyHub;

/// The booking lifecycle engine: state machine, authorization, and the
/// time-partitioned queries. Storage and the user/item collaborators are
/// injected so tests can swap in fakes.
pub struct Engine {
    pub(super) store: Arc<dyn BookingStore>,
    pub(super) users: Arc<dyn UserDirectory>,
    pub(super) items: Arc<dyn ItemDirectory>,
    pub notify: Arc<NotifyHub>,
}

impl Engine {
    pub fn new(
        store: Arc<dyn BookingStore>,
        users: Arc<dyn UserDirectory>,
        items: Arc<dyn ItemDirectory>,
        notify: Arc<NotifyHub>,
    ) -> Self {
        Self {
            store,
            users,
            items,
            notify,
        }
    }

    /// All-in-memory wiring, returning the concrete directories so callers
    /// can seed them.
    pub fn in_memory() -> (Self, Arc<InMemoryUserDirectory>, Arc<InMemoryItemDirectory>) {
        let users = Arc::new(InMemoryUserDirectory::new());
        let items = Arc::new(InMemoryItemDirectory::new());
        let engine = Self::new(
            Arc::new(InMemoryBookingStore::new()),
            users.clone(),
            items.clone(),
            Arc::new(NotifyHub::new()),
        );
        (engine, users, items)
    }

    pub(super) async fn require_user(&self, id: &Ulid) -> Result<(), EngineError> {
        if self.users.exists(id).await {
            Ok(())
        } else {
            Err(EngineError::NotFound(*id))
        }
    }

    pub(super) async fn fetch_booking(&self, id: &Ulid) -> Result<Booking, EngineError> {
        self.store.get(id).await.ok_or(EngineError::NotFound(*id))
    }

    /// Join a booking with its booker for the response view.
    pub(super) async fn join_booker(&self, booking: Booking) -> Result<BookingView, EngineError> {
        let booker = self
            .users
            .get(&booking.booker_id)
            .await
            .ok_or(EngineError::NotFound(booking.booker_id))?;
        Ok(BookingView::join(booking, booker))
    }

    /// Join for list results: a booking whose booker has since vanished is
    /// dropped from the page, like an inner join would drop the row.
    pub(super) async fn join_bookers(&self, bookings: Vec<Booking>) -> Vec<BookingView> {
        let mut views = Vec::with_capacity(bookings.len());
        for booking in bookings {
            match self.users.get(&booking.booker_id).await {
                Some(booker) => views.push(BookingView::join(booking, booker)),
                None => {
                    tracing::warn!(
                        booking_id = %booking.id,
                        booker_id = %booking.booker_id,
                        "dropping booking with missing booker from listing"
                    );
                }
            }
        }
        views
    }
}
