use dashmap::DashMap;
use tokio::sync::broadcast;
use ulid::Ulid;

use crate::model::BookingStatus;

const CHANNEL_CAPACITY: usize = 256;

/// Lifecycle notifications, fanned out to the two users with a stake in the
/// booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingEvent {
    Created {
        booking_id: Ulid,
        item_id: Ulid,
        booker_id: Ulid,
        owner_id: Ulid,
    },
    Decided {
        booking_id: Ulid,
        item_id: Ulid,
        booker_id: Ulid,
        owner_id: Ulid,
        status: BookingStatus,
    },
}

impl BookingEvent {
    fn interested_users(&self) -> [Ulid; 2] {
        match self {
            BookingEvent::Created {
                booker_id, owner_id, ..
            }
            | BookingEvent::Decided {
                booker_id, owner_id, ..
            } => [*booker_id, *owner_id],
        }
    }
}

/// Broadcast hub keyed by user id. An outer layer subscribes per user and
/// pushes updates instead of polling the listings.
pub struct NotifyHub {
    channels: DashMap<Ulid, broadcast::Sender<BookingEvent>>,
}

impl Default for NotifyHub {
    fn default() -> Self {
        Self::new()
    }
}

impl NotifyHub {
    pub fn new() -> Self {
        Self {
            channels: DashMap::new(),
        }
    }

    /// Subscribe to a user's booking events. Creates the channel if needed.
    pub fn subscribe(&self, user_id: Ulid) -> broadcast::Receiver<BookingEvent> {
        let sender = self
            .channels
            .entry(user_id)
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0);
        sender.subscribe()
    }

    /// Deliver to the booker's and the owner's channels. No-op for users
    /// nobody is listening on.
    pub fn publish(&self, event: &BookingEvent) {
        for user_id in event.interested_users() {
            if let Some(sender) = self.channels.get(&user_id) {
                let _ = sender.send(event.clone());
            }
        }
    }

    /// Remove a user's channel (e.g. on account deletion).
    pub fn remove(&self, user_id: &Ulid) {
        self.channels.remove(user_id);
    }
}
