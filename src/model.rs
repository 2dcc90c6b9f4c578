use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unix milliseconds — the only time type.
pub type Ms = i64;

/// Booked interval `[start, end]`. Always `start < end`; immutable once the
/// booking exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub start: Ms,
    pub end: Ms,
}

impl Window {
    pub fn new(start: Ms, end: Ms) -> Self {
        debug_assert!(start < end, "Window start must be before end");
        Self { start, end }
    }

    pub fn duration_ms(&self) -> Ms {
        self.end - self.start
    }
}

/// Booking lifecycle status. `Waiting` is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Waiting,
    Approved,
    Rejected,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Waiting => "WAITING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Rejected => "REJECTED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, BookingStatus::Waiting)
    }
}

/// A booking row. `owner_id`, `item_name` and `item_description` are a
/// snapshot of the item taken at creation time — the item directory is never
/// re-queried for an existing booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Ulid,
    pub item_id: Ulid,
    pub window: Window,
    pub booker_id: Ulid,
    pub status: BookingStatus,
    pub owner_id: Ulid,
    pub item_name: String,
    pub item_description: String,
}

// ── Collaborator read models ─────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: Ulid,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    pub id: Ulid,
    pub owner_id: Ulid,
    pub name: String,
    pub description: String,
    pub available: bool,
}

// ── Engine result types ──────────────────────────────────────────

/// Item fields carried on a booking view, taken from the creation-time
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub id: Ulid,
    pub name: String,
    pub description: String,
}

/// What every engine operation returns: the booking joined with its item
/// snapshot and the booker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingView {
    pub id: Ulid,
    pub start: Ms,
    pub end: Ms,
    pub status: BookingStatus,
    pub item: ItemSummary,
    pub booker: UserView,
}

impl BookingView {
    pub fn join(booking: Booking, booker: UserView) -> Self {
        Self {
            id: booking.id,
            start: booking.window.start,
            end: booking.window.end,
            status: booking.status,
            item: ItemSummary {
                id: booking.item_id,
                name: booking.item_name,
                description: booking.item_description,
            },
            booker,
        }
    }
}

/// Owner-side aggregation: start of the most recent booking at or before
/// "now" and of the nearest one after it, per item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemBookingTimes {
    pub item_id: Ulid,
    pub last: Option<Ms>,
    pub next: Option<Ms>,
}
