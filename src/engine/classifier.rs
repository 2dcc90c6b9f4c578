use std::str::FromStr;

use crate::model::{Booking, BookingStatus, Ms};

use super::clock::TimePosition;
use super::EngineError;

/// The six recognized state tokens. Tokens are case-sensitive; anything else
/// is rejected at parse time. Each token is an independent query filter —
/// CURRENT/PAST/FUTURE partition by time, WAITING/REJECTED select by status,
/// so one booking can show up under both a time token and a status token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFilter {
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

impl FromStr for StateFilter {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(StateFilter::All),
            "CURRENT" => Ok(StateFilter::Current),
            "PAST" => Ok(StateFilter::Past),
            "FUTURE" => Ok(StateFilter::Future),
            "WAITING" => Ok(StateFilter::Waiting),
            "REJECTED" => Ok(StateFilter::Rejected),
            other => Err(EngineError::InvalidState(other.to_string())),
        }
    }
}

impl StateFilter {
    pub fn matches(&self, booking: &Booking, now: Ms) -> bool {
        match self {
            StateFilter::All => true,
            StateFilter::Current => TimePosition::of(&booking.window, now) == TimePosition::Current,
            StateFilter::Past => TimePosition::of(&booking.window, now) == TimePosition::Past,
            StateFilter::Future => TimePosition::of(&booking.window, now) == TimePosition::Future,
            StateFilter::Waiting => booking.status == BookingStatus::Waiting,
            StateFilter::Rejected => booking.status == BookingStatus::Rejected,
        }
    }

    /// Filter against a fixed `now` and order by `start` descending — the one
    /// ordering every token shares.
    pub fn apply(&self, mut bookings: Vec<Booking>, now: Ms) -> Vec<Booking> {
        bookings.retain(|b| self.matches(b, now));
        bookings.sort_by(|a, b| b.window.start.cmp(&a.window.start));
        bookings
    }
}
