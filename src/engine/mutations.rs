use tracing::{info, warn};
use ulid::Ulid;

use crate::model::{Booking, BookingStatus, BookingView, Ms};
use crate::notify::BookingEvent;
use crate::observability;

use super::gate::{check_bookable, validate_window};
use super::{Engine, EngineError};

impl Engine {
    /// Create a booking in WAITING. The item's owner id, name and description
    /// are snapshotted onto the booking; later changes to the item do not
    /// touch existing bookings.
    pub async fn create_booking(
        &self,
        booker_id: Ulid,
        item_id: Ulid,
        start: Ms,
        end: Ms,
    ) -> Result<BookingView, EngineError> {
        let booker = self
            .users
            .get(&booker_id)
            .await
            .ok_or(EngineError::NotFound(booker_id))?;
        let item = self
            .items
            .get(&item_id)
            .await
            .ok_or(EngineError::NotFound(item_id))?;
        check_bookable(&item)?;
        let window = validate_window(start, end)?;

        let booking = Booking {
            id: Ulid::new(),
            item_id,
            window,
            booker_id,
            status: BookingStatus::Waiting,
            owner_id: item.owner_id,
            item_name: item.name,
            item_description: item.description,
        };
        self.store.create(booking.clone()).await;

        info!(booking_id = %booking.id, item_id = %item_id, booker_id = %booker_id, "booking created");
        metrics::counter!(observability::BOOKINGS_CREATED_TOTAL).increment(1);
        self.notify.publish(&BookingEvent::Created {
            booking_id: booking.id,
            item_id,
            booker_id,
            owner_id: booking.owner_id,
        });

        Ok(BookingView::join(booking, booker))
    }

    /// Apply the single legal transition: WAITING → APPROVED or REJECTED.
    /// Only the snapshot owner may decide, and only while the booking is
    /// WAITING — a repeat call fails `Conflict` even if the requested outcome
    /// matches the stored status.
    pub async fn decide_booking(
        &self,
        acting_user_id: Ulid,
        booking_id: Ulid,
        approve: bool,
    ) -> Result<BookingView, EngineError> {
        let booking = self.fetch_booking(&booking_id).await?;
        if booking.owner_id != acting_user_id {
            warn!(booking_id = %booking_id, acting_user_id = %acting_user_id, "decision denied: not the owner");
            metrics::counter!(observability::DECISIONS_DENIED_TOTAL).increment(1);
            return Err(EngineError::Forbidden("only the item owner may decide"));
        }
        if booking.status != BookingStatus::Waiting {
            return Err(EngineError::Conflict(booking_id));
        }
        self.require_user(&acting_user_id).await?;

        let next = if approve {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        };
        // The pre-check above filters the obvious repeats; the store CAS is
        // what serializes two racing decisions.
        let updated = self.store.set_status_if_waiting(&booking_id, next).await?;

        info!(booking_id = %booking_id, status = next.as_str(), "booking decided");
        metrics::counter!(observability::BOOKING_DECISIONS_TOTAL, "status" => next.as_str())
            .increment(1);
        self.notify.publish(&BookingEvent::Decided {
            booking_id,
            item_id: updated.item_id,
            booker_id: updated.booker_id,
            owner_id: updated.owner_id,
            status: next,
        });

        self.join_booker(updated).await
    }
}
