use std::collections::HashMap;

use tracing::warn;
use ulid::Ulid;

use crate::model::{BookingStatus, BookingView, ItemBookingTimes, Ms};
use crate::observability;

use super::clock::now_ms;
use super::store::Scope;
use super::{Engine, EngineError, StateFilter};

impl Engine {
    /// Fetch one booking. Visible to the booker and the snapshot owner only.
    pub async fn get_booking(
        &self,
        acting_user_id: Ulid,
        booking_id: Ulid,
    ) -> Result<BookingView, EngineError> {
        let booking = self.fetch_booking(&booking_id).await?;
        self.require_user(&acting_user_id).await?;
        if booking.booker_id != acting_user_id && booking.owner_id != acting_user_id {
            warn!(booking_id = %booking_id, acting_user_id = %acting_user_id, "view denied");
            return Err(EngineError::Forbidden(
                "only the booker or the item owner may view",
            ));
        }
        self.join_booker(booking).await
    }

    /// Bookings made by the user, filtered by state token, newest start first.
    pub async fn bookings_for_booker(
        &self,
        acting_user_id: Ulid,
        state: &str,
    ) -> Result<Vec<BookingView>, EngineError> {
        self.list_for(Scope::Booker, acting_user_id, state).await
    }

    /// Bookings on items the user owns, filtered by state token, newest
    /// start first.
    pub async fn bookings_for_owner(
        &self,
        acting_user_id: Ulid,
        state: &str,
    ) -> Result<Vec<BookingView>, EngineError> {
        self.list_for(Scope::Owner, acting_user_id, state).await
    }

    /// The one query path behind both listings: scope picks the actor side,
    /// the state filter picks the predicate, ordering is shared.
    async fn list_for(
        &self,
        scope: Scope,
        acting_user_id: Ulid,
        state: &str,
    ) -> Result<Vec<BookingView>, EngineError> {
        self.require_user(&acting_user_id).await?;
        let filter: StateFilter = state.parse()?;
        metrics::counter!(observability::BOOKING_QUERIES_TOTAL, "state" => state.to_string())
            .increment(1);

        let candidates = self.store.list_by_actor(scope, &acting_user_id).await;
        let selected = filter.apply(candidates, now_ms());
        Ok(self.join_bookers(selected).await)
    }

    /// Per item: start of the latest booking at or before now, and of the
    /// nearest booking after now. Feeds the owner-side item listing.
    pub async fn last_next_for_items(&self, item_ids: &[Ulid]) -> Vec<ItemBookingTimes> {
        let now = now_ms();
        let bookings = self.store.list_by_item_ids(item_ids).await;

        let mut by_item: HashMap<Ulid, (Option<Ms>, Option<Ms>)> = HashMap::new();
        for booking in bookings {
            let entry = by_item.entry(booking.item_id).or_default();
            let start = booking.window.start;
            if start <= now {
                if entry.0.is_none_or(|last| start > last) {
                    entry.0 = Some(start);
                }
            } else if entry.1.is_none_or(|next| start < next) {
                entry.1 = Some(start);
            }
        }

        item_ids
            .iter()
            .map(|id| {
                let (last, next) = by_item.get(id).copied().unwrap_or((None, None));
                ItemBookingTimes {
                    item_id: *id,
                    last,
                    next,
                }
            })
            .collect()
    }

    /// True iff the user has an APPROVED booking for the item that already
    /// ended. The comment layer gates on this before accepting a review.
    pub async fn has_completed_rental(&self, user_id: &Ulid, item_id: &Ulid) -> bool {
        let now = now_ms();
        self.store
            .list_by_actor(Scope::Booker, user_id)
            .await
            .iter()
            .any(|b| {
                b.item_id == *item_id
                    && b.status == BookingStatus::Approved
                    && b.window.end < now
            })
    }
}
