use crate::model::{ItemView, Ms, Window};

use super::EngineError;

/// Only the ordering is checked here. "Start must be in the future" belongs
/// to the input-validation boundary, not the engine — a past start is
/// accepted.
pub(crate) fn validate_window(start: Ms, end: Ms) -> Result<Window, EngineError> {
    if start >= end {
        return Err(EngineError::InvalidTime { start, end });
    }
    Ok(Window::new(start, end))
}

/// Pre-condition gate, evaluated once per creation attempt. Decisions on an
/// already-created booking never re-check this.
pub(crate) fn check_bookable(item: &ItemView) -> Result<(), EngineError> {
    if !item.available {
        return Err(EngineError::NotAvailable(item.id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use ulid::Ulid;

    use super::*;

    fn item(available: bool) -> ItemView {
        ItemView {
            id: Ulid::new(),
            owner_id: Ulid::new(),
            name: "bike".into(),
            description: "city bike".into(),
            available,
        }
    }

    #[test]
    fn ordered_window_passes() {
        assert!(validate_window(100, 200).is_ok());
    }

    #[test]
    fn reversed_window_fails() {
        assert!(matches!(
            validate_window(200, 100),
            Err(EngineError::InvalidTime { start: 200, end: 100 })
        ));
    }

    #[test]
    fn zero_length_window_fails() {
        assert!(matches!(
            validate_window(100, 100),
            Err(EngineError::InvalidTime { .. })
        ));
    }

    #[test]
    fn past_start_is_accepted() {
        // No "start in the future" check at this layer.
        assert!(validate_window(-1_000, 200).is_ok());
    }

    #[test]
    fn available_item_passes_gate() {
        assert!(check_bookable(&item(true)).is_ok());
    }

    #[test]
    fn unavailable_item_fails_gate() {
        let it = item(false);
        match check_bookable(&it) {
            Err(EngineError::NotAvailable(id)) => assert_eq!(id, it.id),
            other => panic!("expected NotAvailable, got {other:?}"),
        }
    }
}
