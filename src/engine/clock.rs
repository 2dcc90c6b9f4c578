use crate::model::{Ms, Window};

pub(crate) fn now_ms() -> Ms {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as Ms
}

/// Where a window sits relative to a fixed "now". Exactly one position per
/// window: a boundary instant (`start == now` or `end == now`) counts as
/// Current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePosition {
    Past,
    Current,
    Future,
}

impl TimePosition {
    pub fn of(window: &Window, now: Ms) -> Self {
        if now < window.start {
            TimePosition::Future
        } else if now > window.end {
            TimePosition::Past
        } else {
            TimePosition::Current
        }
    }
}
