pub mod directory;
pub mod engine;
pub mod model;
pub mod notify;
pub mod observability;

pub use engine::{Engine, EngineError};
pub use model::{Booking, BookingStatus, BookingView, ItemView, Ms, UserView, Window};
