//! Domain types for the journey tracker.
//!
//! This module contains the core domain model: the immutable stop
//! catalog loaded once at startup, and the small mutable state the
//! presentation layer owns (current position, unit preference).

mod catalog;
mod state;
mod stop;

pub use catalog::StopCatalog;
pub use state::{DistanceUnit, JourneyState, KM_TO_MILES};
pub use stop::StopRecord;
