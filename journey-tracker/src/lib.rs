//! Journey progress tracker.
//!
//! Tracks a traveler's progress through a fixed itinerary of city stops
//! loaded from a plain-text stops file. The library answers: how far have
//! I come, how far is left, what fraction of the journey is done, and
//! where am I right now?

pub mod domain;
pub mod loader;
pub mod progress;
pub mod view;
