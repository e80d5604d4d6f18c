//! Mutable journey state.
//!
//! `JourneyState` is the small piece of mutable state the presentation
//! layer owns: where the traveler currently is, and which unit distances
//! should be displayed in. Everything else is derived from the immutable
//! catalog on demand.

use super::StopCatalog;

/// Kilometers-to-miles conversion factor.
///
/// Fixed constant; display output depends on it being exactly this value.
pub const KM_TO_MILES: f64 = 0.621371;

/// Unit preference for displayed distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
}

impl DistanceUnit {
    /// Converts a kilometer value into this unit.
    ///
    /// Identity for kilometers, multiplication by [`KM_TO_MILES`] for miles.
    ///
    /// # Examples
    ///
    /// ```
    /// use journey_tracker::domain::DistanceUnit;
    ///
    /// assert_eq!(DistanceUnit::Kilometers.convert_km(100.0), 100.0);
    /// assert_eq!(DistanceUnit::Miles.convert_km(100.0), 62.1371);
    /// ```
    pub fn convert_km(self, km: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => km,
            DistanceUnit::Miles => km * KM_TO_MILES,
        }
    }

    /// Returns the other unit.
    pub fn toggle(self) -> Self {
        match self {
            DistanceUnit::Kilometers => DistanceUnit::Miles,
            DistanceUnit::Miles => DistanceUnit::Kilometers,
        }
    }

    /// Short display label ("km" or "mi").
    pub fn label(self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
        }
    }
}

/// Mutable traveler state over an immutable catalog.
///
/// `current_stop_index` ranges over `0..=N` where `N` is the catalog
/// length; `N` is the single terminal state ("journey completed"). The
/// only position transition is [`advance`](Self::advance); there is no
/// way to go back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JourneyState {
    /// Index of the stop the traveler is currently at.
    pub current_stop_index: usize,

    /// Preferred unit for displayed distances.
    pub unit: DistanceUnit,
}

impl JourneyState {
    /// Creates the initial state: at the origin, showing kilometers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves to the next stop, unless the journey is already completed.
    ///
    /// At the terminal state (`current_stop_index == catalog.len()`) this
    /// is a no-op, so the index never runs past the catalog length.
    pub fn advance(&mut self, catalog: &StopCatalog) {
        if self.current_stop_index < catalog.len() {
            self.current_stop_index += 1;
        }
    }

    /// Flips the unit preference between kilometers and miles.
    pub fn toggle_unit(&mut self) {
        self.unit = self.unit.toggle();
    }
}
