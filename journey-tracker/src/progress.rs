//! Journey progress calculator.
//!
//! Pure queries over a `(catalog, state)` pair: cumulative distance
//! covered and remaining, progress fraction, and current-stop lookup.
//! Everything is recomputed on demand; the catalog is small and
//! immutable, so there is no caching beyond the catalog's own total.

use crate::domain::{JourneyState, StopCatalog, StopRecord};

/// Read-only progress view over a catalog and the traveler's state.
///
/// All queries are total: an out-of-range stop index is the defined
/// terminal state ("journey completed"), not a fault, and an empty or
/// zero-distance catalog yields 0% progress rather than NaN.
///
/// # Examples
///
/// ```
/// use journey_tracker::domain::JourneyState;
/// use journey_tracker::loader::parse_stops;
/// use journey_tracker::progress::JourneyProgress;
///
/// let catalog = parse_stops("Paris,None,300.0,3.0\nBerlin,Schengen,500.5,5.5\n");
/// let mut state = JourneyState::new();
///
/// let progress = JourneyProgress::new(&catalog, &state);
/// assert_eq!(progress.distance_covered_km(), 0.0);
/// assert_eq!(progress.current_stop().unwrap().city_name, "Paris");
///
/// state.advance(&catalog);
/// let progress = JourneyProgress::new(&catalog, &state);
/// assert_eq!(progress.distance_covered_km(), 300.0);
/// assert_eq!(progress.current_stop().unwrap().city_name, "Berlin");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JourneyProgress<'a> {
    catalog: &'a StopCatalog,
    state: &'a JourneyState,
}

impl<'a> JourneyProgress<'a> {
    /// Creates a progress view over the given catalog and state.
    pub fn new(catalog: &'a StopCatalog, state: &'a JourneyState) -> Self {
        Self { catalog, state }
    }

    /// Total journey distance in kilometers.
    pub fn total_distance_km(&self) -> f64 {
        self.catalog.total_distance_km()
    }

    /// Distance covered so far: the sum of all legs before the current
    /// stop. Zero at the origin; the full total at or past the end.
    pub fn distance_covered_km(&self) -> f64 {
        self.catalog
            .stops()
            .iter()
            .take(self.state.current_stop_index)
            .map(|s| s.distance_to_next_km)
            .sum()
    }

    /// Distance still to travel, never negative.
    pub fn distance_remaining_km(&self) -> f64 {
        self.total_distance_km() - self.distance_covered_km()
    }

    /// Fraction of the journey completed, in `[0.0, 1.0]`.
    ///
    /// Defined as `0.0` for a zero-length journey (empty catalog, or all
    /// legs zero kilometers) so the result is never NaN.
    pub fn progress_fraction(&self) -> f64 {
        let total = self.total_distance_km();
        if total == 0.0 {
            0.0
        } else {
            self.distance_covered_km() / total
        }
    }

    /// The stop the traveler is currently at, or `None` once the journey
    /// is completed (or the catalog is empty).
    pub fn current_stop(&self) -> Option<&'a StopRecord> {
        self.catalog.get(self.state.current_stop_index)
    }

    /// True once the current index has reached the catalog length.
    pub fn is_completed(&self) -> bool {
        self.state.current_stop_index >= self.catalog.len()
    }

    /// Travel time to the next stop in hours, or `0.0` when completed.
    pub fn time_to_next_hours(&self) -> f64 {
        self.current_stop().map_or(0.0, |s| s.time_to_next_hours)
    }

    /// Distance covered, converted to the state's preferred unit.
    pub fn distance_covered(&self) -> f64 {
        self.state.unit.convert_km(self.distance_covered_km())
    }

    /// Distance remaining, converted to the state's preferred unit.
    pub fn distance_remaining(&self) -> f64 {
        self.state.unit.convert_km(self.distance_remaining_km())
    }
}
