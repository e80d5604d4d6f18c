//! Stop catalog type.
//!
//! A `StopCatalog` is the ordered, immutable sequence of stops making up
//! the itinerary. It is built once at startup and never mutated, which
//! lets it cache the total journey distance at construction.

use super::StopRecord;

/// An ordered, immutable itinerary of stops.
///
/// Index 0 is the journey's origin. Order is significant and fixed after
/// construction.
///
/// # Invariants
///
/// - `total_distance_km` equals the sum of `distance_to_next_km` over all
///   stops, in storage order (cached at construction; the stop list never
///   changes, so the cache cannot go stale).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopCatalog {
    stops: Vec<StopRecord>,
    total_distance_km: f64,
}

impl StopCatalog {
    /// Builds a catalog from stops in itinerary order.
    ///
    /// No cross-record validation is performed: duplicate cities and odd
    /// distances are accepted as-is, matching the lenient load policy.
    pub fn new(stops: Vec<StopRecord>) -> Self {
        let total_distance_km = stops.iter().map(|s| s.distance_to_next_km).sum();
        Self {
            stops,
            total_distance_km,
        }
    }

    /// Returns all stops in itinerary order.
    pub fn stops(&self) -> &[StopRecord] {
        &self.stops
    }

    /// Returns the stop at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&StopRecord> {
        self.stops.get(index)
    }

    /// Returns the number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if the itinerary has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Returns the total journey distance in kilometers.
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(city: &str, km: f64) -> StopRecord {
        StopRecord::new(city, "", km, 1.0)
    }

    #[test]
    fn catalog_preserves_order() {
        let catalog = StopCatalog::new(vec![stop("Paris", 300.0), stop("Berlin", 500.5)]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().city_name, "Paris");
        assert_eq!(catalog.get(1).unwrap().city_name, "Berlin");
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn catalog_total_distance() {
        let catalog = StopCatalog::new(vec![stop("Paris", 300.0), stop("Berlin", 500.5)]);

        assert_eq!(catalog.total_distance_km(), 800.5);
    }

    #[test]
    fn empty_catalog() {
        let catalog = StopCatalog::new(vec![]);

        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert_eq!(catalog.total_distance_km(), 0.0);
        assert!(catalog.get(0).is_none());
    }

    #[test]
    fn total_matches_manual_prefix_sum() {
        let catalog = StopCatalog::new(vec![
            stop("A", 0.1),
            stop("B", 0.2),
            stop("C", 0.3),
        ]);

        // Same summation order as the full prefix sum, so equality is exact.
        let manual: f64 = catalog.stops().iter().map(|s| s.distance_to_next_km).sum();
        assert_eq!(catalog.total_distance_km(), manual);
    }
}
