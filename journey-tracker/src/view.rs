//! Display snapshot for the presentation layer.
//!
//! A [`ProgressSnapshot`] is everything one render of the journey screen
//! needs, with distances and times already converted and formatted
//! (two decimal places for distances, one for hours). The presentation
//! layer stays free of arithmetic: it prints fields.

use serde::Serialize;

use crate::domain::{JourneyState, StopCatalog};
use crate::progress::JourneyProgress;

/// One render's worth of journey data.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSnapshot {
    /// Fraction of the journey completed, in `[0.0, 1.0]`.
    pub progress_fraction: f64,

    /// Unit label for all distance fields ("km" or "mi").
    pub unit_label: &'static str,

    /// Distance covered so far, formatted to two decimals.
    pub distance_covered: String,

    /// Distance still to travel, formatted to two decimals.
    pub distance_left: String,

    /// True once the final stop has been passed.
    pub journey_completed: bool,

    /// The current stop panel, absent when the journey is completed.
    pub current_stop: Option<CurrentStopView>,

    /// Every stop in the itinerary, for the full-list display.
    pub stops: Vec<StopRow>,
}

/// The current-stop panel.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentStopView {
    pub city_name: String,
    pub visa_requirement: String,

    /// Distance to the next stop in the preferred unit, two decimals.
    pub distance_to_next: String,

    /// Travel time to the next stop, one decimal.
    pub time_to_next_hours: String,
}

/// One row of the all-stops list.
#[derive(Debug, Clone, Serialize)]
pub struct StopRow {
    pub city_name: String,
    pub visa_requirement: String,

    /// Distance to the next stop in the preferred unit, two decimals.
    pub distance_to_next: String,

    /// Travel time to the next stop, one decimal.
    pub time_to_next_hours: String,

    /// True for the stop the traveler is currently at (never true once
    /// the journey is completed).
    pub is_current: bool,
}

impl ProgressSnapshot {
    /// Builds a snapshot of the given catalog and state.
    pub fn build(catalog: &StopCatalog, state: &JourneyState) -> Self {
        let progress = JourneyProgress::new(catalog, state);
        let unit = state.unit;

        let current_stop = progress.current_stop().map(|stop| CurrentStopView {
            city_name: stop.city_name.clone(),
            visa_requirement: stop.visa_requirement.clone(),
            distance_to_next: format_distance(unit.convert_km(stop.distance_to_next_km)),
            time_to_next_hours: format_hours(stop.time_to_next_hours),
        });

        let stops = catalog
            .stops()
            .iter()
            .enumerate()
            .map(|(index, stop)| StopRow {
                city_name: stop.city_name.clone(),
                visa_requirement: stop.visa_requirement.clone(),
                distance_to_next: format_distance(unit.convert_km(stop.distance_to_next_km)),
                time_to_next_hours: format_hours(stop.time_to_next_hours),
                is_current: index == state.current_stop_index && !progress.is_completed(),
            })
            .collect();

        Self {
            progress_fraction: progress.progress_fraction(),
            unit_label: unit.label(),
            distance_covered: format_distance(progress.distance_covered()),
            distance_left: format_distance(progress.distance_remaining()),
            journey_completed: progress.is_completed(),
            current_stop,
            stops,
        }
    }
}

fn format_distance(value: f64) -> String {
    format!("{value:.2}")
}

fn format_hours(value: f64) -> String {
    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DistanceUnit, StopRecord};

    fn catalog() -> StopCatalog {
        StopCatalog::new(vec![
            StopRecord::new("Paris", "None", 300.0, 3.0),
            StopRecord::new("Berlin", "Schengen", 500.5, 5.5),
        ])
    }

    #[test]
    fn snapshot_at_origin_in_km() {
        let catalog = catalog();
        let state = JourneyState::new();

        let snapshot = ProgressSnapshot::build(&catalog, &state);

        assert_eq!(snapshot.progress_fraction, 0.0);
        assert_eq!(snapshot.unit_label, "km");
        assert_eq!(snapshot.distance_covered, "0.00");
        assert_eq!(snapshot.distance_left, "800.50");
        assert!(!snapshot.journey_completed);

        let current = snapshot.current_stop.as_ref().unwrap();
        assert_eq!(current.city_name, "Paris");
        assert_eq!(current.visa_requirement, "None");
        assert_eq!(current.distance_to_next, "300.00");
        assert_eq!(current.time_to_next_hours, "3.0");

        assert_eq!(snapshot.stops.len(), 2);
        assert!(snapshot.stops[0].is_current);
        assert!(!snapshot.stops[1].is_current);
    }

    #[test]
    fn snapshot_converts_to_miles() {
        let catalog = catalog();
        let state = JourneyState {
            current_stop_index: 1,
            unit: DistanceUnit::Miles,
        };

        let snapshot = ProgressSnapshot::build(&catalog, &state);

        assert_eq!(snapshot.unit_label, "mi");
        // 300.0 km * 0.621371 = 186.4113 mi
        assert_eq!(snapshot.distance_covered, "186.41");
        // 500.5 km * 0.621371 = 310.996... mi
        assert_eq!(snapshot.distance_left, "311.00");

        let current = snapshot.current_stop.as_ref().unwrap();
        assert_eq!(current.city_name, "Berlin");
        assert_eq!(current.distance_to_next, "311.00");
        // Hours are unit-independent.
        assert_eq!(current.time_to_next_hours, "5.5");
    }

    #[test]
    fn snapshot_after_completion() {
        let catalog = catalog();
        let state = JourneyState {
            current_stop_index: 2,
            unit: DistanceUnit::Kilometers,
        };

        let snapshot = ProgressSnapshot::build(&catalog, &state);

        assert!(snapshot.journey_completed);
        assert!(snapshot.current_stop.is_none());
        assert_eq!(snapshot.progress_fraction, 1.0);
        assert_eq!(snapshot.distance_covered, "800.50");
        assert_eq!(snapshot.distance_left, "0.00");
        assert!(snapshot.stops.iter().all(|row| !row.is_current));
    }

    #[test]
    fn snapshot_of_empty_catalog() {
        let catalog = StopCatalog::new(vec![]);
        let state = JourneyState::new();

        let snapshot = ProgressSnapshot::build(&catalog, &state);

        assert!(snapshot.journey_completed);
        assert!(snapshot.current_stop.is_none());
        assert!(snapshot.stops.is_empty());
        assert_eq!(snapshot.progress_fraction, 0.0);
        assert_eq!(snapshot.distance_covered, "0.00");
        assert_eq!(snapshot.distance_left, "0.00");
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let catalog = catalog();
        let state = JourneyState::new();

        let snapshot = ProgressSnapshot::build(&catalog, &state);
        let json: serde_json::Value = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["unit_label"], "km");
        assert_eq!(json["distance_left"], "800.50");
        assert_eq!(json["journey_completed"], false);
        assert_eq!(json["current_stop"]["city_name"], "Paris");
        assert_eq!(json["stops"][0]["is_current"], true);
    }
}
