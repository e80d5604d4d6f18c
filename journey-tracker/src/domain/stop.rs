//! Stop record type.

/// One leg of the journey, ending at a named city.
///
/// Each record describes the leg *from* this stop *to* the next stop in
/// the itinerary. The final stop carries `distance_to_next_km == 0.0`
/// (there is no successor leg).
#[derive(Debug, Clone, PartialEq)]
pub struct StopRecord {
    /// Display name of the city.
    pub city_name: String,

    /// Free-text visa descriptor, may be empty.
    pub visa_requirement: String,

    /// Distance from this stop to the next one, in kilometers.
    pub distance_to_next_km: f64,

    /// Travel time for that same leg, in hours.
    pub time_to_next_hours: f64,
}

impl StopRecord {
    /// Creates a stop record.
    pub fn new(
        city_name: impl Into<String>,
        visa_requirement: impl Into<String>,
        distance_to_next_km: f64,
        time_to_next_hours: f64,
    ) -> Self {
        Self {
            city_name: city_name.into(),
            visa_requirement: visa_requirement.into(),
            distance_to_next_km,
            time_to_next_hours,
        }
    }
}
