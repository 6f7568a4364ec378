//! Synthesized transport routes.

use super::coords::Coordinates;
use super::mode::TransportMode;
use super::time::TimeOfDay;

/// One end of a route: where, when, and the resolved coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEndpoint {
    /// City name as entered in the trip query.
    pub location: String,

    /// Scheduled clock time at this end.
    pub time: TimeOfDay,

    /// Resolved coordinates of the city.
    pub coordinates: Coordinates,
}

/// A synthesized transport offering between two cities.
///
/// Identity is `id`, unique and sequential within one synthesis batch.
/// Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Batch-unique sequential identifier ("1", "2", ...).
    pub id: String,

    /// Transport mode of this offering.
    pub mode: TransportMode,

    /// Operating company.
    pub operator: String,

    /// Flight/train/bus identifier (e.g. "KE103").
    pub vehicle_id: String,

    /// Departure end.
    pub departure: RouteEndpoint,

    /// Arrival end.
    pub arrival: RouteEndpoint,

    /// Travel time in minutes.
    pub duration_mins: u32,

    /// Price in whole currency units.
    pub price: u32,

    /// Number of transfers (always 0 for direct-only synthesis).
    pub transfers: u32,

    /// Remaining seats, when known.
    pub seats_available: Option<u32>,

    /// Rating in [0, 5].
    pub rating: f64,

    /// Special labels ("discount", ...).
    pub badges: Vec<String>,
}

impl Route {
    /// Blended score used by the "recommended" sort: higher is better.
    ///
    /// Rating dominates; price breaks near-ties.
    pub fn recommended_score(&self) -> f64 {
        self.rating * 1000.0 - self.price as f64 / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(price: u32, rating: f64) -> Route {
        let endpoint = |time| RouteEndpoint {
            location: "서울".to_string(),
            time,
            coordinates: Coordinates::new(37.5665, 126.9780).unwrap(),
        };
        Route {
            id: "1".to_string(),
            mode: TransportMode::Train,
            operator: "KTX".to_string(),
            vehicle_id: "KTX-101".to_string(),
            departure: endpoint(TimeOfDay::new(9, 0).unwrap()),
            arrival: endpoint(TimeOfDay::new(11, 10).unwrap()),
            duration_mins: 130,
            price,
            transfers: 0,
            seats_available: Some(20),
            rating,
            badges: vec![],
        }
    }

    #[test]
    fn recommended_score_prefers_rating() {
        let cheap_mediocre = route(10_000, 4.0);
        let pricey_great = route(80_000, 4.9);

        // 4.9*1000 - 800 = 4100 > 4.0*1000 - 100 = 3900
        assert!(pricey_great.recommended_score() > cheap_mediocre.recommended_score());
    }

    #[test]
    fn recommended_score_breaks_ties_on_price() {
        let cheaper = route(30_000, 4.5);
        let dearer = route(60_000, 4.5);
        assert!(cheaper.recommended_score() > dearer.recommended_score());
    }
}
