//! Route generation from templates.

use rand::Rng;
use tracing::debug;

use crate::directory::CityInfo;
use crate::domain::{Route, RouteEndpoint, TimeOfDay, TransportMode, TripQuery};
use crate::feasibility::feasible_modes;

use super::templates::TEMPLATES;

/// First departure of each mode leaves at 09:00.
const FIRST_DEPARTURE_MINS: u32 = 9 * 60;

/// Gap between consecutive departures of the same mode.
const DEPARTURE_SPACING_MINS: u32 = 3 * 60;

/// Minimum final price in whole currency units.
const MIN_PRICE: f64 = 10_000.0;

/// Price jitter fraction: final price is base ± up to 15%.
const PRICE_JITTER: f64 = 0.15;

/// Synthesize scheduled routes for every feasible template mode.
///
/// Route ids are sequential strings starting at "1", shared across all
/// modes in the batch. Durations and departure times are deterministic
/// functions of the distance; price jitter, seat counts, and ratings are
/// drawn from `rng`.
pub fn synthesize(
    query: &TripQuery,
    departure: &CityInfo,
    arrival: &CityInfo,
    distance_km: u32,
    rng: &mut impl Rng,
) -> Vec<Route> {
    let modes = feasible_modes(
        departure.country_code,
        arrival.country_code,
        distance_km,
    );

    let mut routes = Vec::new();
    let mut next_id: u32 = 1;

    for template in &TEMPLATES {
        if !modes.contains(&template.mode) {
            continue;
        }

        for i in 0..template.route_count {
            let route = build_route(
                next_id,
                i,
                template.mode,
                template.speed_kmh,
                template.price_multiplier,
                template.operators,
                query,
                departure,
                arrival,
                distance_km,
                rng,
            );
            routes.push(route);
            next_id += 1;
        }
    }

    debug!(
        departure = query.departure_city(),
        arrival = query.destination_city(),
        distance_km,
        count = routes.len(),
        "synthesized routes"
    );

    routes
}

#[allow(clippy::too_many_arguments)]
fn build_route(
    id: u32,
    index: u32,
    mode: TransportMode,
    speed_kmh: f64,
    price_multiplier: f64,
    operators: &[(&str, &str)],
    query: &TripQuery,
    departure: &CityInfo,
    arrival: &CityInfo,
    distance_km: u32,
    rng: &mut impl Rng,
) -> Route {
    let (operator, vehicle_prefix) = operators[index as usize % operators.len()];

    let departure_time =
        TimeOfDay::from_minutes(FIRST_DEPARTURE_MINS + index * DEPARTURE_SPACING_MINS);
    let duration_mins = (distance_km as f64 / speed_kmh * 60.0).round() as u32;
    let arrival_time = departure_time.plus_minutes(duration_mins);

    let base_price = (distance_km as f64 * price_multiplier * 100.0).round();
    let jitter = rng.random_range(-PRICE_JITTER..=PRICE_JITTER) * base_price;
    let price = (base_price + jitter).max(MIN_PRICE).round();

    let mut badges = Vec::new();
    if price < 0.85 * base_price {
        badges.push("discount".to_string());
    }

    let seats_available = rng.random_range(5u32..=54);
    let rating = (rng.random_range(4.0f64..=4.9) * 10.0).round() / 10.0;

    Route {
        id: id.to_string(),
        mode,
        operator: operator.to_string(),
        vehicle_id: format!("{}{}", vehicle_prefix, 101 + index * 2),
        departure: RouteEndpoint {
            location: query.departure_city().to_string(),
            time: departure_time,
            coordinates: departure.coordinates,
        },
        arrival: RouteEndpoint {
            location: query.destination_city().to_string(),
            time: arrival_time,
            coordinates: arrival.coordinates,
        },
        duration_mins,
        price: price as u32,
        transfers: 0,
        seats_available: Some(seats_available),
        rating,
        badges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::builtin_cities;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn query() -> TripQuery {
        let date = NaiveDate::from_ymd_opt(2026, 9, 12).unwrap();
        TripQuery::new("서울", "부산", date, 3, 2).unwrap()
    }

    fn city(name: &str) -> CityInfo {
        builtin_cities().lookup(name).unwrap().clone()
    }

    #[test]
    fn domestic_batch_has_seven_sequential_routes() {
        let mut rng = StdRng::seed_from_u64(42);
        let routes = synthesize(&query(), &city("서울"), &city("부산"), 325, &mut rng);

        assert_eq!(routes.len(), 7);

        let ids: Vec<&str> = routes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7"]);

        let trains = routes.iter().filter(|r| r.mode == TransportMode::Train).count();
        let flights = routes.iter().filter(|r| r.mode == TransportMode::Airplane).count();
        let buses = routes.iter().filter(|r| r.mode == TransportMode::Bus).count();
        assert_eq!((trains, flights, buses), (2, 3, 2));
    }

    #[test]
    fn durations_follow_nominal_speeds() {
        let mut rng = StdRng::seed_from_u64(1);
        let routes = synthesize(&query(), &city("서울"), &city("부산"), 325, &mut rng);

        for route in &routes {
            let expected = match route.mode {
                TransportMode::Train => 130,    // round(325/150*60)
                TransportMode::Airplane => 33,  // round(325/600*60)
                TransportMode::Bus => 244,      // round(325/80*60)
                _ => unreachable!(),
            };
            assert_eq!(route.duration_mins, expected, "{}", route.mode);
        }
    }

    #[test]
    fn departures_start_at_nine_with_three_hour_spacing() {
        let mut rng = StdRng::seed_from_u64(7);
        let routes = synthesize(&query(), &city("서울"), &city("부산"), 325, &mut rng);

        let flight_times: Vec<String> = routes
            .iter()
            .filter(|r| r.mode == TransportMode::Airplane)
            .map(|r| r.departure.time.to_string())
            .collect();
        assert_eq!(flight_times, ["09:00", "12:00", "15:00"]);

        let arrival = routes
            .iter()
            .find(|r| r.mode == TransportMode::Train)
            .unwrap()
            .arrival
            .time;
        // 09:00 + 130 minutes
        assert_eq!(arrival.to_string(), "11:10");
    }

    #[test]
    fn arrival_hours_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(9);
        // Non-KR domestic so long train rides are feasible and wrap midnight
        let routes = synthesize(&query(), &city("뉴욕"), &city("뉴욕"), 4000, &mut rng);

        assert!(!routes.is_empty());
        for route in &routes {
            assert!(route.arrival.time.hour() <= 23);
        }
    }

    #[test]
    fn prices_jittered_around_base_with_floor() {
        let mut rng = StdRng::seed_from_u64(3);
        let routes = synthesize(&query(), &city("서울"), &city("부산"), 325, &mut rng);

        for route in &routes {
            let base: f64 = match route.mode {
                TransportMode::Train => 325.0 * 1.8 * 100.0,
                TransportMode::Airplane => 325.0 * 2.5 * 100.0,
                TransportMode::Bus => 325.0 * 0.8 * 100.0,
                _ => unreachable!(),
            };
            let price = route.price as f64;
            assert!(price >= MIN_PRICE);
            assert!(price >= (base * 0.85).floor(), "{} below jitter floor", price);
            assert!(price <= (base * 1.15).ceil(), "{} above jitter ceiling", price);
        }
    }

    #[test]
    fn random_fields_stay_in_declared_ranges() {
        let mut rng = StdRng::seed_from_u64(5);
        let routes = synthesize(&query(), &city("서울"), &city("부산"), 325, &mut rng);

        for route in &routes {
            let seats = route.seats_available.unwrap();
            assert!((5..=54).contains(&seats));
            assert!((4.0..=4.9).contains(&route.rating));
            assert_eq!(route.transfers, 0);
        }
    }

    #[test]
    fn same_seed_same_batch() {
        let mut a = StdRng::seed_from_u64(1234);
        let mut b = StdRng::seed_from_u64(1234);

        let first = synthesize(&query(), &city("서울"), &city("부산"), 325, &mut a);
        let second = synthesize(&query(), &city("서울"), &city("부산"), 325, &mut b);

        assert_eq!(first, second);
    }

    #[test]
    fn international_pair_yields_flights_only() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 12).unwrap();
        let q = TripQuery::new("서울", "도쿄", date, 3, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        let routes = synthesize(&q, &city("서울"), &city("도쿄"), 1160, &mut rng);

        assert_eq!(routes.len(), 3);
        assert!(routes.iter().all(|r| r.mode == TransportMode::Airplane));
        let ids: Vec<&str> = routes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn operators_rotate_per_mode() {
        let mut rng = StdRng::seed_from_u64(2);
        let routes = synthesize(&query(), &city("서울"), &city("부산"), 325, &mut rng);

        let train_ops: Vec<&str> = routes
            .iter()
            .filter(|r| r.mode == TransportMode::Train)
            .map(|r| r.operator.as_str())
            .collect();
        assert_eq!(train_ops, ["KTX", "SRT"]);

        let flight_ops: Vec<&str> = routes
            .iter()
            .filter(|r| r.mode == TransportMode::Airplane)
            .map(|r| r.operator.as_str())
            .collect();
        assert_eq!(flight_ops, ["Korean Air", "Asiana Airlines", "Jeju Air"]);
    }
}
