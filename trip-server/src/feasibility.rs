//! Transport feasibility policy.
//!
//! Decides which transport modes are plausible for a city pair given the
//! two country codes and the great-circle distance. Distance bounds are
//! calibrated for the Korean domestic market; non-KR domestic routes carry
//! no upper bound for train or airplane.

use crate::domain::{CountryCode, TransportMode};

/// Minimum domestic train distance in km.
const TRAIN_MIN_KM: u32 = 20;
/// Maximum domestic train distance in km, enforced for KR departures only.
const TRAIN_MAX_KM_KR: u32 = 600;
/// Domestic bus distance range in km.
const BUS_MIN_KM: u32 = 10;
const BUS_MAX_KM: u32 = 500;
/// Minimum KR domestic flight distance in km.
const AIRPLANE_MIN_KM_KR: u32 = 150;
/// Maximum domestic car distance in km.
const CAR_MAX_KM: u32 = 400;

/// Whether a transport mode is legal/sensible between two cities.
///
/// Domestic means the two country codes are equal.
///
/// # Examples
///
/// ```
/// use trip_server::domain::{CountryCode, TransportMode};
/// use trip_server::feasibility::is_feasible;
///
/// let kr = CountryCode::KR;
/// let jp = CountryCode::parse("JP").unwrap();
///
/// // Seoul → Busan, ~325 km domestic
/// assert!(is_feasible(TransportMode::Train, kr, kr, 325));
/// assert!(is_feasible(TransportMode::Bus, kr, kr, 325));
/// assert!(is_feasible(TransportMode::Airplane, kr, kr, 325));
///
/// // International: only flying
/// assert!(is_feasible(TransportMode::Airplane, kr, jp, 1160));
/// assert!(!is_feasible(TransportMode::Train, kr, jp, 1160));
/// ```
pub fn is_feasible(
    mode: TransportMode,
    departure: CountryCode,
    arrival: CountryCode,
    distance_km: u32,
) -> bool {
    let domestic = departure == arrival;

    match mode {
        TransportMode::Train => {
            if !domestic || distance_km < TRAIN_MIN_KM {
                return false;
            }
            // Upper bound only declared for the home market
            departure != CountryCode::KR || distance_km <= TRAIN_MAX_KM_KR
        }
        TransportMode::Bus => {
            domestic && (BUS_MIN_KM..=BUS_MAX_KM).contains(&distance_km)
        }
        TransportMode::Airplane => {
            if !domestic {
                return true;
            }
            // Short domestic hops don't fly in KR; elsewhere no declared bound
            departure != CountryCode::KR || distance_km >= AIRPLANE_MIN_KM_KR
        }
        TransportMode::Car => domestic && distance_km <= CAR_MAX_KM,
        // No ferry schedules are synthesized
        TransportMode::Ferry => false,
    }
}

/// Feasible modes among the three synthesized template families
/// (train, bus, airplane).
///
/// Car and ferry are deliberately excluded from the listing: the route
/// synthesizer has no template for them. [`is_feasible`] still answers
/// for all five modes.
pub fn feasible_modes(
    departure: CountryCode,
    arrival: CountryCode,
    distance_km: u32,
) -> Vec<TransportMode> {
    [TransportMode::Train, TransportMode::Bus, TransportMode::Airplane]
        .into_iter()
        .filter(|mode| is_feasible(*mode, departure, arrival, distance_km))
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn country()(s in "[A-Z]{2}") -> CountryCode {
            CountryCode::parse(&s).unwrap()
        }
    }

    proptest! {
        /// Ground transport is never feasible internationally.
        #[test]
        fn ground_modes_never_international(
            a in country(),
            b in country(),
            distance in 0u32..20_000
        ) {
            prop_assume!(a != b);
            prop_assert!(!is_feasible(TransportMode::Train, a, b, distance));
            prop_assert!(!is_feasible(TransportMode::Bus, a, b, distance));
            prop_assert!(!is_feasible(TransportMode::Car, a, b, distance));
        }

        /// International flight is always feasible.
        #[test]
        fn international_flight_always(
            a in country(),
            b in country(),
            distance in 0u32..20_000
        ) {
            prop_assume!(a != b);
            prop_assert!(is_feasible(TransportMode::Airplane, a, b, distance));
        }

        /// The listing agrees with the per-mode policy.
        #[test]
        fn listing_matches_policy(
            a in country(),
            b in country(),
            distance in 0u32..20_000
        ) {
            let modes = feasible_modes(a, b, distance);
            for mode in [TransportMode::Train, TransportMode::Bus, TransportMode::Airplane] {
                prop_assert_eq!(
                    modes.contains(&mode),
                    is_feasible(mode, a, b, distance)
                );
            }
        }
    }
}
