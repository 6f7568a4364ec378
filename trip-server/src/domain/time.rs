//! Time-of-day handling for synthesized schedules.
//!
//! Routes and itinerary entries carry "HH:MM" clock times with no date
//! component. Arithmetic wraps modulo 24 hours: a route departing 23:30
//! with a 90-minute duration arrives at "01:00" with no day marker.

use std::cmp::Ordering;
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A clock time of day (hour and minute, no date).
///
/// # Examples
///
/// ```
/// use trip_server::domain::TimeOfDay;
///
/// let t = TimeOfDay::parse_hhmm("14:30").unwrap();
/// assert_eq!(t.to_string(), "14:30");
///
/// // Arithmetic wraps past midnight
/// let late = TimeOfDay::parse_hhmm("23:30").unwrap();
/// assert_eq!(late.plus_minutes(90).to_string(), "01:00");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Create a time from hour and minute components.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_server::domain::TimeOfDay;
    ///
    /// assert!(TimeOfDay::parse_hhmm("00:00").is_ok());
    /// assert!(TimeOfDay::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(TimeOfDay::parse_hhmm("1430").is_err());
    /// assert!(TimeOfDay::parse_hhmm("25:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;

        Self::new(hour, minute)
    }

    /// The time at a given number of minutes past midnight, wrapping
    /// modulo 24 hours.
    pub fn from_minutes(total_minutes: u32) -> Self {
        let mins = total_minutes % (24 * 60);
        Self {
            hour: (mins / 60) as u8,
            minute: (mins % 60) as u8,
        }
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.hour as u32
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.minute as u32
    }

    /// Minutes since midnight.
    pub fn minutes_from_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Add minutes, wrapping past midnight with no day marker.
    pub fn plus_minutes(&self, minutes: u32) -> Self {
        Self::from_minutes(self.minutes_from_midnight() + minutes)
    }

    /// Numeric "HHMM" key, used for chronological ordering within a day.
    ///
    /// "09:05" → 905, "14:30" → 1430.
    pub fn sort_key(&self) -> u16 {
        self.hour() as u16 * 100 + self.minute() as u16
    }
}

impl Ord for TimeOfDay {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for TimeOfDay {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02})", self.hour, self.minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn valid_time()(hour in 0u32..24, minute in 0u32..60) -> TimeOfDay {
            TimeOfDay::new(hour, minute).unwrap()
        }
    }

    proptest! {
        /// Parse then display roundtrips.
        #[test]
        fn parse_display_roundtrip(hour in 0u32..24, minute in 0u32..60) {
            let s = format!("{:02}:{:02}", hour, minute);
            let parsed = TimeOfDay::parse_hhmm(&s).unwrap();
            prop_assert_eq!(parsed.to_string(), s);
        }

        /// plus_minutes always yields a valid hour.
        #[test]
        fn plus_minutes_hour_in_range(t in valid_time(), mins in 0u32..100_000) {
            let result = t.plus_minutes(mins);
            prop_assert!(result.hour() <= 23);
            prop_assert!(result.minute() <= 59);
        }

        /// Adding a whole number of days is the identity.
        #[test]
        fn plus_whole_days_identity(t in valid_time(), days in 0u32..10) {
            prop_assert_eq!(t.plus_minutes(days * 24 * 60), t);
        }

        /// Ordering agrees with minutes from midnight.
        #[test]
        fn ordering_matches_minutes(a in valid_time(), b in valid_time()) {
            prop_assert_eq!(
                a.cmp(&b),
                a.minutes_from_midnight().cmp(&b.minutes_from_midnight())
            );
        }

        /// Invalid hour strings are rejected.
        #[test]
        fn invalid_hour_rejected(hour in 24u32..100, minute in 0u32..60) {
            let s = format!("{:02}:{:02}", hour, minute);
            prop_assert!(TimeOfDay::parse_hhmm(&s).is_err());
        }
    }
}
