//! Country code type.

use std::fmt;

/// Error returned when parsing an invalid country code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid country code: {reason}")]
pub struct InvalidCountryCode {
    reason: &'static str,
}

/// A valid ISO-3166 alpha-2 country code.
///
/// Country codes are always 2 uppercase ASCII letters. This type guarantees
/// that any `CountryCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use trip_server::domain::CountryCode;
///
/// let kr = CountryCode::parse("KR").unwrap();
/// assert_eq!(kr.as_str(), "KR");
///
/// // Lowercase is rejected
/// assert!(CountryCode::parse("kr").is_err());
///
/// // Wrong length is rejected
/// assert!(CountryCode::parse("KOR").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// South Korea, the feasibility policy's home market.
    pub const KR: CountryCode = CountryCode(*b"KR");

    /// Sentinel for countries the geocoder could not determine.
    ///
    /// "ZZ" is in the ISO-3166 user-assigned range, so it never collides
    /// with a real country.
    pub const UNKNOWN: CountryCode = CountryCode(*b"ZZ");

    /// Parse a country code from a string.
    ///
    /// The input must be exactly 2 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidCountryCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 {
            return Err(InvalidCountryCode {
                reason: "must be exactly 2 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidCountryCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(CountryCode([bytes[0], bytes[1]]))
    }

    /// Returns the country code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only valid ASCII uppercase letters are ever stored
        std::str::from_utf8(&self.0).unwrap()
    }

    /// Whether this is the sentinel for an undetermined country.
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

impl fmt::Debug for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CountryCode({})", self.as_str())
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(CountryCode::parse("KR").is_ok());
        assert!(CountryCode::parse("JP").is_ok());
        assert!(CountryCode::parse("US").is_ok());
        assert!(CountryCode::parse("ZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(CountryCode::parse("kr").is_err());
        assert!(CountryCode::parse("Kr").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(CountryCode::parse("").is_err());
        assert!(CountryCode::parse("K").is_err());
        assert!(CountryCode::parse("KOR").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(CountryCode::parse("K1").is_err());
        assert!(CountryCode::parse("--").is_err());
    }

    #[test]
    fn constants() {
        assert_eq!(CountryCode::KR.as_str(), "KR");
        assert_eq!(CountryCode::UNKNOWN.as_str(), "ZZ");
        assert!(CountryCode::UNKNOWN.is_unknown());
        assert!(!CountryCode::KR.is_unknown());
    }

    #[test]
    fn display_and_debug() {
        let kr = CountryCode::parse("KR").unwrap();
        assert_eq!(format!("{}", kr), "KR");
        assert_eq!(format!("{:?}", kr), "CountryCode(KR)");
    }

    #[test]
    fn equality_and_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(CountryCode::parse("KR").unwrap());
        assert!(set.contains(&CountryCode::KR));
        assert!(!set.contains(&CountryCode::parse("JP").unwrap()));
    }
}
