//! Geocoding client error types.

use std::fmt;

/// Errors from the external geocoding lookup.
///
/// These never escape the [`Geocoder`](super::Geocoder), which falls
/// through to the fixed default city instead, but the client and cache
/// layers report them so the failure can be logged.
#[derive(Debug)]
pub enum GeocodeError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization or coordinate parsing failed
    Json { message: String },

    /// Lookup service returned an error status code
    Api { status: u16, message: String },

    /// Lookup succeeded but returned no results
    NoMatch,
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeError::Http(e) => write!(f, "HTTP error: {e}"),
            GeocodeError::Json { message } => write!(f, "JSON parse error: {message}"),
            GeocodeError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            GeocodeError::NoMatch => write!(f, "no match for city name"),
        }
    }
}

impl std::error::Error for GeocodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeocodeError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        GeocodeError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GeocodeError::NoMatch;
        assert_eq!(err.to_string(), "no match for city name");

        let err = GeocodeError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = GeocodeError::Json {
            message: "expected array".into(),
        };
        assert!(err.to_string().contains("JSON parse error"));
    }
}
