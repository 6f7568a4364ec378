//! Transport mode enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A means of travelling between two cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Airplane,
    Train,
    Bus,
    Car,
    Ferry,
}

impl TransportMode {
    /// All modes, in display order.
    pub const ALL: [TransportMode; 5] = [
        TransportMode::Airplane,
        TransportMode::Train,
        TransportMode::Bus,
        TransportMode::Car,
        TransportMode::Ferry,
    ];

    /// Returns the mode as a lowercase string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Airplane => "airplane",
            TransportMode::Train => "train",
            TransportMode::Bus => "bus",
            TransportMode::Car => "car",
            TransportMode::Ferry => "ferry",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
