//! Per-mode synthesis template data.

use crate::domain::TransportMode;

/// Template data for synthesizing one transport mode's routes.
#[derive(Debug, Clone, Copy)]
pub struct ModeTemplate {
    /// The mode this template fabricates.
    pub mode: TransportMode,

    /// Nominal cruising speed in km/h, used to derive the duration.
    pub speed_kmh: f64,

    /// Price multiplier; base price = distance × multiplier × 100.
    pub price_multiplier: f64,

    /// How many routes to generate for this mode.
    pub route_count: u32,

    /// Rotating (operator, vehicle prefix) pairs; the i-th route uses
    /// entry i modulo the list length.
    pub operators: &'static [(&'static str, &'static str)],
}

/// The three synthesized template families, in generation order.
pub const TEMPLATES: [ModeTemplate; 3] = [
    ModeTemplate {
        mode: TransportMode::Train,
        speed_kmh: 150.0,
        price_multiplier: 1.8,
        route_count: 2,
        operators: &[("KTX", "KTX-"), ("SRT", "SRT-")],
    },
    ModeTemplate {
        mode: TransportMode::Airplane,
        speed_kmh: 600.0,
        price_multiplier: 2.5,
        route_count: 3,
        operators: &[("Korean Air", "KE"), ("Asiana Airlines", "OZ"), ("Jeju Air", "7C")],
    },
    ModeTemplate {
        mode: TransportMode::Bus,
        speed_kmh: 80.0,
        price_multiplier: 0.8,
        route_count: 2,
        operators: &[("Kobus Express", "KB"), ("Kumho Express", "KH")],
    },
];

/// Template for a mode, if one exists (car and ferry have none).
pub fn template_for(mode: TransportMode) -> Option<&'static ModeTemplate> {
    TEMPLATES.iter().find(|t| t.mode == mode)
}
