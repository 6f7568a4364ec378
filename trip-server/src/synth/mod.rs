//! Route synthesis.
//!
//! Fabricates plausible scheduled routes for each feasible transport mode
//! from the computed city-pair distance. The output is illustrative data,
//! not a real schedule lookup: departure times and durations are
//! deterministic, while price jitter, seat counts, and ratings come from
//! an injected random source so tests can seed them.

mod generate;
mod templates;

pub use generate::synthesize;
pub use templates::{ModeTemplate, TEMPLATES, template_for};
