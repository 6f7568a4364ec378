//! Trip planning server.
//!
//! Answers: "I want to travel between these two cities, how can I get
//! there and what will I do each day?"

pub mod booking;
pub mod directory;
pub mod domain;
pub mod feasibility;
pub mod geocode;
pub mod store;
pub mod synth;
pub mod web;
