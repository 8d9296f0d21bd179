//! Multimodal trip planning server.
//!
//! Ranks candidate car + public transport itineraries by competing criteria
//! and overlays live road traffic disruptions onto the chosen routes.

pub mod domain;
pub mod geometry;
pub mod ranking;
pub mod traffic;
pub mod web;
