//! Rule-based risk assessment over a single vitals record.
//!
//! Flow: `calculate_derived_measurements` fills BMI / pulse pressure / MAP,
//! `calculate_risk_score` runs the scoring rules, builds the display channels
//! and asks `generate_suggested_actions` for follow-up suggestions. Everything
//! here is pure and synchronous.

pub mod actions;
pub mod derived;
pub mod display;
pub mod engine;
pub mod messages;
pub mod reference;
pub mod scoring;

pub use actions::generate_suggested_actions;
pub use derived::calculate_derived_measurements;
pub use engine::{DefaultRiskEngine, RiskEngine};
pub use reference::{NormalRange, ReferenceRanges};
pub use scoring::calculate_risk_score;
