//! karmic-core
//!
//! Domain records built on the scoring engine: the completed wellbeing
//! assessment, its result summary, and the per-user assessment session
//! with a pluggable store. No transport or database dependency.

pub mod error;
pub mod models;
pub mod session;
