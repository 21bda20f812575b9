//! Confidence engine.
//!
//! Converts a goal's time/progress trajectory into a 0-100 confidence
//! percentage by linear extrapolation of observed pace, and aggregates
//! stored per-goal confidences into a dashboard average. Pure functions
//! only; "now" is always an explicit parameter.

#![warn(missing_docs)]

pub mod aggregate;
pub mod projection;

pub use aggregate::average_confidence;
pub use projection::confidence_percentage;
