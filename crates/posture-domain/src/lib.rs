//! Pure posture evaluation (no direct IO).
//!
//! Input: a `DeviceSignals` source and an effective configuration.
//! Output: per-capability check results and the assembled security report.
//!
//! Every evaluation is stateless and idempotent: two consecutive runs with
//! unchanged signals return identical results.

#![forbid(unsafe_code)]

pub mod policy;
pub mod report;

pub mod checks;
mod engine;

pub use engine::{evaluate, evaluate_report};

#[cfg(test)]
mod proptest;
#[cfg(test)]
pub(crate) mod test_support;
