//! Engine error taxonomy.
//!
//! Probe-level failures never appear here: they are absorbed into
//! `indeterminate` check results (`signal::ProbeError`). The only condition
//! that surfaces as a hard failure is a contract mismatch with the caller.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The caller requested a capability identifier the engine does not
    /// recognize. Indicates a dispatch contract mismatch, not device-state
    /// ambiguity, so it fails the whole request.
    #[error("unknown capability: '{0}'")]
    InvalidCapability(String),
}
