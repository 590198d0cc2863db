//! Stable DTOs and IDs used across the posture workspace.
//!
//! This crate is intentionally boring:
//! - verdict, capability, and check-result types for the emitted report
//! - the raw signal outcome model shared by probes and evaluators
//! - stable string IDs for capabilities and signals
//! - the engine error taxonomy

#![forbid(unsafe_code)]

pub mod check;
pub mod error;
pub mod ids;
pub mod report;
pub mod signal;

pub use check::{
    Capability, CheckResult, DangerousPermission, OsVersionInfo, PermissionFinding, Polarity,
    Verdict, PERMISSION_TAXONOMY_VERSION,
};
pub use error::EngineError;
pub use report::{
    EvaluationResult, ReportEnvelope, SecurityReport, ToolMeta, SCHEMA_REPORT_V1,
};
pub use signal::{
    EncryptionState, OsRelease, PackageGrants, ProbeError, ProbeErrorKind, Reading, SignalResult,
    TrustedService,
};
