//! Raw signal outcome model shared by probes and evaluators.
//!
//! A probe is a pure function of current device state. Expected absence of a
//! signal (no such setting on this platform, file not present) is a normal
//! `Unavailable` reading, not an error. `ProbeError` is reserved for the
//! underlying OS call itself failing unexpectedly.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome of a single probe read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reading<T> {
    /// The signal exists and was read.
    Value(T),
    /// The signal legitimately does not exist on this platform.
    Unavailable,
}

impl<T> Reading<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Reading::Value(v) => Some(v),
            Reading::Unavailable => None,
        }
    }
}

/// How a probe failed. The kind is coarse on purpose: evaluators only need
/// it for the `detail` diagnostic, never for control flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProbeErrorKind {
    PermissionDenied,
    Io,
    Timeout,
    Unparseable,
}

/// An unexpected failure of the underlying OS call backing a signal.
///
/// Evaluators absorb this into an `indeterminate` verdict, retaining the
/// message in `CheckResult.detail`. It never aborts an aggregate report.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("probe '{signal}' failed ({kind:?}): {message}")]
pub struct ProbeError {
    pub signal: String,
    pub kind: ProbeErrorKind,
    pub message: String,
}

impl ProbeError {
    pub fn new(signal: &str, kind: ProbeErrorKind, message: impl Into<String>) -> Self {
        Self {
            signal: signal.to_string(),
            kind,
            message: message.into(),
        }
    }
}

pub type SignalResult<T> = Result<Reading<T>, ProbeError>;

/// Storage encryption state as reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EncryptionState {
    Encrypted,
    NotEncrypted,
    /// The platform cannot answer the encryption query at all. Maps to an
    /// `indeterminate` verdict, never to `false`.
    Unsupported,
}

/// Resolution of the platform's app-verification/trust service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TrustedService {
    /// Package identifier of the resolved service.
    pub package: String,
    /// Reported service version, compared against the configured floor.
    pub version: u64,
    /// Whether the service's trust chain verified cleanly. A tampered chain
    /// is compromise evidence regardless of version.
    pub integrity_ok: bool,
}

/// One installed package with its granted raw permission names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PackageGrants {
    pub app_id: String,
    pub app_name: String,
    #[serde(default)]
    pub granted: Vec<String>,
}

/// Raw OS version identifiers as read from the platform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OsRelease {
    /// Release string, e.g. `"14"` or `"17.2.1"`.
    pub release: String,
    /// Security patch level, e.g. `"2025-01-01"`, when the platform exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_patch: Option<String>,
}
