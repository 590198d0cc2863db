//! Aggregate report and the emitted envelope.

use crate::check::{CheckResult, Verdict};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for posture report envelopes.
pub const SCHEMA_REPORT_V1: &str = "posture.report.v1";

/// The aggregate output of the `report.security_info` capability.
///
/// Field layout is stable: one named slot per individual capability, in
/// report order. `None` means the check was disabled by configuration.
/// Built fresh per request; device state can change between calls, so this
/// is never cached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SecurityReport {
    /// `false` if any contributing check is unfavorable; `indeterminate` if
    /// none is unfavorable but at least one is indeterminate; else `true`.
    pub summary: Verdict,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compromised: Option<CheckResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_lock: Option<CheckResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<CheckResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_options: Option<CheckResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usb_debugging: Option<CheckResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trusted_services: Option<CheckResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dangerous_permissions: Option<CheckResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_patch_level: Option<CheckResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_version: Option<CheckResult>,
}

impl SecurityReport {
    /// Enabled check results in report order.
    pub fn checks(&self) -> impl Iterator<Item = &CheckResult> {
        [
            self.compromised.as_ref(),
            self.screen_lock.as_ref(),
            self.encryption.as_ref(),
            self.developer_options.as_ref(),
            self.usb_debugging.as_ref(),
            self.trusted_services.as_ref(),
            self.dangerous_permissions.as_ref(),
            self.security_patch_level.as_ref(),
            self.os_version.as_ref(),
        ]
        .into_iter()
        .flatten()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Payload of one evaluated request: a single check or the aggregate report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationResult {
    Check(CheckResult),
    Report(SecurityReport),
}

/// The envelope written for every request.
///
/// Keeping a stable outer shape lets downstream tooling consume single-check
/// and aggregate responses uniformly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub result: EvaluationResult,
}
