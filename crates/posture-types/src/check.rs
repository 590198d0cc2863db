//! Verdicts, capabilities, and per-check result types.

use crate::error::EngineError;
use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Version of the dangerous-permission taxonomy (`DangerousPermission`).
/// Bumped whenever a category is added or removed.
pub const PERMISSION_TAXONOMY_VERSION: &str = "1";

/// Tri-state check outcome.
///
/// `Indeterminate` means a required signal failed or is unsupported here.
/// It is never silently coerced to a reassuring `False`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    True,
    False,
    Indeterminate,
}

impl Verdict {
    pub fn from_bool(v: bool) -> Self {
        if v { Verdict::True } else { Verdict::False }
    }
}

/// Which raw verdict counts as favorable for the device's posture.
///
/// The aggregate summary is computed over favorability, not raw booleans:
/// `screen_lock == true` is good, `usb_debugging == true` is bad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    /// `true` is the favorable answer (screen lock, encryption, trust service).
    FavorableWhenTrue,
    /// `false` is the favorable answer (compromise, debug surfaces).
    FavorableWhenFalse,
    /// The check reports data rather than a posture stance; it contributes
    /// favorably whenever its probe succeeded.
    Informational,
}

/// One evaluator per capability. IDs are stable dotted strings (`ids` module).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Capability {
    #[serde(rename = "device.compromised")]
    DeviceCompromised,
    #[serde(rename = "device.screen_lock")]
    ScreenLock,
    #[serde(rename = "device.encryption")]
    Encryption,
    #[serde(rename = "device.developer_options")]
    DeveloperOptions,
    #[serde(rename = "device.usb_debugging")]
    UsbDebugging,
    #[serde(rename = "device.trusted_services")]
    TrustedServices,
    #[serde(rename = "app.dangerous_permissions")]
    DangerousPermissions,
    #[serde(rename = "os.security_patch_level")]
    SecurityPatchLevel,
    #[serde(rename = "os.version")]
    OsVersion,
    #[serde(rename = "report.security_info")]
    SecurityInfo,
}

impl Capability {
    /// The nine individually evaluable capabilities, in report order.
    pub const INDIVIDUAL: [Capability; 9] = [
        Capability::DeviceCompromised,
        Capability::ScreenLock,
        Capability::Encryption,
        Capability::DeveloperOptions,
        Capability::UsbDebugging,
        Capability::TrustedServices,
        Capability::DangerousPermissions,
        Capability::SecurityPatchLevel,
        Capability::OsVersion,
    ];

    /// All capabilities, including the aggregate.
    pub const ALL: [Capability; 10] = [
        Capability::DeviceCompromised,
        Capability::ScreenLock,
        Capability::Encryption,
        Capability::DeveloperOptions,
        Capability::UsbDebugging,
        Capability::TrustedServices,
        Capability::DangerousPermissions,
        Capability::SecurityPatchLevel,
        Capability::OsVersion,
        Capability::SecurityInfo,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Capability::DeviceCompromised => ids::CAP_DEVICE_COMPROMISED,
            Capability::ScreenLock => ids::CAP_SCREEN_LOCK,
            Capability::Encryption => ids::CAP_ENCRYPTION,
            Capability::DeveloperOptions => ids::CAP_DEVELOPER_OPTIONS,
            Capability::UsbDebugging => ids::CAP_USB_DEBUGGING,
            Capability::TrustedServices => ids::CAP_TRUSTED_SERVICES,
            Capability::DangerousPermissions => ids::CAP_DANGEROUS_PERMISSIONS,
            Capability::SecurityPatchLevel => ids::CAP_SECURITY_PATCH_LEVEL,
            Capability::OsVersion => ids::CAP_OS_VERSION,
            Capability::SecurityInfo => ids::CAP_SECURITY_INFO,
        }
    }

    pub fn polarity(&self) -> Polarity {
        match self {
            Capability::DeviceCompromised
            | Capability::DeveloperOptions
            | Capability::UsbDebugging => Polarity::FavorableWhenFalse,
            Capability::ScreenLock | Capability::Encryption | Capability::TrustedServices => {
                Polarity::FavorableWhenTrue
            }
            Capability::DangerousPermissions
            | Capability::SecurityPatchLevel
            | Capability::OsVersion
            | Capability::SecurityInfo => Polarity::Informational,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Capability {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .iter()
            .find(|c| c.id() == s)
            .copied()
            .ok_or_else(|| EngineError::InvalidCapability(s.to_string()))
    }
}

/// The outcome of one evaluator run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckResult {
    pub capability: Capability,
    pub verdict: Verdict,

    /// Human-readable explanation: matched marker, probe failure cause, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Signal IDs that contributed, in probe order.
    pub signals_used: Vec<String>,

    /// Check-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

impl CheckResult {
    pub fn new(capability: Capability, verdict: Verdict) -> Self {
        Self {
            capability,
            verdict,
            detail: None,
            signals_used: Vec::new(),
            data: JsonValue::Null,
        }
    }
}

/// Closed taxonomy of dangerous permission categories.
///
/// The mapping from raw platform permission names to a category is supplied
/// by configuration; raw permissions outside the mapping are ignored.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DangerousPermission {
    Location,
    Contacts,
    Calendar,
    Camera,
    Microphone,
    Sms,
    Phone,
    Storage,
    Sensors,
}

/// One package holding at least one granted dangerous permission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PermissionFinding {
    pub app_id: String,
    pub app_name: String,
    pub permissions: BTreeSet<DangerousPermission>,
}

/// Parsed OS version identifiers, immutable for one check invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OsVersionInfo {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    /// Build or security patch level, when the platform exposes one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_patch: Option<String>,
}

impl OsVersionInfo {
    /// Parse a platform release string (`"14"`, `"17.2"`, `"17.2.1"`).
    ///
    /// Returns `None` when any present component is non-numeric; the caller
    /// treats that as an unreadable signal. A missing minor or patch
    /// component defaults to zero.
    pub fn parse(release: &str, security_patch: Option<String>) -> Option<Self> {
        let mut parts = release.trim().splitn(3, '.');
        let major: u32 = parts.next()?.trim().parse().ok()?;
        let minor: u32 = match parts.next() {
            Some(p) => p.trim().parse().ok()?,
            None => 0,
        };
        let patch: u32 = match parts.next() {
            Some(p) => p.trim().parse().ok()?,
            None => 0,
        };
        Some(Self {
            major,
            minor,
            patch,
            security_patch,
        })
    }

    /// Canonical version string: `major.minor`, with `.patch` only when nonzero.
    pub fn canonical(&self) -> String {
        if self.patch > 0 {
            format!("{}.{}.{}", self.major, self.minor, self.patch)
        } else {
            format!("{}.{}", self.major, self.minor)
        }
    }
}

impl fmt::Display for OsVersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}
