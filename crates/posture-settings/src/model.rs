use camino::Utf8PathBuf;
use posture_types::DangerousPermission;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `posture.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy. Every field overlays the selected preset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PostureConfigV1 {
    /// Optional schema string for tooling (`posture.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Replaces the preset's root/jailbreak marker path list.
    #[schemars(with = "Option<Vec<String>>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_markers: Option<Vec<Utf8PathBuf>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trusted_service: Option<TrustedServiceConfig>,

    /// Per-probe command deadline for live signal sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probe_timeout_ms: Option<u64>,

    /// Raw permission name -> dangerous category, merged over the preset map.
    #[serde(default)]
    pub dangerous_permissions: BTreeMap<String, DangerousPermission>,

    /// Map of capability ID -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrustedServiceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_version: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckConfig {
    /// Override preset enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
