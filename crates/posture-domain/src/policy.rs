use camino::Utf8PathBuf;
use posture_types::{Capability, DangerousPermission};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckPolicy {
    pub enabled: bool,
}

impl CheckPolicy {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }
}

/// Fully resolved policy for one evaluation run.
///
/// The marker list, the dangerous-permission mapping, and the trust-service
/// floor are platform- and policy-specific: they arrive here from
/// configuration and are never guessed inside an evaluator.
#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,

    /// Filesystem paths whose presence is compromise evidence.
    pub root_markers: Vec<Utf8PathBuf>,

    /// Package identifier of the platform trust service.
    pub trusted_package: String,
    /// Minimum trust-service version accepted by `device.trusted_services`.
    pub trusted_min_version: u64,

    /// Raw permission name -> dangerous taxonomy category.
    pub dangerous_permissions: BTreeMap<String, DangerousPermission>,

    /// Per-probe command deadline for live signal sources.
    pub probe_timeout_ms: Option<u64>,

    /// Capability ID -> policy. Missing entries default to enabled.
    pub checks: BTreeMap<String, CheckPolicy>,
}

impl EffectiveConfig {
    pub fn check_enabled(&self, capability: Capability) -> bool {
        self.checks
            .get(capability.id())
            .map(|p| p.enabled)
            .unwrap_or(true)
    }
}
