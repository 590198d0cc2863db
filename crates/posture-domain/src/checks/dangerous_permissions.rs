//! `app.dangerous_permissions`: which installed applications hold granted
//! permissions from the dangerous taxonomy.
//!
//! A package whose grants never intersect the taxonomy is excluded entirely.
//! Raw permissions outside the configured mapping are ignored, not errored.

use crate::checks::utils;
use crate::policy::EffectiveConfig;
use posture_signals::DeviceSignals;
use posture_types::{
    ids, Capability, CheckResult, PermissionFinding, Reading, Verdict,
    PERMISSION_TAXONOMY_VERSION,
};
use serde_json::json;
use std::collections::BTreeSet;

pub fn run(signals: &dyn DeviceSignals, cfg: &EffectiveConfig) -> CheckResult {
    let signal = ids::SIGNAL_INSTALLED_PACKAGES;
    match signals.installed_packages() {
        Ok(Reading::Value(packages)) => {
            let mut findings: Vec<PermissionFinding> = Vec::new();
            for package in packages {
                let permissions: BTreeSet<_> = package
                    .granted
                    .iter()
                    .filter_map(|raw| cfg.dangerous_permissions.get(raw))
                    .copied()
                    .collect();
                if !permissions.is_empty() {
                    findings.push(PermissionFinding {
                        app_id: package.app_id,
                        app_name: package.app_name,
                        permissions,
                    });
                }
            }

            CheckResult {
                capability: Capability::DangerousPermissions,
                verdict: Verdict::True,
                detail: Some(format!(
                    "{} package(s) hold granted dangerous permissions",
                    findings.len()
                )),
                signals_used: vec![signal.to_string()],
                data: json!({
                    "taxonomy_version": PERMISSION_TAXONOMY_VERSION,
                    "findings": findings,
                }),
            }
        }
        Ok(Reading::Unavailable) => {
            utils::signal_unavailable(Capability::DangerousPermissions, signal)
        }
        Err(err) => utils::probe_failed(Capability::DangerousPermissions, signal, &err),
    }
}
