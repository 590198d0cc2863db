//! `os.security_patch_level`: the build/patch identifier from the version probe.

use crate::checks::utils;
use crate::policy::EffectiveConfig;
use posture_signals::DeviceSignals;
use posture_types::{ids, Capability, CheckResult, Reading, Verdict};
use serde_json::json;

pub fn run(signals: &dyn DeviceSignals, _cfg: &EffectiveConfig) -> CheckResult {
    let signal = ids::SIGNAL_OS_RELEASE;
    match signals.os_release() {
        Ok(Reading::Value(release)) => match release.security_patch {
            Some(patch) => CheckResult {
                capability: Capability::SecurityPatchLevel,
                verdict: Verdict::True,
                detail: Some(patch.clone()),
                signals_used: vec![signal.to_string()],
                data: json!({ "security_patch": patch }),
            },
            None => {
                let mut result =
                    utils::signal_unavailable(Capability::SecurityPatchLevel, signal);
                result.detail =
                    Some("platform does not expose a security patch level".to_string());
                result
            }
        },
        Ok(Reading::Unavailable) => {
            utils::signal_unavailable(Capability::SecurityPatchLevel, signal)
        }
        Err(err) => utils::probe_failed(Capability::SecurityPatchLevel, signal, &err),
    }
}
