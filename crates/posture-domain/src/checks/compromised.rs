//! `device.compromised`: root/jailbreak evidence.
//!
//! One matched marker is sufficient evidence. Positive evidence dominates
//! probe failures; a clean verdict requires both probes to answer.

use crate::checks::utils;
use crate::policy::EffectiveConfig;
use posture_signals::DeviceSignals;
use posture_types::{ids, Capability, CheckResult, Reading, Verdict};
use serde_json::json;

pub fn run(signals: &dyn DeviceSignals, cfg: &EffectiveConfig) -> CheckResult {
    let signals_used = vec![
        ids::SIGNAL_ROOT_MARKERS.to_string(),
        ids::SIGNAL_TRUSTED_SERVICE.to_string(),
    ];

    let markers = signals.root_markers(&cfg.root_markers);
    let trust = signals.trusted_service(&cfg.trusted_package);

    // Any present marker is compromise, whatever the trust probe said.
    if let Ok(Reading::Value(found)) = &markers {
        if !found.is_empty() {
            return CheckResult {
                capability: Capability::DeviceCompromised,
                verdict: Verdict::True,
                detail: Some(format!(
                    "root marker present: {}",
                    found
                        .iter()
                        .map(|p| p.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )),
                signals_used,
                data: json!({ "markers": found }),
            };
        }
    }

    // A tampered trust chain is compromise evidence on its own.
    if let Ok(Reading::Value(Some(service))) = &trust {
        if !service.integrity_ok {
            return CheckResult {
                capability: Capability::DeviceCompromised,
                verdict: Verdict::True,
                detail: Some(format!(
                    "trust service '{}' failed integrity verification",
                    service.package
                )),
                signals_used,
                data: json!({ "trusted_service": service }),
            };
        }
    }

    match (markers, trust) {
        // Markers all absent and the trust probe answered cleanly: the
        // service resolved intact, was answered as not installed, or the
        // platform has no trust surface at all.
        (Ok(Reading::Value(_)), Ok(_)) => {
            let mut result = CheckResult::new(Capability::DeviceCompromised, Verdict::False);
            result.signals_used = signals_used;
            result
        }
        // Missing evidence is never upgraded to a reassuring `false`.
        (markers, trust) => {
            let failure = markers
                .err()
                .or(trust.err())
                .map(|e| e.to_string())
                .unwrap_or_else(|| "marker scan unavailable".to_string());
            let mut result = utils::signal_unavailable(
                Capability::DeviceCompromised,
                ids::SIGNAL_ROOT_MARKERS,
            );
            result.detail = Some(failure);
            result.signals_used = signals_used;
            result
        }
    }
}
