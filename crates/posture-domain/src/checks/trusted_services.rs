//! `device.trusted_services`: availability of the app-verification service.
//!
//! `true` only when the service resolves, verifies intact, and meets the
//! configured version floor. A service the package manager answered does
//! not exist is a plain `false`; a missing probe surface or a failing
//! probe is indeterminate.

use crate::checks::utils;
use crate::policy::EffectiveConfig;
use posture_signals::DeviceSignals;
use posture_types::{ids, Capability, CheckResult, Reading, Verdict};
use serde_json::json;

pub fn run(signals: &dyn DeviceSignals, cfg: &EffectiveConfig) -> CheckResult {
    let signal = ids::SIGNAL_TRUSTED_SERVICE;
    match signals.trusted_service(&cfg.trusted_package) {
        Ok(Reading::Value(Some(service))) => {
            let meets_floor = service.version >= cfg.trusted_min_version;
            let available = meets_floor && service.integrity_ok;
            let detail = if !service.integrity_ok {
                Some(format!(
                    "'{}' failed integrity verification",
                    service.package
                ))
            } else if !meets_floor {
                Some(format!(
                    "'{}' v{} is below the required floor v{}",
                    service.package, service.version, cfg.trusted_min_version
                ))
            } else {
                None
            };
            CheckResult {
                capability: Capability::TrustedServices,
                verdict: Verdict::from_bool(available),
                detail,
                signals_used: vec![signal.to_string()],
                data: json!({
                    "service": service,
                    "min_version": cfg.trusted_min_version,
                }),
            }
        }
        Ok(Reading::Value(None)) => {
            let mut result = CheckResult::new(Capability::TrustedServices, Verdict::False);
            result.detail = Some(format!("'{}' does not resolve", cfg.trusted_package));
            result.signals_used = vec![signal.to_string()];
            result
        }
        Ok(Reading::Unavailable) => {
            utils::signal_unavailable(Capability::TrustedServices, signal)
        }
        Err(err) => utils::probe_failed(Capability::TrustedServices, signal, &err),
    }
}
