//! `os.version`: canonical OS version string.

use crate::checks::utils;
use crate::policy::EffectiveConfig;
use posture_signals::DeviceSignals;
use posture_types::{ids, Capability, CheckResult, OsVersionInfo, Reading, Verdict};
use serde_json::json;

pub fn run(signals: &dyn DeviceSignals, _cfg: &EffectiveConfig) -> CheckResult {
    let signal = ids::SIGNAL_OS_RELEASE;
    match signals.os_release() {
        Ok(Reading::Value(release)) => {
            match OsVersionInfo::parse(&release.release, release.security_patch.clone()) {
                Some(version) => CheckResult {
                    capability: Capability::OsVersion,
                    verdict: Verdict::True,
                    detail: Some(version.canonical()),
                    signals_used: vec![signal.to_string()],
                    data: json!({
                        "version": version,
                        "raw_release": release.release,
                    }),
                },
                None => {
                    let mut result = utils::signal_unavailable(Capability::OsVersion, signal);
                    result.detail = Some(format!(
                        "unparseable release string '{}'",
                        release.release
                    ));
                    result
                }
            }
        }
        Ok(Reading::Unavailable) => utils::signal_unavailable(Capability::OsVersion, signal),
        Err(err) => utils::probe_failed(Capability::OsVersion, signal, &err),
    }
}
