//! `device.encryption`: storage encryption state.
//!
//! `unsupported` maps to indeterminate, never to `false`: an emulator or an
//! old build that cannot answer the query is not an unencrypted device.

use crate::checks::utils;
use crate::policy::EffectiveConfig;
use posture_signals::DeviceSignals;
use posture_types::{ids, Capability, CheckResult, EncryptionState, Reading, Verdict};
use serde_json::json;

pub fn run(signals: &dyn DeviceSignals, _cfg: &EffectiveConfig) -> CheckResult {
    let signal = ids::SIGNAL_ENCRYPTION_STATE;
    match signals.encryption_state() {
        Ok(Reading::Value(state)) => {
            let verdict = match state {
                EncryptionState::Encrypted => Verdict::True,
                EncryptionState::NotEncrypted => Verdict::False,
                EncryptionState::Unsupported => Verdict::Indeterminate,
            };
            CheckResult {
                capability: Capability::Encryption,
                verdict,
                detail: match state {
                    EncryptionState::Unsupported => {
                        Some("encryption query unsupported on this build".to_string())
                    }
                    _ => None,
                },
                signals_used: vec![signal.to_string()],
                data: json!({ "state": state }),
            }
        }
        Ok(Reading::Unavailable) => utils::signal_unavailable(Capability::Encryption, signal),
        Err(err) => utils::probe_failed(Capability::Encryption, signal, &err),
    }
}
