//! `device.usb_debugging`: passthrough of the ADB flag.
//!
//! A platform without the concept is a well-defined negative: absence of
//! the capability is a known state, not an unknown one. Probe failure stays
//! indeterminate as everywhere else.

use crate::checks::utils;
use crate::policy::EffectiveConfig;
use posture_signals::DeviceSignals;
use posture_types::{ids, Capability, CheckResult, Reading, Verdict};

pub fn run(signals: &dyn DeviceSignals, _cfg: &EffectiveConfig) -> CheckResult {
    let signal = ids::SIGNAL_USB_DEBUGGING;
    match signals.usb_debugging_enabled() {
        Ok(Reading::Value(v)) => {
            let mut result = CheckResult::new(Capability::UsbDebugging, Verdict::from_bool(v));
            result.signals_used = vec![signal.to_string()];
            result
        }
        Ok(Reading::Unavailable) => {
            let mut result = CheckResult::new(Capability::UsbDebugging, Verdict::False);
            result.detail = Some("platform has no USB debugging surface".to_string());
            result.signals_used = vec![signal.to_string()];
            result
        }
        Err(err) => utils::probe_failed(Capability::UsbDebugging, signal, &err),
    }
}
