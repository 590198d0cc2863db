//! `device.screen_lock`: direct passthrough of the lock-screen setting.

use crate::checks::utils;
use crate::policy::EffectiveConfig;
use posture_signals::DeviceSignals;
use posture_types::{ids, Capability, CheckResult};

pub fn run(signals: &dyn DeviceSignals, _cfg: &EffectiveConfig) -> CheckResult {
    utils::passthrough_bool(
        Capability::ScreenLock,
        ids::SIGNAL_SCREEN_LOCK,
        signals.screen_lock_enabled(),
    )
}
