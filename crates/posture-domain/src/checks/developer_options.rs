//! `device.developer_options`: direct passthrough of the developer flag.

use crate::checks::utils;
use crate::policy::EffectiveConfig;
use posture_signals::DeviceSignals;
use posture_types::{ids, Capability, CheckResult};

pub fn run(signals: &dyn DeviceSignals, _cfg: &EffectiveConfig) -> CheckResult {
    utils::passthrough_bool(
        Capability::DeveloperOptions,
        ids::SIGNAL_DEVELOPER_OPTIONS,
        signals.developer_options_enabled(),
    )
}
