use crate::policy::EffectiveConfig;
use posture_signals::DeviceSignals;
use posture_types::{Capability, CheckResult};

mod compromised;
mod dangerous_permissions;
mod developer_options;
mod encryption;
mod os_version;
mod screen_lock;
mod security_patch;
mod trusted_services;
mod usb_debugging;
mod utils;

#[cfg(test)]
mod tests;

/// Run one individual evaluator. `report.security_info` is not an evaluator;
/// the engine expands it into the other nine.
pub fn run(
    capability: Capability,
    signals: &dyn DeviceSignals,
    cfg: &EffectiveConfig,
) -> Option<CheckResult> {
    let result = match capability {
        Capability::DeviceCompromised => compromised::run(signals, cfg),
        Capability::ScreenLock => screen_lock::run(signals, cfg),
        Capability::Encryption => encryption::run(signals, cfg),
        Capability::DeveloperOptions => developer_options::run(signals, cfg),
        Capability::UsbDebugging => usb_debugging::run(signals, cfg),
        Capability::TrustedServices => trusted_services::run(signals, cfg),
        Capability::DangerousPermissions => dangerous_permissions::run(signals, cfg),
        Capability::SecurityPatchLevel => security_patch::run(signals, cfg),
        Capability::OsVersion => os_version::run(signals, cfg),
        Capability::SecurityInfo => return None,
    };
    Some(result)
}
