//! The report assembler: nine check results in, one `SecurityReport` out.

use posture_types::{Capability, CheckResult, Polarity, SecurityReport, Verdict};

/// Assemble the aggregate report. A check that is `indeterminate` never
/// aborts assembly; the caller still learns the other verdicts.
pub fn assemble(results: Vec<CheckResult>) -> SecurityReport {
    let mut report = SecurityReport {
        summary: Verdict::True,
        compromised: None,
        screen_lock: None,
        encryption: None,
        developer_options: None,
        usb_debugging: None,
        trusted_services: None,
        dangerous_permissions: None,
        security_patch_level: None,
        os_version: None,
    };

    for result in results {
        match result.capability {
            Capability::DeviceCompromised => report.compromised = Some(result),
            Capability::ScreenLock => report.screen_lock = Some(result),
            Capability::Encryption => report.encryption = Some(result),
            Capability::DeveloperOptions => report.developer_options = Some(result),
            Capability::UsbDebugging => report.usb_debugging = Some(result),
            Capability::TrustedServices => report.trusted_services = Some(result),
            Capability::DangerousPermissions => report.dangerous_permissions = Some(result),
            Capability::SecurityPatchLevel => report.security_patch_level = Some(result),
            Capability::OsVersion => report.os_version = Some(result),
            Capability::SecurityInfo => {}
        }
    }

    report.summary = summarize(report.checks());
    report
}

/// Normalize one check's verdict to its posture favorability.
pub fn contribution(result: &CheckResult) -> Verdict {
    match (result.capability.polarity(), result.verdict) {
        (_, Verdict::Indeterminate) => Verdict::Indeterminate,
        (Polarity::Informational, _) => Verdict::True,
        (Polarity::FavorableWhenTrue, Verdict::True)
        | (Polarity::FavorableWhenFalse, Verdict::False) => Verdict::True,
        (Polarity::FavorableWhenTrue, Verdict::False)
        | (Polarity::FavorableWhenFalse, Verdict::True) => Verdict::False,
    }
}

/// Summary rule: `false` beats `indeterminate` beats `true`.
fn summarize<'a>(checks: impl Iterator<Item = &'a CheckResult>) -> Verdict {
    let mut summary = Verdict::True;
    for check in checks {
        match contribution(check) {
            Verdict::False => return Verdict::False,
            Verdict::Indeterminate => summary = Verdict::Indeterminate,
            Verdict::True => {}
        }
    }
    summary
}
