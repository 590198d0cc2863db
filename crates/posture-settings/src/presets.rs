use camino::Utf8PathBuf;
use posture_domain::policy::{CheckPolicy, EffectiveConfig};
use posture_types::{ids, DangerousPermission};
use std::collections::BTreeMap;

/// Preset profiles are opinionated platform defaults.
///
/// Keep these small and readable. Anything policy-specific belongs in the
/// integrating application's config file.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "quick" => quick_profile(),
        // default
        _ => android_profile(),
    }
}

fn android_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "android".to_string(),
        root_markers: android_root_markers(),
        trusted_package: "com.google.android.gms".to_string(),
        trusted_min_version: 10,
        dangerous_permissions: android_dangerous_permissions(),
        probe_timeout_ms: Some(2_000),
        checks: default_checks(),
    }
}

/// `quick` skips the package-manager walk, which dominates probe latency on
/// devices with many installed apps.
fn quick_profile() -> EffectiveConfig {
    let mut cfg = android_profile();
    cfg.profile = "quick".to_string();
    cfg.checks.insert(
        ids::CAP_DANGEROUS_PERMISSIONS.to_string(),
        CheckPolicy::disabled(),
    );
    cfg
}

fn default_checks() -> BTreeMap<String, CheckPolicy> {
    use posture_types::ids::*;
    let mut m = BTreeMap::new();
    for id in [
        CAP_DEVICE_COMPROMISED,
        CAP_SCREEN_LOCK,
        CAP_ENCRYPTION,
        CAP_DEVELOPER_OPTIONS,
        CAP_USB_DEBUGGING,
        CAP_TRUSTED_SERVICES,
        CAP_DANGEROUS_PERMISSIONS,
        CAP_SECURITY_PATCH_LEVEL,
        CAP_OS_VERSION,
    ] {
        m.insert(id.to_string(), CheckPolicy::enabled());
    }
    m
}

/// Well-known su binary locations plus Magisk artifacts.
fn android_root_markers() -> Vec<Utf8PathBuf> {
    [
        "/system/app/Superuser.apk",
        "/sbin/su",
        "/system/bin/su",
        "/system/xbin/su",
        "/data/local/xbin/su",
        "/data/local/bin/su",
        "/system/sd/xbin/su",
        "/system/bin/failsafe/su",
        "/data/local/su",
        "/su/bin/su",
        "/data/adb/magisk",
        "/sbin/.magisk",
        "/cache/.disable_magisk",
        "/dev/.magisk.unblock",
    ]
    .into_iter()
    .map(Utf8PathBuf::from)
    .collect()
}

/// Android `dangerous`-protection-level permissions, bucketed into the
/// closed taxonomy.
fn android_dangerous_permissions() -> BTreeMap<String, DangerousPermission> {
    use DangerousPermission::*;
    let entries: [(&str, DangerousPermission); 19] = [
        ("android.permission.ACCESS_FINE_LOCATION", Location),
        ("android.permission.ACCESS_COARSE_LOCATION", Location),
        ("android.permission.ACCESS_BACKGROUND_LOCATION", Location),
        ("android.permission.READ_CONTACTS", Contacts),
        ("android.permission.WRITE_CONTACTS", Contacts),
        ("android.permission.GET_ACCOUNTS", Contacts),
        ("android.permission.READ_CALENDAR", Calendar),
        ("android.permission.WRITE_CALENDAR", Calendar),
        ("android.permission.CAMERA", Camera),
        ("android.permission.RECORD_AUDIO", Microphone),
        ("android.permission.READ_SMS", Sms),
        ("android.permission.SEND_SMS", Sms),
        ("android.permission.RECEIVE_SMS", Sms),
        ("android.permission.READ_PHONE_STATE", Phone),
        ("android.permission.CALL_PHONE", Phone),
        ("android.permission.READ_CALL_LOG", Phone),
        ("android.permission.READ_EXTERNAL_STORAGE", Storage),
        ("android.permission.WRITE_EXTERNAL_STORAGE", Storage),
        ("android.permission.BODY_SENSORS", Sensors),
    ];
    entries
        .into_iter()
        .map(|(raw, category)| (raw.to_string(), category))
        .collect()
}
