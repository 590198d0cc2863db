//! Programmable fake signal source for evaluator tests.

use crate::policy::EffectiveConfig;
use camino::Utf8PathBuf;
use posture_signals::DeviceSignals;
use posture_types::{
    DangerousPermission, EncryptionState, OsRelease, PackageGrants, ProbeError, ProbeErrorKind,
    Reading, SignalResult, TrustedService,
};
use std::collections::BTreeMap;

pub(crate) fn probe_error(signal: &str) -> ProbeError {
    ProbeError::new(signal, ProbeErrorKind::Io, "injected failure")
}

/// Every signal outcome is a plain field, returned verbatim. The configured
/// marker list and trust package are ignored; tests control the readings.
pub(crate) struct FakeSignals {
    pub root_markers: SignalResult<Vec<Utf8PathBuf>>,
    pub screen_lock: SignalResult<bool>,
    pub encryption: SignalResult<EncryptionState>,
    pub developer_options: SignalResult<bool>,
    pub usb_debugging: SignalResult<bool>,
    pub trusted_service: SignalResult<Option<TrustedService>>,
    pub installed_packages: SignalResult<Vec<PackageGrants>>,
    pub os_release: SignalResult<OsRelease>,
}

impl Default for FakeSignals {
    fn default() -> Self {
        Self {
            root_markers: Ok(Reading::Unavailable),
            screen_lock: Ok(Reading::Unavailable),
            encryption: Ok(Reading::Unavailable),
            developer_options: Ok(Reading::Unavailable),
            usb_debugging: Ok(Reading::Unavailable),
            trusted_service: Ok(Reading::Unavailable),
            installed_packages: Ok(Reading::Unavailable),
            os_release: Ok(Reading::Unavailable),
        }
    }
}

impl FakeSignals {
    /// A healthy device: no markers, lock on, encrypted, debug surfaces off,
    /// trust service intact at v12, nothing dangerous installed.
    pub fn clean_device() -> Self {
        Self {
            root_markers: Ok(Reading::Value(Vec::new())),
            screen_lock: Ok(Reading::Value(true)),
            encryption: Ok(Reading::Value(EncryptionState::Encrypted)),
            developer_options: Ok(Reading::Value(false)),
            usb_debugging: Ok(Reading::Value(false)),
            trusted_service: Ok(Reading::Value(Some(TrustedService {
                package: "com.google.android.gms".to_string(),
                version: 12,
                integrity_ok: true,
            }))),
            installed_packages: Ok(Reading::Value(Vec::new())),
            os_release: Ok(Reading::Value(OsRelease {
                release: "14".to_string(),
                security_patch: Some("2025-01-01".to_string()),
            })),
        }
    }
}

impl DeviceSignals for FakeSignals {
    fn root_markers(&self, _markers: &[Utf8PathBuf]) -> SignalResult<Vec<Utf8PathBuf>> {
        self.root_markers.clone()
    }

    fn screen_lock_enabled(&self) -> SignalResult<bool> {
        self.screen_lock.clone()
    }

    fn encryption_state(&self) -> SignalResult<EncryptionState> {
        self.encryption.clone()
    }

    fn developer_options_enabled(&self) -> SignalResult<bool> {
        self.developer_options.clone()
    }

    fn usb_debugging_enabled(&self) -> SignalResult<bool> {
        self.usb_debugging.clone()
    }

    fn trusted_service(&self, _package: &str) -> SignalResult<Option<TrustedService>> {
        self.trusted_service.clone()
    }

    fn installed_packages(&self) -> SignalResult<Vec<PackageGrants>> {
        self.installed_packages.clone()
    }

    fn os_release(&self) -> SignalResult<OsRelease> {
        self.os_release.clone()
    }
}

pub(crate) fn taxonomy() -> BTreeMap<String, DangerousPermission> {
    let mut map = BTreeMap::new();
    map.insert(
        "android.permission.ACCESS_FINE_LOCATION".to_string(),
        DangerousPermission::Location,
    );
    map.insert(
        "android.permission.READ_CONTACTS".to_string(),
        DangerousPermission::Contacts,
    );
    map.insert(
        "android.permission.CAMERA".to_string(),
        DangerousPermission::Camera,
    );
    map.insert(
        "android.permission.RECORD_AUDIO".to_string(),
        DangerousPermission::Microphone,
    );
    map.insert(
        "android.permission.READ_SMS".to_string(),
        DangerousPermission::Sms,
    );
    map.insert(
        "android.permission.READ_EXTERNAL_STORAGE".to_string(),
        DangerousPermission::Storage,
    );
    map
}

pub(crate) fn base_config() -> EffectiveConfig {
    EffectiveConfig {
        profile: "test".to_string(),
        root_markers: vec![
            Utf8PathBuf::from("/system/app/Superuser.apk"),
            Utf8PathBuf::from("/sbin/su"),
            Utf8PathBuf::from("/system/bin/su"),
            Utf8PathBuf::from("/system/xbin/su"),
        ],
        trusted_package: "com.google.android.gms".to_string(),
        trusted_min_version: 10,
        dangerous_permissions: taxonomy(),
        probe_timeout_ms: None,
        checks: BTreeMap::new(),
    }
}
