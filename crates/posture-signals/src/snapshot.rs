//! Replayable device-state snapshots.
//!
//! A snapshot is a recorded view of the raw signals, deserialized from TOML.
//! A field left out of the snapshot was never recorded and reads as
//! `Unavailable`; a field recorded as empty or negative is a well-defined
//! negative answer. This keeps forced-absence scenarios (emulators,
//! unsupported builds) distinguishable from a genuinely clean recording.

use crate::DeviceSignals;
use camino::Utf8PathBuf;
use posture_types::{
    EncryptionState, OsRelease, PackageGrants, Reading, SignalResult, TrustedService,
};
use serde::{Deserialize, Serialize};

/// Recorded answer of the trust-service probe.
///
/// In TOML either a full service table or `{ resolved = false }` for a
/// recording where the package manager answered that the service is not
/// installed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrustRecord {
    Service(TrustedService),
    Unresolved { resolved: bool },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticSignals {
    /// Paths that existed in the snapshot's filesystem view. `None` means
    /// the marker scan was never recorded; `Some(vec![])` means it ran and
    /// found nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub present_paths: Option<Vec<Utf8PathBuf>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_lock_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_state: Option<EncryptionState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_options_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usb_debugging_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trusted_service: Option<TrustRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installed_packages: Option<Vec<PackageGrants>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_release: Option<OsRelease>,
}

impl StaticSignals {
    pub fn parse_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

fn reading<T: Clone>(field: &Option<T>) -> SignalResult<T> {
    Ok(match field {
        Some(v) => Reading::Value(v.clone()),
        None => Reading::Unavailable,
    })
}

impl DeviceSignals for StaticSignals {
    fn root_markers(&self, markers: &[Utf8PathBuf]) -> SignalResult<Vec<Utf8PathBuf>> {
        Ok(match &self.present_paths {
            Some(present) => Reading::Value(
                markers
                    .iter()
                    .filter(|m| present.contains(m))
                    .cloned()
                    .collect(),
            ),
            None => Reading::Unavailable,
        })
    }

    fn screen_lock_enabled(&self) -> SignalResult<bool> {
        reading(&self.screen_lock_enabled)
    }

    fn encryption_state(&self) -> SignalResult<EncryptionState> {
        reading(&self.encryption_state)
    }

    fn developer_options_enabled(&self) -> SignalResult<bool> {
        reading(&self.developer_options_enabled)
    }

    fn usb_debugging_enabled(&self) -> SignalResult<bool> {
        reading(&self.usb_debugging_enabled)
    }

    fn trusted_service(&self, package: &str) -> SignalResult<Option<TrustedService>> {
        Ok(match &self.trusted_service {
            None => Reading::Unavailable,
            Some(TrustRecord::Unresolved { .. }) => Reading::Value(None),
            Some(TrustRecord::Service(ts)) if ts.package == package => {
                Reading::Value(Some(ts.clone()))
            }
            // Recorded a different package; this one did not resolve.
            Some(TrustRecord::Service(_)) => Reading::Value(None),
        })
    }

    fn installed_packages(&self) -> SignalResult<Vec<PackageGrants>> {
        reading(&self.installed_packages)
    }

    fn os_release(&self) -> SignalResult<OsRelease> {
        reading(&self.os_release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_reads_unavailable() {
        let snap = StaticSignals::parse_toml("").expect("empty snapshot");
        assert_eq!(snap.screen_lock_enabled().expect("probe"), Reading::Unavailable);
        assert_eq!(snap.encryption_state().expect("probe"), Reading::Unavailable);
        // Unrecorded scans are not the same as clean scans.
        let marker = vec![Utf8PathBuf::from("/sbin/su")];
        assert_eq!(snap.root_markers(&marker).expect("probe"), Reading::Unavailable);
        assert_eq!(
            snap.trusted_service("com.google.android.gms").expect("probe"),
            Reading::Unavailable
        );
    }

    #[test]
    fn recorded_absence_is_a_negative_answer() {
        let text = r#"
present_paths = []

[trusted_service]
resolved = false
"#;
        let snap = StaticSignals::parse_toml(text).expect("parse snapshot");
        let marker = vec![Utf8PathBuf::from("/sbin/su")];
        assert_eq!(
            snap.root_markers(&marker).expect("probe"),
            Reading::Value(vec![])
        );
        assert_eq!(
            snap.trusted_service("com.google.android.gms").expect("probe"),
            Reading::Value(None)
        );
    }

    #[test]
    fn snapshot_round_trips_from_toml() {
        let text = r#"
present_paths = ["/system/xbin/su"]
screen_lock_enabled = true
encryption_state = "encrypted"

[trusted_service]
package = "com.google.android.gms"
version = 12
integrity_ok = true

[os_release]
release = "14"
security_patch = "2025-01-01"
"#;
        let snap = StaticSignals::parse_toml(text).expect("parse snapshot");

        let markers = vec![
            Utf8PathBuf::from("/system/xbin/su"),
            Utf8PathBuf::from("/sbin/su"),
        ];
        assert_eq!(
            snap.root_markers(&markers).expect("probe"),
            Reading::Value(vec![Utf8PathBuf::from("/system/xbin/su")])
        );
        assert_eq!(
            snap.trusted_service("com.google.android.gms").expect("probe"),
            Reading::Value(Some(TrustedService {
                package: "com.google.android.gms".to_string(),
                version: 12,
                integrity_ok: true,
            }))
        );
        // A different trust package does not resolve.
        assert_eq!(
            snap.trusted_service("org.other.trust").expect("probe"),
            Reading::Value(None)
        );
    }
}
