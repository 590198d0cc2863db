use super::{
    compromised, dangerous_permissions, developer_options, encryption, os_version, screen_lock,
    security_patch, trusted_services, usb_debugging,
};
use crate::test_support::{base_config, probe_error, FakeSignals};
use camino::Utf8PathBuf;
use posture_types::{
    ids, EncryptionState, OsRelease, PackageGrants, Reading, TrustedService, Verdict,
};

fn trust_v(version: u64, integrity_ok: bool) -> TrustedService {
    TrustedService {
        package: "com.google.android.gms".to_string(),
        version,
        integrity_ok,
    }
}

// ---------------------------------------------------------------------------
// device.compromised
// ---------------------------------------------------------------------------

#[test]
fn compromised_true_for_each_marker_and_any_combination() {
    let cfg = base_config();

    let mut marker_sets: Vec<Vec<Utf8PathBuf>> = cfg
        .root_markers
        .iter()
        .map(|m| vec![m.clone()])
        .collect();
    marker_sets.push(cfg.root_markers.clone());

    for found in marker_sets {
        let mut signals = FakeSignals::clean_device();
        signals.root_markers = Ok(Reading::Value(found.clone()));

        let result = compromised::run(&signals, &cfg);
        assert_eq!(result.verdict, Verdict::True, "markers {found:?}");
        let detail = result.detail.expect("detail cites the marker");
        assert!(detail.contains(found[0].as_str()), "detail: {detail}");
    }
}

#[test]
fn compromised_false_only_when_markers_absent_and_trust_clean() {
    let cfg = base_config();

    let signals = FakeSignals::clean_device();
    assert_eq!(compromised::run(&signals, &cfg).verdict, Verdict::False);

    // A platform without a trust surface still reads clean.
    let mut signals = FakeSignals::clean_device();
    signals.trusted_service = Ok(Reading::Unavailable);
    assert_eq!(compromised::run(&signals, &cfg).verdict, Verdict::False);

    // So does one where the service is answered as not installed.
    let mut signals = FakeSignals::clean_device();
    signals.trusted_service = Ok(Reading::Value(None));
    assert_eq!(compromised::run(&signals, &cfg).verdict, Verdict::False);
}

#[test]
fn compromised_true_when_trust_chain_tampered() {
    let cfg = base_config();
    let mut signals = FakeSignals::clean_device();
    signals.trusted_service = Ok(Reading::Value(Some(trust_v(12, false))));

    let result = compromised::run(&signals, &cfg);
    assert_eq!(result.verdict, Verdict::True);
    assert!(result.detail.expect("detail").contains("integrity"));
}

#[test]
fn compromised_indeterminate_when_evidence_is_missing() {
    let cfg = base_config();

    // Marker scan failed: a clean trust probe cannot rule out compromise.
    let mut signals = FakeSignals::clean_device();
    signals.root_markers = Err(probe_error(ids::SIGNAL_ROOT_MARKERS));
    assert_eq!(
        compromised::run(&signals, &cfg).verdict,
        Verdict::Indeterminate
    );

    // Both probes failed.
    let mut signals = FakeSignals::clean_device();
    signals.root_markers = Err(probe_error(ids::SIGNAL_ROOT_MARKERS));
    signals.trusted_service = Err(probe_error(ids::SIGNAL_TRUSTED_SERVICE));
    assert_eq!(
        compromised::run(&signals, &cfg).verdict,
        Verdict::Indeterminate
    );
}

#[test]
fn compromised_marker_evidence_dominates_trust_probe_failure() {
    let cfg = base_config();
    let mut signals = FakeSignals::clean_device();
    signals.root_markers = Ok(Reading::Value(vec![Utf8PathBuf::from("/sbin/su")]));
    signals.trusted_service = Err(probe_error(ids::SIGNAL_TRUSTED_SERVICE));

    assert_eq!(compromised::run(&signals, &cfg).verdict, Verdict::True);
}

#[test]
fn compromised_records_both_contributing_signals() {
    let cfg = base_config();
    let result = compromised::run(&FakeSignals::clean_device(), &cfg);
    assert_eq!(
        result.signals_used,
        vec![
            ids::SIGNAL_ROOT_MARKERS.to_string(),
            ids::SIGNAL_TRUSTED_SERVICE.to_string()
        ]
    );
}

// ---------------------------------------------------------------------------
// Passthrough checks: absence and failure are indeterminate, never false
// ---------------------------------------------------------------------------

#[test]
fn absent_signals_are_indeterminate_not_false() {
    let cfg = base_config();
    let signals = FakeSignals::default();

    assert_eq!(
        screen_lock::run(&signals, &cfg).verdict,
        Verdict::Indeterminate
    );
    assert_eq!(
        developer_options::run(&signals, &cfg).verdict,
        Verdict::Indeterminate
    );
    assert_eq!(
        encryption::run(&signals, &cfg).verdict,
        Verdict::Indeterminate
    );
    assert_eq!(
        security_patch::run(&signals, &cfg).verdict,
        Verdict::Indeterminate
    );
    assert_eq!(
        os_version::run(&signals, &cfg).verdict,
        Verdict::Indeterminate
    );
    assert_eq!(
        dangerous_permissions::run(&signals, &cfg).verdict,
        Verdict::Indeterminate
    );
}

#[test]
fn absent_usb_debugging_is_a_well_defined_negative() {
    let cfg = base_config();
    let signals = FakeSignals::default();

    let result = usb_debugging::run(&signals, &cfg);
    assert_eq!(result.verdict, Verdict::False);
    assert!(result.detail.expect("detail").contains("no USB debugging"));
}

#[test]
fn failing_probes_are_indeterminate_with_cause_in_detail() {
    let cfg = base_config();
    let mut signals = FakeSignals::clean_device();
    signals.screen_lock = Err(probe_error(ids::SIGNAL_SCREEN_LOCK));
    signals.usb_debugging = Err(probe_error(ids::SIGNAL_USB_DEBUGGING));

    let lock = screen_lock::run(&signals, &cfg);
    assert_eq!(lock.verdict, Verdict::Indeterminate);
    assert!(lock.detail.expect("detail").contains("injected failure"));

    // Unlike legitimate absence, a *failing* USB probe stays indeterminate.
    assert_eq!(
        usb_debugging::run(&signals, &cfg).verdict,
        Verdict::Indeterminate
    );
}

#[test]
fn boolean_passthroughs_report_the_os_value() {
    let cfg = base_config();
    let mut signals = FakeSignals::clean_device();
    signals.developer_options = Ok(Reading::Value(true));
    signals.usb_debugging = Ok(Reading::Value(true));

    assert_eq!(screen_lock::run(&signals, &cfg).verdict, Verdict::True);
    assert_eq!(
        developer_options::run(&signals, &cfg).verdict,
        Verdict::True
    );
    assert_eq!(usb_debugging::run(&signals, &cfg).verdict, Verdict::True);
}

// ---------------------------------------------------------------------------
// device.encryption
// ---------------------------------------------------------------------------

#[test]
fn encryption_state_maps_to_tristate() {
    let cfg = base_config();
    let mut signals = FakeSignals::clean_device();

    assert_eq!(encryption::run(&signals, &cfg).verdict, Verdict::True);

    signals.encryption = Ok(Reading::Value(EncryptionState::NotEncrypted));
    assert_eq!(encryption::run(&signals, &cfg).verdict, Verdict::False);

    signals.encryption = Ok(Reading::Value(EncryptionState::Unsupported));
    let result = encryption::run(&signals, &cfg);
    assert_eq!(result.verdict, Verdict::Indeterminate);
    assert!(result.detail.expect("detail").contains("unsupported"));
}

// ---------------------------------------------------------------------------
// device.trusted_services
// ---------------------------------------------------------------------------

#[test]
fn trusted_service_requires_floor_and_integrity() {
    let cfg = base_config();
    let mut signals = FakeSignals::clean_device();

    signals.trusted_service = Ok(Reading::Value(Some(trust_v(12, true))));
    assert_eq!(trusted_services::run(&signals, &cfg).verdict, Verdict::True);

    signals.trusted_service = Ok(Reading::Value(Some(trust_v(8, true))));
    let below = trusted_services::run(&signals, &cfg);
    assert_eq!(below.verdict, Verdict::False);
    assert!(below.detail.expect("detail").contains("below the required floor"));

    signals.trusted_service = Ok(Reading::Value(Some(trust_v(12, false))));
    assert_eq!(
        trusted_services::run(&signals, &cfg).verdict,
        Verdict::False
    );

    // A service answered as not installed is a plain false.
    signals.trusted_service = Ok(Reading::Value(None));
    assert_eq!(
        trusted_services::run(&signals, &cfg).verdict,
        Verdict::False
    );

    // A missing probe surface never hardens into false.
    signals.trusted_service = Ok(Reading::Unavailable);
    assert_eq!(
        trusted_services::run(&signals, &cfg).verdict,
        Verdict::Indeterminate
    );

    signals.trusted_service = Err(probe_error(ids::SIGNAL_TRUSTED_SERVICE));
    assert_eq!(
        trusted_services::run(&signals, &cfg).verdict,
        Verdict::Indeterminate
    );
}

// ---------------------------------------------------------------------------
// app.dangerous_permissions
// ---------------------------------------------------------------------------

fn package(app_id: &str, granted: &[&str]) -> PackageGrants {
    PackageGrants {
        app_id: app_id.to_string(),
        app_name: app_id.to_string(),
        granted: granted.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn dangerous_scan_returns_exactly_the_intersecting_packages() {
    let cfg = base_config();
    let mut signals = FakeSignals::clean_device();
    signals.installed_packages = Ok(Reading::Value(vec![
        package(
            "com.example.maps",
            &[
                "android.permission.ACCESS_FINE_LOCATION",
                "android.permission.INTERNET",
            ],
        ),
        // Only non-dangerous grants: excluded entirely, not an empty finding.
        package("com.example.clock", &["android.permission.INTERNET"]),
        package(
            "com.example.messenger",
            &[
                "android.permission.READ_SMS",
                "android.permission.CAMERA",
                "com.vendor.permission.UNKNOWN",
            ],
        ),
    ]));

    let result = dangerous_permissions::run(&signals, &cfg);
    assert_eq!(result.verdict, Verdict::True);

    let findings = result.data["findings"].as_array().expect("findings array");
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0]["app_id"], "com.example.maps");
    assert_eq!(
        findings[0]["permissions"],
        serde_json::json!(["location"])
    );
    assert_eq!(findings[1]["app_id"], "com.example.messenger");
    // Categories are ordered, unknown raw permissions are ignored.
    assert_eq!(
        findings[1]["permissions"],
        serde_json::json!(["camera", "sms"])
    );
    assert_eq!(result.data["taxonomy_version"], "1");
}

#[test]
fn dangerous_scan_with_no_findings_is_still_a_successful_check() {
    let cfg = base_config();
    let mut signals = FakeSignals::clean_device();
    signals.installed_packages = Ok(Reading::Value(vec![package(
        "com.example.clock",
        &["android.permission.INTERNET"],
    )]));

    let result = dangerous_permissions::run(&signals, &cfg);
    assert_eq!(result.verdict, Verdict::True);
    assert_eq!(result.data["findings"], serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// os.* checks
// ---------------------------------------------------------------------------

#[test]
fn security_patch_is_extracted_from_the_version_probe() {
    let cfg = base_config();
    let signals = FakeSignals::clean_device();

    let result = security_patch::run(&signals, &cfg);
    assert_eq!(result.verdict, Verdict::True);
    assert_eq!(result.detail.as_deref(), Some("2025-01-01"));
}

#[test]
fn missing_patch_level_is_indeterminate() {
    let cfg = base_config();
    let mut signals = FakeSignals::clean_device();
    signals.os_release = Ok(Reading::Value(OsRelease {
        release: "17.2".to_string(),
        security_patch: None,
    }));

    let result = security_patch::run(&signals, &cfg);
    assert_eq!(result.verdict, Verdict::Indeterminate);
}

#[test]
fn os_version_formats_the_canonical_string() {
    let cfg = base_config();
    let signals = FakeSignals::clean_device();

    let result = os_version::run(&signals, &cfg);
    assert_eq!(result.verdict, Verdict::True);
    assert_eq!(result.detail.as_deref(), Some("14.0"));
    assert_eq!(result.data["raw_release"], "14");
}

#[test]
fn unparseable_release_is_indeterminate() {
    let cfg = base_config();
    let mut signals = FakeSignals::clean_device();
    signals.os_release = Ok(Reading::Value(OsRelease {
        release: "REL".to_string(),
        security_patch: None,
    }));

    let result = os_version::run(&signals, &cfg);
    assert_eq!(result.verdict, Verdict::Indeterminate);
    assert!(result.detail.expect("detail").contains("REL"));

    // A numeric major with garbage after the dot is just as unreadable.
    signals.os_release = Ok(Reading::Value(OsRelease {
        release: "14.x".to_string(),
        security_patch: None,
    }));
    let result = os_version::run(&signals, &cfg);
    assert_eq!(result.verdict, Verdict::Indeterminate);
    assert!(result.detail.expect("detail").contains("14.x"));
}
