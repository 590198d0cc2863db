use crate::{model::PostureConfigV1, presets};
use anyhow::Context;
use posture_domain::policy::{CheckPolicy, EffectiveConfig};
use posture_types::Capability;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub probe_timeout_ms: Option<u64>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: PostureConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "android".to_string());

    let mut effective = presets::preset(&profile);

    if let Some(markers) = cfg.root_markers {
        effective.root_markers = markers;
    }

    if let Some(ts) = cfg.trusted_service {
        if let Some(package) = ts.package {
            effective.trusted_package = package;
        }
        if let Some(min_version) = ts.min_version {
            effective.trusted_min_version = min_version;
        }
    }

    // File entries override the preset map per raw permission name.
    for (raw, category) in cfg.dangerous_permissions {
        effective.dangerous_permissions.insert(raw, category);
    }

    if let Some(timeout) = overrides.probe_timeout_ms.or(cfg.probe_timeout_ms) {
        effective.probe_timeout_ms = Some(timeout);
    }

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        let capability: Capability = check_id
            .parse()
            .with_context(|| format!("unknown check id in [checks]: {check_id}"))?;
        if capability == Capability::SecurityInfo {
            anyhow::bail!("'{check_id}' is the aggregate and cannot be toggled");
        }
        let entry = effective
            .checks
            .entry(check_id.clone())
            .or_insert_with(CheckPolicy::enabled);
        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
    }

    // The three policy inputs are required: nothing is guessed downstream.
    if effective.root_markers.is_empty() {
        anyhow::bail!("root_markers must not be empty (profile '{}')", effective.profile);
    }
    if effective.trusted_package.is_empty() {
        anyhow::bail!("trusted_service.package must not be empty");
    }
    if effective.dangerous_permissions.is_empty() {
        anyhow::bail!("dangerous_permissions must not be empty");
    }

    Ok(ResolvedConfig { effective })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;
    use posture_types::ids;

    #[test]
    fn empty_config_resolves_to_android_defaults() {
        let resolved =
            resolve_config(PostureConfigV1::default(), Overrides::default()).expect("resolve");
        let cfg = resolved.effective;
        assert_eq!(cfg.profile, "android");
        assert!(cfg.root_markers.iter().any(|m| m.as_str() == "/sbin/su"));
        assert_eq!(cfg.trusted_package, "com.google.android.gms");
        assert!(cfg.check_enabled(Capability::DangerousPermissions));
    }

    #[test]
    fn quick_profile_disables_the_package_scan() {
        let overrides = Overrides {
            profile: Some("quick".to_string()),
            ..Overrides::default()
        };
        let resolved = resolve_config(PostureConfigV1::default(), overrides).expect("resolve");
        assert!(!resolved.effective.check_enabled(Capability::DangerousPermissions));
        assert!(resolved.effective.check_enabled(Capability::DeviceCompromised));
    }

    #[test]
    fn file_config_overlays_the_preset() {
        let cfg = parse_config_toml(
            r#"
profile = "android"
root_markers = ["/opt/jb/marker"]
probe_timeout_ms = 250

[trusted_service]
package = "org.fdroid.verifier"
min_version = 42

[dangerous_permissions]
"org.custom.permission.TRACK" = "location"

[checks."device.usb_debugging"]
enabled = false
"#,
        )
        .expect("parse");

        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        let effective = resolved.effective;
        assert_eq!(effective.root_markers.len(), 1);
        assert_eq!(effective.trusted_package, "org.fdroid.verifier");
        assert_eq!(effective.trusted_min_version, 42);
        assert_eq!(effective.probe_timeout_ms, Some(250));
        assert!(!effective.check_enabled(Capability::UsbDebugging));
        // The custom mapping extends the preset map rather than replacing it.
        assert!(effective
            .dangerous_permissions
            .contains_key("org.custom.permission.TRACK"));
        assert!(effective
            .dangerous_permissions
            .contains_key("android.permission.CAMERA"));
    }

    #[test]
    fn unknown_check_id_is_a_resolution_error() {
        let cfg = parse_config_toml("[checks.\"device.nope\"]\nenabled = false\n").expect("parse");
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("device.nope"));
    }

    #[test]
    fn aggregate_capability_cannot_be_toggled() {
        let cfg = parse_config_toml(&format!(
            "[checks.\"{}\"]\nenabled = false\n",
            ids::CAP_SECURITY_INFO
        ))
        .expect("parse");
        assert!(resolve_config(cfg, Overrides::default()).is_err());
    }

    #[test]
    fn emptied_marker_list_is_rejected() {
        let cfg = parse_config_toml("root_markers = []\n").expect("parse");
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("root_markers"));
    }
}
