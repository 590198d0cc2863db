//! Live probe surface for Android-family devices.
//!
//! Everything goes through the platform command surface (`getprop`,
//! `settings`, `locksettings`, `pm`, `dumpsys`). A host without those
//! commands degrades to `Unavailable` on every probe, which the evaluators
//! report as `indeterminate` rather than guessing.

use crate::DeviceSignals;
use camino::Utf8PathBuf;
use posture_types::{
    ids, EncryptionState, OsRelease, PackageGrants, ProbeError, ProbeErrorKind, Reading,
    SignalResult, TrustedService,
};
use std::io::{self, Read as _};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Live Android probe implementation.
#[derive(Clone, Debug, Default)]
pub struct AndroidSignals {
    timeout: Option<Duration>,
}

impl AndroidSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-command deadline. On expiry the child is killed and the probe
    /// resolves to a `Timeout` error (then `indeterminate`), so one hung
    /// command cannot stall a whole report.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    /// Run a platform command and capture trimmed stdout.
    ///
    /// A command that does not exist on this host is a legitimately absent
    /// signal (`Unavailable`); anything else unexpected is a `ProbeError`.
    fn run(&self, signal: &str, program: &str, args: &[&str]) -> SignalResult<String> {
        let mut child = match Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Reading::Unavailable),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                return Err(ProbeError::new(
                    signal,
                    ProbeErrorKind::PermissionDenied,
                    e.to_string(),
                ));
            }
            Err(e) => return Err(ProbeError::new(signal, ProbeErrorKind::Io, e.to_string())),
        };

        // Drain stdout on a dedicated thread. A chatty command (dumpsys can
        // emit hundreds of KiB) would otherwise fill the pipe and never
        // exit while the parent polls for its status.
        let reader = child.stdout.take().map(|mut out| {
            std::thread::spawn(move || {
                let mut buf = String::new();
                out.read_to_string(&mut buf).map(|_| buf)
            })
        });

        let deadline = self.timeout.map(|t| Instant::now() + t);
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    if deadline.is_some_and(|d| Instant::now() >= d) {
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(ProbeError::new(
                            signal,
                            ProbeErrorKind::Timeout,
                            format!("'{program}' exceeded the probe timeout"),
                        ));
                    }
                    std::thread::sleep(Duration::from_millis(10));
                }
                Err(e) => {
                    return Err(ProbeError::new(signal, ProbeErrorKind::Io, e.to_string()));
                }
            }
        };

        let stdout = match reader {
            Some(handle) => match handle.join() {
                Ok(Ok(buf)) => buf,
                Ok(Err(e)) => {
                    return Err(ProbeError::new(signal, ProbeErrorKind::Io, e.to_string()));
                }
                Err(_) => {
                    return Err(ProbeError::new(
                        signal,
                        ProbeErrorKind::Io,
                        "stdout reader panicked",
                    ));
                }
            },
            None => String::new(),
        };

        if !status.success() {
            return Err(ProbeError::new(
                signal,
                ProbeErrorKind::Io,
                format!("'{program}' exited with {status}"),
            ));
        }

        Ok(Reading::Value(stdout.trim().to_string()))
    }

    /// Read a global setting. `settings` prints `null` for unknown keys.
    fn global_setting(&self, signal: &str, key: &str) -> SignalResult<bool> {
        match self.run(signal, "settings", &["get", "global", key])? {
            Reading::Unavailable => Ok(Reading::Unavailable),
            Reading::Value(v) => match v.as_str() {
                "1" => Ok(Reading::Value(true)),
                "0" => Ok(Reading::Value(false)),
                "" | "null" => Ok(Reading::Unavailable),
                other => Err(ProbeError::new(
                    signal,
                    ProbeErrorKind::Unparseable,
                    format!("unexpected setting value '{other}' for {key}"),
                )),
            },
        }
    }

    fn getprop(&self, signal: &str, key: &str) -> SignalResult<String> {
        match self.run(signal, "getprop", &[key])? {
            Reading::Unavailable => Ok(Reading::Unavailable),
            Reading::Value(v) if v.is_empty() => Ok(Reading::Unavailable),
            Reading::Value(v) => Ok(Reading::Value(v)),
        }
    }
}

impl DeviceSignals for AndroidSignals {
    fn root_markers(&self, markers: &[Utf8PathBuf]) -> SignalResult<Vec<Utf8PathBuf>> {
        let signal = ids::SIGNAL_ROOT_MARKERS;
        let mut found = Vec::new();
        for marker in markers {
            match marker.as_std_path().try_exists() {
                Ok(true) => found.push(marker.clone()),
                Ok(false) => {}
                Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                    return Err(ProbeError::new(
                        signal,
                        ProbeErrorKind::PermissionDenied,
                        format!("{marker}: {e}"),
                    ));
                }
                Err(e) => {
                    return Err(ProbeError::new(
                        signal,
                        ProbeErrorKind::Io,
                        format!("{marker}: {e}"),
                    ));
                }
            }
        }

        // A su binary on PATH is a marker even when outside the configured list.
        if let Reading::Value(path) = self.run(signal, "which", &["su"])? {
            if !path.is_empty() {
                let path = Utf8PathBuf::from(path);
                if !found.contains(&path) {
                    found.push(path);
                }
            }
        }

        Ok(Reading::Value(found))
    }

    fn screen_lock_enabled(&self) -> SignalResult<bool> {
        let signal = ids::SIGNAL_SCREEN_LOCK;
        match self.run(signal, "locksettings", &["get-disabled"])? {
            Reading::Unavailable => Ok(Reading::Unavailable),
            // locksettings reports whether the lock screen is *disabled*.
            Reading::Value(v) => match v.as_str() {
                "true" => Ok(Reading::Value(false)),
                "false" => Ok(Reading::Value(true)),
                other => Err(ProbeError::new(
                    signal,
                    ProbeErrorKind::Unparseable,
                    format!("unexpected locksettings output '{other}'"),
                )),
            },
        }
    }

    fn encryption_state(&self) -> SignalResult<EncryptionState> {
        let signal = ids::SIGNAL_ENCRYPTION_STATE;
        match self.getprop(signal, "ro.crypto.state")? {
            Reading::Unavailable => Ok(Reading::Unavailable),
            Reading::Value(v) => match v.as_str() {
                "encrypted" => Ok(Reading::Value(EncryptionState::Encrypted)),
                "unencrypted" => Ok(Reading::Value(EncryptionState::NotEncrypted)),
                "unsupported" => Ok(Reading::Value(EncryptionState::Unsupported)),
                other => Err(ProbeError::new(
                    signal,
                    ProbeErrorKind::Unparseable,
                    format!("unexpected ro.crypto.state '{other}'"),
                )),
            },
        }
    }

    fn developer_options_enabled(&self) -> SignalResult<bool> {
        self.global_setting(ids::SIGNAL_DEVELOPER_OPTIONS, "development_settings_enabled")
    }

    fn usb_debugging_enabled(&self) -> SignalResult<bool> {
        self.global_setting(ids::SIGNAL_USB_DEBUGGING, "adb_enabled")
    }

    fn trusted_service(&self, package: &str) -> SignalResult<Option<TrustedService>> {
        let signal = ids::SIGNAL_TRUSTED_SERVICE;
        let dump = match self.run(signal, "dumpsys", &["package", package])? {
            Reading::Unavailable => return Ok(Reading::Unavailable),
            Reading::Value(v) => v,
        };
        // The package manager answered and the service is not installed.
        // Distinct from a missing dumpsys, which is an absent probe surface.
        if dump.is_empty() || dump.contains("Unable to find package") {
            return Ok(Reading::Value(None));
        }

        let version = parse_version_code(&dump).ok_or_else(|| {
            ProbeError::new(
                signal,
                ProbeErrorKind::Unparseable,
                format!("no versionCode in dumpsys output for {package}"),
            )
        })?;

        // A trust service not installed in the system partition has a broken
        // provenance chain.
        let integrity_ok = dump
            .lines()
            .any(|l| l.trim_start().starts_with("flags=") && l.contains("SYSTEM"));

        Ok(Reading::Value(Some(TrustedService {
            package: package.to_string(),
            version,
            integrity_ok,
        })))
    }

    fn installed_packages(&self) -> SignalResult<Vec<PackageGrants>> {
        let signal = ids::SIGNAL_INSTALLED_PACKAGES;
        let listing = match self.run(signal, "pm", &["list", "packages"])? {
            Reading::Unavailable => return Ok(Reading::Unavailable),
            Reading::Value(v) => v,
        };

        let mut packages = Vec::new();
        for line in listing.lines() {
            let Some(app_id) = line.trim().strip_prefix("package:") else {
                continue;
            };
            let granted = match self.run(signal, "dumpsys", &["package", app_id])? {
                Reading::Unavailable => Vec::new(),
                Reading::Value(dump) => parse_granted_permissions(&dump),
            };
            packages.push(PackageGrants {
                app_id: app_id.to_string(),
                app_name: app_id.to_string(),
                granted,
            });
        }

        Ok(Reading::Value(packages))
    }

    fn os_release(&self) -> SignalResult<OsRelease> {
        let signal = ids::SIGNAL_OS_RELEASE;
        let release = match self.getprop(signal, "ro.build.version.release")? {
            Reading::Unavailable => return Ok(Reading::Unavailable),
            Reading::Value(v) => v,
        };
        let security_patch = self
            .getprop(signal, "ro.build.version.security_patch")?
            .value();
        Ok(Reading::Value(OsRelease {
            release,
            security_patch,
        }))
    }
}

/// Extract `versionCode=NNN` from a `dumpsys package` dump.
fn parse_version_code(dump: &str) -> Option<u64> {
    for line in dump.lines() {
        let line = line.trim_start();
        if let Some(rest) = line.strip_prefix("versionCode=") {
            let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            return digits.parse().ok();
        }
    }
    None
}

/// Extract permission names with `granted=true` from a `dumpsys package` dump.
fn parse_granted_permissions(dump: &str) -> Vec<String> {
    let mut granted = Vec::new();
    for line in dump.lines() {
        let line = line.trim();
        let Some((name, rest)) = line.split_once(':') else {
            continue;
        };
        if rest.contains("granted=true") && name.contains('.') && !name.contains(' ') {
            granted.push(name.to_string());
        }
    }
    granted
}
