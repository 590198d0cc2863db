//! Signal probes: narrowly-scoped reads of low-level device state.
//!
//! Each probe queries exactly one OS fact and is independent of every other
//! probe. The `DeviceSignals` trait is the seam between the evaluators and
//! the platform: production code uses [`AndroidSignals`], tests and snapshot
//! replay use [`StaticSignals`].
//!
//! Probes are read-only and safe to abandon mid-flight. They may block
//! (filesystem reads, package-manager queries); callers must not invoke them
//! from a context where blocking is forbidden.

#![forbid(unsafe_code)]

mod android;
mod snapshot;

pub use android::AndroidSignals;
pub use snapshot::{StaticSignals, TrustRecord};

use camino::Utf8PathBuf;
use posture_types::{
    EncryptionState, OsRelease, PackageGrants, SignalResult, TrustedService,
};

/// One method per probe. All probes introspect current device state only;
/// the two configured inputs (marker list, trust package) are policy, not
/// device state, and are threaded through by the evaluators.
pub trait DeviceSignals: Send + Sync {
    /// Returns the subset of `markers` that exist on the device filesystem.
    /// A missing path is a normal negative, not an error.
    fn root_markers(&self, markers: &[Utf8PathBuf]) -> SignalResult<Vec<Utf8PathBuf>>;

    /// Whether a passcode/biometric lock is configured.
    fn screen_lock_enabled(&self) -> SignalResult<bool>;

    /// Full-disk/file-based encryption state.
    fn encryption_state(&self) -> SignalResult<EncryptionState>;

    /// Whether the developer-settings surface is enabled.
    fn developer_options_enabled(&self) -> SignalResult<bool>;

    /// Whether USB/ADB debugging is enabled.
    fn usb_debugging_enabled(&self) -> SignalResult<bool>;

    /// Resolve the platform's app-verification/trust service.
    /// `Value(None)` means the probe answered and the service is not
    /// installed; `Unavailable` means the probe surface itself is missing.
    fn trusted_service(&self, package: &str) -> SignalResult<Option<TrustedService>>;

    /// Installed applications with their granted raw permission names.
    fn installed_packages(&self) -> SignalResult<Vec<PackageGrants>>;

    /// OS release and security patch identifiers.
    fn os_release(&self) -> SignalResult<OsRelease>;
}
