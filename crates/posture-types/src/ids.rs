//! Stable identifiers for capabilities and signals.
//!
//! A capability ID is a dotted namespace. A signal ID is a short snake_case
//! name recorded in `CheckResult.signals_used` for auditability.

// Capabilities
pub const CAP_DEVICE_COMPROMISED: &str = "device.compromised";
pub const CAP_SCREEN_LOCK: &str = "device.screen_lock";
pub const CAP_ENCRYPTION: &str = "device.encryption";
pub const CAP_DEVELOPER_OPTIONS: &str = "device.developer_options";
pub const CAP_USB_DEBUGGING: &str = "device.usb_debugging";
pub const CAP_TRUSTED_SERVICES: &str = "device.trusted_services";
pub const CAP_DANGEROUS_PERMISSIONS: &str = "app.dangerous_permissions";
pub const CAP_SECURITY_PATCH_LEVEL: &str = "os.security_patch_level";
pub const CAP_OS_VERSION: &str = "os.version";
pub const CAP_SECURITY_INFO: &str = "report.security_info";

// Signals
pub const SIGNAL_ROOT_MARKERS: &str = "root_markers";
pub const SIGNAL_SCREEN_LOCK: &str = "screen_lock";
pub const SIGNAL_ENCRYPTION_STATE: &str = "encryption_state";
pub const SIGNAL_DEVELOPER_OPTIONS: &str = "developer_options";
pub const SIGNAL_USB_DEBUGGING: &str = "usb_debugging";
pub const SIGNAL_TRUSTED_SERVICE: &str = "trusted_service";
pub const SIGNAL_INSTALLED_PACKAGES: &str = "installed_packages";
pub const SIGNAL_OS_RELEASE: &str = "os_release";
