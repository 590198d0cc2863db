use assert_cmd::Command;

/// Helper to get a Command for the posture binary.
#[allow(deprecated)]
fn posture_cmd() -> Command {
    Command::cargo_bin("posture").unwrap()
}

#[test]
fn help_works() {
    posture_cmd().arg("--help").assert().success();
}

#[test]
fn capabilities_lists_every_id() {
    let assert = posture_cmd().arg("capabilities").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for id in [
        "device.compromised",
        "device.screen_lock",
        "device.encryption",
        "device.developer_options",
        "device.usb_debugging",
        "device.trusted_services",
        "app.dangerous_permissions",
        "os.security_patch_level",
        "os.version",
        "report.security_info",
    ] {
        assert!(stdout.lines().any(|l| l == id), "missing {id}");
    }
}
