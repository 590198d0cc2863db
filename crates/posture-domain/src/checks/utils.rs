use posture_types::{Capability, CheckResult, ProbeError, SignalResult, Verdict};
use serde_json::json;

/// Indeterminate result for a probe that failed unexpectedly. The cause is
/// retained for diagnostics, never rethrown.
pub(crate) fn probe_failed(capability: Capability, signal: &str, err: &ProbeError) -> CheckResult {
    CheckResult {
        capability,
        verdict: Verdict::Indeterminate,
        detail: Some(err.to_string()),
        signals_used: vec![signal.to_string()],
        data: json!({
            "probe_error": { "signal": err.signal, "kind": err.kind, "message": err.message },
        }),
    }
}

/// Indeterminate result for a signal the platform legitimately lacks.
pub(crate) fn signal_unavailable(capability: Capability, signal: &str) -> CheckResult {
    CheckResult {
        capability,
        verdict: Verdict::Indeterminate,
        detail: Some(format!("signal '{signal}' is unavailable on this platform")),
        signals_used: vec![signal.to_string()],
        data: serde_json::Value::Null,
    }
}

/// Direct passthrough of a boolean probe: the OS-reported value is the
/// verdict, absence and failure are indeterminate.
pub(crate) fn passthrough_bool(
    capability: Capability,
    signal: &str,
    outcome: SignalResult<bool>,
) -> CheckResult {
    match outcome {
        Ok(posture_types::Reading::Value(v)) => {
            let mut result = CheckResult::new(capability, Verdict::from_bool(v));
            result.signals_used = vec![signal.to_string()];
            result
        }
        Ok(posture_types::Reading::Unavailable) => signal_unavailable(capability, signal),
        Err(err) => probe_failed(capability, signal, &err),
    }
}
