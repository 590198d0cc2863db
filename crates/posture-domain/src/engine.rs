use crate::checks;
use crate::policy::EffectiveConfig;
use crate::report;
use posture_signals::DeviceSignals;
use posture_types::{Capability, CheckResult, EvaluationResult, SecurityReport};
use rayon::prelude::*;

/// Evaluate one capability: a single check result, or the assembled report
/// for `report.security_info`.
pub fn evaluate(
    capability: Capability,
    signals: &dyn DeviceSignals,
    cfg: &EffectiveConfig,
) -> EvaluationResult {
    match checks::run(capability, signals, cfg) {
        Some(result) => EvaluationResult::Check(result),
        None => EvaluationResult::Report(evaluate_report(signals, cfg)),
    }
}

/// Run every enabled evaluator and assemble the aggregate report.
///
/// One parallel task per capability: total latency is bounded by the slowest
/// probe rather than the sum of all probes. Probes are read-only, so
/// abandoned tasks have no side effects.
pub fn evaluate_report(signals: &dyn DeviceSignals, cfg: &EffectiveConfig) -> SecurityReport {
    let results: Vec<CheckResult> = Capability::INDIVIDUAL
        .into_par_iter()
        .filter(|cap| cfg.check_enabled(*cap))
        .filter_map(|cap| checks::run(cap, signals, cfg))
        .collect();
    report::assemble(results)
}
