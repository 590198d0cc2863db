//! The capability use case: resolve policy, evaluate, envelope the result.

use anyhow::Context;
use posture_settings::{Overrides, ResolvedConfig};
use posture_signals::DeviceSignals;
use posture_types::{
    Capability, EvaluationResult, ReportEnvelope, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

/// Input for the capability use case.
pub struct CheckInput<'a> {
    /// Requested capability ID (e.g. `device.screen_lock`).
    pub capability: &'a str,
    /// Config file contents (empty string if not found; defaults apply).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Signal source to evaluate against.
    pub signals: &'a dyn DeviceSignals,
}

/// Output from the capability use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub envelope: ReportEnvelope,
    pub resolved_config: ResolvedConfig,
}

/// Run one capability: parse config, resolve policy, evaluate, envelope.
///
/// An unrecognized capability ID is the only device-independent hard
/// failure; probe trouble surfaces as `indeterminate` verdicts inside the
/// envelope instead.
pub fn run_capability(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let capability: Capability = input.capability.parse()?;

    let cfg = if input.config_text.trim().is_empty() {
        posture_settings::PostureConfigV1::default()
    } else {
        posture_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved = posture_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let result = posture_domain::evaluate(capability, input.signals, &resolved.effective);

    let finished_at = OffsetDateTime::now_utc();

    Ok(CheckOutput {
        envelope: ReportEnvelope {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "posture".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            started_at,
            finished_at,
            result,
        },
        resolved_config: resolved,
    })
}

/// Map an evaluation to an exit code: 0 = favorable or indeterminate,
/// 2 = unfavorable posture.
pub fn verdict_exit_code(result: &EvaluationResult) -> i32 {
    let verdict = match result {
        EvaluationResult::Check(check) => posture_domain::report::contribution(check),
        EvaluationResult::Report(report) => report.summary,
    };
    match verdict {
        Verdict::False => 2,
        Verdict::True | Verdict::Indeterminate => 0,
    }
}
