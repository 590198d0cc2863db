//! Render use cases: JSON and markdown from in-memory envelopes.

use posture_types::{CheckResult, EvaluationResult, ReportEnvelope, Verdict};

/// Canonical JSON form: pretty-printed with a trailing newline.
pub fn serialize_report(envelope: &ReportEnvelope) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(envelope)?;
    out.push('\n');
    Ok(out)
}

pub fn render_markdown(envelope: &ReportEnvelope) -> String {
    let mut out = String::new();

    out.push_str("# Posture report\n\n");

    match &envelope.result {
        EvaluationResult::Check(check) => {
            out.push_str(&format!(
                "- Capability: `{}`\n- Verdict: **{}**\n\n",
                check.capability,
                verdict_label(check.verdict)
            ));
            out.push_str("| Capability | Verdict | Detail |\n");
            out.push_str("| --- | --- | --- |\n");
            out.push_str(&check_row(check));
        }
        EvaluationResult::Report(report) => {
            out.push_str(&format!(
                "- Summary: **{}**\n\n",
                verdict_label(report.summary)
            ));
            out.push_str("| Capability | Verdict | Detail |\n");
            out.push_str("| --- | --- | --- |\n");
            for check in report.checks() {
                out.push_str(&check_row(check));
            }
        }
    }

    out
}

fn check_row(check: &CheckResult) -> String {
    format!(
        "| `{}` | {} | {} |\n",
        check.capability,
        verdict_label(check.verdict),
        check.detail.as_deref().unwrap_or("")
    )
}

fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::True => "true",
        Verdict::False => "false",
        Verdict::Indeterminate => "indeterminate",
    }
}
