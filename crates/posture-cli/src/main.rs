//! CLI entry point for posture.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `posture-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use posture_app::{render_markdown, run_capability, serialize_report, verdict_exit_code, CheckInput};
use posture_settings::Overrides;
use posture_signals::{AndroidSignals, DeviceSignals, StaticSignals};
use posture_types::{ids, Capability};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "posture",
    version,
    about = "Best-effort device security posture sensor"
)]
struct Cli {
    /// Path to posture config TOML.
    #[arg(long, default_value = "posture.toml")]
    config: Utf8PathBuf,

    /// Override profile (android|quick or custom).
    #[arg(long)]
    profile: Option<String>,

    /// Override per-probe command deadline in milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Evaluate against a recorded device-state TOML snapshot instead of
    /// live platform probes.
    #[arg(long)]
    device_state: Option<Utf8PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one capability and emit its envelope.
    Check {
        /// Capability ID (e.g. device.screen_lock, report.security_info).
        capability: String,

        /// Where to write the JSON envelope (stdout if not specified).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Evaluate every enabled check and emit the aggregate report.
    Report {
        /// Where to write the JSON envelope (stdout if not specified).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,

        /// Write a Markdown summary alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown summary (if enabled).
        #[arg(long, default_value = "artifacts/posture/report.md")]
        markdown_out: Utf8PathBuf,
    },

    /// List supported capability IDs.
    Capabilities,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            ref capability,
            ref output,
        } => cmd_evaluate(&cli, capability, output.clone(), false, None),
        Commands::Report {
            ref output,
            write_markdown,
            ref markdown_out,
        } => cmd_evaluate(
            &cli,
            ids::CAP_SECURITY_INFO,
            output.clone(),
            write_markdown,
            Some(markdown_out.clone()),
        ),
        Commands::Capabilities => cmd_capabilities(),
    }
}

fn cmd_evaluate(
    cli: &Cli,
    capability: &str,
    output: Option<Utf8PathBuf>,
    write_markdown: bool,
    markdown_out: Option<Utf8PathBuf>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        // Missing config file is allowed (preset defaults apply).
        let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

        let overrides = Overrides {
            profile: cli.profile.clone(),
            probe_timeout_ms: cli.timeout_ms,
        };

        let signals = build_signals(cli, &cfg_text, &overrides)?;

        let check_output = run_capability(CheckInput {
            capability,
            config_text: &cfg_text,
            overrides,
            signals: signals.as_ref(),
        })?;

        let json = serialize_report(&check_output.envelope).context("serialize envelope")?;
        match &output {
            Some(path) => write_text_file(path, &json).context("write envelope json")?,
            None => print!("{json}"),
        }

        if write_markdown {
            let md = render_markdown(&check_output.envelope);
            let md_path = markdown_out.as_deref().context("markdown path missing")?;
            write_text_file(md_path, &md).context("write markdown")?;
        }

        Ok(verdict_exit_code(&check_output.envelope.result))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("posture error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Pick the signal source: a recorded snapshot when `--device-state` is
/// given, live platform probes otherwise.
fn build_signals(
    cli: &Cli,
    cfg_text: &str,
    overrides: &Overrides,
) -> anyhow::Result<Box<dyn DeviceSignals>> {
    if let Some(path) = &cli.device_state {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read device state: {path}"))?;
        let snapshot = StaticSignals::parse_toml(&text)
            .with_context(|| format!("parse device state: {path}"))?;
        return Ok(Box::new(snapshot));
    }

    // Live probes honor the resolved deadline; resolution is cheap and
    // IO-free, so resolving here again before the evaluation is fine.
    let cfg = if cfg_text.trim().is_empty() {
        posture_settings::PostureConfigV1::default()
    } else {
        posture_settings::parse_config_toml(cfg_text).context("parse config")?
    };
    let resolved =
        posture_settings::resolve_config(cfg, overrides.clone()).context("resolve config")?;

    let signals = match resolved.effective.probe_timeout_ms {
        Some(ms) => AndroidSignals::with_timeout(Duration::from_millis(ms)),
        None => AndroidSignals::new(),
    };
    Ok(Box::new(signals))
}

fn cmd_capabilities() -> anyhow::Result<()> {
    for cap in Capability::ALL {
        println!("{cap}");
    }
    Ok(())
}

fn write_text_file(path: &camino::Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write file: {path}"))?;
    Ok(())
}
