//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration
//! provided as strings. The root-marker list, the dangerous-permission
//! taxonomy mapping, and the trust-service floor are required configuration;
//! presets supply platform defaults, the config file and CLI override them.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CheckConfig, PostureConfigV1, TrustedServiceConfig};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `posture.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PostureConfigV1> {
    let cfg: PostureConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (preset + file + overrides).
pub fn resolve_config(
    cfg: PostureConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
