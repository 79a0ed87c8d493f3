//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CanonsigConfigV1, SCHEMA_CONFIG_V1};
pub use presets::{DEFAULT_PROFILE, PROFILES};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `canonsig.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<CanonsigConfigV1> {
    let cfg: CanonsigConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the signer policy (profile preset + file + overrides).
pub fn resolve_config(
    cfg: CanonsigConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
