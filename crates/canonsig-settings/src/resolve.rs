use crate::{model::CanonsigConfigV1, presets};
use anyhow::Context;
use canonsig_domain::{DigestAlgorithm, SignerPolicy};
use log::debug;

/// Caller-supplied settings that win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub algorithm: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub policy: SignerPolicy,
}

pub fn resolve_config(
    cfg: CanonsigConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| presets::DEFAULT_PROFILE.to_string());

    let mut policy = presets::preset(&profile);

    if let Some(alg) = overrides.algorithm.as_deref().or(cfg.algorithm.as_deref()) {
        policy.algorithm = parse_algorithm(alg)?;
    }

    debug!(
        "resolved signer policy: profile={} algorithm={}",
        policy.profile, policy.algorithm
    );
    Ok(ResolvedConfig { policy })
}

fn parse_algorithm(v: &str) -> anyhow::Result<DigestAlgorithm> {
    v.parse::<DigestAlgorithm>()
        .with_context(|| format!("invalid algorithm in config: {v}"))
}
