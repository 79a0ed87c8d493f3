use canonsig_domain::{DigestAlgorithm, SignerPolicy};

pub const DEFAULT_PROFILE: &str = "compat";

pub const PROFILES: [&str; 3] = ["compat", "strict", "wide"];

/// Preset profiles are opinionated defaults.
///
/// `compat` keeps fingerprints comparable with previously recorded ones.
pub fn preset(profile: &str) -> SignerPolicy {
    match profile {
        "strict" => SignerPolicy::new("strict", DigestAlgorithm::Sha256),
        "wide" => SignerPolicy::new("wide", DigestAlgorithm::Sha512),
        // default
        _ => SignerPolicy::new(DEFAULT_PROFILE, DigestAlgorithm::Md5),
    }
}
