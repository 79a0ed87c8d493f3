use crate::fingerprint::DigestAlgorithm;

/// Resolved signing policy handed to a `Signer`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignerPolicy {
    /// Name of the preset the policy was resolved from.
    pub profile: String,
    pub algorithm: DigestAlgorithm,
}

impl SignerPolicy {
    pub fn new(profile: impl Into<String>, algorithm: DigestAlgorithm) -> Self {
        Self {
            profile: profile.into(),
            algorithm,
        }
    }
}

impl Default for SignerPolicy {
    fn default() -> Self {
        Self::new("compat", DigestAlgorithm::default())
    }
}
