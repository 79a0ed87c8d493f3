use crate::annotate::{Annotated, annotate};
use crate::fingerprint::{DigestAlgorithm, signature_with};
use crate::notation::notation;
use crate::policy::SignerPolicy;
use canonsig_types::{ToValue, TypeMismatch};
use log::debug;

/// A reusable, configured signer.
///
/// Holds no mutable state; share it freely across threads.
#[derive(Clone, Debug, Default)]
pub struct Signer {
    policy: SignerPolicy,
}

impl Signer {
    pub fn new(policy: SignerPolicy) -> Self {
        Self { policy }
    }

    pub fn with_algorithm(algorithm: DigestAlgorithm) -> Self {
        Self::new(SignerPolicy::new("custom", algorithm))
    }

    pub fn policy(&self) -> &SignerPolicy {
        &self.policy
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.policy.algorithm
    }

    pub fn annotate<T: ToValue + ?Sized>(&self, input: &T) -> Result<Annotated, TypeMismatch> {
        annotate(input)
    }

    pub fn notation<T: ToValue + ?Sized>(&self, input: &T) -> Result<String, TypeMismatch> {
        notation(input)
    }

    pub fn sign<T: ToValue + ?Sized>(&self, input: &T) -> Result<String, TypeMismatch> {
        debug!(
            "signing with {} (profile {})",
            self.policy.algorithm, self.policy.profile
        );
        signature_with(input, &self.policy.algorithm)
    }
}
