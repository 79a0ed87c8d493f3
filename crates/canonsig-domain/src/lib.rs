//! Pure canonicalization and signing (no IO).
//!
//! Input: a value tree built elsewhere (see `canonsig-types`).
//! Output: the annotated tree, its flattened notation, and a hex digest of it.

#![forbid(unsafe_code)]

pub mod annotate;
pub mod fingerprint;
pub mod notation;
pub mod policy;

mod engine;
mod order;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use annotate::{Annotated, annotate};
pub use engine::Signer;
pub use fingerprint::{
    DigestAlgorithm, DigestFn, UnknownAlgorithm, signature, signature_with, signature_with_hasher,
};
pub use notation::{flatten, notation};
pub use policy::SignerPolicy;
