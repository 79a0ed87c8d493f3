//! Order-independent, type-tagged fingerprints for semi-structured data.
//!
//! ```
//! use canonsig::{Value, notation, signature};
//!
//! let a = Value::from(vec![2, 1]);
//! let b = Value::from_set([Value::from(1), Value::from(2)]);
//! assert_eq!(notation(&a).unwrap(), "1N2NA");
//! assert_eq!(signature(&a).unwrap(), signature(&b).unwrap());
//! ```

#![forbid(unsafe_code)]

pub use canonsig_domain::{
    Annotated, DigestAlgorithm, DigestFn, Signer, SignerPolicy, UnknownAlgorithm, annotate,
    flatten, notation, signature, signature_with, signature_with_hasher,
};
pub use canonsig_settings::{CanonsigConfigV1, Overrides, ResolvedConfig};
pub use canonsig_types::{
    InvalidNumber, Number, SerializeError, ToValue, TypeFlag, TypeMismatch, Value, to_value,
};

use anyhow::Context;
use log::debug;

/// Build a `Signer` from `canonsig.toml` text plus caller overrides.
pub fn signer_from_toml(input: &str, overrides: Overrides) -> anyhow::Result<Signer> {
    let cfg = canonsig_settings::parse_config_toml(input).context("parse canonsig config")?;
    let resolved =
        canonsig_settings::resolve_config(cfg, overrides).context("resolve canonsig config")?;
    debug!("signer ready: {}", resolved.policy.algorithm);
    Ok(Signer::new(resolved.policy))
}
