//! Signing: digest of the notation's UTF-8 bytes, rendered as lowercase hex.

use crate::notation::notation;
use canonsig_types::{ToValue, TypeMismatch};
use log::debug;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A deterministic, pure `bytes -> bytes` hash.
pub trait DigestFn {
    fn digest(&self, bytes: &[u8]) -> Vec<u8>;
}

impl<F> DigestFn for F
where
    F: Fn(&[u8]) -> Vec<u8>,
{
    fn digest(&self, bytes: &[u8]) -> Vec<u8> {
        self(bytes)
    }
}

/// Built-in digest algorithms.
///
/// MD5 is the default so fingerprints recorded by earlier releases keep
/// matching; it is not used for anything security-relevant here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    #[default]
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl DigestAlgorithm {
    pub const ALL: [DigestAlgorithm; 4] = [
        DigestAlgorithm::Md5,
        DigestAlgorithm::Sha1,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha512,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha512 => "sha512",
        }
    }

    /// Digest length in bytes (hex output is twice this).
    pub fn output_len(self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 16,
            DigestAlgorithm::Sha1 => 20,
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha512 => 64,
        }
    }
}

impl DigestFn for DigestAlgorithm {
    fn digest(&self, bytes: &[u8]) -> Vec<u8> {
        match self {
            DigestAlgorithm::Md5 => hash_with::<Md5>(bytes),
            DigestAlgorithm::Sha1 => hash_with::<Sha1>(bytes),
            DigestAlgorithm::Sha256 => hash_with::<Sha256>(bytes),
            DigestAlgorithm::Sha512 => hash_with::<Sha512>(bytes),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown digest algorithm: {0} (expected md5|sha1|sha256|sha512)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for DigestAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md5" => Ok(DigestAlgorithm::Md5),
            "sha1" => Ok(DigestAlgorithm::Sha1),
            "sha256" | "sha2" => Ok(DigestAlgorithm::Sha256),
            "sha512" => Ok(DigestAlgorithm::Sha512),
            other => Err(UnknownAlgorithm(other.to_string())),
        }
    }
}

fn hash_with<H: Digest>(bytes: &[u8]) -> Vec<u8> {
    let mut hasher = H::new();
    hasher.update(bytes);
    hasher.finalize().to_vec()
}

/// Fingerprint with the default algorithm (MD5).
pub fn signature<T: ToValue + ?Sized>(input: &T) -> Result<String, TypeMismatch> {
    signature_with(input, &DigestAlgorithm::default())
}

/// Fingerprint with a caller-supplied digest.
pub fn signature_with<T, D>(input: &T, digest: &D) -> Result<String, TypeMismatch>
where
    T: ToValue + ?Sized,
    D: DigestFn + ?Sized,
{
    let notation = notation(input)?;
    debug!("signing {} notation bytes", notation.len());
    Ok(hex::encode(digest.digest(notation.as_bytes())))
}

/// Fingerprint with any RustCrypto hasher, e.g. `signature_with_hasher::<Sha384>(&v)`.
pub fn signature_with_hasher<H: Digest>(
    input: &(impl ToValue + ?Sized),
) -> Result<String, TypeMismatch> {
    signature_with(input, &hash_with::<H>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{list, map, num, set, text};
    use canonsig_types::Value;

    const MD5_A: &str = "d132c0567a5964930f9ee5f14e779e32";
    const SHA1_A: &str = "1e4b66abe83a478d0e271bede40afd89c9519134";
    const SHA256_A: &str = "81c99b3df1d89a5d4cc5bdbd8b90f3ec39e448164f410d1884811405e4247dca";
    const SHA512_A: &str = "b075959d199f0c84323ea8449e1a8c860894a328f0ecddf9d1be1576e8f2d288\
                            564309df4dc3677ae8a18df63f28a544bb6e9f8592633c6c42035d526ffecddc";

    #[test]
    fn default_is_md5() {
        assert_eq!(signature(&text("a")).unwrap(), MD5_A);
        assert_eq!(signature("a").unwrap(), MD5_A);
    }

    #[test]
    fn golden_values_per_algorithm() {
        assert_eq!(
            signature_with(&text("a"), &DigestAlgorithm::Sha1).unwrap(),
            SHA1_A
        );
        assert_eq!(
            signature_with(&text("a"), &DigestAlgorithm::Sha256).unwrap(),
            SHA256_A
        );
        assert_eq!(
            signature_with(&text("a"), &DigestAlgorithm::Sha512).unwrap(),
            SHA512_A
        );
        assert_eq!(signature_with_hasher::<Sha512>("a").unwrap(), SHA512_A);
    }

    #[test]
    fn hex_length_matches_algorithm() {
        let v = map([(text("k"), list([num(1), Value::Null]))]);
        for alg in DigestAlgorithm::ALL {
            let sig = signature_with(&v, &alg).unwrap();
            assert_eq!(sig.len(), alg.output_len() * 2, "{alg}");
            assert!(sig.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        }
    }

    #[test]
    fn hasher_type_and_algorithm_agree() {
        let v = list([text("x"), num(2)]);
        assert_eq!(
            signature_with_hasher::<Sha512>(&v).unwrap(),
            signature_with(&v, &DigestAlgorithm::Sha512).unwrap()
        );
    }

    #[test]
    fn closures_are_digests() {
        let identity = |bytes: &[u8]| bytes.to_vec();
        assert_eq!(
            signature_with(&list([num(123), text("abc")]), &identity).unwrap(),
            hex::encode("123NabcSA")
        );
    }

    #[test]
    fn notation_is_hashed_as_utf8() {
        let identity = |bytes: &[u8]| bytes.to_vec();
        assert_eq!(signature_with("å", &identity).unwrap(), "c3a553");
    }

    #[test]
    fn unordered_inputs_share_a_signature() {
        assert_eq!(
            signature(&list([num(1), num(2), num(3)])).unwrap(),
            signature(&list([num(2), num(1), num(3)])).unwrap()
        );
        assert_eq!(
            signature(&map([(text("a"), num(2)), (text("b"), num(1))])).unwrap(),
            signature(&map([(text("b"), num(1)), (text("a"), num(2))])).unwrap()
        );
        assert_eq!(
            signature(&set([num(1), num(2)])).unwrap(),
            signature(&list([num(2), num(1)])).unwrap()
        );
    }

    #[test]
    fn different_contents_differ() {
        assert_ne!(
            signature(&list([num(1), num(2), num(3)])).unwrap(),
            signature(&list([text("1"), text("2"), text("3")])).unwrap()
        );
        assert_ne!(
            signature(&set([list([num(1), num(2)])])).unwrap(),
            signature(&map([(num(1), num(2))])).unwrap()
        );
    }

    #[test]
    fn algorithm_names_parse() {
        for alg in DigestAlgorithm::ALL {
            assert_eq!(alg.as_str().parse::<DigestAlgorithm>(), Ok(alg));
        }
        assert_eq!("sha2".parse::<DigestAlgorithm>(), Ok(DigestAlgorithm::Sha256));
        assert_eq!(
            "crc32".parse::<DigestAlgorithm>(),
            Err(UnknownAlgorithm("crc32".to_string()))
        );
    }

    #[test]
    fn toml_datetime_fails_signing() {
        let doc: toml::Table = toml::from_str("when = 1979-05-27").unwrap();
        let err = signature(&doc).unwrap_err();
        assert_eq!(err.type_name, "datetime");
    }
}
