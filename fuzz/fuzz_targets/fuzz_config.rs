//! Fuzz target for signer configuration parsing.
//!
//! Goal: parsing and resolving arbitrary TOML **never panics**.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config
//! ```

#![no_main]

use canonsig::{Overrides, signer_from_toml};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = signer_from_toml(text, Overrides::default());
    }
});
