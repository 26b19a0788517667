//! # Reference Self-Check
//!
//! Recomputes the digest with the `sha2` crate and compares. A mismatch
//! means the pipeline in `fips256-core` is broken; it is reported as an
//! error and never retried.

use anyhow::Result;
use sha2::{Digest as _, Sha256};

use fips256_core::Digest;

/// Digest of `message` computed by the `sha2` crate.
pub fn reference_digest(message: &[u8]) -> Digest {
    let hash = Sha256::digest(message);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    Digest::from_bytes(bytes)
}

/// Fail unless `digest` equals the reference digest of `message`.
pub fn check_against_reference(message: &[u8], digest: &Digest) -> Result<()> {
    let reference = reference_digest(message);
    if reference != *digest {
        anyhow::bail!("digest mismatch: computed {digest}, sha2 reference {reference}");
    }
    tracing::info!(%digest, "digest matches sha2 reference");
    Ok(())
}
