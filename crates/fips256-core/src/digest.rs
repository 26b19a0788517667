//! # Digest Assembly
//!
//! Renders the final hash state as the 256-bit digest: each state word in
//! big-endian byte order, `H0` first. Textual form is 64 lowercase hex
//! characters, which is also the serde representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::DIGEST_LEN;
use crate::error::HashError;
use crate::state::HashState;

/// A SHA-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Assemble the digest from a final hash state.
    pub fn from_state(state: &HashState) -> Self {
        let mut bytes = [0u8; DIGEST_LEN];
        for (out, word) in bytes.chunks_exact_mut(4).zip(state.words()) {
            out.copy_from_slice(&word.to_be_bytes());
        }
        Self(bytes)
    }

    /// Wrap raw digest bytes, e.g. from another implementation.
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw 32 digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for Digest {
    type Err = HashError;

    /// Parse 64 hex characters (either case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 * DIGEST_LEN {
            return Err(HashError::InvalidDigest(format!(
                "expected {} hex characters, got {}",
                2 * DIGEST_LEN,
                s.len()
            )));
        }
        if let Some(bad) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(HashError::InvalidDigest(format!(
                "non-hex character {bad:?}"
            )));
        }
        let mut bytes = [0u8; DIGEST_LEN];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let pair = std::str::from_utf8(pair)
                .map_err(|e| HashError::InvalidDigest(e.to_string()))?;
            *byte = u8::from_str_radix(pair, 16)
                .map_err(|e| HashError::InvalidDigest(e.to_string()))?;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC_HEX: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    fn abc_state() -> HashState {
        HashState::from([
            0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223,
            0xb00361a3, 0x96177a9c, 0xb410ff61, 0xf20015ad,
        ])
    }

    #[test]
    fn assembles_words_big_endian() {
        let digest = Digest::from_state(&abc_state());
        assert_eq!(&digest.as_bytes()[..4], &[0xba, 0x78, 0x16, 0xbf]);
        assert_eq!(&digest.as_bytes()[28..], &[0xf2, 0x00, 0x15, 0xad]);
        assert_eq!(digest.to_hex(), ABC_HEX);
    }

    #[test]
    fn display_matches_to_hex() {
        let digest = Digest::from_state(&abc_state());
        assert_eq!(format!("{digest}"), ABC_HEX);
        assert_eq!(format!("{digest:x}"), ABC_HEX);
    }

    #[test]
    fn leading_zero_bytes_are_kept() {
        let digest = Digest::from_state(&HashState::from([1, 0, 0, 0, 0, 0, 0, 0]));
        assert!(digest.to_hex().starts_with("00000001"));
        assert_eq!(digest.to_hex().len(), 64);
    }

    #[test]
    fn parse_accepts_either_case() {
        let lower: Digest = ABC_HEX.parse().unwrap();
        let upper: Digest = ABC_HEX.to_uppercase().parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, Digest::from_state(&abc_state()));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let err = "abcd".parse::<Digest>().unwrap_err();
        assert!(matches!(err, HashError::InvalidDigest(_)));
        assert!(err.to_string().contains("got 4"));
    }

    #[test]
    fn parse_rejects_non_hex() {
        let bad = format!("{}zz", &ABC_HEX[..62]);
        assert!(bad.parse::<Digest>().is_err());
    }

    #[test]
    fn parse_rejects_surrounding_whitespace() {
        for padded in [format!(" {ABC_HEX}"), format!("{ABC_HEX}\n")] {
            assert!(padded.parse::<Digest>().is_err(), "{padded:?}");
        }
        assert!(ABC_HEX.parse::<Digest>().is_ok());
    }

    #[test]
    fn serde_uses_hex_string() {
        let digest = Digest::from_state(&abc_state());
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{ABC_HEX}\""));
        let back: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
    }

    #[test]
    fn serde_rejects_malformed_hex() {
        assert!(serde_json::from_str::<Digest>("\"not-a-digest\"").is_err());
    }
}
