use std::{
    fmt::{self, Display},
    str::FromStr,
};

use sha2::{Digest as _, Sha256};

/// Number of bytes in a seed.
const SEED_LEN: usize = 32;

/// Errors returned when parsing a hexadecimal seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The string is not 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Number of characters in the input.
        len: usize,
    },
    /// The string contains a non-hexadecimal character.
    #[display("seed contains non-hex character {ch:?}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
}

/// A 256-bit seed from which all randomness of a game session is derived.
///
/// Displayed and parsed as 64 lowercase hexadecimal characters.
///
/// # Examples
///
/// ```
/// use abduel_generator::GameSeed;
///
/// let seed = GameSeed::from_phrase("friday night");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<GameSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSeed([u8; SEED_LEN]);

impl GameSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Hashes an arbitrary phrase into a seed.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Parses 64 hex characters, or hashes any other text as a phrase.
    #[must_use]
    pub fn from_hex_or_phrase(text: &str) -> Self {
        text.parse().unwrap_or_else(|_| Self::from_phrase(text))
    }

    /// Returns the raw bytes of this seed.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Derives an independent child seed for the stream named `label`.
    #[must_use]
    pub fn derive(&self, label: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(label.as_bytes());
        Self(hasher.finalize().into())
    }
}

impl Display for GameSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for GameSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != SEED_LEN * 2 {
            return Err(SeedParseError::InvalidLength { len: chars.len() });
        }
        let mut bytes = [0; SEED_LEN];
        for (byte, pair) in bytes.iter_mut().zip(chars.chunks_exact(2)) {
            let mut value = 0;
            for &ch in pair {
                let nibble = ch
                    .to_digit(16)
                    .ok_or(SeedParseError::InvalidCharacter { ch })?;
                // `to_digit(16)` is below 16, so the nibble fits in a byte.
                value = (value << 4) | u8::try_from(nibble).unwrap_or_default();
            }
            *byte = value;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse_roundtrip() {
        let seed = GameSeed::from_bytes([0xab; SEED_LEN]);
        assert_eq!(seed.to_string(), "ab".repeat(SEED_LEN));
        assert_eq!(seed.to_string().parse::<GameSeed>(), Ok(seed));
        assert_eq!("AB".repeat(SEED_LEN).parse::<GameSeed>(), Ok(seed));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<GameSeed>(),
            Err(SeedParseError::InvalidLength { len: 3 })
        );
        let text = format!("zz{}", "0".repeat(62));
        assert_eq!(
            text.parse::<GameSeed>(),
            Err(SeedParseError::InvalidCharacter { ch: 'z' })
        );
    }

    #[test]
    fn test_phrase_and_hex() {
        let hex = "01".repeat(SEED_LEN);
        assert_eq!(
            GameSeed::from_hex_or_phrase(&hex),
            GameSeed::from_bytes([1; SEED_LEN])
        );
        assert_eq!(
            GameSeed::from_hex_or_phrase("hello"),
            GameSeed::from_phrase("hello")
        );
        assert_ne!(GameSeed::from_phrase("a"), GameSeed::from_phrase("b"));
    }

    #[test]
    fn test_derive_is_stable_and_distinct() {
        let seed = GameSeed::from_phrase("base");
        assert_eq!(seed.derive("secret"), seed.derive("secret"));
        assert_ne!(seed.derive("secret"), seed.derive("guess"));
        assert_ne!(seed.derive("secret"), seed);
    }
}
