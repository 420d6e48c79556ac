use std::fmt;
use std::sync::LazyLock;

use primitive_types::U256;
use sha2::{Digest, Sha256};

/// A 256-bit hash stored in internal byte order.
///
/// Displayed and parsed the way the node prints hashes: byte-reversed hex,
/// so a PoW hash shows its leading zeros first.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    pub const ZERO: Self = Self([0u8; 32]);

    /// Parse display-order hex (optionally `0x`-prefixed).
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)?;
        bytes.reverse();
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// The hash read as an unsigned 256-bit integer (for target comparison).
    pub fn to_u256(&self) -> U256 {
        U256::from_little_endian(&self.0)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rev = self.0;
        rev.reverse();
        f.write_str(&hex::encode(rev))
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({self})")
    }
}

/// Double SHA-256, used for transaction ids and merkle nodes.
pub fn sha256d(data: &[u8]) -> Hash256 {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; 32];
    out.copy_from_slice(&second);
    Hash256(out)
}

// N = 1024, r = 1, p = 1, 32-byte output.
static SCRYPT_PARAMS: LazyLock<scrypt::Params> =
    LazyLock::new(|| scrypt::Params::new(10, 1, 1, 32).expect("scrypt parameters are valid"));

/// Scrypt proof-of-work hash of a serialized block header (the header is
/// both password and salt).
pub fn scrypt_hash(header: &[u8]) -> Hash256 {
    let mut out = [0u8; 32];
    scrypt::scrypt(header, header, &SCRYPT_PARAMS, &mut out).expect("32-byte scrypt output");
    Hash256(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_reverses_internal_order() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0xab;
        let h = Hash256(bytes);
        assert!(h.to_string().starts_with("ab00"));
        assert_eq!(Hash256::from_hex(&h.to_string()).unwrap(), h);
    }

    #[test]
    fn from_hex_accepts_prefix_and_rejects_short_input() {
        let a = Hash256::from_hex(
            "0x0000092fa0d904cdf3ede53f44d3e42e16402883c724b8466430d25b65722b0e",
        )
        .unwrap();
        assert_eq!(a.0[31], 0x00);
        assert_eq!(a.0[0], 0x0e);
        assert!(Hash256::from_hex("abcd").is_err());
    }

    #[test]
    fn sha256d_of_empty_input() {
        assert_eq!(
            hex::encode(sha256d(b"").0),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn u256_view_is_little_endian() {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        assert_eq!(Hash256(bytes).to_u256(), U256::one());
    }
}
