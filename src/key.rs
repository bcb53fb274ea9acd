//! Defines the [`Key`] struct, which holds a valid AES key of 128, 192, or
//! 256 bits, and the key schedule that expands it into round keys.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::constants::{RCON, SBOX};
use crate::error::{Error, Result};

/// AES key variant. Determines the key length in bytes and the number of
/// rounds of the block transform.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum KeySize {
    Aes128,
    Aes192,
    Aes256,
}

impl KeySize {
    /// Key length in bytes (16, 24, or 32).
    pub const fn key_len(self) -> usize {
        match self {
            KeySize::Aes128 => 16,
            KeySize::Aes192 => 24,
            KeySize::Aes256 => 32,
        }
    }

    /// Number of rounds of the block transform (10, 12, or 14).
    pub const fn rounds(self) -> usize {
        self.key_len() / 4 + 6
    }
}

#[derive(Clone, PartialEq, Eq, Zeroize)]
enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// Contains a valid AES key, built from a slice of bytes that is 16, 24, or
/// 32 bytes long. A `Key` is required to instantiate a
/// [Cipher](crate::Cipher). Key bytes are wiped when the `Key` is dropped.
///
/// ## Examples
/// ```
/// # fn main() -> aesbuf::Result<()> {
/// use aesbuf::{Key, KeySize};
///
/// let key_bytes: [u8; 32] = [0xBA, 0x32, 0x82, 0x9A, 0x43, 0x8A, 0x48, 0xED,
///                            0xC2, 0xEA, 0x10, 0x73, 0x26, 0xF8, 0xA9, 0x62,
///                            0xDE, 0x82, 0x06, 0xBA, 0x53, 0xC2, 0xC7, 0x55,
///                            0x2C, 0x72, 0xC5, 0x37, 0xBF, 0xD4, 0xDB, 0x5E];
/// let my_key_128 = Key::try_from_slice(&key_bytes[..16])?;
/// let my_key_256 = Key::try_from_slice(&key_bytes[..32])?;
///
/// assert_eq!(my_key_128.size(), KeySize::Aes128);
/// assert_eq!(my_key_256.as_bytes(), &key_bytes[..32]);
///
/// // Any other length returns an InvalidKeyLength error:
/// assert!(Key::try_from_slice(&key_bytes[..20]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Attempts to build a key from a slice of bytes. Returns an
    /// InvalidKeyLength error if the input slice is anything other than 16,
    /// 24, or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(match bytes.len() {
            16 => Self {
                bytes: KeyBytes::K128(bytes.try_into().unwrap()), // match condition guarantees safe unwrap
            },
            24 => Self {
                bytes: KeyBytes::K192(bytes.try_into().unwrap()),
            },
            32 => Self {
                bytes: KeyBytes::K256(bytes.try_into().unwrap()),
            },
            _ => return Err(Error::InvalidKeyLength { len: bytes.len() }),
        })
    }

    /// Returns a reference to the internal key as an array of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }

    /// The key variant (AES-128, AES-192, or AES-256).
    pub fn size(&self) -> KeySize {
        match &self.bytes {
            KeyBytes::K128(_) => KeySize::Aes128,
            KeyBytes::K192(_) => KeySize::Aes192,
            KeyBytes::K256(_) => KeySize::Aes256,
        }
    }
}

/// AES key schedule. Expands the key into `Nr + 1` round keys; the returned
/// array is sized for AES-256 (15 round keys) and entries beyond `Nr + 1`
/// stay zero for the smaller variants.
pub(crate) fn expand_key(key: &Key) -> [[u8; 16]; 15] {
    let bytes = key.as_bytes();

    // Variable names match FIPS-197, NIST specification: https://doi.org/10.6028/NIST.FIPS.197-upd1
    // Nk   The number of 32-bit words comprising the key
    // Nr   The number of rounds. 10, 12, and 14 for AES-128, AES-192, and AES-256, respectively
    // w    The result of the key schedule, an array of words that form round keys
    // Nw   The total number of words generated by the key schedule (including initial key)
    let nk = bytes.len() / 4;
    let nr = nk + 6;
    let nw = (nr + 1) * 4;

    // 60 words covers the AES-256 schedule
    let mut w = [[0u8; 4]; 60];

    // first nk words of w are filled with the initial key
    for (i, &b) in bytes.iter().enumerate() {
        w[i / 4][i % 4] = b;
    }

    let mut temp = w[nk - 1];
    for i in nk..nw {
        if i % nk == 0 {
            // RotWord, SubWord, and Rcon applied to temp
            temp = [
                SBOX[temp[1] as usize] ^ RCON[i / nk],
                SBOX[temp[2] as usize],
                SBOX[temp[3] as usize],
                SBOX[temp[0] as usize],
            ];
        } else if nk == 8 && i % nk == 4 {
            // AES-256 only: SubWord without rotation at the midpoint of each 8-word group
            temp = [
                SBOX[temp[0] as usize],
                SBOX[temp[1] as usize],
                SBOX[temp[2] as usize],
                SBOX[temp[3] as usize],
            ];
        }

        // w[i] = temp ⊕ w[i − Nk]
        temp = xor_words(&temp, &w[i - nk]);
        w[i] = temp;
    }

    // regroup the schedule words into 16-byte round keys
    let mut round_keys = [[0u8; 16]; 15];
    for round in 0..=nr {
        for col in 0..4 {
            let word = w[round * 4 + col];
            round_keys[round][col * 4..col * 4 + 4].copy_from_slice(&word);
        }
    }

    round_keys
}

#[inline(always)]
fn xor_words(a: &[u8; 4], b: &[u8; 4]) -> [u8; 4] {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}
