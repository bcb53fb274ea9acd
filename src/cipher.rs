use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Result;
use crate::key::{Key, KeySize, expand_key};
use crate::modes::{
    cbc_decrypt_core, cbc_encrypt_core, ctr_xcrypt_core, ecb_decrypt_core, ecb_encrypt_core,
};

/// AES cipher context. Holds the expanded round-key schedule, the working
/// IV, and the key variant; provides in-place encryption and decryption in
/// modes [ECB](Cipher::encrypt_ecb), [CBC](Cipher::encrypt_cbc), and
/// [CTR](Cipher::crypt_ctr).
///
/// The context is a plain fixed-size value: the schedule array is sized for
/// AES-256 so one type serves all three variants, and no operation
/// allocates. CBC and CTR mutate the IV as they run, so a context tracks one
/// logical key stream; use one context per stream (or external locking) for
/// concurrent work. Key material is wiped when the context is dropped.
///
/// ## Example
/// ```
/// # fn main() -> aesbuf::Result<()> {
/// use aesbuf::{Cipher, Key};
///
/// let key = Key::try_from_slice(&[0x24; 16])?;
/// let iv = [0x07; 16];
/// let mut cipher = Cipher::new_with_iv(&key, &iv);
///
/// let mut buffer = *b"caller-owned buffer, any length.";
/// let original = buffer;
///
/// cipher.crypt_ctr(&mut buffer); // encrypt in place
/// assert_ne!(buffer, original);
///
/// cipher.set_iv(&iv); // reset the counter between operations
/// cipher.crypt_ctr(&mut buffer); // same call decrypts
/// assert_eq!(buffer, original);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cipher {
    round_keys: [[u8; 16]; 15],
    iv: [u8; 16],
    #[zeroize(skip)]
    size: KeySize,
}

impl Cipher {
    /// Derives the round-key schedule from `key` and stores it in the
    /// returned context. The IV starts zeroed; ECB needs nothing more, CBC
    /// and CTR callers should supply one via [new_with_iv](Cipher::new_with_iv)
    /// or [set_iv](Cipher::set_iv).
    pub fn new(key: &Key) -> Self {
        Self {
            round_keys: expand_key(key),
            iv: [0u8; 16],
            size: key.size(),
        }
    }

    /// As [new](Cipher::new), plus an initial IV (CBC) or counter block (CTR).
    pub fn new_with_iv(key: &Key, iv: &[u8; 16]) -> Self {
        let mut cipher = Self::new(key);
        cipher.iv = *iv;
        cipher
    }

    /// Overwrites the IV/counter without re-deriving the key schedule.
    ///
    /// An IV must never be reused with the same key across independent
    /// encryptions.
    pub fn set_iv(&mut self, iv: &[u8; 16]) {
        self.iv = *iv;
    }

    /// The current IV: the CBC chaining value or CTR counter as left by the
    /// most recent operation.
    pub fn iv(&self) -> &[u8; 16] {
        &self.iv
    }

    /// The key variant this context was built with.
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// The live entries of the round-key schedule, as a slice of 16-byte
    /// round keys (`rounds + 1` of them).
    pub fn round_keys(&self) -> &[[u8; 16]] {
        &self.round_keys[..=self.size.rounds()]
    }

    /// **Electronic codebook** encryption of exactly one 16-byte block, in
    /// place. The IV is not used.
    ///
    /// Identical plaintext blocks under the same key yield identical
    /// ciphertext blocks, so **ECB is insecure for most uses**; it is kept
    /// as the primitive the chained modes are built from.
    pub fn encrypt_ecb(&self, block: &mut [u8; 16]) {
        ecb_encrypt_core(block, self.round_keys());
    }

    /// **Electronic codebook** decryption of exactly one 16-byte block, in
    /// place.
    pub fn decrypt_ecb(&self, block: &mut [u8; 16]) {
        ecb_decrypt_core(block, self.round_keys());
    }

    /// **Cipher block chaining** encryption, in place. `buffer` must be a
    /// multiple of 16 bytes (pad first; PKCS#7 is the usual choice) or the
    /// call fails without touching it.
    ///
    /// Afterwards the IV holds the last ciphertext block, so a further call
    /// continues the same chain; call [set_iv](Cipher::set_iv) between
    /// independent messages.
    pub fn encrypt_cbc(&mut self, buffer: &mut [u8]) -> Result<()> {
        let rounds = self.size.rounds();
        cbc_encrypt_core(buffer, &self.round_keys[..=rounds], &mut self.iv)
    }

    /// **Cipher block chaining** decryption, in place. Same length contract
    /// and IV evolution as [encrypt_cbc](Cipher::encrypt_cbc).
    pub fn decrypt_cbc(&mut self, buffer: &mut [u8]) -> Result<()> {
        let rounds = self.size.rounds();
        cbc_decrypt_core(buffer, &self.round_keys[..=rounds], &mut self.iv)
    }

    /// **Counter mode** encryption and decryption (the operation is its own
    /// inverse), in place, any buffer length. The IV is the counter block,
    /// incremented as a 128-bit big-endian integer once per keystream
    /// block; a partial final chunk consumes a whole keystream block.
    pub fn crypt_ctr(&mut self, buffer: &mut [u8]) {
        let rounds = self.size.rounds();
        ctr_xcrypt_core(buffer, &self.round_keys[..=rounds], &mut self.iv);
    }
}
