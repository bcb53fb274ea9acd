use crate::core::{decrypt_block, encrypt_block};

/// Core ECB encryption: one 16-byte block, in place, no chaining. Multi-block
/// callers loop block-at-a-time; equal plaintext blocks produce equal
/// ciphertext blocks under the same key.
#[inline(always)]
pub(crate) fn ecb_encrypt_core(block: &mut [u8; 16], round_keys: &[[u8; 16]]) {
    encrypt_block(block, round_keys);
}

/// Core ECB decryption: one 16-byte block, in place.
#[inline(always)]
pub(crate) fn ecb_decrypt_core(block: &mut [u8; 16], round_keys: &[[u8; 16]]) {
    decrypt_block(block, round_keys);
}
