use crate::core::encrypt_block;
use crate::modes::util::{increment_counter, xor_block};

/// Core counter-mode transform (CTR is symmetric: the same call encrypts
/// and decrypts). For each 16-byte chunk the counter block is encrypted
/// into a keystream block, the counter is incremented as a 128-bit
/// big-endian integer, and the chunk is XORed with the keystream. The final
/// chunk may be partial; only its available bytes are XORed, so no padding
/// is ever needed.
pub(crate) fn ctr_xcrypt_core(buffer: &mut [u8], round_keys: &[[u8; 16]], counter: &mut [u8; 16]) {
    let mut chunks = buffer.chunks_exact_mut(16);

    for chunk in &mut chunks {
        let chunk: &mut [u8; 16] = chunk.try_into().unwrap(); // chunks_exact_mut guarantees 16
        let mut keystream = *counter;
        encrypt_block(&mut keystream, round_keys);
        increment_counter(counter);
        xor_block(chunk, &keystream);
    }

    let remainder = chunks.into_remainder();
    if !remainder.is_empty() {
        let mut keystream = *counter;
        encrypt_block(&mut keystream, round_keys);
        increment_counter(counter);
        for (b, k) in remainder.iter_mut().zip(&keystream) {
            *b ^= k;
        }
    }
}
