use crate::core::{decrypt_block, encrypt_block};
use crate::error::{Error, Result};
use crate::modes::util::xor_block;

/// Core CBC encryption. Each block is XORed with the chaining value (the IV
/// for the first block), encrypted in place, and becomes the new chaining
/// value. `iv` is left holding the last ciphertext block so successive calls
/// continue the chain.
pub(crate) fn cbc_encrypt_core(
    buffer: &mut [u8],
    round_keys: &[[u8; 16]],
    iv: &mut [u8; 16],
) -> Result<()> {
    // reject before touching the buffer: no partial processing
    if buffer.len() % 16 != 0 {
        return Err(Error::InvalidBufferLength {
            len: buffer.len(),
            context: "CBC buffer must be a multiple of 16 bytes",
        });
    }

    for block in buffer.chunks_exact_mut(16) {
        let block: &mut [u8; 16] = block.try_into().unwrap(); // chunks_exact_mut guarantees 16
        xor_block(block, iv);
        encrypt_block(block, round_keys);
        *iv = *block;
    }

    Ok(())
}

/// Core CBC decryption. Each ciphertext block is saved, decrypted in place,
/// and XORed with the chaining value; the saved ciphertext becomes the next
/// chaining value. Same length contract and IV evolution as encryption.
pub(crate) fn cbc_decrypt_core(
    buffer: &mut [u8],
    round_keys: &[[u8; 16]],
    iv: &mut [u8; 16],
) -> Result<()> {
    if buffer.len() % 16 != 0 {
        return Err(Error::InvalidBufferLength {
            len: buffer.len(),
            context: "CBC buffer must be a multiple of 16 bytes",
        });
    }

    for block in buffer.chunks_exact_mut(16) {
        let block: &mut [u8; 16] = block.try_into().unwrap();
        let ciphertext = *block;
        decrypt_block(block, round_keys);
        xor_block(block, iv);
        *iv = ciphertext;
    }

    Ok(())
}
