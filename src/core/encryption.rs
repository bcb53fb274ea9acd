use super::constants::SBOX;
use super::util::{add_round_key, dbl};

/// Core AES forward transform. Encrypts a 16-byte block in place using the
/// provided round keys (consumed in forward order).
#[inline(always)]
pub(crate) fn encrypt_block(state: &mut [u8; 16], round_keys: &[[u8; 16]]) {
    let last_key_idx = round_keys.len() - 1;

    add_round_key(state, &round_keys[0]);

    for round_key in &round_keys[1..last_key_idx] {
        sub_bytes(state);
        shift_rows(state);
        mix_columns(state);
        add_round_key(state, round_key);
    }

    // final round skips MixColumns
    sub_bytes(state);
    shift_rows(state);
    add_round_key(state, &round_keys[last_key_idx]);
}

/// SubBytes step. Each byte is substituted using the SBOX.
#[inline(always)]
pub(crate) fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state {
        *byte = SBOX[*byte as usize];
    }
}

/// ShiftRows step. Row `r` of the 4x4 state rotates left by `r` positions;
/// row 0 is unchanged.
#[inline(always)]
pub(crate) fn shift_rows(state: &mut [u8; 16]) {
    // state is column-major: element (row, col) lives at state[col * 4 + row]
    let s = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[col * 4 + row] = s[((col + row) & 3) * 4 + row];
        }
    }
}

/// MixColumns step. Each column is multiplied by the fixed matrix
/// {02, 03, 01, 01} over GF(2^8).
#[inline(always)]
pub(crate) fn mix_columns(state: &mut [u8; 16]) {
    // 3x = 2x ^ x, so each output needs a single doubling:
    // 2a ^ 3b ^ c ^ d == dbl(a ^ b) ^ b ^ c ^ d
    for col in 0..4 {
        let i = col * 4;
        let (a, b, c, d) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        state[i] = dbl(a ^ b) ^ b ^ c ^ d;
        state[i + 1] = dbl(b ^ c) ^ c ^ d ^ a;
        state[i + 2] = dbl(c ^ d) ^ d ^ a ^ b;
        state[i + 3] = dbl(d ^ a) ^ a ^ b ^ c;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::Cipher;
    use crate::error::Result;
    use crate::key::Key;

    #[test]
    fn test_shift_rows() {
        let mut state: [u8; 16] = [
            // col 0
            0x00, 0x01, 0x02, 0x03,
            // col 1
            0x04, 0x05, 0x06, 0x07,
            // col 2
            0x08, 0x09, 0x0a, 0x0b,
            // col 3
            0x0c, 0x0d, 0x0e, 0x0f,
        ];

        shift_rows(&mut state);

        assert_eq!(
            state,
            [
                // col 0
                0x00, 0x05, 0x0a, 0x0f,
                // col 1
                0x04, 0x09, 0x0e, 0x03,
                // col 2
                0x08, 0x0d, 0x02, 0x07,
                // col 3
                0x0c, 0x01, 0x06, 0x0b,
            ],
            "row r should rotate left by r positions"
        );
    }

    #[test]
    fn test_mix_columns() {
        // test cases from https://en.wikipedia.org/wiki/Rijndael_MixColumns,
        // stored column-major in [u8; 16]
        let mut state: [u8; 16] = [
            // col 0
            0x63, 0x47, 0xa2, 0xf0,
            // col 1
            0xf2, 0x0a, 0x22, 0x5c,
            // col 2
            0x01, 0x01, 0x01, 0x01,
            // col 3
            0xc6, 0xc6, 0xc6, 0xc6,
        ];

        mix_columns(&mut state);

        assert_eq!(
            state,
            [
                // col 0
                0x5d, 0xe0, 0x70, 0xbb,
                // col 1
                0x9f, 0xdc, 0x58, 0x9d,
                // col 2
                0x01, 0x01, 0x01, 0x01,
                // col 3
                0xc6, 0xc6, 0xc6, 0xc6,
            ],
            "mix columns output does not match reference columns"
        );
    }

    #[test]
    fn test_encrypt_block_128() -> Result<()> {
        // FIPS-197 Appendix C.1
        let key: [u8; 16] = [
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, //
            0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, //
        ];

        let mut block: [u8; 16] = [
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, //
            0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, //
        ];

        let expected: [u8; 16] = [
            0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, //
            0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5, 0x5a, //
        ];

        let key = Key::try_from_slice(&key)?;
        let cipher = Cipher::new(&key);
        encrypt_block(&mut block, cipher.round_keys());

        assert_eq!(block, expected, "incorrect AES-128 encryption of block");
        Ok(())
    }

    #[test]
    fn test_encrypt_block_192() -> Result<()> {
        // FIPS-197 Appendix C.2
        let key: [u8; 24] = [
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, //
            0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, //
            0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, //
        ];

        let mut block: [u8; 16] = [
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, //
            0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, //
        ];

        let expected: [u8; 16] = [
            0xdd, 0xa9, 0x7c, 0xa4, 0x86, 0x4c, 0xdf, 0xe0, //
            0x6e, 0xaf, 0x70, 0xa0, 0xec, 0x0d, 0x71, 0x91, //
        ];

        let key = Key::try_from_slice(&key)?;
        let cipher = Cipher::new(&key);
        encrypt_block(&mut block, cipher.round_keys());

        assert_eq!(block, expected, "incorrect AES-192 encryption of block");
        Ok(())
    }

    #[test]
    fn test_encrypt_block_256() -> Result<()> {
        // FIPS-197 Appendix C.3
        let key: [u8; 32] = [
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, //
            0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, //
            0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, //
            0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e, 0x1f, //
        ];

        let mut block: [u8; 16] = [
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, //
            0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, //
        ];

        let expected: [u8; 16] = [
            0x8e, 0xa2, 0xb7, 0xca, 0x51, 0x67, 0x45, 0xbf, //
            0xea, 0xfc, 0x49, 0x90, 0x4b, 0x49, 0x60, 0x89, //
        ];

        let key = Key::try_from_slice(&key)?;
        let cipher = Cipher::new(&key);
        encrypt_block(&mut block, cipher.round_keys());

        assert_eq!(block, expected, "incorrect AES-256 encryption of block");
        Ok(())
    }
}
