use thiserror::Error;

/// AES Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// AES Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to build an AES key from a slice that is not 16, 24, or 32 bytes long.
    #[error("invalid key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { len: usize },

    /// Provided a buffer whose length does not satisfy the mode's block-alignment contract.
    #[error("invalid buffer length: {len} bytes ({context})")]
    InvalidBufferLength { len: usize, context: &'static str },
}
