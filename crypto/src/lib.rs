mod feistel;
mod utils;
pub mod constants;
pub mod xtea;

pub use constants::{BLOCK_SIZE, DEFAULT_ROUNDS, DELTA, KEY_SIZE};
pub use utils::validate;
pub use xtea::XteaCipher;

use thiserror::Error;

pub trait CipherBlock: Send + Sync {
    fn encrypt(&self, src: &[u8], dst: &mut [u8]) -> Result<(), CipherError>;
    fn decrypt(&self, src: &[u8], dst: &mut [u8]) -> Result<(), CipherError>;
    fn get_block_size(&self) -> usize;
}

#[derive(Debug, PartialEq, Error)]
pub enum CipherError {
    #[error("key must be exactly {} bytes", KEY_SIZE)]
    InvalidKeyLength,
    #[error("buffer of {len} bytes has no room for a block at offset {offset}")]
    BufferTooShort { offset: usize, len: usize },
    #[error("plaintext is not a single {}-byte block", BLOCK_SIZE)]
    InvalidPlaintextLength,
    #[error("ciphertext is not a single {}-byte block", BLOCK_SIZE)]
    InvalidCiphertextLength,
}
