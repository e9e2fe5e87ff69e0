use super::{constants::*, utils::*, feistel::*, CipherError, CipherBlock};

use std::fmt;

/// XTEA cipher keyed with a 128-bit key and a fixed number of rounds.
///
/// Both halves of a block and all four key words are packed big-endian, which
/// is what other XTEA implementations expect. Zero rounds is accepted and
/// leaves blocks unchanged.
#[derive(Clone)]
pub struct XteaCipher {
    key_bytes: [u8; KEY_SIZE],
    key: [u32; KEY_WORDS],
    rounds: u32,
}

impl XteaCipher {
    /// Creates a cipher from a 16 byte key. Any other key length is rejected.
    pub fn new(key: &[u8], rounds: u32) -> Result<XteaCipher, CipherError> {
        let words = load_key(key)?;

        let mut key_bytes = [0u8; KEY_SIZE];
        key_bytes.copy_from_slice(key);

        Ok(XteaCipher {
            key_bytes,
            key: words,
            rounds,
        })
    }

    pub fn key(&self) -> &[u8; KEY_SIZE] {
        &self.key_bytes
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    pub fn key_size(&self) -> usize {
        KEY_SIZE
    }

    fn encipher(&self, (v0, v1): (u32, u32)) -> (u32, u32) {
        let f = Feistel::new(&self.key);
        let (mut v0, mut v1, mut sum) = (v0, v1, 0);

        for _ in 0..self.rounds {
            (v0, v1, sum) = f.encipher(v0, v1, sum);
        }

        (v0, v1)
    }

    fn decipher(&self, (v0, v1): (u32, u32)) -> (u32, u32) {
        let f = Feistel::new(&self.key);
        let (mut v0, mut v1, mut sum) = (v0, v1, initial_decrypt_sum(self.rounds));

        for _ in 0..self.rounds {
            (v0, v1, sum) = f.decipher(v0, v1, sum);
        }

        (v0, v1)
    }

    /// Encrypts the block at `input[input_offset..input_offset + 8]` into
    /// `output[output_offset..output_offset + 8]`.
    ///
    /// Both ranges are checked before anything is written.
    pub fn encrypt_block(&self, input: &[u8], input_offset: usize, output: &mut [u8], output_offset: usize) -> Result<(), CipherError> {
        let src = block_range(input.len(), input_offset)?;
        let dst = block_range(output.len(), output_offset)?;

        let block = self.encipher(load_block(&input[src]));
        store_block(block, &mut output[dst]);

        Ok(())
    }

    /// Decrypts the block at `input[input_offset..input_offset + 8]` into
    /// `output[output_offset..output_offset + 8]`.
    pub fn decrypt_block(&self, input: &[u8], input_offset: usize, output: &mut [u8], output_offset: usize) -> Result<(), CipherError> {
        let src = block_range(input.len(), input_offset)?;
        let dst = block_range(output.len(), output_offset)?;

        let block = self.decipher(load_block(&input[src]));
        store_block(block, &mut output[dst]);

        Ok(())
    }

    /// Encrypts the block at `buf[offset..offset + 8]` in place.
    pub fn encrypt_block_in_place(&self, buf: &mut [u8], offset: usize) -> Result<(), CipherError> {
        let range = block_range(buf.len(), offset)?;
        let block = &mut buf[range];

        let res = self.encipher(load_block(block));
        store_block(res, block);

        Ok(())
    }

    /// Decrypts the block at `buf[offset..offset + 8]` in place.
    pub fn decrypt_block_in_place(&self, buf: &mut [u8], offset: usize) -> Result<(), CipherError> {
        let range = block_range(buf.len(), offset)?;
        let block = &mut buf[range];

        let res = self.decipher(load_block(block));
        store_block(res, block);

        Ok(())
    }
}

impl fmt::Debug for XteaCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XteaCipher")
            .field("key", &"<redacted>")
            .field("rounds", &self.rounds)
            .finish()
    }
}

impl CipherBlock for XteaCipher {
    fn encrypt(&self, src: &[u8], dst: &mut [u8]) -> Result<(), CipherError> {
        if src.len() != BLOCK_SIZE {
            return Err(CipherError::InvalidPlaintextLength);
        }

        if dst.len() < BLOCK_SIZE {
            return Err(CipherError::InvalidCiphertextLength);
        }

        self.encrypt_block(src, 0, dst, 0)
    }

    fn decrypt(&self, src: &[u8], dst: &mut [u8]) -> Result<(), CipherError> {
        if src.len() != BLOCK_SIZE {
            return Err(CipherError::InvalidCiphertextLength);
        }

        if dst.len() < BLOCK_SIZE {
            return Err(CipherError::InvalidPlaintextLength);
        }

        self.decrypt_block(src, 0, dst, 0)
    }

    fn get_block_size(&self) -> usize {
        BLOCK_SIZE
    }
}
