use super::CipherError;
use super::constants::*;

use std::ops::Range;

use byteorder::{BigEndian, ByteOrder};

pub fn load_word(src: &[u8]) -> u32 {
    assert!(src.len() == 4, "Slice length is not 4");

    BigEndian::read_u32(src)
}

pub fn store_word(src: u32, dst: &mut [u8]) {
    assert!(dst.len() >= 4, "Slice length must be at least 4");

    BigEndian::write_u32(&mut dst[..4], src);
}

pub fn load_block(src: &[u8]) -> (u32, u32) {
    (load_word(&src[0..4]), load_word(&src[4..8]))
}

pub fn store_block((v0, v1): (u32, u32), dst: &mut [u8]) {
    store_word(v0, &mut dst[0..4]);
    store_word(v1, &mut dst[4..8]);
}

pub fn load_key(key: &[u8]) -> Result<[u32; KEY_WORDS], CipherError> {
    if key.len() != KEY_SIZE {
        return Err(CipherError::InvalidKeyLength);
    }

    let mut words = [0u32; KEY_WORDS];
    for (i, word) in words.iter_mut().enumerate() {
        *word = load_word(&key[i*4..(i+1)*4]);
    }

    Ok(words)
}

/// Range of the block starting at `offset`, if the whole block fits in `len` bytes.
pub fn block_range(len: usize, offset: usize) -> Result<Range<usize>, CipherError> {
    match offset.checked_add(BLOCK_SIZE) {
        Some(end) if end <= len => Ok(offset..end),
        _ => Err(CipherError::BufferTooShort { offset, len }),
    }
}

/// Compares the first `expected.len()` bytes of `actual` against `expected`.
///
/// A shorter `actual` never matches; trailing bytes past `expected` are ignored.
pub fn validate(expected: &[u8], actual: &[u8]) -> bool {
    if actual.len() < expected.len() {
        return false;
    }

    expected.iter()
        .zip(actual.iter())
        .all(|(x1, x2)| x1 == x2)
}
