/// XTEA works on 64-bit blocks.
pub const BLOCK_SIZE: usize = 8;
/// 128-bit key.
pub const KEY_SIZE: usize = 16;
pub const KEY_WORDS: usize = KEY_SIZE / 4;

/// Round constant, derived from the golden ratio.
pub const DELTA: u32 = 0x9E37_79B9;
pub const DEFAULT_ROUNDS: u32 = 32;
