use crate::constants::{DELTA, KEY_WORDS};

pub struct Feistel<'a> {
    key: &'a [u32; KEY_WORDS],
}

impl<'a> Feistel<'a> {
    pub fn new(key: &'a [u32; KEY_WORDS]) -> Feistel<'a> {
        Feistel { key }
    }

    fn mix(v: u32) -> u32 {
        ((v << 4) ^ (v >> 5)).wrapping_add(v)
    }

    fn subkey(&self, sum: u32) -> u32 {
        sum.wrapping_add(self.key[(sum & 3) as usize])
    }

    fn subkey_shifted(&self, sum: u32) -> u32 {
        sum.wrapping_add(self.key[((sum >> 11) & 3) as usize])
    }

    /// One encryption cycle. Returns the updated halves and the advanced sum.
    pub fn encipher(&self, v0: u32, v1: u32, sum: u32) -> (u32, u32, u32) {
        let v0 = v0.wrapping_add(Self::mix(v1) ^ self.subkey(sum));
        let sum = sum.wrapping_add(DELTA);
        let v1 = v1.wrapping_add(Self::mix(v0) ^ self.subkey_shifted(sum));
        (v0, v1, sum)
    }

    /// Inverse of `encipher`: takes the sum it returned and gives back the one it was called with.
    pub fn decipher(&self, v0: u32, v1: u32, sum: u32) -> (u32, u32, u32) {
        let v1 = v1.wrapping_sub(Self::mix(v0) ^ self.subkey_shifted(sum));
        let sum = sum.wrapping_sub(DELTA);
        let v0 = v0.wrapping_sub(Self::mix(v1) ^ self.subkey(sum));
        (v0, v1, sum)
    }
}

/// Sum reached after `rounds` encryption cycles, where decryption starts.
pub fn initial_decrypt_sum(rounds: u32) -> u32 {
    DELTA.wrapping_mul(rounds)
}
