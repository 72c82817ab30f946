//! Keyed byte-wise obfuscation.
//!
//! Every byte is XORed with the low byte of the key. The transform is its
//! own inverse and keys that agree modulo 256 behave identically. This hides
//! the payload from casual inspection only; it is not encryption.

/// The single byte of key material actually applied to data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ObfuscationKey(u8);

impl ObfuscationKey {
    /// Derive a key from any integer; only the low 8 bits matter
    /// (two's complement for negative values).
    pub const fn new(key: i64) -> Self {
        Self((key & 0xFF) as u8)
    }

    /// The applied key byte.
    pub const fn byte(self) -> u8 {
        self.0
    }

    /// XOR every byte of `data` with the key, in place.
    pub fn apply(self, data: &mut [u8]) {
        if self.0 == 0 {
            return;
        }
        for byte in data.iter_mut() {
            *byte ^= self.0;
        }
    }
}

impl From<i64> for ObfuscationKey {
    fn from(key: i64) -> Self {
        Self::new(key)
    }
}

impl From<u8> for ObfuscationKey {
    fn from(key: u8) -> Self {
        Self(key)
    }
}
