//! Stable nickname → numeric code hashes used by the game and the server mod to refer to
//! systems, factions and goods without their nicknames.

use fl_domain::HashCode;
#[cfg(test)]
use mockall::automock;

const LOGICAL_BITS: u32 = 30;
const PHYSICAL_BITS: u32 = 32;
const NICKNAME_POLYNOMIAL: u32 = 0xA001 << (LOGICAL_BITS - 16);

#[cfg_attr(test, automock)]
pub trait NicknameHasher {
    fn hash_nickname(&self, nickname: &str) -> HashCode;

    fn hash_faction(&self, nickname: &str) -> HashCode;
}

#[derive(Debug, Clone)]
pub struct FlHash {
    table: [u32; 256],
}

impl Default for FlHash {
    fn default() -> Self {
        Self::new()
    }
}

impl FlHash {
    pub fn new() -> Self {
        let mut table = [0u32; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            let mut crc = i as u32;
            for _ in 0..8 {
                crc = if crc & 1 == 1 {
                    (crc >> 1) ^ NICKNAME_POLYNOMIAL
                } else {
                    crc >> 1
                };
            }
            *entry = crc;
        }
        Self { table }
    }
}

impl NicknameHasher for FlHash {
    fn hash_nickname(&self, nickname: &str) -> HashCode {
        let mut hash: u32 = 0;
        for byte in nickname.to_ascii_lowercase().bytes() {
            hash = (hash >> 8) ^ self.table[((hash as u8) ^ byte) as usize];
        }
        hash = hash.swap_bytes();
        hash = (hash >> (PHYSICAL_BITS - LOGICAL_BITS)) | 0x8000_0000;
        HashCode(hash)
    }

    // CRC-16/CCITT over the lowercased nickname
    fn hash_faction(&self, nickname: &str) -> HashCode {
        let mut hash: u32 = 0xFFFF;
        for byte in nickname.to_ascii_lowercase().bytes() {
            let mut x = ((hash >> 8) ^ byte as u32) & 0xFF;
            x ^= x >> 4;
            hash = ((hash << 8) ^ (x << 12) ^ (x << 5) ^ x) & 0xFFFF;
        }
        HashCode(hash)
    }
}
