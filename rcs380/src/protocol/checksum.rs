// rcs380/rcs380/src/protocol/checksum.rs
//! Frame checksums.

/// Two's-complement checksum: `0x100 - (sum(bytes) & 0xff)`.
///
/// Used both as the length checksum (LCS, over the two little-endian length
/// bytes) and the data checksum (DCS, over the frame body).
pub fn checksum(bytes: &[u8]) -> u8 {
    let sum = bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}

/// Length checksum of a 16-bit body length
pub fn lcs(len: u16) -> u8 {
    checksum(&len.to_le_bytes())
}

/// Data checksum of a frame body
pub fn dcs(body: &[u8]) -> u8 {
    checksum(body)
}
