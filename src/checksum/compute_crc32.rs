use crate::checksum::Crc32;

/// Computes the CRC-32 (IEEE 802.3) checksum of `data` in a single call.
///
/// A pure function of the byte sequence; it cannot fail and has no side
/// effects. An empty slice yields `0x0000_0000`.
///
/// # Parameters
/// - `data`: A byte slice representing the input data for checksum calculation.
///
/// # Returns
/// - The 32-bit checksum, comparable with any standard CRC-32 tool.
#[inline]
pub fn compute_crc32(data: &[u8]) -> u32 {
    let mut crc = Crc32::new();
    crc.update(data);
    crc.finalize()
}
