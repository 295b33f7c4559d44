/// Reversed IEEE 802.3 polynomial (bit-reversed 0x04C11DB7), the variant
/// used by zlib, gzip and PNG.
pub const CRC32_POLYNOMIAL: u32 = 0xEDB8_8320;

/// Builds the 256-entry lookup table mapping each byte value to its
/// partial CRC update: seed the entry with the byte, then apply eight
/// right-shifting polynomial reduction rounds.
const fn build_crc32_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut n = 0usize;

    while n < 256 {
        let mut entry = n as u32;
        let mut round = 0;

        while round < 8 {
            entry = if entry & 1 != 0 {
                (entry >> 1) ^ CRC32_POLYNOMIAL
            } else {
                entry >> 1
            };
            round += 1;
        }

        table[n] = entry;
        n += 1;
    }

    table
}

/// Process-wide CRC-32 lookup table, baked in at compile time. Read-only
/// after construction and safely shareable across threads.
pub static CRC32_TABLE: [u32; 256] = build_crc32_table();
