mod crc32_table;
pub use crc32_table::{CRC32_POLYNOMIAL, CRC32_TABLE};

mod crc32;
pub use crc32::Crc32;

mod compute_crc32;
pub use compute_crc32::compute_crc32;
