//! Character pool building.

use crate::options::PasswordOptions;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &[u8] = b"0123456789";
pub const SPECIALS: &[u8] = b"!@#$%^&*()_-+=";

/// Build the character pool from the enabled classes.
///
/// Class order is fixed (lowercase, uppercase, numbers, specials) and each
/// class keeps its internal order. With every class disabled the pool falls
/// back to lowercase so generation never sees an empty pool.
pub fn build(options: &PasswordOptions) -> Vec<u8> {
    let mut pool: Vec<u8> = Vec::with_capacity(size(options));

    if options.lowercase {
        pool.extend_from_slice(LOWERCASE);
    }
    if options.uppercase {
        pool.extend_from_slice(UPPERCASE);
    }
    if options.numbers {
        pool.extend_from_slice(NUMBERS);
    }
    if options.specials {
        pool.extend_from_slice(SPECIALS);
    }

    if pool.is_empty() {
        pool.extend_from_slice(LOWERCASE);
    }

    pool
}

/// Effective pool size for the given options (without building the pool).
pub fn size(options: &PasswordOptions) -> usize {
    let mut size = 0;
    if options.lowercase {
        size += LOWERCASE.len();
    }
    if options.uppercase {
        size += UPPERCASE.len();
    }
    if options.numbers {
        size += NUMBERS.len();
    }
    if options.specials {
        size += SPECIALS.len();
    }
    if size == 0 { LOWERCASE.len() } else { size }
}
