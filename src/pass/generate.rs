//! Password generation.

use super::charset;
use crate::options::PasswordOptions;
use crate::rng;

/// Generate a password of `options.length` characters, each drawn
/// independently and uniformly from the active pool.
///
/// Composition is probabilistic: nothing forces the output to contain one
/// character of every enabled class. A zero length yields an empty string.
pub fn generate(options: &PasswordOptions) -> String {
    let pool = charset::build(options);

    let bytes: Vec<u8> = (0..options.length)
        .map(|_| pool[rng::uniform_index(pool.len())])
        .collect();

    // Safety: every pool is ASCII
    unsafe { String::from_utf8_unchecked(bytes) }
}
