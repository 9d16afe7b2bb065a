//! Uniform random draws from the operating system CSPRNG.

use rand::RngCore;
use rand::rngs::OsRng;

// Output range of one raw draw: [0, 2^32).
const DRAW_RANGE: u64 = 1 << 32;

/// Largest multiple of `bound` that fits in the draw range. Raw values at or
/// above this would wrap unevenly under the modulo and bias low indices.
pub(crate) fn rejection_limit(bound: usize) -> u64 {
    let bound = bound as u64;
    DRAW_RANGE - (DRAW_RANGE % bound)
}

/// Draw one index uniformly from `[0, bound)`.
///
/// Rejection sampling: raw 32-bit draws past the largest multiple of `bound`
/// are discarded and redrawn. Expected redraw count is below one for any
/// bound this crate uses.
pub fn uniform_index(bound: usize) -> usize {
    debug_assert!(bound > 0 && bound <= u32::MAX as usize);
    let limit = rejection_limit(bound);
    loop {
        let raw = OsRng.next_u32() as u64;
        if raw < limit {
            return (raw % bound as u64) as usize;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_a_multiple_of_bound() {
        for bound in [1, 2, 3, 14, 26, 36, 40, 62, 76] {
            let limit = rejection_limit(bound);
            assert_eq!(limit % bound as u64, 0, "bound {bound}");
            assert!(DRAW_RANGE - limit < bound as u64, "bound {bound}");
        }
    }

    #[test]
    fn index_stays_in_bounds() {
        for bound in [1, 2, 26, 76] {
            for _ in 0..1_000 {
                assert!(uniform_index(bound) < bound);
            }
        }
    }

    #[test]
    fn draw_is_approximately_uniform() {
        // Chi-square goodness of fit over a pool-sized bound. With df = 39
        // the statistic has mean 39 and sd ~8.8; 120 is far enough out that
        // a sound draw essentially never trips it.
        const BOUND: usize = 40;
        const DRAWS: usize = 200_000;

        let mut counts = [0u32; BOUND];
        for _ in 0..DRAWS {
            counts[uniform_index(BOUND)] += 1;
        }

        let expected = DRAWS as f64 / BOUND as f64;
        let chi2: f64 = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();
        assert!(chi2 < 120.0, "chi-square {chi2:.1} too high");
    }
}
