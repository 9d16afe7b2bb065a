//! Strength estimation from the current options.
//!
//! Point-scoring heuristic over length and class count, not an entropy
//! calculation. The thresholds are fixed; the TUI meter and the CLI
//! `--estimate` flag both read from here.

use crate::options::PasswordOptions;

/// Discrete strength label with a fixed meter fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
        }
    }

    /// Meter fill percentage.
    pub fn fill_percent(self) -> u8 {
        match self {
            StrengthLevel::Weak => 25,
            StrengthLevel::Fair => 50,
            StrengthLevel::Good => 75,
            StrengthLevel::Strong => 100,
        }
    }

    /// ANSI color for the meter and label.
    pub fn color(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "\x1b[31m",
            StrengthLevel::Fair => "\x1b[33m",
            StrengthLevel::Good => "\x1b[32m",
            StrengthLevel::Strong => "\x1b[36m",
        }
    }
}

/// Raw heuristic score: one point per length threshold reached (8, 12, 16,
/// 20), one per enabled class, plus a bonus for length >= 16 with at least
/// three classes.
pub fn score(options: &PasswordOptions) -> u32 {
    let mut score = 0;

    for threshold in [8, 12, 16, 20] {
        if options.length >= threshold {
            score += 1;
        }
    }

    score += options.enabled_classes();

    if options.length >= 16 && options.enabled_classes() >= 3 {
        score += 1;
    }

    score
}

/// Map the score to a label: <=3 Weak, <=5 Fair, <=7 Good, else Strong.
pub fn estimate(options: &PasswordOptions) -> StrengthLevel {
    match score(options) {
        0..=3 => StrengthLevel::Weak,
        4..=5 => StrengthLevel::Fair,
        6..=7 => StrengthLevel::Good,
        _ => StrengthLevel::Strong,
    }
}

/// Password entropy in bits for the footer readout (length * log2 pool).
pub fn entropy_bits(options: &PasswordOptions) -> f64 {
    let pool = super::charset::size(options);
    options.length as f64 * (pool as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(
        length: usize,
        lowercase: bool,
        uppercase: bool,
        numbers: bool,
        specials: bool,
    ) -> PasswordOptions {
        PasswordOptions {
            lowercase,
            uppercase,
            numbers,
            specials,
            length,
        }
    }

    #[test]
    fn three_classes_at_16_scores_good() {
        // Length points 8/12/16 = 3, class points = 3, bonus = 1.
        let opts = options(16, true, true, true, false);
        assert_eq!(score(&opts), 7);
        assert_eq!(estimate(&opts), StrengthLevel::Good);
    }

    #[test]
    fn everything_on_at_20_scores_strong() {
        let opts = options(20, true, true, true, true);
        assert_eq!(score(&opts), 9);
        assert_eq!(estimate(&opts), StrengthLevel::Strong);
    }

    #[test]
    fn label_boundaries() {
        // score 3: length 12 (2 points) + one class
        let weak = options(12, true, false, false, false);
        assert_eq!(score(&weak), 3);
        assert_eq!(estimate(&weak), StrengthLevel::Weak);

        // score 4: length 12 + two classes
        let fair = options(12, true, true, false, false);
        assert_eq!(score(&fair), 4);
        assert_eq!(estimate(&fair), StrengthLevel::Fair);

        // score 6: length 16 + two classes (no bonus below three classes)
        let good = options(16, true, true, false, false);
        assert_eq!(score(&good), 6);
        assert_eq!(estimate(&good), StrengthLevel::Good);

        // score 8: length 20 (4 points) + three classes + bonus
        let strong = options(20, true, true, true, false);
        assert_eq!(score(&strong), 8);
        assert_eq!(estimate(&strong), StrengthLevel::Strong);
    }

    #[test]
    fn short_password_gets_no_length_points() {
        let opts = options(7, true, true, true, true);
        assert_eq!(score(&opts), 4);
        assert_eq!(estimate(&opts), StrengthLevel::Fair);
    }

    #[test]
    fn fill_percent_is_monotonic() {
        let levels = [
            StrengthLevel::Weak,
            StrengthLevel::Fair,
            StrengthLevel::Good,
            StrengthLevel::Strong,
        ];
        for pair in levels.windows(2) {
            assert!(pair[0].fill_percent() < pair[1].fill_percent());
        }
    }

    #[test]
    fn entropy_tracks_pool_size() {
        let narrow = options(16, true, false, false, false);
        let wide = options(16, true, true, true, true);
        assert!(entropy_bits(&wide) > entropy_bits(&narrow));
        assert!((entropy_bits(&narrow) - 16.0 * 26f64.log2()).abs() < 1e-9);
    }
}
