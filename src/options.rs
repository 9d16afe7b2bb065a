//! Password options value object.

/// Smallest length the UI will accept.
pub const MIN_LENGTH: usize = 8;
/// Largest length the UI will accept.
pub const MAX_LENGTH: usize = 50;

/// The four built-in character classes, in pool order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Numbers,
    Specials,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Numbers,
        CharClass::Specials,
    ];
}

/// One generation request: which classes are enabled, and how long.
///
/// Immutable per generation call. UI updates replace the whole value via
/// [`toggled`](Self::toggled) and [`with_length`](Self::with_length) rather
/// than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub specials: bool,
    pub length: usize,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: false,
            numbers: false,
            specials: false,
            length: 16,
        }
    }
}

impl PasswordOptions {
    pub fn class_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Numbers => self.numbers,
            CharClass::Specials => self.specials,
        }
    }

    /// Copy with one class flipped.
    pub fn toggled(self, class: CharClass) -> Self {
        let mut next = self;
        match class {
            CharClass::Lowercase => next.lowercase = !next.lowercase,
            CharClass::Uppercase => next.uppercase = !next.uppercase,
            CharClass::Numbers => next.numbers = !next.numbers,
            CharClass::Specials => next.specials = !next.specials,
        }
        next
    }

    /// Copy with the length clamped to `MIN_LENGTH..=MAX_LENGTH`.
    ///
    /// Clamping lives here, at the UI seam. The generator itself takes
    /// whatever length it is handed.
    pub fn with_length(self, length: usize) -> Self {
        Self {
            length: length.clamp(MIN_LENGTH, MAX_LENGTH),
            ..self
        }
    }

    /// Number of enabled classes (0 to 4).
    pub fn enabled_classes(&self) -> u32 {
        CharClass::ALL
            .iter()
            .filter(|&&c| self.class_enabled(c))
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lowercase_only_length_16() {
        let options = PasswordOptions::default();
        assert!(options.lowercase);
        assert!(!options.uppercase);
        assert!(!options.numbers);
        assert!(!options.specials);
        assert_eq!(options.length, 16);
        assert_eq!(options.enabled_classes(), 1);
    }

    #[test]
    fn toggled_returns_new_value() {
        let options = PasswordOptions::default();
        let next = options.toggled(CharClass::Numbers);
        assert!(next.numbers);
        assert!(!options.numbers);
        assert_eq!(next.toggled(CharClass::Numbers), options);
    }

    #[test]
    fn with_length_clamps_to_range() {
        let options = PasswordOptions::default();
        assert_eq!(options.with_length(3).length, MIN_LENGTH);
        assert_eq!(options.with_length(200).length, MAX_LENGTH);
        assert_eq!(options.with_length(32).length, 32);
    }

    #[test]
    fn enabled_classes_counts_all_four() {
        let options = PasswordOptions {
            lowercase: true,
            uppercase: true,
            numbers: true,
            specials: true,
            length: 16,
        };
        assert_eq!(options.enabled_classes(), 4);
    }
}
