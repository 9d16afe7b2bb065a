//! Non-interactive CLI mode: one password per invocation.

mod flags;
mod parse;
mod prompts;

pub use flags::CliFlags;
pub use parse::parse;

use zeroize::Zeroize;

use crate::clipboard;
use crate::options::PasswordOptions;
use crate::pass;
use crate::tui::print_help;

/// Parse arguments, generate, and print or copy the result.
pub fn run(args: &[String]) {
    let flags = match parse(args) {
        Ok(flags) => flags,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Try --help for usage.");
            std::process::exit(2);
        }
    };

    if flags.help {
        print_help();
        return;
    }
    if flags.version {
        println!("passcard {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let options = apply(&flags);
    let mut password = pass::generate(&options);

    if flags.clipboard {
        if clipboard::copy(&password) {
            prompts::copied(flags.quiet);
        } else {
            prompts::warn("Clipboard unavailable, printing instead.", flags.quiet);
            println!("{password}");
        }
    } else {
        println!("{password}");
    }

    if flags.estimate {
        let level = pass::estimate(&options);
        println!("{} (score {})", level.label(), pass::score(&options));
    }

    password.zeroize();
}

/// Fold flags into a `PasswordOptions` value. Length clamping happens here,
/// at the UI seam, with a warning when the requested value was out of range.
fn apply(flags: &CliFlags) -> PasswordOptions {
    let mut options = PasswordOptions::default();

    if flags.all {
        options.lowercase = true;
        options.uppercase = true;
        options.numbers = true;
        options.specials = true;
    }
    if flags.upper {
        options.uppercase = true;
    }
    if flags.numbers {
        options.numbers = true;
    }
    if flags.special {
        options.specials = true;
    }
    if flags.no_lower {
        options.lowercase = false;
    }

    if let Some(length) = flags.length {
        let clamped = options.with_length(length);
        if clamped.length != length {
            prompts::warn(
                &format!("Length {} out of range, using {}", length, clamped.length),
                flags.quiet,
            );
        }
        options = clamped;
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{MAX_LENGTH, MIN_LENGTH};

    #[test]
    fn default_flags_give_default_options() {
        assert_eq!(apply(&CliFlags::default()), PasswordOptions::default());
    }

    #[test]
    fn class_flags_enable_classes() {
        let flags = CliFlags {
            upper: true,
            numbers: true,
            ..CliFlags::default()
        };
        let options = apply(&flags);
        assert!(options.lowercase);
        assert!(options.uppercase);
        assert!(options.numbers);
        assert!(!options.specials);
    }

    #[test]
    fn all_flag_enables_everything() {
        let options = apply(&CliFlags {
            all: true,
            ..CliFlags::default()
        });
        assert_eq!(options.enabled_classes(), 4);
    }

    #[test]
    fn no_lower_can_empty_the_selection() {
        // Generation still works: the pool falls back to lowercase.
        let options = apply(&CliFlags {
            no_lower: true,
            ..CliFlags::default()
        });
        assert_eq!(options.enabled_classes(), 0);
        assert_eq!(pass::generate(&options).len(), options.length);
    }

    #[test]
    fn length_is_clamped_quietly() {
        let flags = CliFlags {
            length: Some(500),
            quiet: true,
            ..CliFlags::default()
        };
        assert_eq!(apply(&flags).length, MAX_LENGTH);

        let flags = CliFlags {
            length: Some(1),
            quiet: true,
            ..CliFlags::default()
        };
        assert_eq!(apply(&flags).length, MIN_LENGTH);
    }
}
