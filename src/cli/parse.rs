use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(&'static str),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(flag) => write!(f, "Missing value after {}", flag),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-e" | "--estimate" => flags.estimate = true,
            "-a" | "--all" => flags.all = true,
            "--upper" => flags.upper = true,
            "--numbers" => flags.numbers = true,
            "--special" => flags.special = true,
            "--no-lower" => flags.no_lower = true,
            "-l" | "--length" => {
                i += 1;
                if i >= args.len() {
                    return Err(ParseError::MissingValue("--length"));
                }
                flags.length = Some(
                    args[i]
                        .parse()
                        .map_err(|_| ParseError::InvalidNumber(args[i].clone()))?,
                );
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(rest: &[&str]) -> Vec<String> {
        std::iter::once("passcard")
            .chain(rest.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_gives_defaults() {
        assert_eq!(parse(&args(&[])).unwrap(), CliFlags::default());
    }

    #[test]
    fn class_and_length_flags() {
        let flags = parse(&args(&["--upper", "--numbers", "-l", "24"])).unwrap();
        assert!(flags.upper);
        assert!(flags.numbers);
        assert!(!flags.special);
        assert_eq!(flags.length, Some(24));
    }

    #[test]
    fn short_and_long_forms_match() {
        let short = parse(&args(&["-a", "-b", "-e", "-q"])).unwrap();
        let long = parse(&args(&["--all", "--board", "--estimate", "--quiet"])).unwrap();
        assert_eq!(short, long);
    }

    #[test]
    fn bad_length_is_an_error() {
        assert_eq!(
            parse(&args(&["-l", "lots"])),
            Err(ParseError::InvalidNumber("lots".into()))
        );
        assert_eq!(
            parse(&args(&["--length"])),
            Err(ParseError::MissingValue("--length"))
        );
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert_eq!(
            parse(&args(&["--hex"])),
            Err(ParseError::UnknownArg("--hex".into()))
        );
    }
}
