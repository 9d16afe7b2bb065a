#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub estimate: bool,
    pub all: bool,
    pub upper: bool,
    pub numbers: bool,
    pub special: bool,
    pub no_lower: bool,
    pub length: Option<usize>,
}
