//! Password generation and strength estimation.

pub mod charset;
mod generate;
pub mod strength;

pub use generate::generate;
pub use strength::{StrengthLevel, estimate, score};
