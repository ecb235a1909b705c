use thiserror::Error;

use crate::trie::MAX_DIGITS;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("The digit count must be between 1 and {MAX_DIGITS}, got {0}")]
    DigitCount(u32),
    #[error("The key: '{key}' does not fit within {digits} decimal digits")]
    KeyOutOfRange { key: u64, digits: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
