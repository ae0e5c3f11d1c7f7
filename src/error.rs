//! Error types for the csscrypt library.

use std::fmt;

/// Errors produced by the csscrypt library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssCryptError {
    /// Seed is all-zero or contains values other than 0 and 1.
    InvalidSeed,
    /// A tap position is outside the register.
    InvalidTaps,
    /// Seed length is inconsistent with the declared register size.
    SizeMismatch,
    /// Hex message has an odd number of digits.
    OddLength,
    /// Message contains a character that is not a hexadecimal digit.
    NonHexCharacter,
}

impl fmt::Display for CssCryptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssCryptError::InvalidSeed => {
                write!(f, "Seed must contain at least one 1 bit and only 0/1 values")
            }
            CssCryptError::InvalidTaps => {
                write!(f, "Tap position is outside the valid range")
            }
            CssCryptError::SizeMismatch => {
                write!(f, "Seed length does not match the declared register size")
            }
            CssCryptError::OddLength => {
                write!(f, "Hex message must have an even number of digits")
            }
            CssCryptError::NonHexCharacter => {
                write!(f, "Message contains a non-hexadecimal character")
            }
        }
    }
}

impl std::error::Error for CssCryptError {}
