//! csscrypt stream cipher engine.
//!
//! csscrypt is a classical combination stream cipher in the style of
//! the Content Scrambling System: two linear-feedback shift registers
//! produce byte streams that are added with carry propagation into a
//! keystream, which is XORed against hex-encoded messages.
//!
//! This is a breakable, classical construction — useful for studying
//! LFSR state machines and keystream combiners, not for protecting
//! data.
//!
//! # Architecture
//!
//! ```text
//! Lfsr  (atomic unit — bit-sequence shift register with XOR feedback,
//!        cycle/period verification)
//!     × 2 exclusively owned
//! Css   (combiner — adds the two register bytes with carry, XORs the
//!        keystream against messages)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use csscrypt::{Css, Lfsr};
//!
//! let a = Lfsr::from_value(17, 1 << 16, &[14, 0]).unwrap();
//! let b = Lfsr::from_value(25, 1 << 24, &[12, 4, 3, 0]).unwrap();
//! let mut cipher = Css::new(a, b);
//!
//! let ciphertext = cipher.encode("ffffffffff").unwrap();
//! assert_ne!(ciphertext, "ffffffffff");
//! assert_eq!(cipher.decode(&ciphertext).unwrap(), "ffffffffff");
//! ```
//!
//! Verify that a register is maximal-length before using it:
//!
//! ```
//! use csscrypt::Lfsr;
//!
//! let mut lfsr = Lfsr::from_value(8, 0b1001_0110, &[2, 3, 4]).unwrap();
//! assert!(lfsr.check_period().is_full_period());
//! ```

#![deny(clippy::all)]

pub mod error;

mod css;
mod lfsr;
pub mod utils;

pub use css::Css;
pub use error::CssCryptError;
pub use lfsr::{CyclePolicy, Lfsr, PeriodOutcome};
