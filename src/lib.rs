// SPDX-License-Identifier: MIT OR Apache-2.0
//! Time-based (RFC 6238) and counter-based (RFC 4226) one-time passwords over HMAC-SHA1.
//!
//! The pipeline is `time → counter → HMAC-SHA1 → dynamic truncation → mod 10^digits`,
//! and every stage is exposed on its own.
//!
//! ```rust
//! let code = totpee::at(b"12345678901234567890", 59);
//! assert_eq!(code, 287082);
//! assert_eq!(totpee::format_code(totpee::at(b"12345678901234567890", 1_234_567_890), 6), "005924");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod clock;
pub mod counter;
pub mod error;
pub mod hotp;
pub mod mac;
pub mod otp;
pub mod totp;
pub mod truncate;

pub use clock::Clock;
pub use error::OtpError;
pub use hotp::{Hotp, DIGITS, DIGIT_MODULO};
pub use otp::{format_code, Otp};
#[cfg(feature = "std")]
pub use totp::now;
pub use totp::{at, now_with, Totp};
