// SPDX-License-Identifier: MIT OR Apache-2.0
use alloc::fmt::{self, Display, Formatter};
#[cfg(feature = "std")]
use std::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
	/// A digest handed to truncation was not 20 bytes long.
	InvalidDigestLength(usize),
	/// The requested code length is outside `1..=9`.
	InvalidDigits(usize),
	/// The time step is zero or does not fit in an `i64`.
	InvalidTimeStep(u64),
	CounterOverflow,
}

impl Display for OtpError {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			OtpError::InvalidDigestLength(len) => {
				write!(f, "digest must be exactly 20 bytes long, got {len}")
			}
			OtpError::InvalidDigits(digits) => {
				write!(f, "code length must be between 1 and 9 digits, got {digits}")
			}
			OtpError::InvalidTimeStep(step) => {
				write!(f, "time step must be a positive number of seconds, got {step}")
			}
			OtpError::CounterOverflow => f.write_str("the HOTP instance's counter has overflowed"),
		}
	}
}

#[cfg(feature = "std")]
impl Error for OtpError {}
