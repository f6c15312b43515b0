// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::hotp::MAX_DIGITS;
use alloc::{
	fmt::{self, Display, Formatter},
	format,
	string::String,
};
use constant_time_eq::constant_time_eq;
use core::{cmp::PartialEq, convert::AsRef, ops::Deref};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// A one-time password.
/// Can just be treated like a normal number, while also having a
/// [Display] implementation that shows it padded with zeroes.
pub struct Otp {
	code: u32,
	length: usize,
}

impl Otp {
	/// `code` must be below `10^length`, and `length` at most [`MAX_DIGITS`].
	#[inline]
	pub(crate) fn new(code: u32, length: usize) -> Self {
		debug_assert!(length <= MAX_DIGITS);
		Self { code, length }
	}

	/// Returns the number of digits the code is displayed with.
	#[inline]
	pub fn digits(&self) -> usize {
		self.length
	}

	/// Checks a code typed by a user, leading zeroes included, in constant time.
	///
	/// ```rust
	/// use totpee::{clock::FixedClock, Totp};
	///
	/// let totp = Totp::new(b"12345678901234567890", None, None, FixedClock(1_234_567_890)).unwrap();
	/// let otp = totp.code();
	/// assert!(otp.matches("005924"));
	/// assert!(!otp.matches("5924"));
	/// ```
	pub fn matches(&self, input: &str) -> bool {
		let (ascii, len) = self.ascii();
		constant_time_eq(&ascii[..len], input.as_bytes())
	}

	fn ascii(&self) -> ([u8; MAX_DIGITS], usize) {
		let mut out = [b'0'; MAX_DIGITS];
		let mut rest = self.code;
		for slot in out[..self.length].iter_mut().rev() {
			*slot = b'0' + (rest % 10) as u8;
			rest /= 10;
		}
		(out, self.length)
	}
}

impl Deref for Otp {
	type Target = u32;

	#[inline]
	fn deref(&self) -> &Self::Target {
		&self.code
	}
}

impl AsRef<u32> for Otp {
	#[inline]
	fn as_ref(&self) -> &u32 {
		&self.code
	}
}

impl PartialEq<u32> for Otp {
	#[inline]
	fn eq(&self, other: &u32) -> bool {
		constant_time_eq(&self.to_ne_bytes(), &other.to_ne_bytes())
	}
}

impl Display for Otp {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{:0width$}", self.code, width = self.length)
	}
}

/// Renders a bare numeric code zero-padded to `digits` characters.
///
/// ```rust
/// assert_eq!(totpee::format_code(42, 6), "000042");
/// ```
pub fn format_code(code: u32, digits: usize) -> String {
	format!("{code:0digits$}")
}
