// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::{
	error::OtpError,
	mac::{self, HmacSha1},
	otp::Otp,
	truncate::dynamic_truncate,
};
use core::fmt::{self, Debug, Formatter};

/// Default code length.
pub const DIGITS: usize = 6;

/// `10^DIGITS`, the modulus applied to truncated digests.
pub const DIGIT_MODULO: u32 = 10u32.pow(DIGITS as u32);

/// Longest code whose modulus still fits in a `u32`.
pub const MAX_DIGITS: usize = 9;

pub(crate) fn modulo_for(digits: usize) -> Result<u32, OtpError> {
	if (1..=MAX_DIGITS).contains(&digits) {
		Ok(10u32.pow(digits as u32))
	} else {
		Err(OtpError::InvalidDigits(digits))
	}
}

/// Derives the 6-digit HOTP value for an encoded counter.
///
/// ```rust
/// use totpee::hotp::hotp;
///
/// assert_eq!(hotp(&1u64.to_be_bytes(), b"12345678901234567890"), 287082);
/// ```
pub fn hotp(counter: &[u8; 8], secret: &[u8]) -> u32 {
	dynamic_truncate(&mac::hmac_digest(counter, secret)) % DIGIT_MODULO
}

/// A hash-based One-Time Password (HOTP) generator.
///
/// It is a one-time password generator that is based on a counter,
/// which is usually incremented by 1 each time it is called.
///
/// ```rust
/// use totpee::Hotp;
///
/// // Initialize a new HOTP instance
/// let mut hotp = Hotp::new(b"12345678901234567890", 6).unwrap();
/// // Calculate the OTP value for a counter of "0"
/// let otp = hotp.code();
/// assert_eq!(otp, 755224);
/// assert_eq!(otp.to_string(), "755224");
/// ```
#[derive(Clone)]
pub struct Hotp {
	hasher: HmacSha1,
	counter: u64,
	length: usize,
	modulo: u32,
}

impl Hotp {
	/// Creates a new HOTP instance, using the given bytes as the secret.
	///
	/// `length` defaults to [`DIGITS`] and must be within `1..=9`.
	pub fn new<A: AsRef<[u8]>, L: Into<Option<usize>>>(
		key: A,
		length: L,
	) -> Result<Self, OtpError> {
		let length = length.into().unwrap_or(DIGITS);
		let modulo = modulo_for(length)?;
		log::trace!("new HOTP generator with {length} digits");
		Ok(Hotp {
			hasher: mac::keyed(key.as_ref()),
			counter: 0,
			length,
			modulo,
		})
	}

	/// Returns the current counter value.
	#[inline]
	pub fn counter(&self) -> u64 {
		self.counter
	}

	/// Returns the code length.
	#[inline]
	pub fn digits(&self) -> usize {
		self.length
	}

	/// Increments the counter value.
	pub fn increment_counter(&mut self) -> Result<u64, OtpError> {
		self.counter = self
			.counter
			.checked_add(1)
			.ok_or(OtpError::CounterOverflow)?;
		Ok(self.counter)
	}

	/// Sets the counter to the specified value.
	#[inline]
	pub fn set_counter(&mut self, counter: u64) {
		self.counter = counter;
	}

	/// Calculate the OTP value for an arbitrary counter, leaving the stored one alone.
	pub fn code_at(&mut self, counter: u64) -> Otp {
		let code = derive(&mut self.hasher, &counter.to_be_bytes(), self.modulo);
		Otp::new(code, self.length)
	}

	/// Calculate the OTP value, using the current counter.
	/// This does NOT increment the counter!
	pub fn code(&mut self) -> Otp {
		self.code_at(self.counter)
	}

	/// Calculates the OTP value using the current counter,
	/// and then increments the counter afterwards.
	pub fn code_increment(&mut self) -> Result<Otp, OtpError> {
		let code = self.code();
		self.increment_counter()?;
		Ok(code)
	}
}

impl Debug for Hotp {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Hotp")
			.field("counter", &self.counter)
			.field("digits", &self.length)
			.finish_non_exhaustive()
	}
}

/// Runs the HMAC, truncation and reduction steps with an already keyed hasher.
pub(crate) fn derive(hasher: &mut HmacSha1, counter: &[u8; 8], modulo: u32) -> u32 {
	dynamic_truncate(&mac::sign_reset(hasher, counter)) % modulo
}
