// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::{
	clock::Clock,
	counter::{self, steps_since, T0, TIME_STEP},
	hotp::{self, hotp, DIGITS},
	mac::{self, HmacSha1},
	{error::OtpError, otp::Otp},
};
use core::fmt::{self, Debug, Formatter};
#[cfg(feature = "std")]
use {
	crate::clock::{unix_seconds, SystemClock},
	std::time::SystemTime,
};

/// Computes the 6-digit TOTP value of `secret` at `unix_time`, with a 30 second step.
///
/// ```rust
/// assert_eq!(totpee::at(b"12345678901234567890", 1_111_111_109), 81804);
/// ```
pub fn at(secret: &[u8], unix_time: i64) -> u32 {
	hotp(&counter::time_to_counter(unix_time), secret)
}

/// Computes the TOTP value of `secret` at whatever time `clock` reports.
pub fn now_with<C: Clock + ?Sized>(secret: &[u8], clock: &C) -> u32 {
	at(secret, clock.unix_time())
}

/// Computes the TOTP value of `secret` for the current system time.
#[cfg(feature = "std")]
pub fn now(secret: &[u8]) -> u32 {
	now_with(secret, &SystemClock)
}

/// A Time-based One-Time Password (TOTP) generator.
///
/// It is a one-time password generator that is based on the current time,
/// and as such, it takes a [Clock] that is asked for the current time,
/// allowing it to work on both modern platforms and minimalist embedded
/// platforms, as long as there is some way to get the current time.
///
/// Generating a code only reads the generator, so one instance can be shared between threads.
///
/// ```rust
/// use totpee::{clock::FixedClock, Totp};
///
/// let totp = Totp::new(b"12345678901234567890", 8, None, FixedClock(59)).unwrap();
/// assert_eq!(totp.code().to_string(), "94287082");
/// assert_eq!(totp.code_at(1_111_111_109).to_string(), "07081804");
/// ```
#[derive(Clone)]
pub struct Totp<C: Clock> {
	hasher: HmacSha1,
	length: usize,
	modulo: u32,
	interval: i64,
	t0: i64,
	clock: C,
}

impl<C: Clock> Totp<C> {
	/// Creates a new TOTP instance, using the given bytes as the secret,
	/// the given length, interval and clock.
	///
	/// `length` defaults to 6 digits and `interval` to 30 seconds.
	pub fn new<A: AsRef<[u8]>, L: Into<Option<usize>>, I: Into<Option<u64>>>(
		key: A,
		length: L,
		interval: I,
		clock: C,
	) -> Result<Self, OtpError> {
		let length = length.into().unwrap_or(DIGITS);
		let modulo = hotp::modulo_for(length)?;
		let step = interval.into().unwrap_or(TIME_STEP);
		let interval = counter::checked_step(step)?;
		log::trace!("new TOTP generator with {length} digits every {interval}s");
		Ok(Totp {
			hasher: mac::keyed(key.as_ref()),
			length,
			modulo,
			interval,
			t0: T0,
			clock,
		})
	}

	/// Counts time steps from `t0` instead of the Unix epoch.
	pub fn with_t0(mut self, t0: i64) -> Self {
		log::trace!("TOTP generator counting from t0 = {t0}");
		self.t0 = t0;
		self
	}

	/// Returns the code length.
	#[inline]
	pub fn digits(&self) -> usize {
		self.length
	}

	/// Returns the time step, in seconds.
	#[inline]
	pub fn interval(&self) -> u64 {
		self.interval as u64
	}

	/// Returns the time steps are counted from.
	#[inline]
	pub fn t0(&self) -> i64 {
		self.t0
	}

	/// The HOTP counter used at the given time.
	pub fn counter_at(&self, time: i64) -> u64 {
		steps_since(time, self.t0, self.interval) as u64
	}

	/// Calculate the OTP value for the given time, represented as seconds from the unix epoch.
	pub fn code_at(&self, time: i64) -> Otp {
		let counter = counter::encode(time, self.t0, self.interval);
		let code = hotp::derive(&mut self.hasher.clone(), &counter, self.modulo);
		Otp::new(code, self.length)
	}

	#[cfg(feature = "std")]
	/// Calculate the OTP value for the given [SystemTime](std::time::SystemTime).
	pub fn code_at_system_time(&self, system_time: SystemTime) -> Otp {
		self.code_at(unix_seconds(system_time))
	}

	/// Calculate the OTP value for the current time.
	pub fn code(&self) -> Otp {
		self.code_at(self.clock.unix_time())
	}

	/// Seconds until the code shown at `time` is replaced.
	pub fn remaining_at(&self, time: i64) -> u64 {
		let elapsed = time.wrapping_sub(self.t0);
		let into_step = elapsed % self.interval;
		if elapsed >= 0 {
			(self.interval - into_step) as u64
		} else if elapsed > -self.interval {
			// step 0 covers both sides of t0
			self.interval as u64 + elapsed.unsigned_abs()
		} else {
			1 + into_step.unsigned_abs()
		}
	}

	/// Seconds until the current code is replaced.
	pub fn remaining(&self) -> u64 {
		self.remaining_at(self.clock.unix_time())
	}
}

#[cfg(feature = "std")]
impl Totp<SystemClock> {
	/// Creates a new TOTP instance, using the given bytes as the secret,
	/// the given length, and the [SystemTime](std::time::SystemTime) to determine the current time.
	pub fn new_from_system_time<A: AsRef<[u8]>, L: Into<Option<usize>>, I: Into<Option<u64>>>(
		key: A,
		length: L,
		interval: I,
	) -> Result<Self, OtpError> {
		Self::new(key, length, interval, SystemClock)
	}
}

impl<C: Clock> Debug for Totp<C> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Totp")
			.field("digits", &self.length)
			.field("interval", &self.interval)
			.field("t0", &self.t0)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::{at, now_with, Totp};
	use crate::{clock::FixedClock, error::OtpError, hotp::Hotp};
	use core::cell::Cell;

	const SECRET: &[u8] = b"12345678901234567890";

	// RFC 6238 Appendix B, SHA-1 column.
	const VECTORS: [(i64, u32, &str); 6] = [
		(59, 287082, "94287082"),
		(1_111_111_109, 81804, "07081804"),
		(1_111_111_111, 50471, "14050471"),
		(1_234_567_890, 5924, "89005924"),
		(2_000_000_000, 279037, "69279037"),
		(20_000_000_000, 353130, "65353130"),
	];

	#[test]
	fn rfc6238_six_digits() {
		for (time, six, _) in VECTORS {
			assert_eq!(at(SECRET, time), six, "at time {time}");
		}
	}

	#[test]
	fn rfc6238_eight_digits() {
		let totp = Totp::new(SECRET, 8, None, FixedClock(0)).unwrap();
		for (time, _, eight) in VECTORS {
			assert!(totp.code_at(time).matches(eight), "at time {time}");
		}
	}

	#[test]
	fn clock_is_consulted_on_every_call() {
		let time = Cell::new(59i64);
		let clock = || time.get();
		let totp = Totp::new(SECRET, None, None, &clock).unwrap();
		assert_eq!(totp.code(), 287082);
		time.set(1_111_111_111);
		assert_eq!(totp.code(), 50471);
		assert_eq!(now_with(SECRET, &clock), 50471);
	}

	#[test]
	fn counter_follows_hotp() {
		let totp = Totp::new(SECRET, None, None, FixedClock(0)).unwrap();
		let mut hotp = Hotp::new(SECRET, None).unwrap();
		for time in [0, 29, 30, 59, 1_111_111_109] {
			assert_eq!(totp.code_at(time), hotp.code_at(totp.counter_at(time)));
		}
		assert_eq!(totp.counter_at(59), 1);
		assert_eq!(totp.counter_at(-30), u64::MAX);
	}

	#[test]
	fn same_step_same_code() {
		assert_eq!(at(SECRET, 30), at(SECRET, 59));
		assert_eq!(at(SECRET, 1_111_111_110), at(SECRET, 1_111_111_139));
		assert_ne!(at(SECRET, 59), at(SECRET, 60));
	}

	#[test]
	fn pre_epoch_step_zero_is_sixty_seconds_wide() {
		assert_eq!(at(SECRET, -29), 755224);
		assert_eq!(at(SECRET, -1), at(SECRET, 29));
		assert_ne!(at(SECRET, -30), at(SECRET, -29));
	}

	#[test]
	fn custom_t0_and_interval() {
		let totp = Totp::new(SECRET, None, 60, FixedClock(0))
			.unwrap()
			.with_t0(1_000);
		assert_eq!(totp.interval(), 60);
		assert_eq!(totp.t0(), 1_000);
		assert_eq!(totp.counter_at(1_059), 0);
		assert_eq!(totp.counter_at(1_060), 1);
		assert_eq!(totp.code_at(1_060), 287082);
	}

	#[test]
	fn remaining_seconds() {
		let totp = Totp::new(SECRET, None, None, FixedClock(59)).unwrap();
		assert_eq!(totp.remaining(), 1);
		assert_eq!(totp.remaining_at(0), 30);
		assert_eq!(totp.remaining_at(31), 29);
		assert_eq!(totp.remaining_at(-1), 31);
		assert_eq!(totp.remaining_at(-30), 1);
		assert_eq!(totp.remaining_at(-31), 2);
	}

	#[test]
	fn rejects_bad_configuration() {
		assert_eq!(
			Totp::new(SECRET, None, 0, FixedClock(0)).unwrap_err(),
			OtpError::InvalidTimeStep(0)
		);
		assert_eq!(
			Totp::new(SECRET, None, u64::MAX, FixedClock(0)).unwrap_err(),
			OtpError::InvalidTimeStep(u64::MAX)
		);
		assert_eq!(
			Totp::new(SECRET, 12, None, FixedClock(0)).unwrap_err(),
			OtpError::InvalidDigits(12)
		);
	}

	#[cfg(feature = "std")]
	#[test]
	fn now_matches_at() {
		use crate::clock::{Clock, SystemClock};

		let before = SystemClock.unix_time();
		let code = super::now(SECRET);
		let after = SystemClock.unix_time();
		assert!(code == at(SECRET, before) || code == at(SECRET, after));
		assert!(code < 1_000_000);
	}

	#[cfg(feature = "std")]
	#[test]
	fn system_time_entry_points() {
		use std::time::{Duration, UNIX_EPOCH};

		let totp = Totp::new_from_system_time(SECRET, 8, None).unwrap();
		let then = UNIX_EPOCH + Duration::from_secs(1_234_567_890);
		assert!(totp.code_at_system_time(then).matches("89005924"));
		assert_eq!(totp.code().digits(), 8);
	}
}
