// SPDX-License-Identifier: MIT OR Apache-2.0
//! Conversion of Unix time into the moving factor fed to HOTP
//! (RFC 6238 §4.2).
use crate::error::OtpError;

/// Unix time from which time steps are counted.
pub const T0: i64 = 0;

/// Length of one time step, in seconds.
pub const TIME_STEP: u64 = 30;

/// Narrows a step length to the signed type used for division, rejecting 0 and
/// anything above `i64::MAX`.
pub(crate) fn checked_step(step: u64) -> Result<i64, OtpError> {
	match i64::try_from(step) {
		Ok(step) if step > 0 => Ok(step),
		_ => Err(OtpError::InvalidTimeStep(step)),
	}
}

/// Counts the time steps between `t0` and `timestamp`.
///
/// The division truncates toward zero, so every timestamp in `(t0 - step, t0 + step)`
/// lands on step 0. `step` comes out of [`checked_step`], so it is positive.
#[inline]
pub(crate) fn steps_since(timestamp: i64, t0: i64, step: i64) -> i64 {
	timestamp.wrapping_sub(t0) / step
}

/// Negative step counts keep their two's-complement bit pattern, so `t0 - step`
/// encodes as `u64::MAX`.
pub(crate) fn encode(timestamp: i64, t0: i64, step: i64) -> [u8; 8] {
	let steps = steps_since(timestamp, t0, step);
	log::trace!("timestamp {timestamp} is step {steps} (t0 = {t0}, step = {step}s)");
	(steps as u64).to_be_bytes()
}

/// Encodes `timestamp` as the 8-byte big-endian counter, using [`T0`] and [`TIME_STEP`].
///
/// ```rust
/// use totpee::counter::time_to_counter;
///
/// assert_eq!(time_to_counter(59), [0, 0, 0, 0, 0, 0, 0, 1]);
/// ```
#[inline]
pub fn time_to_counter(timestamp: i64) -> [u8; 8] {
	encode(timestamp, T0, TIME_STEP as i64)
}

/// Encodes `timestamp` as the 8-byte big-endian counter for an arbitrary epoch and step.
///
/// Fails with [`OtpError::InvalidTimeStep`] when `step` is 0 or larger than `i64::MAX`.
///
/// ```rust
/// use totpee::{counter::time_to_counter_with, OtpError};
///
/// assert_eq!(time_to_counter_with(1_060, 1_000, 60), Ok(1u64.to_be_bytes()));
/// assert_eq!(time_to_counter_with(1_060, 1_000, 0), Err(OtpError::InvalidTimeStep(0)));
/// ```
pub fn time_to_counter_with(timestamp: i64, t0: i64, step: u64) -> Result<[u8; 8], OtpError> {
	Ok(encode(timestamp, t0, checked_step(step)?))
}
