// SPDX-License-Identifier: MIT OR Apache-2.0
//! Time sources for TOTP generation.
#[cfg(feature = "std")]
use std::time::{SystemTime, UNIX_EPOCH};

/// Something that can tell the current Unix time, in whole seconds.
///
/// Any `Fn() -> i64` closure is a clock, which lets embedded targets plug in
/// whatever timekeeping they have.
pub trait Clock {
	fn unix_time(&self) -> i64;
}

impl<F: Fn() -> i64> Clock for F {
	#[inline]
	fn unix_time(&self) -> i64 {
		self()
	}
}

/// A clock stuck at one instant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
	#[inline]
	fn unix_time(&self) -> i64 {
		self.0
	}
}

/// The operating system's wall clock.
#[cfg(feature = "std")]
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
	fn unix_time(&self) -> i64 {
		unix_seconds(SystemTime::now())
	}
}

/// Converts a [SystemTime] to whole seconds relative to the epoch.
/// Times before 1970 come out negative rather than failing.
#[cfg(feature = "std")]
pub fn unix_seconds(time: SystemTime) -> i64 {
	match time.duration_since(UNIX_EPOCH) {
		Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
		Err(before) => i64::try_from(before.duration().as_secs())
			.map(|secs| -secs)
			.unwrap_or(i64::MIN),
	}
}
