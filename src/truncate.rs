// SPDX-License-Identifier: MIT OR Apache-2.0
//! Dynamic truncation, RFC 4226 §5.3.
use crate::{
	error::OtpError,
	mac::{Sha1Digest, DIGEST_LEN},
};

/// Picks a 31-bit value out of `digest`.
///
/// The low nibble of the last byte is an offset; the four bytes starting there are read
/// big-endian and the sign bit is cleared.
pub fn dynamic_truncate(digest: &Sha1Digest) -> u32 {
	let offset = (digest[DIGEST_LEN - 1] & 0xf) as usize;
	let mut window = [0u8; 4];
	window.copy_from_slice(&digest[offset..offset + 4]);
	u32::from_be_bytes(window) & 0x7fff_ffff
}

/// Same as [`dynamic_truncate`], for digests that arrive as raw bytes.
///
/// ```rust
/// use totpee::{error::OtpError, truncate::truncate_slice};
///
/// assert_eq!(truncate_slice(&[0u8; 32]), Err(OtpError::InvalidDigestLength(32)));
/// ```
pub fn truncate_slice(digest: &[u8]) -> Result<u32, OtpError> {
	let digest: &Sha1Digest = digest
		.try_into()
		.map_err(|_| OtpError::InvalidDigestLength(digest.len()))?;
	Ok(dynamic_truncate(digest))
}

#[cfg(test)]
mod tests {
	use super::{dynamic_truncate, truncate_slice};
	use crate::{error::OtpError, hotp::DIGIT_MODULO};

	// RFC 4226 §5.4
	const EXAMPLE: [u8; 20] = [
		0x1f, 0x86, 0x98, 0x69, 0x0e, 0x02, 0xca, 0x16, 0x61, 0x85, 0x50, 0xef, 0x7f, 0x19, 0xda,
		0x8e, 0x94, 0x5b, 0x55, 0x5a,
	];

	#[test]
	fn rfc4226_example() {
		assert_eq!(dynamic_truncate(&EXAMPLE), 0x50ef7f19);
		assert_eq!(dynamic_truncate(&EXAMPLE) % DIGIT_MODULO, 872921);
	}

	#[test]
	fn clears_the_sign_bit() {
		let mut digest = [0xffu8; 20];
		digest[19] = 0xf0;
		assert_eq!(dynamic_truncate(&digest), 0x7fff_ffff);
	}

	#[test]
	fn largest_offset_reads_up_to_byte_18() {
		let mut digest = [0u8; 20];
		digest[15..19].copy_from_slice(&[0x01, 0x02, 0x03, 0x04]);
		digest[19] = 0x0f;
		assert_eq!(dynamic_truncate(&digest), 0x0102_0304);
	}

	#[test]
	fn rejects_other_lengths() {
		assert_eq!(truncate_slice(&EXAMPLE), Ok(0x50ef7f19));
		assert_eq!(truncate_slice(&EXAMPLE[..19]), Err(OtpError::InvalidDigestLength(19)));
		assert_eq!(truncate_slice(&[]), Err(OtpError::InvalidDigestLength(0)));
		assert_eq!(truncate_slice(&[0u8; 32]), Err(OtpError::InvalidDigestLength(32)));
	}
}
