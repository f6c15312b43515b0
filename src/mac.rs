// SPDX-License-Identifier: MIT OR Apache-2.0
//! HMAC-SHA1 over the 8-byte moving factor.
use digest::{FixedOutputReset, KeyInit};
use hmac::{Hmac, Mac};
use sha1::Sha1;

/// Length of an HMAC-SHA1 output, in bytes.
pub const DIGEST_LEN: usize = 20;

/// An HMAC-SHA1 output. Being an array, it can never have the wrong length.
pub type Sha1Digest = [u8; DIGEST_LEN];

pub(crate) type HmacSha1 = Hmac<Sha1>;

/// Keys an HMAC-SHA1 instance with `secret`.
///
/// HMAC pads short keys and hashes long ones, so every length (empty included) is accepted.
pub(crate) fn keyed(secret: &[u8]) -> HmacSha1 {
	// InvalidLength is never returned for HMAC, only for fixed-key MACs.
	<HmacSha1 as KeyInit>::new_from_slice(secret)
		.unwrap_or_else(|_| unreachable!("HMAC rejected a {}-byte key", secret.len()))
}

/// Finishes `hasher` over `counter` and resets it for the next message.
pub(crate) fn sign_reset(hasher: &mut HmacSha1, counter: &[u8; 8]) -> Sha1Digest {
	Mac::update(hasher, counter);
	let tag = hasher.finalize_fixed_reset();
	let mut digest = [0u8; DIGEST_LEN];
	digest.copy_from_slice(&tag);
	digest
}

/// Computes HMAC-SHA1 with `secret` as the key and `counter` as the message.
///
/// ```rust
/// use totpee::mac::hmac_digest;
///
/// let digest = hmac_digest(&0u64.to_be_bytes(), b"12345678901234567890");
/// assert_eq!(digest[..4], [0xcc, 0x93, 0xcf, 0x18]);
/// ```
pub fn hmac_digest(counter: &[u8; 8], secret: &[u8]) -> Sha1Digest {
	sign_reset(&mut keyed(secret), counter)
}
