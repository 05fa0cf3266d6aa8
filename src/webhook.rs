//! Webhook signature computation and verification.
//!
//! The platform signs every webhook delivery by taking the HMAC-SHA256 of the raw
//! request body with the channel secret as the key and sending the base64 digest in
//! the [`SIGNATURE_HEADER`] request header. Verification recomputes that digest and
//! compares in constant time. A mismatched or malformed signature answers `false`;
//! the error path is reserved for an unusable secret.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
// self
use crate::{_prelude::*, auth::ChannelSecret};

/// Request header carrying the webhook signature.
pub const SIGNATURE_HEADER: &str = "x-line-signature";

type HmacSha256 = Hmac<Sha256>;

/// Errors raised for structurally unusable verifier inputs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum SignatureError {
	/// Signing secret was empty.
	#[error("Channel secret must not be empty.")]
	EmptySecret,
}

/// Computes the base64 signature for a raw webhook body.
pub fn signature(secret: &str, body: &[u8]) -> Result<String, SignatureError> {
	Ok(STANDARD.encode(digest(secret, body)?))
}

/// Verifies a webhook signature in constant time.
///
/// Returns `Ok(false)` when the signature does not match or is not valid base64. The
/// body is always the raw request bytes; re-serialized JSON will not verify.
pub fn validate_signature(
	secret: &str,
	body: &[u8],
	provided: &str,
) -> Result<bool, SignatureError> {
	let expected = digest(secret, body)?;
	let Ok(provided) = STANDARD.decode(provided) else {
		return Ok(false);
	};

	Ok(expected.ct_eq(&provided).into())
}

/// Verifier bound to a validated [`ChannelSecret`].
#[derive(Clone, Debug)]
pub struct WebhookVerifier {
	secret: ChannelSecret,
}
impl WebhookVerifier {
	/// Creates a verifier from an already validated secret.
	pub fn new(secret: ChannelSecret) -> Self {
		Self { secret }
	}

	/// Computes the signature the platform would attach to `body`.
	pub fn sign(&self, body: &[u8]) -> Result<String, SignatureError> {
		signature(self.secret.expose(), body)
	}

	/// Verifies a delivery against the stored secret.
	pub fn verify(&self, body: &[u8], provided: &str) -> Result<bool, SignatureError> {
		validate_signature(self.secret.expose(), body, provided)
	}
}

fn digest(secret: &str, body: &[u8]) -> Result<Vec<u8>, SignatureError> {
	if secret.is_empty() {
		return Err(SignatureError::EmptySecret);
	}

	let mut mac =
		HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| SignatureError::EmptySecret)?;

	mac.update(body);

	Ok(mac.finalize().into_bytes().to_vec())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	const SECRET: &str = "test-channel-secret";
	const BODY: &[u8] = br#"{"destination":"U1234","events":[]}"#;

	#[test]
	fn signature_matches_known_vectors() {
		// RFC 4231 test case 2.
		let rfc = signature("Jefe", b"what do ya want for nothing?")
			.expect("Signing should succeed.");

		assert_eq!(rfc, "W9zBRr9gdU5qBCQmCJV1x1oAPwidJzmDnexYuWTsOEM=");

		let line = signature(SECRET, BODY).expect("Signing should succeed.");

		assert_eq!(line, "ImTVBeh1eWngiTtEGiecjgQwpckUiityhxTnYu2Xkq0=");
	}

	#[test]
	fn round_trip_verifies() {
		let sig = signature(SECRET, BODY).expect("Signing should succeed.");

		assert_eq!(validate_signature(SECRET, BODY, &sig), Ok(true));
	}

	#[test]
	fn flipped_body_fails_verification() {
		let sig = signature(SECRET, BODY).expect("Signing should succeed.");
		let mut tampered = BODY.to_vec();

		tampered[0] ^= 0x01;

		assert_eq!(validate_signature(SECRET, &tampered, &sig), Ok(false));
	}

	#[test]
	fn different_secret_fails_verification() {
		let sig = signature(SECRET, BODY).expect("Signing should succeed.");

		assert_eq!(validate_signature("other-secret", BODY, &sig), Ok(false));
	}

	#[test]
	fn malformed_signature_is_false_not_error() {
		assert_eq!(validate_signature(SECRET, BODY, "%%% not base64 %%%"), Ok(false));
		assert_eq!(validate_signature(SECRET, BODY, "c2hvcnQ="), Ok(false));
		assert_eq!(validate_signature(SECRET, BODY, ""), Ok(false));
	}

	#[test]
	fn empty_secret_is_an_error() {
		assert_eq!(validate_signature("", BODY, "sig"), Err(SignatureError::EmptySecret));
		assert_eq!(signature("", BODY), Err(SignatureError::EmptySecret));
	}

	#[test]
	fn verifier_signs_and_verifies() {
		let secret = ChannelSecret::new(SECRET).expect("Secret fixture should be valid.");
		let verifier = WebhookVerifier::new(secret);
		let sig = verifier.sign(BODY).expect("Signing should succeed.");

		assert_eq!(verifier.verify(BODY, &sig), Ok(true));
		assert_eq!(verifier.verify(b"{}", &sig), Ok(false));
	}
}
