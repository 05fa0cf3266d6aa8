//! Demonstrates webhook signature verification: the platform signs every delivery with
//! the channel secret, and the receiver checks the `x-line-signature` header against
//! the raw body bytes before trusting the payload.

// crates.io
use color_eyre::Result;
// self
use line_bot_client::{auth::ChannelSecret, webhook::WebhookVerifier};

fn main() -> Result<()> {
	color_eyre::install()?;

	let secret = ChannelSecret::new("demo-channel-secret")?;
	let verifier = WebhookVerifier::new(secret);
	let body = br#"{"destination":"U4af4980629","events":[{"type":"follow"}]}"#;

	// A real receiver reads this value from the `x-line-signature` request header;
	// here the verifier plays the platform's side and signs the body itself.
	let signature = verifier.sign(body)?;

	assert!(verifier.verify(body, &signature)?);
	println!("Genuine delivery accepted.");

	// Verification runs over the exact raw bytes, so any tampering fails - as does a
	// re-serialized body, which is why receivers must verify before parsing.
	let mut tampered = body.to_vec();

	tampered[10] ^= 0x01;

	assert!(!verifier.verify(&tampered, &signature)?);
	println!("Tampered delivery rejected.");

	Ok(())
}
