//! Channel credentials and their redaction rules.
//!
//! Both wrappers validate at construction so an empty credential is rejected before
//! any request is attempted, and both keep the secret material out of `Debug` and
//! `Display` output.

// self
use crate::{_prelude::*, error::ConfigError};

/// Long-lived bearer credential for the Messaging API.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChannelAccessToken(String);
impl ChannelAccessToken {
	/// Wraps a channel access token, rejecting empty or whitespace-only values.
	pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
		let value = value.into();

		if value.trim().is_empty() {
			return Err(ConfigError::EmptyChannelAccessToken);
		}

		Ok(Self(value))
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for ChannelAccessToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl TryFrom<String> for ChannelAccessToken {
	type Error = ConfigError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl From<ChannelAccessToken> for String {
	fn from(token: ChannelAccessToken) -> Self {
		token.0
	}
}
impl Debug for ChannelAccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ChannelAccessToken").field(&"<redacted>").finish()
	}
}
impl Display for ChannelAccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Shared secret used to sign and verify webhook payloads.
#[derive(Clone, PartialEq, Eq)]
pub struct ChannelSecret(String);
impl ChannelSecret {
	/// Wraps a channel secret, rejecting empty or whitespace-only values.
	pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
		let value = value.into();

		if value.trim().is_empty() {
			return Err(ConfigError::EmptyChannelSecret);
		}

		Ok(Self(value))
	}

	/// Returns the inner secret value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for ChannelSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for ChannelSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ChannelSecret").field(&"<redacted>").finish()
	}
}
impl Display for ChannelSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn token_formatters_redact() {
		let token =
			ChannelAccessToken::new("super-secret").expect("Failed to wrap channel access token.");

		assert_eq!(format!("{token:?}"), "ChannelAccessToken(\"<redacted>\")");
		assert_eq!(format!("{token}"), "<redacted>");
	}

	#[test]
	fn empty_token_is_rejected() {
		assert!(matches!(
			ChannelAccessToken::new(""),
			Err(ConfigError::EmptyChannelAccessToken)
		));
		assert!(matches!(
			ChannelAccessToken::new("   "),
			Err(ConfigError::EmptyChannelAccessToken)
		));
	}

	#[test]
	fn empty_secret_is_rejected() {
		assert!(matches!(ChannelSecret::new(""), Err(ConfigError::EmptyChannelSecret)));
	}

	#[test]
	fn token_deserializes_through_validation() {
		let token: ChannelAccessToken =
			serde_json::from_str("\"issued-token\"").expect("Failed to deserialize token.");

		assert_eq!(token.expose(), "issued-token");
		assert!(serde_json::from_str::<ChannelAccessToken>("\"\"").is_err());
	}
}
