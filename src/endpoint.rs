//! Endpoint descriptors and the base URL set requests resolve against.
//!
//! Every operation in the crate is declared as a const [`Endpoint`]: an HTTP method, a
//! path template with `{name}` placeholders, the [`Surface`] the path resolves against,
//! and a [`ResponseKind`] tag deciding how a successful body is handled. The dispatcher
//! never inspects `Content-Type` to pick between JSON and bytes; the descriptor decides.

// self
use crate::_prelude::*;

/// Production base URL of the Messaging API surface.
pub const DEFAULT_API_BASE: &str = "https://api.line.me";
/// Production base URL of the blob surface serving binary content.
pub const DEFAULT_DATA_BASE: &str = "https://api-data.line.me";

/// API surface an endpoint resolves against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
	/// Core Messaging API host.
	Messaging,
	/// Blob host for uploaded and downloadable content.
	Data,
	/// Channel token endpoints under `/v2/oauth`.
	OauthV2,
	/// Channel token endpoints under `/oauth2/v2.1`.
	OauthV21,
}
impl Surface {
	/// Stable label used in spans and metrics.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Messaging => "messaging",
			Self::Data => "data",
			Self::OauthV2 => "oauth_v2",
			Self::OauthV21 => "oauth_v2_1",
		}
	}
}

/// HTTP method of an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	/// HTTP GET.
	Get,
	/// HTTP POST.
	Post,
	/// HTTP PUT.
	Put,
	/// HTTP DELETE.
	Delete,
}
impl Method {
	/// Canonical method name.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
			Self::Put => "PUT",
			Self::Delete => "DELETE",
		}
	}
}

/// How the body of a successful response is handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseKind {
	/// Body is parsed as JSON; an empty body is treated as `{}`.
	Json,
	/// Body is passed through as raw bytes.
	Binary,
}

/// Immutable endpoint descriptor consumed by the dispatcher.
#[derive(Clone, Copy, Debug)]
pub struct Endpoint {
	/// HTTP method.
	pub method: Method,
	/// Surface the path resolves against.
	pub surface: Surface,
	/// Path template containing `{name}` placeholders.
	pub path: &'static str,
	/// Body handling for successful responses.
	pub response: ResponseKind,
}
impl Endpoint {
	/// Declares an endpoint whose successful body is JSON.
	pub const fn json(method: Method, surface: Surface, path: &'static str) -> Self {
		Self { method, surface, path, response: ResponseKind::Json }
	}

	/// Declares an endpoint whose successful body is raw bytes.
	pub const fn binary(method: Method, surface: Surface, path: &'static str) -> Self {
		Self { method, surface, path, response: ResponseKind::Binary }
	}
}

/// Errors raised while validating base URL overrides.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum EndpointError {
	/// Base URLs must use HTTPS.
	#[error("The {base} base URL must use HTTPS: {url}.")]
	InsecureBase {
		/// Which base failed validation.
		base: &'static str,
		/// URL that failed validation.
		url: String,
	},
	/// Base URLs must not carry a query or fragment.
	#[error("The {base} base URL must not carry a query or fragment: {url}.")]
	ExtraneousComponents {
		/// Which base failed validation.
		base: &'static str,
		/// URL that failed validation.
		url: String,
	},
	/// Base URLs must be able to host path segments.
	#[error("The {base} base URL cannot host path segments: {url}.")]
	CannotBeBase {
		/// Which base failed validation.
		base: &'static str,
		/// URL that failed validation.
		url: String,
	},
}

/// Validated base URLs for the surfaces of [`Surface`].
///
/// Both OAuth surfaces resolve against [`EndpointSet::oauth`]; the version prefix is
/// part of each endpoint's path template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSet {
	/// Messaging API base.
	pub api: Url,
	/// Blob base for binary content.
	pub data: Url,
	/// Channel token base.
	pub oauth: Url,
}
impl EndpointSet {
	/// Creates a new builder seeded with the production bases.
	pub fn builder() -> EndpointSetBuilder {
		EndpointSetBuilder::new()
	}

	/// Returns the base URL the given surface resolves against.
	pub fn base(&self, surface: Surface) -> &Url {
		match surface {
			Surface::Messaging => &self.api,
			Surface::Data => &self.data,
			Surface::OauthV2 | Surface::OauthV21 => &self.oauth,
		}
	}
}
impl Default for EndpointSet {
	fn default() -> Self {
		let api = Url::parse(DEFAULT_API_BASE).expect("Built-in base URL should always parse.");
		let data = Url::parse(DEFAULT_DATA_BASE).expect("Built-in base URL should always parse.");

		Self { api: api.clone(), data, oauth: api }
	}
}

/// Builder for [`EndpointSet`] values.
#[derive(Debug, Default)]
pub struct EndpointSetBuilder {
	/// Messaging API base override.
	pub api: Option<Url>,
	/// Blob base override.
	pub data: Option<Url>,
	/// Channel token base override.
	pub oauth: Option<Url>,
}
impl EndpointSetBuilder {
	/// Creates an empty builder; unset bases fall back to production values.
	pub fn new() -> Self {
		Self::default()
	}

	/// Overrides the Messaging API base.
	pub fn api_base(mut self, url: Url) -> Self {
		self.api = Some(url);

		self
	}

	/// Overrides the blob base.
	pub fn data_base(mut self, url: Url) -> Self {
		self.data = Some(url);

		self
	}

	/// Overrides the channel token base.
	pub fn oauth_base(mut self, url: Url) -> Self {
		self.oauth = Some(url);

		self
	}

	/// Consumes the builder and validates the resulting set.
	pub fn build(self) -> Result<EndpointSet, EndpointError> {
		let defaults = EndpointSet::default();
		let oauth = self.oauth.or_else(|| self.api.clone()).unwrap_or(defaults.oauth);
		let set = EndpointSet {
			api: self.api.unwrap_or(defaults.api),
			data: self.data.unwrap_or(defaults.data),
			oauth,
		};

		validate_base("api", &set.api)?;
		validate_base("data", &set.data)?;
		validate_base("oauth", &set.oauth)?;

		Ok(set)
	}
}

fn validate_base(name: &'static str, url: &Url) -> Result<(), EndpointError> {
	if url.scheme() != "https" {
		return Err(EndpointError::InsecureBase { base: name, url: url.to_string() });
	}
	if url.query().is_some() || url.fragment().is_some() {
		return Err(EndpointError::ExtraneousComponents { base: name, url: url.to_string() });
	}
	if url.cannot_be_a_base() {
		return Err(EndpointError::CannotBeBase { base: name, url: url.to_string() });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn defaults_point_at_production_hosts() {
		let set = EndpointSet::default();

		assert_eq!(set.api.as_str(), "https://api.line.me/");
		assert_eq!(set.data.as_str(), "https://api-data.line.me/");
		assert_eq!(set.oauth.as_str(), "https://api.line.me/");
	}

	#[test]
	fn oauth_base_follows_api_override() {
		let api = Url::parse("https://api.example.test").expect("Failed to parse API base.");
		let set = EndpointSet::builder()
			.api_base(api.clone())
			.build()
			.expect("Failed to build endpoint set.");

		assert_eq!(set.oauth, api);
		assert_eq!(set.data.as_str(), "https://api-data.line.me/");
	}

	#[test]
	fn insecure_base_is_rejected() {
		let err = EndpointSet::builder()
			.api_base(Url::parse("http://api.example.test").expect("Failed to parse API base."))
			.build()
			.expect_err("Plain HTTP bases should be rejected.");

		assert!(matches!(err, EndpointError::InsecureBase { base: "api", .. }));
	}

	#[test]
	fn query_carrying_base_is_rejected() {
		let err = EndpointSet::builder()
			.data_base(
				Url::parse("https://data.example.test/?channel=1")
					.expect("Failed to parse data base."),
			)
			.build()
			.expect_err("Bases with a query should be rejected.");

		assert!(matches!(err, EndpointError::ExtraneousComponents { base: "data", .. }));
	}

	#[test]
	fn surfaces_resolve_against_their_bases() {
		let set = EndpointSet::default();

		assert_eq!(set.base(Surface::Messaging), &set.api);
		assert_eq!(set.base(Surface::Data), &set.data);
		assert_eq!(set.base(Surface::OauthV2), &set.oauth);
		assert_eq!(set.base(Surface::OauthV21), &set.oauth);
	}
}
