//! Client-level error types shared across dispatch, the typed facades, and the webhook verifier.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration or validation problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Base URL overrides were rejected during construction.
	#[error("{0}")]
	Endpoint(
		#[from]
		#[source]
		crate::endpoint::EndpointError,
	),
	/// Platform answered with a non-success status.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Success body could not be decoded into the expected shape.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Webhook signature input was structurally unusable.
	#[error("{0}")]
	Signature(
		#[from]
		#[source]
		crate::webhook::SignatureError,
	),
}

/// Configuration and validation failures raised before any request leaves the process.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Channel access token was empty or whitespace.
	#[error("Channel access token must not be empty.")]
	EmptyChannelAccessToken,
	/// Channel secret was empty or whitespace.
	#[error("Channel secret must not be empty.")]
	EmptyChannelSecret,
	/// Path template placeholders and supplied values disagree.
	#[error("Path template `{path}` expects {expected} values but received {supplied}.")]
	PathValueArity {
		/// Endpoint path template.
		path: &'static str,
		/// Placeholder count declared by the template.
		expected: usize,
		/// Values supplied by the caller.
		supplied: usize,
	},
	/// Upload carries a media type the platform rejects for rich menu images.
	#[error("Rich menu images must be image/jpeg or image/png.")]
	UnsupportedImageType {
		/// Media type supplied by the caller.
		content_type: String,
	},
	/// Request model could not be serialized to JSON.
	#[error("Request body could not be serialized to JSON.")]
	RequestSerialize {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
	/// Insight query date could not be rendered into the wire format.
	#[error("Insight query date could not be formatted.")]
	DateFormat {
		/// Underlying formatting failure.
		#[source]
		source: time::error::Format,
	},
}

/// Error answer from the platform (any non-2xx status).
///
/// The raw body is retained verbatim for diagnosis; `message` and `details` are
/// filled in when the body parses as the platform's error payload.
#[derive(Debug, ThisError)]
#[error("Platform returned HTTP {status}: {message}")]
pub struct ApiError {
	/// HTTP status code of the response.
	pub status: u16,
	/// Platform-supplied failure summary, or the raw body when unparsable.
	pub message: String,
	/// Structured detail entries accompanying the failure.
	pub details: Vec<ErrorDetail>,
	/// Response body exactly as received.
	pub body: String,
	/// Request identifier attached by the platform, when present.
	pub request_id: Option<String>,
}
impl ApiError {
	pub(crate) fn from_response(status: u16, request_id: Option<String>, body: &[u8]) -> Self {
		let text = String::from_utf8_lossy(body).into_owned();
		let (message, details) = match serde_json::from_slice::<ErrorBody>(body) {
			Ok(parsed) => (parsed.message, parsed.details),
			Err(_) if text.trim().is_empty() => ("no error payload".into(), Vec::new()),
			Err(_) => (text.trim().to_owned(), Vec::new()),
		};

		Self { status, message, details, body: text, request_id }
	}
}

/// One entry of the platform's error `details` array.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ErrorDetail {
	/// Human-readable explanation of the offending input.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
	/// Dotted path of the request property that failed validation.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub property: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
	message: String,
	#[serde(default)]
	details: Vec<ErrorDetail>,
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the platform.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the platform.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Failures decoding a successful response body.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Body was JSON but not the expected shape.
	#[error("Response body is not the expected JSON shape.")]
	Body {
		/// Structured parsing failure with the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::error::Error>,
		/// HTTP status of the response that carried the body.
		status: u16,
	},
	/// Endpoint delivered raw bytes; there is no JSON to decode.
	#[error("Response body is binary and cannot be decoded as JSON.")]
	BinaryBody {
		/// HTTP status of the response that carried the body.
		status: u16,
	},
}
