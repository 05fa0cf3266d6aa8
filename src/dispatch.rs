//! Low-level request dispatcher shared by every typed facade.
//!
//! [`Dispatcher::dispatch`] resolves an [`ApiCall`] against the configured
//! [`EndpointSet`], injects the bearer and client identity headers, drains the one-shot
//! header slot, performs exactly one round trip through the [`HttpTransport`], and
//! classifies the answer: non-2xx statuses become [`ApiError`], successful bodies become
//! an [`Envelope`] holding parsed JSON or raw bytes depending on the endpoint's
//! [`ResponseKind`]. There are no retries and no caching at this layer.

// crates.io
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	auth::ChannelAccessToken,
	endpoint::{Endpoint, EndpointSet, ResponseKind},
	error::{ApiError, ConfigError, DecodeError, TransportError},
	http::{
		HttpTransport, OneShotHeaderSlot, TransportBody, TransportRequest, TransportResponse,
		UploadField,
	},
	obs::{self, RequestOutcome, RequestSpan},
};

/// Response header carrying the platform's delivery tracking identifier.
pub const REQUEST_ID_HEADER: &str = "x-line-request-id";
/// Response header carrying the identifier of an accepted asynchronous request.
pub const ACCEPTED_REQUEST_ID_HEADER: &str = "x-line-accepted-request-id";

const USER_AGENT: &str = concat!("line-bot-client/", env!("CARGO_PKG_VERSION"));

/// Future returned by [`Dispatcher::dispatch`].
pub type DispatchFuture<'a> = Pin<Box<dyn Future<Output = Result<Envelope>> + 'a + Send>>;

/// Request body accepted by [`ApiCall::payload`].
#[derive(Clone, Debug)]
pub enum RequestPayload {
	/// JSON document.
	Json(serde_json::Value),
	/// `application/x-www-form-urlencoded` pairs.
	Form(Vec<(String, String)>),
	/// Raw bytes with their media type.
	Binary {
		/// Value of the `Content-Type` header.
		content_type: String,
		/// Body bytes.
		bytes: Vec<u8>,
	},
	/// `multipart/form-data` field set.
	Multipart(Vec<UploadField>),
}
impl RequestPayload {
	/// Serializes a request model into a JSON payload.
	pub fn json(value: &impl Serialize) -> Result<Self, ConfigError> {
		Ok(Self::Json(
			serde_json::to_value(value).map_err(|source| ConfigError::RequestSerialize { source })?,
		))
	}
}

/// One fully described API call: endpoint descriptor plus per-call parameters.
#[derive(Clone, Debug)]
pub struct ApiCall<'a> {
	endpoint: Endpoint,
	path_values: &'a [&'a str],
	query: Vec<(String, String)>,
	payload: Option<RequestPayload>,
}
impl<'a> ApiCall<'a> {
	/// Starts a call for the given endpoint.
	pub fn new(endpoint: Endpoint) -> Self {
		Self { endpoint, path_values: &[], query: Vec::new(), payload: None }
	}

	/// Supplies values for the path template's placeholders, in declaration order.
	pub fn path_values(mut self, values: &'a [&'a str]) -> Self {
		self.path_values = values;

		self
	}

	/// Appends one query parameter.
	pub fn query_pair(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.push((name.into(), value.into()));

		self
	}

	/// Attaches a request body.
	pub fn payload(mut self, payload: RequestPayload) -> Self {
		self.payload = Some(payload);

		self
	}
}

/// Case-insensitive view of the response headers.
///
/// Keys are folded to lowercase on construction; repeated headers are joined with a
/// comma in arrival order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseHeaders(BTreeMap<String, String>);
impl ResponseHeaders {
	pub(crate) fn from_pairs(pairs: Vec<(String, String)>) -> Self {
		let mut map = BTreeMap::<String, String>::new();

		for (name, value) in pairs {
			match map.entry(name.to_ascii_lowercase()) {
				std::collections::btree_map::Entry::Occupied(mut occupied) => {
					let joined = occupied.get_mut();

					joined.push_str(", ");
					joined.push_str(&value);
				},
				std::collections::btree_map::Entry::Vacant(vacant) => {
					vacant.insert(value);
				},
			}
		}

		Self(map)
	}

	/// Looks up a header by name, ignoring ASCII case.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(&name.to_ascii_lowercase()).map(String::as_str)
	}

	/// Delivery tracking identifier attached by the platform.
	pub fn request_id(&self) -> Option<&str> {
		self.get(REQUEST_ID_HEADER)
	}

	/// Identifier of an accepted asynchronous request, e.g. a narrowcast.
	pub fn accepted_request_id(&self) -> Option<&str> {
		self.get(ACCEPTED_REQUEST_ID_HEADER)
	}

	/// Iterates over all headers in lowercase-key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
	}

	/// Number of distinct header names.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether no headers were captured.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// Body of a successful response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnvelopeBody {
	/// Parsed JSON document; an empty body parses as `{}`.
	Json(serde_json::Value),
	/// Raw bytes passed through untouched.
	Binary(Vec<u8>),
}
impl EnvelopeBody {
	/// Returns the body bytes; JSON is re-serialized, binary is returned untouched.
	pub fn into_bytes(self) -> Vec<u8> {
		match self {
			Self::Json(value) => value.to_string().into_bytes(),
			Self::Binary(bytes) => bytes,
		}
	}
}

/// Successful response with its status, headers, and classified body.
#[derive(Clone, Debug)]
pub struct Envelope {
	/// HTTP status code.
	pub status: u16,
	/// Response headers with lowercase keys.
	pub headers: ResponseHeaders,
	/// Classified body.
	pub body: EnvelopeBody,
}
impl Envelope {
	/// Decodes the JSON body into `T`.
	pub fn decode<T>(&self) -> Result<T>
	where
		T: DeserializeOwned,
	{
		match &self.body {
			EnvelopeBody::Json(value) => serde_path_to_error::deserialize(value)
				.map_err(|source| DecodeError::Body { source, status: self.status }.into()),
			EnvelopeBody::Binary(_) => Err(DecodeError::BinaryBody { status: self.status }.into()),
		}
	}

	/// Consumes the envelope, returning the body bytes.
	///
	/// JSON bodies are re-serialized; binary bodies are returned untouched.
	pub fn into_bytes(self) -> Vec<u8> {
		self.body.into_bytes()
	}
}

/// Typed response carrier returned by the `*_with_http_info` facade methods.
#[derive(Clone, Debug)]
pub struct ApiResponse<T> {
	/// Decoded response body.
	pub body: T,
	/// HTTP status code.
	pub status: u16,
	/// Response headers with lowercase keys.
	pub headers: ResponseHeaders,
}

/// Low-level dispatcher owning the transport, base URLs, and credential.
pub struct Dispatcher<T>
where
	T: ?Sized + HttpTransport,
{
	transport: Arc<T>,
	endpoints: EndpointSet,
	token: Option<ChannelAccessToken>,
	one_shot: OneShotHeaderSlot,
}
impl<T> Dispatcher<T>
where
	T: ?Sized + HttpTransport,
{
	/// Creates a dispatcher. Pass `None` as the token for surfaces that authenticate
	/// through the request body instead of a bearer header.
	pub fn new(
		transport: impl Into<Arc<T>>,
		endpoints: EndpointSet,
		token: Option<ChannelAccessToken>,
	) -> Self {
		Self {
			transport: transport.into(),
			endpoints,
			token,
			one_shot: OneShotHeaderSlot::default(),
		}
	}

	/// Replaces the base URLs, e.g. to point at a mock server.
	pub fn with_endpoints(mut self, endpoints: EndpointSet) -> Self {
		self.endpoints = endpoints;

		self
	}

	/// Base URLs this dispatcher resolves against.
	pub fn endpoints(&self) -> &EndpointSet {
		&self.endpoints
	}

	/// Slot holding headers for the next dispatch only.
	pub fn one_shot(&self) -> &OneShotHeaderSlot {
		&self.one_shot
	}

	/// Performs exactly one round trip for the given call.
	///
	/// The one-shot header slot is drained synchronously before this method returns,
	/// so of two racing calls exactly one carries the staged headers, and the staged
	/// set is consumed even if the returned future is dropped unpolled.
	pub fn dispatch(&self, call: ApiCall<'_>) -> DispatchFuture<'_> {
		let surface = call.endpoint.surface;
		let span = RequestSpan::new(surface, call.endpoint.path);
		let staged = self.one_shot.take();
		let prepared = self.prepare(call, staged);

		obs::record_request_outcome(surface, RequestOutcome::Attempt);

		let fut = async move {
			let result = self.round_trip(prepared).await;

			match &result {
				Ok(_) => obs::record_request_outcome(surface, RequestOutcome::Success),
				Err(_) => obs::record_request_outcome(surface, RequestOutcome::Failure),
			}

			result
		};

		Box::pin(span.instrument(fut))
	}

	async fn round_trip(
		&self,
		prepared: Result<(TransportRequest, ResponseKind)>,
	) -> Result<Envelope> {
		let (request, kind) = prepared?;
		let response =
			self.transport.execute(request).await.map_err(TransportError::network)?;

		envelope_from(kind, response)
	}

	fn prepare(
		&self,
		call: ApiCall<'_>,
		staged: Option<Vec<(String, String)>>,
	) -> Result<(TransportRequest, ResponseKind)> {
		let ApiCall { endpoint, path_values, query, payload } = call;
		let mut url =
			resolve_url(self.endpoints.base(endpoint.surface), endpoint.path, path_values)?;

		if !query.is_empty() {
			let mut pairs = url.query_pairs_mut();

			for (name, value) in &query {
				pairs.append_pair(name, value);
			}
		}

		let mut headers = Vec::with_capacity(2 + staged.as_ref().map_or(0, Vec::len));

		if let Some(token) = &self.token {
			headers.push(("Authorization".into(), format!("Bearer {}", token.expose())));
		}

		headers.push(("User-Agent".into(), USER_AGENT.into()));

		if let Some(staged) = staged {
			headers.extend(staged);
		}

		let body = match payload {
			None => TransportBody::Empty,
			Some(RequestPayload::Json(value)) => TransportBody::Raw {
				content_type: "application/json".into(),
				bytes: value.to_string().into_bytes(),
			},
			Some(RequestPayload::Form(fields)) => TransportBody::Raw {
				content_type: "application/x-www-form-urlencoded".into(),
				bytes: form_urlencoded::Serializer::new(String::new())
					.extend_pairs(fields.iter())
					.finish()
					.into_bytes(),
			},
			Some(RequestPayload::Binary { content_type, bytes }) =>
				TransportBody::Raw { content_type, bytes },
			Some(RequestPayload::Multipart(fields)) => TransportBody::Multipart(fields),
		};
		let request = TransportRequest {
			method: endpoint.method,
			url,
			headers,
			body,
			surface: endpoint.surface,
		};

		Ok((request, endpoint.response))
	}
}
// Derived `Clone` would demand `T: Clone`, which `Arc` sharing does not need.
impl<T> Clone for Dispatcher<T>
where
	T: ?Sized + HttpTransport,
{
	fn clone(&self) -> Self {
		Self {
			transport: self.transport.clone(),
			endpoints: self.endpoints.clone(),
			token: self.token.clone(),
			one_shot: self.one_shot.clone(),
		}
	}
}
impl<T> Debug for Dispatcher<T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Dispatcher")
			.field("endpoints", &self.endpoints)
			.field("token", &self.token)
			.finish_non_exhaustive()
	}
}

fn resolve_url(base: &Url, template: &'static str, values: &[&str]) -> Result<Url> {
	let rendered = render_path(template, values)?;
	let mut url = base.clone();
	let base_path = url.path().trim_end_matches('/').to_owned();

	url.set_path(&format!("{base_path}{rendered}"));

	Ok(url)
}

fn render_path(template: &'static str, values: &[&str]) -> Result<String, ConfigError> {
	let expected = template.matches('{').count();

	if expected != values.len() {
		return Err(ConfigError::PathValueArity {
			path: template,
			expected,
			supplied: values.len(),
		});
	}

	let mut rendered = String::with_capacity(template.len() + 16);
	let mut values = values.iter();
	let mut rest = template;

	while let Some(start) = rest.find('{') {
		rendered.push_str(&rest[..start]);

		let after = &rest[start + 1..];

		match after.find('}') {
			Some(end) => {
				// Placeholder names are positional; only declaration order matters. The
				// escaping covers `/` and `%`, so a substituted value can never add or
				// split path components.
				if let Some(value) = values.next() {
					rendered.push_str(&urlencoding::encode(value));
				}

				rest = &after[end + 1..];
			},
			None => {
				rendered.push('{');

				rest = after;
			},
		}
	}

	rendered.push_str(rest);

	Ok(rendered)
}

fn envelope_from(kind: ResponseKind, response: TransportResponse) -> Result<Envelope> {
	let TransportResponse { status, headers, body } = response;
	let headers = ResponseHeaders::from_pairs(headers);

	if !(200..300).contains(&status) {
		let request_id = headers.request_id().map(str::to_owned);

		return Err(ApiError::from_response(status, request_id, &body).into());
	}

	let body = match kind {
		ResponseKind::Binary => EnvelopeBody::Binary(body),
		ResponseKind::Json if body.iter().all(u8::is_ascii_whitespace) =>
			EnvelopeBody::Json(serde_json::Value::Object(serde_json::Map::new())),
		ResponseKind::Json => {
			let mut deserializer = serde_json::Deserializer::from_slice(&body);
			let value = serde_path_to_error::deserialize(&mut deserializer)
				.map_err(|source| DecodeError::Body { source, status })?;

			EnvelopeBody::Json(value)
		},
	};

	Ok(Envelope { status, headers, body })
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		endpoint::{Method, Surface},
		error::Error,
	};

	#[test]
	fn render_substitutes_in_declaration_order() {
		let rendered = render_path("/v2/bot/chat/{chatId}/member/{userId}", &["room-1", "user-2"])
			.expect("Rendering should succeed.");

		assert_eq!(rendered, "/v2/bot/chat/room-1/member/user-2");
	}

	#[test]
	fn render_escapes_path_separators() {
		let rendered = render_path("/v2/bot/richmenu/{richMenuId}", &["a/../b c%"])
			.expect("Rendering should succeed.");

		assert_eq!(rendered, "/v2/bot/richmenu/a%2F..%2Fb%20c%25");
	}

	#[test]
	fn render_rejects_value_arity_mismatch() {
		let err = render_path("/v2/bot/richmenu/{richMenuId}", &[])
			.expect_err("Missing values should be rejected.");

		assert!(matches!(err, ConfigError::PathValueArity { expected: 1, supplied: 0, .. }));
	}

	#[test]
	fn resolve_keeps_base_path_prefixes() {
		let base = Url::parse("https://proxy.example.test/line").expect("Base should parse.");
		let url = resolve_url(&base, "/v2/bot/info", &[]).expect("Resolution should succeed.");

		assert_eq!(url.as_str(), "https://proxy.example.test/line/v2/bot/info");
	}

	#[test]
	fn headers_fold_case_and_join_repeats() {
		let headers = ResponseHeaders::from_pairs(vec![
			("X-Line-Request-Id".into(), "req-1".into()),
			("Vary".into(), "Accept".into()),
			("vary".into(), "Origin".into()),
		]);

		assert_eq!(headers.request_id(), Some("req-1"));
		assert_eq!(headers.get("X-LINE-REQUEST-ID"), Some("req-1"));
		assert_eq!(headers.get("vary"), Some("Accept, Origin"));
		assert_eq!(headers.len(), 2);
	}

	#[test]
	fn non_success_statuses_become_api_errors() {
		let response = TransportResponse {
			status: 404,
			headers: vec![("x-line-request-id".into(), "req-404".into())],
			body: br#"{"message":"Not found"}"#.to_vec(),
		};
		let err = envelope_from(ResponseKind::Json, response)
			.expect_err("Non-2xx should map to an error.");

		match err {
			Error::Api(api) => {
				assert_eq!(api.status, 404);
				assert_eq!(api.message, "Not found");
				assert_eq!(api.request_id.as_deref(), Some("req-404"));
			},
			other => panic!("Expected an API error, got {other:?}."),
		}
	}

	#[test]
	fn empty_json_bodies_parse_as_empty_objects() {
		let response = TransportResponse { status: 200, headers: Vec::new(), body: Vec::new() };
		let envelope =
			envelope_from(ResponseKind::Json, response).expect("Classification should succeed.");

		assert_eq!(envelope.body, EnvelopeBody::Json(serde_json::json!({})));
	}

	#[test]
	fn binary_endpoints_pass_bytes_through() {
		let payload = vec![0xFF, 0xD8, 0xFF, 0xE0];
		let response =
			TransportResponse { status: 200, headers: Vec::new(), body: payload.clone() };
		let envelope =
			envelope_from(ResponseKind::Binary, response).expect("Classification should succeed.");

		assert_eq!(envelope.into_bytes(), payload);
	}

	#[test]
	fn malformed_success_bodies_are_decode_errors() {
		let response =
			TransportResponse { status: 200, headers: Vec::new(), body: b"not json".to_vec() };
		let err = envelope_from(ResponseKind::Json, response)
			.expect_err("Malformed JSON should be rejected.");

		assert!(matches!(err, Error::Decode(DecodeError::Body { status: 200, .. })));
	}

	#[test]
	fn call_builder_collects_parameters() {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/followers/ids");

		let call = ApiCall::new(ENDPOINT).query_pair("limit", "1000").query_pair("start", "t0");

		assert_eq!(call.query.len(), 2);
		assert!(call.payload.is_none());
	}
}
