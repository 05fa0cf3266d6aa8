//! Typed facade over the messaging and data surfaces.
//!
//! [`Client`] wraps the low-level [`Dispatcher`] with one method per published
//! operation, grouped across submodules the way the platform's documentation groups
//! them. Every operation comes in two flavors: a plain method returning the documented
//! body and a `*_with_http_info` sibling returning an [`ApiResponse`] that additionally
//! carries the HTTP status and response headers, for callers that need the delivery
//! tracking identifiers without parsing headers themselves.

mod audience;
mod insight;
mod messaging;
mod richmenu;

// self
use crate::{
	_prelude::*,
	auth::ChannelAccessToken,
	dispatch::{ApiCall, ApiResponse, Dispatcher, Envelope},
	endpoint::EndpointSet,
	http::HttpTransport,
};
#[cfg(feature = "reqwest")]
use crate::http::ReqwestTransport;

/// Request header staging an idempotency key for safely retried sends.
pub const RETRY_KEY_HEADER: &str = "X-Line-Retry-Key";

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport stack.
pub type ReqwestBotClient = Client<ReqwestTransport>;

/// Typed client for the Messaging API.
///
/// Construction validates the channel access token, so an empty credential fails
/// immediately instead of on the first call. Clones are cheap handles sharing the
/// transport and the one-shot header slot.
pub struct Client<T>
where
	T: ?Sized + HttpTransport,
{
	dispatcher: Dispatcher<T>,
}
impl<T> Client<T>
where
	T: ?Sized + HttpTransport,
{
	/// Creates a client that reuses the caller-provided transport, resolving against
	/// the production base URLs.
	pub fn with_transport(
		transport: impl Into<Arc<T>>,
		channel_access_token: impl Into<String>,
	) -> Result<Self> {
		let token = ChannelAccessToken::new(channel_access_token)?;

		Ok(Self { dispatcher: Dispatcher::new(transport, EndpointSet::default(), Some(token)) })
	}

	/// Replaces the base URLs, e.g. to point at a mock server.
	pub fn with_endpoints(mut self, endpoints: EndpointSet) -> Self {
		self.dispatcher = self.dispatcher.with_endpoints(endpoints);

		self
	}

	/// The dispatcher this facade answers through.
	pub fn dispatcher(&self) -> &Dispatcher<T> {
		&self.dispatcher
	}

	/// Stages a [`RETRY_KEY_HEADER`] value for the next request only.
	pub fn set_retry_key(&self, retry_key: impl Into<String>) {
		self.set_next_headers(vec![(RETRY_KEY_HEADER.into(), retry_key.into())]);
	}

	/// Stages headers for the next request only, replacing any earlier staged set.
	///
	/// When two requests race, exactly one carries the staged set; which one wins is
	/// decided by dispatch order, not call order.
	pub fn set_next_headers(&self, headers: Vec<(String, String)>) {
		self.dispatcher.one_shot().store(headers);
	}

	async fn request<R>(&self, call: ApiCall<'_>) -> Result<ApiResponse<R>>
	where
		R: DeserializeOwned,
	{
		let envelope = self.dispatcher.dispatch(call).await?;
		let body = envelope.decode()?;

		Ok(ApiResponse { body, status: envelope.status, headers: envelope.headers })
	}

	async fn request_empty(&self, call: ApiCall<'_>) -> Result<ApiResponse<()>> {
		let Envelope { status, headers, .. } = self.dispatcher.dispatch(call).await?;

		Ok(ApiResponse { body: (), status, headers })
	}

	async fn request_bytes(&self, call: ApiCall<'_>) -> Result<ApiResponse<Vec<u8>>> {
		let Envelope { status, headers, body } = self.dispatcher.dispatch(call).await?;

		Ok(ApiResponse { body: body.into_bytes(), status, headers })
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestTransport> {
	/// Creates a client with a fresh reqwest transport.
	///
	/// Timeouts and proxies are configured on the wrapped [`reqwest::Client`]; use
	/// [`Client::with_transport`] to pass a tuned one.
	pub fn new(channel_access_token: impl Into<String>) -> Result<Self> {
		Self::with_transport(ReqwestTransport::default(), channel_access_token)
	}
}
// Derived `Clone` would demand `T: Clone`, which `Arc` sharing does not need.
impl<T> Clone for Client<T>
where
	T: ?Sized + HttpTransport,
{
	fn clone(&self) -> Self {
		Self { dispatcher: self.dispatcher.clone() }
	}
}
impl<T> Debug for Client<T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client").field("dispatcher", &self.dispatcher).finish()
	}
}
