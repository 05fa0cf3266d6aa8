//! Transport primitives for dispatching Messaging API requests.
//!
//! The module exposes [`HttpTransport`] alongside the wire types it consumes and
//! produces so downstream crates can integrate custom HTTP clients without rewriting
//! the dispatch layer. A transport performs exactly one round trip per
//! [`TransportRequest`] and buffers the response body; retries, caching, and timeouts
//! are the transport's own business, never the dispatcher's.

// std
use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")]
use reqwest::{
	header::CONTENT_TYPE,
	multipart::{Form, Part},
};
// self
use crate::{
	_prelude::*,
	endpoint::{Method, Surface},
};

/// Future returned by [`HttpTransport::execute`].
pub type TransportFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<TransportResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing Messaging API requests.
///
/// The trait is the crate's only dependency on an HTTP stack. Callers provide an
/// implementation (typically behind `Arc<T>` where `T: HttpTransport`) and the
/// dispatcher hands it fully assembled requests. Implementations must be
/// `Send + Sync + 'static` so clients can be shared across tasks, and the returned
/// futures must be `Send` so facade futures stay `Send` as well.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Performs one round trip and buffers the complete response.
	fn execute(&self, request: TransportRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// Fully assembled request handed to a transport.
#[derive(Clone, Debug)]
pub struct TransportRequest {
	/// HTTP method.
	pub method: Method,
	/// Absolute request URL including query parameters.
	pub url: Url,
	/// Header pairs in insertion order; authorization comes first.
	pub headers: Vec<(String, String)>,
	/// Request body.
	pub body: TransportBody,
	/// Surface the request targets, for instrumentation.
	pub surface: Surface,
}

/// Request body shapes a transport must encode.
///
/// JSON and form payloads are serialized by the dispatcher before they reach the
/// transport, so `Raw` covers both alongside genuine binary uploads. Multipart stays
/// structural because the boundary belongs to the transport's encoder.
#[derive(Clone, Debug)]
pub enum TransportBody {
	/// No body.
	Empty,
	/// Pre-encoded bytes with their media type.
	Raw {
		/// Value of the `Content-Type` header.
		content_type: String,
		/// Body bytes.
		bytes: Vec<u8>,
	},
	/// `multipart/form-data` field set.
	Multipart(Vec<UploadField>),
}

/// One field of a `multipart/form-data` body.
#[derive(Clone, Debug)]
pub enum UploadField {
	/// Plain text field.
	Text {
		/// Field name.
		name: String,
		/// Field value.
		value: String,
	},
	/// File field carrying bytes and their media type.
	File {
		/// Field name.
		name: String,
		/// File name reported to the platform.
		file_name: String,
		/// Media type of the bytes.
		content_type: String,
		/// File content.
		bytes: Vec<u8>,
	},
}

/// Buffered response handed back by a transport.
#[derive(Clone, Debug)]
pub struct TransportResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response header pairs as received.
	pub headers: Vec<(String, String)>,
	/// Complete response body.
	pub body: Vec<u8>,
}

/// Thread-safe slot holding header pairs for the next dispatch only.
///
/// Callers stage headers with [`store`](OneShotHeaderSlot::store); the dispatcher
/// drains them with [`take`](OneShotHeaderSlot::take) synchronously before its first
/// await, so when two dispatches race exactly one observes the staged set. Staging
/// twice before a dispatch replaces the earlier set, and a consumed set is never
/// restored, even if the winning request is cancelled mid-flight.
#[derive(Clone, Debug, Default)]
pub struct OneShotHeaderSlot(Arc<Mutex<Option<Vec<(String, String)>>>>);
impl OneShotHeaderSlot {
	/// Stages header pairs for the next dispatch, replacing any earlier set.
	pub fn store(&self, headers: Vec<(String, String)>) {
		*self.0.lock() = Some(headers);
	}

	/// Returns the staged headers, if any, consuming them from the slot.
	pub fn take(&self) -> Option<Vec<(String, String)>> {
		self.0.lock().take()
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
/// Timeouts, proxies, and connection pooling are configured on the wrapped client;
/// the dispatcher adds nothing on top.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestTransport {
	type TransportError = ReqwestError;

	fn execute(&self, request: TransportRequest) -> TransportFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let mut builder = client.request(reqwest_method(request.method), request.url);

			for (name, value) in &request.headers {
				builder = builder.header(name.as_str(), value.as_str());
			}

			builder = match request.body {
				TransportBody::Empty => builder,
				TransportBody::Raw { content_type, bytes } =>
					builder.header(CONTENT_TYPE, content_type).body(bytes),
				TransportBody::Multipart(fields) => builder.multipart(multipart_form(fields)?),
			};

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let headers = response
				.headers()
				.iter()
				.map(|(name, value)| {
					(name.as_str().to_owned(), String::from_utf8_lossy(value.as_bytes()).into_owned())
				})
				.collect();
			let body = response.bytes().await?.to_vec();

			Ok(TransportResponse { status, headers, body })
		})
	}
}

#[cfg(feature = "reqwest")]
fn reqwest_method(method: Method) -> reqwest::Method {
	match method {
		Method::Get => reqwest::Method::GET,
		Method::Post => reqwest::Method::POST,
		Method::Put => reqwest::Method::PUT,
		Method::Delete => reqwest::Method::DELETE,
	}
}

#[cfg(feature = "reqwest")]
fn multipart_form(fields: Vec<UploadField>) -> Result<Form, ReqwestError> {
	let mut form = Form::new();

	for field in fields {
		form = match field {
			UploadField::Text { name, value } => form.text(name, value),
			UploadField::File { name, file_name, content_type, bytes } =>
				form.part(name, Part::bytes(bytes).file_name(file_name).mime_str(&content_type)?),
		};
	}

	Ok(form)
}

#[cfg(test)]
mod tests {
	// std
	use std::thread;
	// self
	use super::*;

	#[test]
	fn slot_yields_staged_headers_once() {
		let slot = OneShotHeaderSlot::default();

		slot.store(vec![("X-Line-Retry-Key".into(), "abc".into())]);

		assert_eq!(slot.take(), Some(vec![("X-Line-Retry-Key".into(), "abc".into())]));
		assert_eq!(slot.take(), None);
	}

	#[test]
	fn slot_replaces_earlier_set_on_restage() {
		let slot = OneShotHeaderSlot::default();

		slot.store(vec![("X-Line-Retry-Key".into(), "first".into())]);
		slot.store(vec![("X-Line-Retry-Key".into(), "second".into())]);

		assert_eq!(slot.take(), Some(vec![("X-Line-Retry-Key".into(), "second".into())]));
	}

	#[test]
	fn racing_takes_observe_exactly_one_set() {
		let slot = OneShotHeaderSlot::default();

		slot.store(vec![("X-Line-Retry-Key".into(), "raced".into())]);

		let winners: usize = thread::scope(|scope| {
			let handles: Vec<_> =
				(0..2).map(|_| scope.spawn(|| usize::from(slot.take().is_some()))).collect();

			handles.into_iter().map(|handle| handle.join().expect("Thread panicked.")).sum()
		});

		assert_eq!(winners, 1);
	}
}
