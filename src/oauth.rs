//! Channel access token lifecycle against the OAuth surfaces.
//!
//! [`OauthClient`] shares the dispatch layer with [`Client`](crate::client::Client) but
//! is constructed without a bearer token: token endpoints authenticate through
//! form-urlencoded credentials in the request body, so no `Authorization` header is
//! attached. Submitted client secrets and assertions stay inside the request body and
//! are never logged; issued tokens deserialize into the redacting
//! [`ChannelAccessToken`] wrapper.

// self
use crate::{
	_prelude::*,
	auth::ChannelAccessToken,
	dispatch::{ApiCall, ApiResponse, Dispatcher, Envelope, RequestPayload},
	endpoint::{Endpoint, EndpointSet, Method, Surface},
	http::HttpTransport,
};
#[cfg(feature = "reqwest")]
use crate::http::ReqwestTransport;

/// `client_assertion_type` value for JWT-bearer client authentication.
pub const JWT_BEARER_ASSERTION_TYPE: &str =
	"urn:ietf:params:oauth:client-assertion-type:jwt-bearer";

#[cfg(feature = "reqwest")]
/// OAuth client specialized for the crate's default reqwest transport stack.
pub type ReqwestOauthClient = OauthClient<ReqwestTransport>;

/// Typed client for the channel access token endpoints.
pub struct OauthClient<T>
where
	T: ?Sized + HttpTransport,
{
	dispatcher: Dispatcher<T>,
}
impl<T> OauthClient<T>
where
	T: ?Sized + HttpTransport,
{
	/// Creates an OAuth client that reuses the caller-provided transport, resolving
	/// against the production base URLs.
	pub fn with_transport(transport: impl Into<Arc<T>>) -> Self {
		Self { dispatcher: Dispatcher::new(transport, EndpointSet::default(), None) }
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

	/// Issues a short-lived channel access token from the channel id and secret.
	pub async fn issue_channel_token(
		&self,
		client_id: &str,
		client_secret: &str,
	) -> Result<IssuedChannelToken> {
		Ok(self.issue_channel_token_with_http_info(client_id, client_secret).await?.body)
	}

	/// Variant of [`OauthClient::issue_channel_token`] that also returns status and
	/// headers.
	pub async fn issue_channel_token_with_http_info(
		&self,
		client_id: &str,
		client_secret: &str,
	) -> Result<ApiResponse<IssuedChannelToken>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Post, Surface::OauthV2, "/v2/oauth/accessToken");

		let form = vec![
			("grant_type".into(), "client_credentials".into()),
			("client_id".into(), client_id.into()),
			("client_secret".into(), client_secret.into()),
		];

		self.request(ApiCall::new(ENDPOINT).payload(RequestPayload::Form(form))).await
	}

	/// Checks whether a channel access token is still valid.
	pub async fn verify_channel_token(&self, access_token: &str) -> Result<VerifiedChannelToken> {
		Ok(self.verify_channel_token_with_http_info(access_token).await?.body)
	}

	/// Variant of [`OauthClient::verify_channel_token`] that also returns status and
	/// headers.
	pub async fn verify_channel_token_with_http_info(
		&self,
		access_token: &str,
	) -> Result<ApiResponse<VerifiedChannelToken>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Post, Surface::OauthV2, "/v2/oauth/verify");

		let form = vec![("access_token".into(), access_token.into())];

		self.request(ApiCall::new(ENDPOINT).payload(RequestPayload::Form(form))).await
	}

	/// Revokes a channel access token.
	pub async fn revoke_channel_token(&self, access_token: &str) -> Result<()> {
		Ok(self.revoke_channel_token_with_http_info(access_token).await?.body)
	}

	/// Variant of [`OauthClient::revoke_channel_token`] that also returns status and
	/// headers.
	pub async fn revoke_channel_token_with_http_info(
		&self,
		access_token: &str,
	) -> Result<ApiResponse<()>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Post, Surface::OauthV2, "/v2/oauth/revoke");

		let form = vec![("access_token".into(), access_token.into())];

		self.request_empty(ApiCall::new(ENDPOINT).payload(RequestPayload::Form(form))).await
	}

	/// Issues a v2.1 channel access token from a signed JWT assertion.
	///
	/// The assertion is produced by the caller from the channel's assertion signing
	/// key; this crate does not mint JWTs.
	pub async fn issue_channel_token_v2_1(
		&self,
		client_assertion: &str,
	) -> Result<IssuedChannelToken> {
		Ok(self.issue_channel_token_v2_1_with_http_info(client_assertion).await?.body)
	}

	/// Variant of [`OauthClient::issue_channel_token_v2_1`] that also returns status
	/// and headers.
	pub async fn issue_channel_token_v2_1_with_http_info(
		&self,
		client_assertion: &str,
	) -> Result<ApiResponse<IssuedChannelToken>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Post, Surface::OauthV21, "/oauth2/v2.1/token");

		let form = vec![
			("grant_type".into(), "client_credentials".into()),
			("client_assertion_type".into(), JWT_BEARER_ASSERTION_TYPE.into()),
			("client_assertion".into(), client_assertion.into()),
		];

		self.request(ApiCall::new(ENDPOINT).payload(RequestPayload::Form(form))).await
	}

	/// Checks whether a v2.1 channel access token is still valid.
	pub async fn verify_channel_token_v2_1(
		&self,
		access_token: &str,
	) -> Result<VerifiedChannelToken> {
		Ok(self.verify_channel_token_v2_1_with_http_info(access_token).await?.body)
	}

	/// Variant of [`OauthClient::verify_channel_token_v2_1`] that also returns status
	/// and headers.
	pub async fn verify_channel_token_v2_1_with_http_info(
		&self,
		access_token: &str,
	) -> Result<ApiResponse<VerifiedChannelToken>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::OauthV21, "/oauth2/v2.1/verify");

		self.request(ApiCall::new(ENDPOINT).query_pair("access_token", access_token)).await
	}

	/// Key ids of every valid v2.1 channel access token, proven by a JWT assertion.
	pub async fn channel_token_key_ids(
		&self,
		client_assertion: &str,
	) -> Result<ChannelTokenKeyIds> {
		Ok(self.channel_token_key_ids_with_http_info(client_assertion).await?.body)
	}

	/// Variant of [`OauthClient::channel_token_key_ids`] that also returns status and
	/// headers.
	pub async fn channel_token_key_ids_with_http_info(
		&self,
		client_assertion: &str,
	) -> Result<ApiResponse<ChannelTokenKeyIds>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::OauthV21, "/oauth2/v2.1/tokens/kid");

		self.request(
			ApiCall::new(ENDPOINT)
				.query_pair("client_assertion_type", JWT_BEARER_ASSERTION_TYPE)
				.query_pair("client_assertion", client_assertion),
		)
		.await
	}

	/// Revokes a v2.1 channel access token.
	pub async fn revoke_channel_token_v2_1(
		&self,
		client_id: &str,
		client_secret: &str,
		access_token: &str,
	) -> Result<()> {
		Ok(self
			.revoke_channel_token_v2_1_with_http_info(client_id, client_secret, access_token)
			.await?
			.body)
	}

	/// Variant of [`OauthClient::revoke_channel_token_v2_1`] that also returns status
	/// and headers.
	pub async fn revoke_channel_token_v2_1_with_http_info(
		&self,
		client_id: &str,
		client_secret: &str,
		access_token: &str,
	) -> Result<ApiResponse<()>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Post, Surface::OauthV21, "/oauth2/v2.1/revoke");

		let form = vec![
			("client_id".into(), client_id.into()),
			("client_secret".into(), client_secret.into()),
			("access_token".into(), access_token.into()),
		];

		self.request_empty(ApiCall::new(ENDPOINT).payload(RequestPayload::Form(form))).await
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
}
#[cfg(feature = "reqwest")]
impl OauthClient<ReqwestTransport> {
	/// Creates an OAuth client with a fresh reqwest transport.
	pub fn new() -> Self {
		Self::with_transport(ReqwestTransport::default())
	}
}
#[cfg(feature = "reqwest")]
impl Default for OauthClient<ReqwestTransport> {
	fn default() -> Self {
		Self::new()
	}
}
// Derived `Clone` would demand `T: Clone`, which `Arc` sharing does not need.
impl<T> Clone for OauthClient<T>
where
	T: ?Sized + HttpTransport,
{
	fn clone(&self) -> Self {
		Self { dispatcher: self.dispatcher.clone() }
	}
}
impl<T> Debug for OauthClient<T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OauthClient").field("dispatcher", &self.dispatcher).finish()
	}
}

/// Channel access token issued by the platform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IssuedChannelToken {
	/// The issued token, behind the redacting wrapper.
	pub access_token: ChannelAccessToken,
	/// Seconds until the token expires.
	pub expires_in: i64,
	/// Token type, always `Bearer`.
	pub token_type: String,
	/// Key id of the signing key, v2.1 issuance only.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub key_id: Option<String>,
}

/// Answer of the token verification endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerifiedChannelToken {
	/// Channel id the token belongs to.
	pub client_id: String,
	/// Seconds until the token expires.
	pub expires_in: i64,
	/// Permissions granted to the token, space-separated.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub scope: Option<String>,
}

/// Key ids of all valid v2.1 channel access tokens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChannelTokenKeyIds {
	/// One key id per valid token.
	#[serde(default)]
	pub kids: Vec<String>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn issued_token_deserializes_behind_the_wrapper() {
		let issued: IssuedChannelToken = serde_json::from_value(serde_json::json!({
			"access_token": "W1TeHCgfH2Liwa...",
			"expires_in": 2_592_000,
			"token_type": "Bearer"
		}))
		.expect("Token response should deserialize.");

		assert_eq!(issued.access_token.expose(), "W1TeHCgfH2Liwa...");
		assert_eq!(format!("{}", issued.access_token), "<redacted>");
		assert_eq!(issued.key_id, None);
	}

	#[test]
	fn verification_answer_deserializes_without_scope() {
		let verified: VerifiedChannelToken = serde_json::from_value(serde_json::json!({
			"client_id": "1350031035",
			"expires_in": 3600
		}))
		.expect("Verification response should deserialize.");

		assert_eq!(verified.client_id, "1350031035");
		assert_eq!(verified.scope, None);
	}
}
