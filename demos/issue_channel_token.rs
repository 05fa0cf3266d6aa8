//! Demonstrates the channel access token lifecycle - issue, verify, revoke - against a
//! local mock of the OAuth surface.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use url::Url;
// self
use line_bot_client::{
	endpoint::EndpointSet, http::ReqwestTransport, oauth::OauthClient, reqwest,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let issue_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v2/oauth/accessToken");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"W1TeHCgfH2Liwa\",\"expires_in\":2592000,\
				\"token_type\":\"Bearer\"}",
			);
		})
		.await;
	let verify_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v2/oauth/verify");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"client_id\":\"1350031035\",\"expires_in\":2591659}");
		})
		.await;
	let revoke_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v2/oauth/revoke");
			then.status(200);
		})
		.await;
	let base = Url::parse(&server.base_url())?;
	let endpoints = EndpointSet::builder().api_base(base).build()?;
	let transport = ReqwestTransport::with_client(
		reqwest::Client::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()?,
	);
	let oauth = OauthClient::with_transport(transport).with_endpoints(endpoints);

	// Issue a short-lived token from the channel id and secret. The credentials travel
	// as form fields; no Authorization header is attached on this surface.
	let issued = oauth.issue_channel_token("1350031035", "demo-channel-secret").await?;

	println!("Issued a {} token valid for {} seconds.", issued.token_type, issued.expires_in);

	// Verify it still belongs to the channel, then revoke it.
	let verified = oauth.verify_channel_token(issued.access_token.expose()).await?;

	println!("Token belongs to channel {}.", verified.client_id);

	oauth.revoke_channel_token(issued.access_token.expose()).await?;

	println!("Token revoked.");

	issue_mock.assert_async().await;
	verify_mock.assert_async().await;
	revoke_mock.assert_async().await;

	Ok(())
}
