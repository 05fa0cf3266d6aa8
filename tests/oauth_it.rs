// crates.io
use httpmock::prelude::*;
// self
use line_bot_client::_preludet::*;

const CLIENT_ID: &str = "1350031035";
const CLIENT_SECRET: &str = "channel-secret";

#[tokio::test]
async fn issuing_posts_form_credentials_without_bearer() {
	let server = MockServer::start_async().await;
	let oauth = build_reqwest_test_oauth_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v2/oauth/accessToken")
				.header("content-type", "application/x-www-form-urlencoded")
				.header_missing("authorization")
				.body(format!(
					"grant_type=client_credentials&client_id={CLIENT_ID}&client_secret={CLIENT_SECRET}"
				));
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"W1TeHCgfH2Liwa\",\"expires_in\":2592000,\"token_type\":\"Bearer\"}");
		})
		.await;
	let issued = oauth
		.issue_channel_token(CLIENT_ID, CLIENT_SECRET)
		.await
		.expect("Issuance should succeed.");

	assert_eq!(issued.access_token.expose(), "W1TeHCgfH2Liwa");
	assert_eq!(issued.expires_in, 2_592_000);
	assert_eq!(issued.token_type, "Bearer");
	assert_eq!(issued.key_id, None);

	mock.assert_async().await;
}

#[tokio::test]
async fn verification_round_trips() {
	let server = MockServer::start_async().await;
	let oauth = build_reqwest_test_oauth_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v2/oauth/verify").body("access_token=W1TeHCgfH2Liwa");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"client_id\":\"1350031035\",\"expires_in\":3600,\"scope\":\"P CM\"}");
		})
		.await;
	let verified = oauth
		.verify_channel_token("W1TeHCgfH2Liwa")
		.await
		.expect("Verification should succeed.");

	assert_eq!(verified.client_id, CLIENT_ID);
	assert_eq!(verified.expires_in, 3600);
	assert_eq!(verified.scope.as_deref(), Some("P CM"));

	mock.assert_async().await;
}

#[tokio::test]
async fn revocation_posts_the_token() {
	let server = MockServer::start_async().await;
	let oauth = build_reqwest_test_oauth_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v2/oauth/revoke").body("access_token=W1TeHCgfH2Liwa");
			then.status(200);
		})
		.await;

	oauth.revoke_channel_token("W1TeHCgfH2Liwa").await.expect("Revocation should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn v2_1_issuance_sends_the_jwt_assertion() {
	let server = MockServer::start_async().await;
	let oauth = build_reqwest_test_oauth_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth2/v2.1/token").body(
				"grant_type=client_credentials&client_assertion_type=urn%3Aietf%3Aparams%3Aoauth\
				%3Aclient-assertion-type%3Ajwt-bearer&client_assertion=eyJhbGciOiJSUzI1NiJ9.body.sig",
			);
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"eyJhbGciOiJIUzI1NiJ9.ey\",\"token_type\":\"Bearer\",\
				\"expires_in\":2592000,\"key_id\":\"sDTOzw5wIfWxu22Zyaq\"}",
			);
		})
		.await;
	let issued = oauth
		.issue_channel_token_v2_1("eyJhbGciOiJSUzI1NiJ9.body.sig")
		.await
		.expect("Issuance should succeed.");

	assert_eq!(issued.access_token.expose(), "eyJhbGciOiJIUzI1NiJ9.ey");
	assert_eq!(issued.key_id.as_deref(), Some("sDTOzw5wIfWxu22Zyaq"));

	mock.assert_async().await;
}

#[tokio::test]
async fn v2_1_verification_checks_via_query() {
	let server = MockServer::start_async().await;
	let oauth = build_reqwest_test_oauth_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/oauth2/v2.1/verify")
				.query_param("access_token", "eyJhbGciOiJIUzI1NiJ9.ey");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"client_id\":\"1350031035\",\"expires_in\":2591659}");
		})
		.await;
	let verified = oauth
		.verify_channel_token_v2_1("eyJhbGciOiJIUzI1NiJ9.ey")
		.await
		.expect("Verification should succeed.");

	assert_eq!(verified.client_id, CLIENT_ID);
	assert_eq!(verified.scope, None);

	mock.assert_async().await;
}

#[tokio::test]
async fn key_id_listing_decodes() {
	let server = MockServer::start_async().await;
	let oauth = build_reqwest_test_oauth_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/oauth2/v2.1/tokens/kid")
				.query_param(
					"client_assertion_type",
					"urn:ietf:params:oauth:client-assertion-type:jwt-bearer",
				)
				.query_param("client_assertion", "eyJhbGciOiJSUzI1NiJ9.body.sig");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"kids\":[\"kid-one\",\"kid-two\"]}");
		})
		.await;
	let key_ids = oauth
		.channel_token_key_ids("eyJhbGciOiJSUzI1NiJ9.body.sig")
		.await
		.expect("Key id listing should succeed.");

	assert_eq!(key_ids.kids, ["kid-one", "kid-two"]);

	mock.assert_async().await;
}

#[tokio::test]
async fn v2_1_revocation_posts_the_triplet() {
	let server = MockServer::start_async().await;
	let oauth = build_reqwest_test_oauth_client(&server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth2/v2.1/revoke").body(format!(
				"client_id={CLIENT_ID}&client_secret={CLIENT_SECRET}&access_token=eyJhbGciOiJIUzI1NiJ9.ey"
			));
			then.status(200);
		})
		.await;

	oauth
		.revoke_channel_token_v2_1(CLIENT_ID, CLIENT_SECRET, "eyJhbGciOiJIUzI1NiJ9.ey")
		.await
		.expect("Revocation should succeed.");

	mock.assert_async().await;
}
