// crates.io
use httpmock::prelude::*;
// self
use line_bot_client::{
	_preludet::*,
	models::{BroadcastRequest, Message, PushMessageRequest},
};

const CHANNEL_ACCESS_TOKEN: &str = "test-channel-token";
const USER_AGENT: &str = concat!("line-bot-client/", env!("CARGO_PKG_VERSION"));

fn push_request() -> PushMessageRequest {
	PushMessageRequest::new("U4af4980629", vec![Message::text("hello")])
}

#[tokio::test]
async fn every_request_carries_bearer_and_client_identity() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), CHANNEL_ACCESS_TOKEN);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v2/bot/info")
				.header("authorization", format!("Bearer {CHANNEL_ACCESS_TOKEN}"))
				.header("user-agent", USER_AGENT);
			then.status(200).header("content-type", "application/json").body(
				"{\"userId\":\"U0123\",\"basicId\":\"@456line\",\"displayName\":\"Testbot\",\
				\"chatMode\":\"bot\",\"markAsReadMode\":\"auto\"}",
			);
		})
		.await;
	let info = client.bot_info().await.expect("Bot info request should succeed.");

	assert_eq!(info.basic_id, "@456line");

	mock.assert_async().await;
}

#[tokio::test]
async fn staged_headers_ride_the_next_request_only() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), CHANNEL_ACCESS_TOKEN);
	let keyed = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v2/bot/message/push")
				.header("x-line-retry-key", "123e4567-e89b-12d3");
			then.status(200).header("content-type", "application/json").body("{}");
		})
		.await;
	// Matches a follow-up broadcast only if the retry key wrongly rides along again.
	let stale = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v2/bot/message/broadcast")
				.header("x-line-retry-key", "123e4567-e89b-12d3");
			then.status(200).header("content-type", "application/json").body("{}");
		})
		.await;

	client.set_retry_key("123e4567-e89b-12d3");
	client.push_message(&push_request()).await.expect("Keyed push should succeed.");

	keyed.assert_async().await;

	// With the slot drained, the broadcast matches no mock and the server answers 404.
	let err = client
		.broadcast(&BroadcastRequest::new(vec![Message::text("again")]))
		.await
		.expect_err("Broadcast should not carry the consumed retry key.");

	assert!(matches!(err, Error::Api(api) if api.status == 404));

	stale.assert_calls_async(0).await;
}

#[tokio::test]
async fn api_errors_surface_status_message_and_request_id() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), CHANNEL_ACCESS_TOKEN);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v2/bot/message/push");
			then.status(400)
				.header("content-type", "application/json")
				.header("x-line-request-id", "f70dd548-ca7a-4f9d")
				.body(
					"{\"message\":\"The request body has 1 error(s)\",\"details\":[{\"message\":\
					\"May not be empty\",\"property\":\"messages[0].text\"}]}",
				);
		})
		.await;
	let err = client
		.push_message(&push_request())
		.await
		.expect_err("Rejected pushes should surface to the caller.");

	match err {
		Error::Api(api) => {
			assert_eq!(api.status, 400);
			assert_eq!(api.message, "The request body has 1 error(s)");
			assert_eq!(api.details.len(), 1);
			assert_eq!(api.details[0].property.as_deref(), Some("messages[0].text"));
			assert_eq!(api.request_id.as_deref(), Some("f70dd548-ca7a-4f9d"));
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn binary_and_json_surfaces_share_one_client() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), CHANNEL_ACCESS_TOKEN);
	let content = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2/bot/message/461230966842064897/content");
			then.status(200).header("content-type", "image/jpeg").body("raw-jpeg-bytes");
		})
		.await;
	let quota = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2/bot/message/quota");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"type\":\"limited\",\"value\":1000}");
		})
		.await;
	let bytes = client
		.message_content("461230966842064897")
		.await
		.expect("Content download should succeed.");
	let quota_body = client.message_quota().await.expect("Quota request should succeed.");

	assert_eq!(bytes, b"raw-jpeg-bytes");
	assert_eq!(quota_body.value, Some(1000));

	content.assert_async().await;
	quota.assert_async().await;
}
