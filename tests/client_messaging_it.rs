// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use line_bot_client::{
	_preludet::*,
	models::{Message, NarrowcastRequest, PushMessageRequest},
};

const CHANNEL_ACCESS_TOKEN: &str = "test-channel-token";

#[tokio::test]
async fn push_message_serializes_the_documented_shape() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), CHANNEL_ACCESS_TOKEN);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v2/bot/message/push")
				.header("content-type", "application/json")
				.json_body(json!({
					"to": "U4af4980629",
					"messages": [{ "type": "text", "text": "Hello, world" }],
				}));
			then.status(200).header("content-type", "application/json").body(
				"{\"sentMessages\":[{\"id\":\"461230966842064897\",\"quoteToken\":\"IStG5h1Tz7b\"}]}",
			);
		})
		.await;
	let request = PushMessageRequest::new("U4af4980629", vec![Message::text("Hello, world")]);
	let sent = client.push_message(&request).await.expect("Push should succeed.");

	assert_eq!(sent.sent_messages.len(), 1);
	assert_eq!(sent.sent_messages[0].id, "461230966842064897");
	assert_eq!(sent.sent_messages[0].quote_token.as_deref(), Some("IStG5h1Tz7b"));

	mock.assert_async().await;
}

#[tokio::test]
async fn narrowcast_reports_acceptance_through_headers() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), CHANNEL_ACCESS_TOKEN);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v2/bot/message/narrowcast");
			then.status(202)
				.header("X-Line-Request-Id", "5b59509c-c57b-11e9-aa8c")
				.body("{}");
		})
		.await;
	let request = NarrowcastRequest::new(vec![Message::text("Segment offer")]);
	let response = client
		.narrowcast_with_http_info(&request)
		.await
		.expect("Narrowcast should be accepted.");

	assert_eq!(response.status, 202);
	assert_eq!(response.headers.request_id(), Some("5b59509c-c57b-11e9-aa8c"));

	mock.assert_async().await;
}

#[tokio::test]
async fn follower_listing_drains_every_page() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), CHANNEL_ACCESS_TOKEN);
	let first_page = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2/bot/followers/ids").query_param_missing("start");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"userIds\":[\"U1\",\"U2\"],\"next\":\"token-1\"}");
		})
		.await;
	let second_page = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2/bot/followers/ids").query_param("start", "token-1");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"userIds\":[\"U3\"]}");
		})
		.await;
	let ids = client.all_follower_ids().await.expect("Listing should drain both pages.");

	assert_eq!(ids, ["U1", "U2", "U3"]);

	first_page.assert_async().await;
	second_page.assert_async().await;
}

#[tokio::test]
async fn member_listings_combine_path_values_with_paging() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), CHANNEL_ACCESS_TOKEN);
	let group_first = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v2/bot/group/C61a2a7a/members/ids")
				.query_param_missing("start");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"memberIds\":[\"U1\",\"U2\"],\"next\":\"token-1\"}");
		})
		.await;
	let group_second = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v2/bot/group/C61a2a7a/members/ids")
				.query_param("start", "token-1");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"memberIds\":[\"U3\"]}");
		})
		.await;
	let room = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2/bot/room/R3f2c8b1/members/ids");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"memberIds\":[\"U4\"]}");
		})
		.await;
	let group_ids =
		client.all_group_member_ids("C61a2a7a").await.expect("Group listing should drain.");
	let room_page =
		client.room_member_ids("R3f2c8b1", None).await.expect("Room listing should succeed.");

	assert_eq!(group_ids, ["U1", "U2", "U3"]);
	assert_eq!(room_page.member_ids, ["U4"]);
	assert!(room_page.next.is_none());

	group_first.assert_async().await;
	group_second.assert_async().await;
	room.assert_async().await;
}

#[tokio::test]
async fn profile_resolves_path_placeholders() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), CHANNEL_ACCESS_TOKEN);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2/bot/profile/U0047556f2e40dba2456887320ba7c76d");
			then.status(200).header("content-type", "application/json").body(
				"{\"userId\":\"U0047556f2e40dba2456887320ba7c76d\",\"displayName\":\"LINE Taro\",\
				\"language\":\"en\"}",
			);
		})
		.await;
	let profile = client
		.profile("U0047556f2e40dba2456887320ba7c76d")
		.await
		.expect("Profile lookup should succeed.");

	assert_eq!(profile.display_name, "LINE Taro");
	assert_eq!(profile.language.as_deref(), Some("en"));

	mock.assert_async().await;
}
