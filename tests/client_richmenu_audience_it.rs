// crates.io
use httpmock::prelude::*;
// self
use line_bot_client::{
	_preludet::*,
	models::{AudienceGroupPermission, AudienceGroupType},
};

const CHANNEL_ACCESS_TOKEN: &str = "test-channel-token";

#[tokio::test]
async fn rich_menu_image_upload_sends_raw_bytes() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), CHANNEL_ACCESS_TOKEN);
	let upload = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v2/bot/richmenu/richmenu-8752/content")
				.header("content-type", "image/png")
				.body("png-payload");
			then.status(200).header("content-type", "application/json").body("{}");
		})
		.await;

	client
		.set_rich_menu_image("richmenu-8752", "image/png", b"png-payload".to_vec())
		.await
		.expect("Image upload should succeed.");

	upload.assert_async().await;
}

#[tokio::test]
async fn rich_menu_deletion_round_trips() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), CHANNEL_ACCESS_TOKEN);
	let mock = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/v2/bot/richmenu/richmenu-8752");
			then.status(200).header("content-type", "application/json").body("{}");
		})
		.await;

	client.delete_rich_menu("richmenu-8752").await.expect("Deletion should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn audience_file_upload_builds_multipart_fields() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), CHANNEL_ACCESS_TOKEN);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v2/bot/audienceGroup/upload/byFile")
				.body_includes("name=\"description\"")
				.body_includes("audience-2024")
				.body_includes("name=\"isIfaAudience\"")
				.body_includes("name=\"uploadDescription\"")
				.body_includes("first-batch")
				.body_includes("filename=\"audiences.txt\"")
				.body_includes("text/plain")
				.body_includes("U4af4980629\nU91eeaf62d9");
			then.status(200).header("content-type", "application/json").body(
				"{\"audienceGroupId\":4389303728991,\"type\":\"UPLOAD\",\"description\":\
				\"audience-2024\",\"created\":1613698278,\"permission\":\"READ\",\
				\"expireTimestamp\":1673698278,\"isIfaAudience\":false}",
			);
		})
		.await;
	let created = client
		.create_upload_audience_group_by_file(
			"audience-2024",
			Some(false),
			Some("first-batch"),
			b"U4af4980629\nU91eeaf62d9".to_vec(),
		)
		.await
		.expect("Audience upload should succeed.");

	assert_eq!(created.audience_group_id, 4_389_303_728_991);
	assert_eq!(created.kind, AudienceGroupType::Upload);
	assert_eq!(created.permission, Some(AudienceGroupPermission::Read));

	mock.assert_async().await;
}

#[tokio::test]
async fn audience_group_list_passes_paging_query() {
	let server = MockServer::start_async().await;
	let client = build_reqwest_test_client(&server.base_url(), CHANNEL_ACCESS_TOKEN);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v2/bot/audienceGroup/list")
				.query_param("page", "1")
				.query_param("size", "40")
				.query_param("description", "promo");
			then.status(200).header("content-type", "application/json").body(
				"{\"audienceGroups\":[{\"audienceGroupId\":4389303728991,\"type\":\"UPLOAD\",\
				\"description\":\"promo-2024\",\"status\":\"READY\",\"audienceCount\":8619,\
				\"created\":1613698278}],\"hasNextPage\":false,\"totalCount\":1,\"size\":40,\
				\"page\":1}",
			);
		})
		.await;
	let listing = client
		.audience_group_list(1, Some(40), Some("promo"))
		.await
		.expect("Listing should succeed.");

	assert_eq!(listing.audience_groups.len(), 1);
	assert_eq!(listing.audience_groups[0].audience_count, Some(8619));
	assert_eq!(listing.has_next_page, Some(false));

	mock.assert_async().await;
}
