//! Demonstrates pushing a text message with the default reqwest transport, pointing the
//! client at a local mock of the Messaging API.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use url::Url;
// self
use line_bot_client::{
	client::Client,
	endpoint::EndpointSet,
	http::ReqwestTransport,
	models::{Message, PushMessageRequest},
	reqwest,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let push_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v2/bot/message/push");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"sentMessages\":[{\"id\":\"461230966842064897\"}]}");
		})
		.await;
	let base = Url::parse(&server.base_url())?;
	let endpoints = EndpointSet::builder().api_base(base.clone()).data_base(base).build()?;
	let transport = ReqwestTransport::with_client(
		reqwest::Client::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()?,
	);
	let client = Client::with_transport(transport, "demo-channel-token")?.with_endpoints(endpoints);
	let request = PushMessageRequest::new(
		"U4af4980629abcdef",
		vec![Message::text("Hello from line-bot-client!")],
	);
	let sent = client.push_message(&request).await?;

	println!("Delivered as message id: {}.", sent.sent_messages[0].id);

	push_mock.assert_async().await;

	Ok(())
}
