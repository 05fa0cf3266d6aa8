//! Message sending, quota, profile, membership, and content operations.

// self
use crate::{
	_prelude::*,
	client::Client,
	dispatch::{ApiCall, ApiResponse, RequestPayload},
	endpoint::{Endpoint, Method, Surface},
	http::HttpTransport,
	models::{
		BotInfo, BroadcastRequest, FollowerIds, GroupSummary, MemberCount, MemberIds,
		MessageQuota, MulticastRequest, NarrowcastProgress, NarrowcastRequest, Profile,
		PushMessageRequest, QuotaConsumption, ReplyMessageRequest, SentMessagesResponse,
	},
};

impl<T> Client<T>
where
	T: ?Sized + HttpTransport,
{
	/// Replies to a webhook event using its single-use reply token.
	pub async fn reply_message(
		&self,
		request: &ReplyMessageRequest,
	) -> Result<SentMessagesResponse> {
		Ok(self.reply_message_with_http_info(request).await?.body)
	}

	/// Variant of [`Client::reply_message`] that also returns status and headers.
	pub async fn reply_message_with_http_info(
		&self,
		request: &ReplyMessageRequest,
	) -> Result<ApiResponse<SentMessagesResponse>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Post, Surface::Messaging, "/v2/bot/message/reply");

		self.request(ApiCall::new(ENDPOINT).payload(RequestPayload::json(request)?)).await
	}

	/// Sends messages to one user, group, or room.
	pub async fn push_message(&self, request: &PushMessageRequest) -> Result<SentMessagesResponse> {
		Ok(self.push_message_with_http_info(request).await?.body)
	}

	/// Variant of [`Client::push_message`] that also returns status and headers.
	pub async fn push_message_with_http_info(
		&self,
		request: &PushMessageRequest,
	) -> Result<ApiResponse<SentMessagesResponse>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Post, Surface::Messaging, "/v2/bot/message/push");

		self.request(ApiCall::new(ENDPOINT).payload(RequestPayload::json(request)?)).await
	}

	/// Sends messages to up to five hundred users at once.
	pub async fn multicast(&self, request: &MulticastRequest) -> Result<()> {
		Ok(self.multicast_with_http_info(request).await?.body)
	}

	/// Variant of [`Client::multicast`] that also returns status and headers.
	pub async fn multicast_with_http_info(
		&self,
		request: &MulticastRequest,
	) -> Result<ApiResponse<()>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Post, Surface::Messaging, "/v2/bot/message/multicast");

		self.request_empty(ApiCall::new(ENDPOINT).payload(RequestPayload::json(request)?)).await
	}

	/// Sends messages to every follower.
	pub async fn broadcast(&self, request: &BroadcastRequest) -> Result<()> {
		Ok(self.broadcast_with_http_info(request).await?.body)
	}

	/// Variant of [`Client::broadcast`] that also returns status and headers.
	pub async fn broadcast_with_http_info(
		&self,
		request: &BroadcastRequest,
	) -> Result<ApiResponse<()>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Post, Surface::Messaging, "/v2/bot/message/broadcast");

		self.request_empty(ApiCall::new(ENDPOINT).payload(RequestPayload::json(request)?)).await
	}

	/// Sends messages to a filtered follower segment.
	///
	/// The platform answers `202 Accepted` and delivers asynchronously. The tracking
	/// identifier for [`Client::narrowcast_progress`] arrives in the
	/// `x-line-request-id` response header, so use
	/// [`Client::narrowcast_with_http_info`] when you need it.
	pub async fn narrowcast(&self, request: &NarrowcastRequest) -> Result<()> {
		Ok(self.narrowcast_with_http_info(request).await?.body)
	}

	/// Variant of [`Client::narrowcast`] that also returns status and headers.
	pub async fn narrowcast_with_http_info(
		&self,
		request: &NarrowcastRequest,
	) -> Result<ApiResponse<()>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Post, Surface::Messaging, "/v2/bot/message/narrowcast");

		self.request_empty(ApiCall::new(ENDPOINT).payload(RequestPayload::json(request)?)).await
	}

	/// Reports the delivery progress of an accepted narrowcast.
	pub async fn narrowcast_progress(&self, request_id: &str) -> Result<NarrowcastProgress> {
		Ok(self.narrowcast_progress_with_http_info(request_id).await?.body)
	}

	/// Variant of [`Client::narrowcast_progress`] that also returns status and headers.
	pub async fn narrowcast_progress_with_http_info(
		&self,
		request_id: &str,
	) -> Result<ApiResponse<NarrowcastProgress>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/message/progress/narrowcast");

		self.request(ApiCall::new(ENDPOINT).query_pair("requestId", request_id)).await
	}

	/// The channel's monthly message quota.
	pub async fn message_quota(&self) -> Result<MessageQuota> {
		Ok(self.message_quota_with_http_info().await?.body)
	}

	/// Variant of [`Client::message_quota`] that also returns status and headers.
	pub async fn message_quota_with_http_info(&self) -> Result<ApiResponse<MessageQuota>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/message/quota");

		self.request(ApiCall::new(ENDPOINT)).await
	}

	/// Number of messages already counted against this month's quota.
	pub async fn message_quota_consumption(&self) -> Result<QuotaConsumption> {
		Ok(self.message_quota_consumption_with_http_info().await?.body)
	}

	/// Variant of [`Client::message_quota_consumption`] that also returns status and
	/// headers.
	pub async fn message_quota_consumption_with_http_info(
		&self,
	) -> Result<ApiResponse<QuotaConsumption>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/message/quota/consumption");

		self.request(ApiCall::new(ENDPOINT)).await
	}

	/// Profile of one user who has interacted with the channel.
	pub async fn profile(&self, user_id: &str) -> Result<Profile> {
		Ok(self.profile_with_http_info(user_id).await?.body)
	}

	/// Variant of [`Client::profile`] that also returns status and headers.
	pub async fn profile_with_http_info(&self, user_id: &str) -> Result<ApiResponse<Profile>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/profile/{userId}");

		self.request(ApiCall::new(ENDPOINT).path_values(&[user_id])).await
	}

	/// Information about the bot itself.
	pub async fn bot_info(&self) -> Result<BotInfo> {
		Ok(self.bot_info_with_http_info().await?.body)
	}

	/// Variant of [`Client::bot_info`] that also returns status and headers.
	pub async fn bot_info_with_http_info(&self) -> Result<ApiResponse<BotInfo>> {
		const ENDPOINT: Endpoint = Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/info");

		self.request(ApiCall::new(ENDPOINT)).await
	}

	/// One page of follower user ids.
	///
	/// Pass the previous page's `next` token as `start` to continue, or use
	/// [`Client::all_follower_ids`] to drain every page.
	pub async fn follower_ids(
		&self,
		start: Option<&str>,
		limit: Option<u32>,
	) -> Result<FollowerIds> {
		Ok(self.follower_ids_with_http_info(start, limit).await?.body)
	}

	/// Variant of [`Client::follower_ids`] that also returns status and headers.
	pub async fn follower_ids_with_http_info(
		&self,
		start: Option<&str>,
		limit: Option<u32>,
	) -> Result<ApiResponse<FollowerIds>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/followers/ids");

		let mut call = ApiCall::new(ENDPOINT);

		if let Some(start) = start {
			call = call.query_pair("start", start);
		}
		if let Some(limit) = limit {
			call = call.query_pair("limit", limit.to_string());
		}

		self.request(call).await
	}

	/// Every follower user id, following continuation tokens until exhausted.
	///
	/// Issues one request per page; a failure on any page aborts the whole listing.
	pub async fn all_follower_ids(&self) -> Result<Vec<String>> {
		let mut ids = Vec::new();
		let mut start = None::<String>;

		loop {
			let page = self.follower_ids(start.as_deref(), None).await?;

			ids.extend(page.user_ids);

			match page.next {
				Some(next) => start = Some(next),
				None => break,
			}
		}

		Ok(ids)
	}

	/// One page of member user ids of a group chat.
	pub async fn group_member_ids(
		&self,
		group_id: &str,
		start: Option<&str>,
	) -> Result<MemberIds> {
		Ok(self.group_member_ids_with_http_info(group_id, start).await?.body)
	}

	/// Variant of [`Client::group_member_ids`] that also returns status and headers.
	pub async fn group_member_ids_with_http_info(
		&self,
		group_id: &str,
		start: Option<&str>,
	) -> Result<ApiResponse<MemberIds>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/group/{groupId}/members/ids");

		let values = [group_id];
		let mut call = ApiCall::new(ENDPOINT).path_values(&values);

		if let Some(start) = start {
			call = call.query_pair("start", start);
		}

		self.request(call).await
	}

	/// Every member user id of a group chat, following continuation tokens.
	pub async fn all_group_member_ids(&self, group_id: &str) -> Result<Vec<String>> {
		let mut ids = Vec::new();
		let mut start = None::<String>;

		loop {
			let page = self.group_member_ids(group_id, start.as_deref()).await?;

			ids.extend(page.member_ids);

			match page.next {
				Some(next) => start = Some(next),
				None => break,
			}
		}

		Ok(ids)
	}

	/// One page of member user ids of a multi-person chat room.
	pub async fn room_member_ids(&self, room_id: &str, start: Option<&str>) -> Result<MemberIds> {
		Ok(self.room_member_ids_with_http_info(room_id, start).await?.body)
	}

	/// Variant of [`Client::room_member_ids`] that also returns status and headers.
	pub async fn room_member_ids_with_http_info(
		&self,
		room_id: &str,
		start: Option<&str>,
	) -> Result<ApiResponse<MemberIds>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/room/{roomId}/members/ids");

		let values = [room_id];
		let mut call = ApiCall::new(ENDPOINT).path_values(&values);

		if let Some(start) = start {
			call = call.query_pair("start", start);
		}

		self.request(call).await
	}

	/// Every member user id of a room, following continuation tokens.
	pub async fn all_room_member_ids(&self, room_id: &str) -> Result<Vec<String>> {
		let mut ids = Vec::new();
		let mut start = None::<String>;

		loop {
			let page = self.room_member_ids(room_id, start.as_deref()).await?;

			ids.extend(page.member_ids);

			match page.next {
				Some(next) => start = Some(next),
				None => break,
			}
		}

		Ok(ids)
	}

	/// Name, icon, and id of a group chat.
	pub async fn group_summary(&self, group_id: &str) -> Result<GroupSummary> {
		Ok(self.group_summary_with_http_info(group_id).await?.body)
	}

	/// Variant of [`Client::group_summary`] that also returns status and headers.
	pub async fn group_summary_with_http_info(
		&self,
		group_id: &str,
	) -> Result<ApiResponse<GroupSummary>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/group/{groupId}/summary");

		self.request(ApiCall::new(ENDPOINT).path_values(&[group_id])).await
	}

	/// Member count of a group chat, excluding the bot.
	pub async fn group_member_count(&self, group_id: &str) -> Result<MemberCount> {
		Ok(self.group_member_count_with_http_info(group_id).await?.body)
	}

	/// Variant of [`Client::group_member_count`] that also returns status and headers.
	pub async fn group_member_count_with_http_info(
		&self,
		group_id: &str,
	) -> Result<ApiResponse<MemberCount>> {
		const ENDPOINT: Endpoint = Endpoint::json(
			Method::Get,
			Surface::Messaging,
			"/v2/bot/group/{groupId}/members/count",
		);

		self.request(ApiCall::new(ENDPOINT).path_values(&[group_id])).await
	}

	/// Member count of a room, excluding the bot.
	pub async fn room_member_count(&self, room_id: &str) -> Result<MemberCount> {
		Ok(self.room_member_count_with_http_info(room_id).await?.body)
	}

	/// Variant of [`Client::room_member_count`] that also returns status and headers.
	pub async fn room_member_count_with_http_info(
		&self,
		room_id: &str,
	) -> Result<ApiResponse<MemberCount>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/room/{roomId}/members/count");

		self.request(ApiCall::new(ENDPOINT).path_values(&[room_id])).await
	}

	/// Leaves a group chat.
	pub async fn leave_group(&self, group_id: &str) -> Result<()> {
		Ok(self.leave_group_with_http_info(group_id).await?.body)
	}

	/// Variant of [`Client::leave_group`] that also returns status and headers.
	pub async fn leave_group_with_http_info(&self, group_id: &str) -> Result<ApiResponse<()>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Post, Surface::Messaging, "/v2/bot/group/{groupId}/leave");

		self.request_empty(ApiCall::new(ENDPOINT).path_values(&[group_id])).await
	}

	/// Leaves a multi-person chat room.
	pub async fn leave_room(&self, room_id: &str) -> Result<()> {
		Ok(self.leave_room_with_http_info(room_id).await?.body)
	}

	/// Variant of [`Client::leave_room`] that also returns status and headers.
	pub async fn leave_room_with_http_info(&self, room_id: &str) -> Result<ApiResponse<()>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Post, Surface::Messaging, "/v2/bot/room/{roomId}/leave");

		self.request_empty(ApiCall::new(ENDPOINT).path_values(&[room_id])).await
	}

	/// Downloads the binary content attached to a received message.
	///
	/// Resolves against the data surface and returns the bytes unparsed.
	pub async fn message_content(&self, message_id: &str) -> Result<Vec<u8>> {
		Ok(self.message_content_with_http_info(message_id).await?.body)
	}

	/// Variant of [`Client::message_content`] that also returns status and headers.
	pub async fn message_content_with_http_info(
		&self,
		message_id: &str,
	) -> Result<ApiResponse<Vec<u8>>> {
		const ENDPOINT: Endpoint =
			Endpoint::binary(Method::Get, Surface::Data, "/v2/bot/message/{messageId}/content");

		self.request_bytes(ApiCall::new(ENDPOINT).path_values(&[message_id])).await
	}
}
