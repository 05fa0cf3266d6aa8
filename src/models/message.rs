//! Outgoing message payloads and the send request/response wrappers.

// self
use crate::{_prelude::*, models::action::Action};

/// Message payload accepted by the send endpoints.
///
/// Up to five messages travel in one request; the platform renders them in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Message {
	/// Plain text.
	Text(TextMessage),
	/// Sticker identified by package + sticker id.
	Sticker(StickerMessage),
	/// Image served from an HTTPS URL.
	Image(ImageMessage),
	/// Video with a preview image.
	Video(VideoMessage),
	/// Audio clip with its duration.
	Audio(AudioMessage),
	/// Geographic location.
	Location(LocationMessage),
}
impl Message {
	/// Text message with the given content.
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text(TextMessage { text: text.into(), quick_reply: None, sender: None })
	}

	/// Sticker message for the given package + sticker id.
	pub fn sticker(package_id: impl Into<String>, sticker_id: impl Into<String>) -> Self {
		Self::Sticker(StickerMessage {
			package_id: package_id.into(),
			sticker_id: sticker_id.into(),
			quick_reply: None,
			sender: None,
		})
	}

	/// Image message from original + preview URLs.
	pub fn image(original_content_url: Url, preview_image_url: Url) -> Self {
		Self::Image(ImageMessage {
			original_content_url,
			preview_image_url,
			quick_reply: None,
			sender: None,
		})
	}

	/// Location message for the given place.
	pub fn location(
		title: impl Into<String>,
		address: impl Into<String>,
		latitude: f64,
		longitude: f64,
	) -> Self {
		Self::Location(LocationMessage {
			title: title.into(),
			address: address.into(),
			latitude,
			longitude,
			quick_reply: None,
			sender: None,
		})
	}

	/// Attaches a quick reply to the message.
	pub fn with_quick_reply(mut self, quick_reply: QuickReply) -> Self {
		let slot = match &mut self {
			Self::Text(message) => &mut message.quick_reply,
			Self::Sticker(message) => &mut message.quick_reply,
			Self::Image(message) => &mut message.quick_reply,
			Self::Video(message) => &mut message.quick_reply,
			Self::Audio(message) => &mut message.quick_reply,
			Self::Location(message) => &mut message.quick_reply,
		};

		*slot = Some(quick_reply);

		self
	}
}

/// Plain text message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMessage {
	/// Message text.
	pub text: String,
	/// Quick reply attached to the message.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub quick_reply: Option<QuickReply>,
	/// Custom sender shown for the message.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sender: Option<Sender>,
}

/// Sticker message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerMessage {
	/// Sticker package identifier.
	pub package_id: String,
	/// Sticker identifier within the package.
	pub sticker_id: String,
	/// Quick reply attached to the message.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub quick_reply: Option<QuickReply>,
	/// Custom sender shown for the message.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sender: Option<Sender>,
}

/// Image message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMessage {
	/// Full-size image URL (HTTPS).
	pub original_content_url: Url,
	/// Preview image URL (HTTPS).
	pub preview_image_url: Url,
	/// Quick reply attached to the message.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub quick_reply: Option<QuickReply>,
	/// Custom sender shown for the message.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sender: Option<Sender>,
}

/// Video message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMessage {
	/// Video file URL (HTTPS).
	pub original_content_url: Url,
	/// Preview image URL (HTTPS).
	pub preview_image_url: Url,
	/// Identifier correlating playback statistics.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tracking_id: Option<String>,
	/// Quick reply attached to the message.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub quick_reply: Option<QuickReply>,
	/// Custom sender shown for the message.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sender: Option<Sender>,
}

/// Audio message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioMessage {
	/// Audio file URL (HTTPS).
	pub original_content_url: Url,
	/// Clip length in milliseconds.
	pub duration: u64,
	/// Quick reply attached to the message.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub quick_reply: Option<QuickReply>,
	/// Custom sender shown for the message.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sender: Option<Sender>,
}

/// Location message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationMessage {
	/// Place title.
	pub title: String,
	/// Postal address.
	pub address: String,
	/// Latitude in decimal degrees.
	pub latitude: f64,
	/// Longitude in decimal degrees.
	pub longitude: f64,
	/// Quick reply attached to the message.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub quick_reply: Option<QuickReply>,
	/// Custom sender shown for the message.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sender: Option<Sender>,
}

/// Quick reply buttons shown beneath a message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickReply {
	/// Buttons in display order, at most thirteen.
	pub items: Vec<QuickReplyItem>,
}
impl QuickReply {
	/// Wraps the given buttons.
	pub fn new(items: Vec<QuickReplyItem>) -> Self {
		Self { items }
	}
}

/// One quick reply button.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickReplyItem {
	/// Fixed discriminator, always `action`.
	#[serde(rename = "type")]
	pub kind: QuickReplyItemKind,
	/// Icon shown beside the label.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image_url: Option<Url>,
	/// Action performed when the button is tapped.
	pub action: Action,
}
impl QuickReplyItem {
	/// Button performing the given action.
	pub fn new(action: Action) -> Self {
		Self { kind: QuickReplyItemKind::Action, image_url: None, action }
	}
}

/// Discriminator for [`QuickReplyItem`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickReplyItemKind {
	/// The only published kind.
	#[default]
	Action,
}

/// Custom sender name and icon shown for a message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sender {
	/// Display name override.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Icon URL override (HTTPS).
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub icon_url: Option<Url>,
}

/// Request body for the push endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushMessageRequest {
	/// Recipient user, group, or room identifier.
	pub to: String,
	/// Messages delivered in order.
	pub messages: Vec<Message>,
	/// Suppresses the push notification when `true`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub notification_disabled: Option<bool>,
	/// Name of the aggregation unit counting this send.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub custom_aggregation_units: Option<Vec<String>>,
}
impl PushMessageRequest {
	/// Push request for the given recipient.
	pub fn new(to: impl Into<String>, messages: Vec<Message>) -> Self {
		Self { to: to.into(), messages, notification_disabled: None, custom_aggregation_units: None }
	}
}

/// Request body for the reply endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyMessageRequest {
	/// Token from the webhook event being replied to; single use, short lived.
	pub reply_token: String,
	/// Messages delivered in order.
	pub messages: Vec<Message>,
	/// Suppresses the push notification when `true`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub notification_disabled: Option<bool>,
}
impl ReplyMessageRequest {
	/// Reply request for the given reply token.
	pub fn new(reply_token: impl Into<String>, messages: Vec<Message>) -> Self {
		Self { reply_token: reply_token.into(), messages, notification_disabled: None }
	}
}

/// Request body for the multicast endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MulticastRequest {
	/// Recipient user identifiers, at most five hundred.
	pub to: Vec<String>,
	/// Messages delivered in order.
	pub messages: Vec<Message>,
	/// Suppresses the push notification when `true`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub notification_disabled: Option<bool>,
	/// Name of the aggregation unit counting this send.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub custom_aggregation_units: Option<Vec<String>>,
}
impl MulticastRequest {
	/// Multicast request for the given recipients.
	pub fn new(to: Vec<String>, messages: Vec<Message>) -> Self {
		Self { to, messages, notification_disabled: None, custom_aggregation_units: None }
	}
}

/// Request body for the broadcast endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastRequest {
	/// Messages delivered in order.
	pub messages: Vec<Message>,
	/// Suppresses the push notification when `true`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub notification_disabled: Option<bool>,
}
impl BroadcastRequest {
	/// Broadcast request with the given messages.
	pub fn new(messages: Vec<Message>) -> Self {
		Self { messages, notification_disabled: None }
	}
}

/// Response body of the push, reply, and multicast endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentMessagesResponse {
	/// One entry per delivered message.
	#[serde(default)]
	pub sent_messages: Vec<SentMessage>,
}

/// Identifier of one delivered message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentMessage {
	/// Message identifier.
	pub id: String,
	/// Token for quoting this message later.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub quote_token: Option<String>,
}

/// Monthly message quota of the channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageQuota {
	/// Whether a numeric limit applies.
	#[serde(rename = "type")]
	pub kind: QuotaKind,
	/// The limit value when `kind` is `limited`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub value: Option<i64>,
}

/// Quota classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotaKind {
	/// No limit applies.
	None,
	/// A numeric monthly limit applies.
	Limited,
}

/// Number of messages sent in the current month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaConsumption {
	/// Messages counted against the quota so far.
	pub total_usage: i64,
}
