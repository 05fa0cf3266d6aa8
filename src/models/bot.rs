//! Profile, bot info, and membership listing shapes.

// self
use crate::_prelude::*;

/// Profile of one user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
	/// User identifier.
	pub user_id: String,
	/// Display name.
	pub display_name: String,
	/// Profile image URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub picture_url: Option<Url>,
	/// Status message.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status_message: Option<String>,
	/// Language of the user's client, BCP 47.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub language: Option<String>,
}

/// Information about the bot itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotInfo {
	/// Bot user identifier.
	pub user_id: String,
	/// Basic id, the `@`-prefixed searchable handle.
	pub basic_id: String,
	/// Premium id when one has been purchased.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub premium_id: Option<String>,
	/// Display name.
	pub display_name: String,
	/// Profile image URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub picture_url: Option<Url>,
	/// How incoming chats are handled.
	pub chat_mode: ChatMode,
	/// How incoming messages are marked as read.
	pub mark_as_read_mode: MarkAsReadMode,
}

/// How the bot handles incoming chats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
	/// A human operator answers chats.
	Chat,
	/// The bot answers chats.
	Bot,
}

/// How incoming messages are marked as read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkAsReadMode {
	/// Marked as read on arrival.
	Auto,
	/// Marked as read by the operator.
	Manual,
}

/// One page of follower user ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowerIds {
	/// User ids on this page.
	#[serde(default)]
	pub user_ids: Vec<String>,
	/// Continuation token; absent on the last page.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub next: Option<String>,
}

/// One page of group or room member user ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberIds {
	/// User ids on this page.
	#[serde(default)]
	pub member_ids: Vec<String>,
	/// Continuation token; absent on the last page.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub next: Option<String>,
}

/// Summary of a group chat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
	/// Group identifier.
	pub group_id: String,
	/// Group name.
	pub group_name: String,
	/// Group icon URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub picture_url: Option<Url>,
}

/// Member count of a group or room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCount {
	/// Members excluding the bot.
	pub count: i64,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn follower_page_uses_user_ids_key() {
		let page: FollowerIds = serde_json::from_value(serde_json::json!({
			"userIds": ["U1", "U2"],
			"next": "yANU9IA..."
		}))
		.expect("Page should deserialize.");

		assert_eq!(page.user_ids, vec!["U1".to_string(), "U2".to_string()]);
		assert!(page.next.is_some());
	}

	#[test]
	fn member_page_uses_member_ids_key() {
		let page: MemberIds =
			serde_json::from_value(serde_json::json!({ "memberIds": ["U3"] }))
				.expect("Page should deserialize.");

		assert_eq!(page.member_ids, vec!["U3".to_string()]);
		assert!(page.next.is_none());
	}

	#[test]
	fn profile_picture_url_round_trips() {
		let profile: Profile = serde_json::from_value(serde_json::json!({
			"userId": "U0047556f2e40dba2456887320ba7c76d",
			"displayName": "LINE Taro",
			"pictureUrl": "https://profile.line-scdn.net/abcdefghijklmn"
		}))
		.expect("Profile should deserialize.");

		assert_eq!(
			profile.picture_url.as_ref().map(Url::as_str),
			Some("https://profile.line-scdn.net/abcdefghijklmn")
		);

		let value = serde_json::to_value(&profile).expect("Profile should serialize.");

		assert_eq!(value["pictureUrl"], "https://profile.line-scdn.net/abcdefghijklmn");
	}

	#[test]
	fn bot_info_modes_deserialize() {
		let info: BotInfo = serde_json::from_value(serde_json::json!({
			"userId": "Ub9952f8...",
			"basicId": "@216ru...",
			"displayName": "Example name",
			"chatMode": "chat",
			"markAsReadMode": "manual"
		}))
		.expect("Bot info should deserialize.");

		assert_eq!(info.chat_mode, ChatMode::Chat);
		assert_eq!(info.mark_as_read_mode, MarkAsReadMode::Manual);
	}
}
