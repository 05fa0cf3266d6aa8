//! Tap actions shared by messages, quick replies, and rich menu areas.

// self
use crate::_prelude::*;

/// Action performed when a user taps an interactive element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
	/// Returns a postback event to the webhook.
	Postback(PostbackAction),
	/// Sends a message on the user's behalf.
	Message(MessageAction),
	/// Opens a URI.
	Uri(UriAction),
	/// Opens a date or time picker.
	Datetimepicker(DatetimePickerAction),
	/// Opens the in-app camera.
	Camera(CameraAction),
	/// Opens the camera roll.
	CameraRoll(CameraRollAction),
	/// Opens the location sharing screen.
	Location(LocationAction),
	/// Switches between rich menu aliases.
	Richmenuswitch(RichMenuSwitchAction),
}
impl Action {
	/// Postback action carrying the given payload data.
	pub fn postback(data: impl Into<String>) -> Self {
		Self::Postback(PostbackAction {
			label: None,
			data: data.into(),
			display_text: None,
			input_option: None,
			fill_in_text: None,
		})
	}

	/// Message action sending the given text.
	pub fn message(text: impl Into<String>) -> Self {
		Self::Message(MessageAction { label: None, text: text.into() })
	}

	/// URI action opening the given target.
	pub fn uri(uri: Url) -> Self {
		Self::Uri(UriAction { label: None, uri, alt_uri: None })
	}
}

/// Data returned to the webhook as a postback event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostbackAction {
	/// Label shown on the tappable element.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	/// Payload string delivered in the postback event.
	pub data: String,
	/// Text shown in the chat as the user's message.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub display_text: Option<String>,
	/// Display method for the rich menu or keyboard after the tap.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub input_option: Option<PostbackInputOption>,
	/// Text pre-filled into the input field when `input_option` is `openKeyboard`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fill_in_text: Option<String>,
}

/// Post-tap display behavior for postback actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PostbackInputOption {
	/// Close the rich menu.
	CloseRichMenu,
	/// Open the rich menu.
	OpenRichMenu,
	/// Open the keyboard.
	OpenKeyboard,
	/// Open the voice message input.
	OpenVoice,
}

/// Sends a text message on the user's behalf.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageAction {
	/// Label shown on the tappable element.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	/// Text sent into the chat.
	pub text: String,
}

/// Opens the given URI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UriAction {
	/// Label shown on the tappable element.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	/// Target opened on mobile.
	pub uri: Url,
	/// Alternative targets per platform.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub alt_uri: Option<AltUri>,
}

/// Per-platform URI overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AltUri {
	/// Target opened on desktop clients.
	pub desktop: Url,
}

/// Opens a date, time, or datetime picker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatetimePickerAction {
	/// Label shown on the tappable element.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	/// Payload string delivered in the postback event.
	pub data: String,
	/// Picker mode.
	pub mode: DatetimePickerMode,
	/// Initially selected value.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub initial: Option<String>,
	/// Largest selectable value.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max: Option<String>,
	/// Smallest selectable value.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min: Option<String>,
}

/// Picker mode for [`DatetimePickerAction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatetimePickerMode {
	/// Calendar date.
	Date,
	/// Time of day.
	Time,
	/// Date and time.
	Datetime,
}

/// Opens the in-app camera.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraAction {
	/// Label shown on the tappable element.
	pub label: String,
}

/// Opens the camera roll.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraRollAction {
	/// Label shown on the tappable element.
	pub label: String,
}

/// Opens the location sharing screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationAction {
	/// Label shown on the tappable element.
	pub label: String,
}

/// Switches the visible rich menu through an alias.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichMenuSwitchAction {
	/// Label shown on the tappable element.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	/// Alias of the rich menu made visible after the tap.
	pub rich_menu_alias_id: String,
	/// Payload string delivered in the postback event.
	pub data: String,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn actions_serialize_with_type_tags() {
		let postback = serde_json::to_value(Action::postback("buy=1"))
			.expect("Postback action should serialize.");

		assert_eq!(postback, serde_json::json!({ "type": "postback", "data": "buy=1" }));

		let camera_roll =
			serde_json::to_value(Action::CameraRoll(CameraRollAction { label: "Pick".into() }))
				.expect("Camera roll action should serialize.");

		assert_eq!(camera_roll, serde_json::json!({ "type": "cameraRoll", "label": "Pick" }));
	}

	#[test]
	fn datetimepicker_round_trips() {
		let raw = serde_json::json!({
			"type": "datetimepicker",
			"label": "When",
			"data": "slot=1",
			"mode": "datetime",
			"initial": "2026-08-01T10:00"
		});
		let action: Action =
			serde_json::from_value(raw.clone()).expect("Picker action should deserialize.");

		assert!(matches!(
			&action,
			Action::Datetimepicker(picker) if picker.mode == DatetimePickerMode::Datetime
		));
		assert_eq!(
			serde_json::to_value(&action).expect("Picker action should serialize."),
			raw
		);
	}
}
