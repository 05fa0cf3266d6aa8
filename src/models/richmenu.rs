//! Rich menu definitions and the shapes returned by the rich menu endpoints.

// self
use crate::{_prelude::*, models::action::Action};

/// Rich menu definition submitted on creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichMenuRequest {
	/// Menu canvas size, 2500x1686 or 2500x843.
	pub size: RichMenuSize,
	/// Shows the menu without a tap when `true`.
	pub selected: bool,
	/// Name shown in the management console, not to users.
	pub name: String,
	/// Label on the chat bar toggle.
	pub chat_bar_text: String,
	/// Tappable areas, at most twenty.
	pub areas: Vec<RichMenuArea>,
}

/// Rich menu as returned by the platform, the definition plus its id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichMenuResponse {
	/// Identifier assigned on creation.
	pub rich_menu_id: String,
	/// Menu canvas size.
	pub size: RichMenuSize,
	/// Shows the menu without a tap when `true`.
	pub selected: bool,
	/// Name shown in the management console.
	pub name: String,
	/// Label on the chat bar toggle.
	pub chat_bar_text: String,
	/// Tappable areas.
	pub areas: Vec<RichMenuArea>,
}

/// Canvas size of a rich menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichMenuSize {
	/// Width in pixels.
	pub width: u32,
	/// Height in pixels.
	pub height: u32,
}
impl RichMenuSize {
	/// Full-height canvas, 2500x1686.
	pub const FULL: Self = Self { width: 2_500, height: 1_686 };
	/// Half-height canvas, 2500x843.
	pub const HALF: Self = Self { width: 2_500, height: 843 };
}

/// One tappable area of a rich menu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichMenuArea {
	/// Area rectangle on the canvas.
	pub bounds: RichMenuBounds,
	/// Action performed when the area is tapped.
	pub action: Action,
}

/// Rectangle on the rich menu canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichMenuBounds {
	/// Horizontal offset from the left edge.
	pub x: u32,
	/// Vertical offset from the top edge.
	pub y: u32,
	/// Rectangle width in pixels.
	pub width: u32,
	/// Rectangle height in pixels.
	pub height: u32,
}

/// Response carrying only a rich menu identifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichMenuIdResponse {
	/// Rich menu identifier.
	pub rich_menu_id: String,
}

/// Response of the rich menu list endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RichMenuListResponse {
	/// All rich menus owned by the channel.
	#[serde(default)]
	pub richmenus: Vec<RichMenuResponse>,
}

/// Request body for creating a rich menu alias.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichMenuAliasRequest {
	/// Alias identifier, chosen by the caller.
	pub rich_menu_alias_id: String,
	/// Rich menu the alias points at.
	pub rich_menu_id: String,
}

/// Request body for repointing an existing alias.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichMenuAliasUpdateRequest {
	/// Rich menu the alias should point at.
	pub rich_menu_id: String,
}

/// Rich menu alias as returned by the platform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichMenuAliasResponse {
	/// Alias identifier.
	pub rich_menu_alias_id: String,
	/// Rich menu the alias points at.
	pub rich_menu_id: String,
}

/// Response of the alias list endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichMenuAliasListResponse {
	/// All aliases owned by the channel.
	#[serde(default)]
	pub aliases: Vec<RichMenuAliasResponse>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn request_serializes_with_camel_case_members() {
		let request = RichMenuRequest {
			size: RichMenuSize::HALF,
			selected: false,
			name: "Nice rich menu".into(),
			chat_bar_text: "Tap to open".into(),
			areas: vec![RichMenuArea {
				bounds: RichMenuBounds { x: 0, y: 0, width: 2_500, height: 843 },
				action: Action::postback("action=open"),
			}],
		};
		let value = serde_json::to_value(&request).expect("Request should serialize.");

		assert_eq!(value["size"], serde_json::json!({ "width": 2500, "height": 843 }));
		assert_eq!(value["chatBarText"], "Tap to open");
		assert_eq!(value["areas"][0]["action"]["type"], "postback");
	}

	#[test]
	fn list_response_uses_unrenamed_key() {
		let response: RichMenuListResponse = serde_json::from_value(serde_json::json!({
			"richmenus": [{
				"richMenuId": "richmenu-8dfdfc571eca39c0ffcd1f799519c5b5",
				"size": { "width": 2500, "height": 1686 },
				"selected": false,
				"name": "Nice rich menu",
				"chatBarText": "Tap to open",
				"areas": []
			}]
		}))
		.expect("Response should deserialize.");

		assert_eq!(response.richmenus.len(), 1);
		assert_eq!(response.richmenus[0].size, RichMenuSize::FULL);
	}

	#[test]
	fn empty_list_response_defaults() {
		let response: RichMenuListResponse =
			serde_json::from_value(serde_json::json!({})).expect("Response should deserialize.");

		assert!(response.richmenus.is_empty());
	}
}
