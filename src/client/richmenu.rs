//! Rich menu and rich menu alias operations.

// self
use crate::{
	_prelude::*,
	client::Client,
	dispatch::{ApiCall, ApiResponse, RequestPayload},
	endpoint::{Endpoint, Method, Surface},
	error::ConfigError,
	http::HttpTransport,
	models::{
		RichMenuAliasListResponse, RichMenuAliasRequest, RichMenuAliasResponse,
		RichMenuAliasUpdateRequest, RichMenuIdResponse, RichMenuListResponse, RichMenuRequest,
		RichMenuResponse,
	},
};

/// Media types the platform accepts for rich menu images.
const SUPPORTED_IMAGE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

impl<T> Client<T>
where
	T: ?Sized + HttpTransport,
{
	/// Creates a rich menu and returns its assigned id.
	///
	/// The menu stays unusable until an image is attached with
	/// [`Client::set_rich_menu_image`].
	pub async fn create_rich_menu(&self, request: &RichMenuRequest) -> Result<RichMenuIdResponse> {
		Ok(self.create_rich_menu_with_http_info(request).await?.body)
	}

	/// Variant of [`Client::create_rich_menu`] that also returns status and headers.
	pub async fn create_rich_menu_with_http_info(
		&self,
		request: &RichMenuRequest,
	) -> Result<ApiResponse<RichMenuIdResponse>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Post, Surface::Messaging, "/v2/bot/richmenu");

		self.request(ApiCall::new(ENDPOINT).payload(RequestPayload::json(request)?)).await
	}

	/// Fetches one rich menu by id.
	pub async fn rich_menu(&self, rich_menu_id: &str) -> Result<RichMenuResponse> {
		Ok(self.rich_menu_with_http_info(rich_menu_id).await?.body)
	}

	/// Variant of [`Client::rich_menu`] that also returns status and headers.
	pub async fn rich_menu_with_http_info(
		&self,
		rich_menu_id: &str,
	) -> Result<ApiResponse<RichMenuResponse>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/richmenu/{richMenuId}");

		self.request(ApiCall::new(ENDPOINT).path_values(&[rich_menu_id])).await
	}

	/// Deletes a rich menu.
	pub async fn delete_rich_menu(&self, rich_menu_id: &str) -> Result<()> {
		Ok(self.delete_rich_menu_with_http_info(rich_menu_id).await?.body)
	}

	/// Variant of [`Client::delete_rich_menu`] that also returns status and headers.
	pub async fn delete_rich_menu_with_http_info(
		&self,
		rich_menu_id: &str,
	) -> Result<ApiResponse<()>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Delete, Surface::Messaging, "/v2/bot/richmenu/{richMenuId}");

		self.request_empty(ApiCall::new(ENDPOINT).path_values(&[rich_menu_id])).await
	}

	/// Lists every rich menu owned by the channel.
	pub async fn rich_menu_list(&self) -> Result<RichMenuListResponse> {
		Ok(self.rich_menu_list_with_http_info().await?.body)
	}

	/// Variant of [`Client::rich_menu_list`] that also returns status and headers.
	pub async fn rich_menu_list_with_http_info(&self) -> Result<ApiResponse<RichMenuListResponse>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/richmenu/list");

		self.request(ApiCall::new(ENDPOINT)).await
	}

	/// Attaches the menu image, a JPEG or PNG matching the declared canvas size.
	///
	/// The media type is checked locally; anything other than `image/jpeg` or
	/// `image/png` fails before any network call. Resolves against the data surface.
	pub async fn set_rich_menu_image(
		&self,
		rich_menu_id: &str,
		content_type: &str,
		bytes: Vec<u8>,
	) -> Result<()> {
		Ok(self.set_rich_menu_image_with_http_info(rich_menu_id, content_type, bytes).await?.body)
	}

	/// Variant of [`Client::set_rich_menu_image`] that also returns status and headers.
	pub async fn set_rich_menu_image_with_http_info(
		&self,
		rich_menu_id: &str,
		content_type: &str,
		bytes: Vec<u8>,
	) -> Result<ApiResponse<()>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Post, Surface::Data, "/v2/bot/richmenu/{richMenuId}/content");

		if !SUPPORTED_IMAGE_TYPES.contains(&content_type) {
			return Err(
				ConfigError::UnsupportedImageType { content_type: content_type.into() }.into()
			);
		}

		let payload = RequestPayload::Binary { content_type: content_type.into(), bytes };

		self.request_empty(ApiCall::new(ENDPOINT).path_values(&[rich_menu_id]).payload(payload))
			.await
	}

	/// Downloads the image attached to a rich menu, unparsed.
	pub async fn rich_menu_image(&self, rich_menu_id: &str) -> Result<Vec<u8>> {
		Ok(self.rich_menu_image_with_http_info(rich_menu_id).await?.body)
	}

	/// Variant of [`Client::rich_menu_image`] that also returns status and headers.
	pub async fn rich_menu_image_with_http_info(
		&self,
		rich_menu_id: &str,
	) -> Result<ApiResponse<Vec<u8>>> {
		const ENDPOINT: Endpoint =
			Endpoint::binary(Method::Get, Surface::Data, "/v2/bot/richmenu/{richMenuId}/content");

		self.request_bytes(ApiCall::new(ENDPOINT).path_values(&[rich_menu_id])).await
	}

	/// Links a rich menu to one user, overriding the default menu.
	pub async fn link_rich_menu_to_user(&self, user_id: &str, rich_menu_id: &str) -> Result<()> {
		Ok(self.link_rich_menu_to_user_with_http_info(user_id, rich_menu_id).await?.body)
	}

	/// Variant of [`Client::link_rich_menu_to_user`] that also returns status and
	/// headers.
	pub async fn link_rich_menu_to_user_with_http_info(
		&self,
		user_id: &str,
		rich_menu_id: &str,
	) -> Result<ApiResponse<()>> {
		const ENDPOINT: Endpoint = Endpoint::json(
			Method::Post,
			Surface::Messaging,
			"/v2/bot/user/{userId}/richmenu/{richMenuId}",
		);

		self.request_empty(ApiCall::new(ENDPOINT).path_values(&[user_id, rich_menu_id])).await
	}

	/// Removes a user's per-user rich menu link.
	pub async fn unlink_rich_menu_from_user(&self, user_id: &str) -> Result<()> {
		Ok(self.unlink_rich_menu_from_user_with_http_info(user_id).await?.body)
	}

	/// Variant of [`Client::unlink_rich_menu_from_user`] that also returns status and
	/// headers.
	pub async fn unlink_rich_menu_from_user_with_http_info(
		&self,
		user_id: &str,
	) -> Result<ApiResponse<()>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Delete, Surface::Messaging, "/v2/bot/user/{userId}/richmenu");

		self.request_empty(ApiCall::new(ENDPOINT).path_values(&[user_id])).await
	}

	/// Id of the default rich menu shown to users without a per-user link.
	pub async fn default_rich_menu_id(&self) -> Result<RichMenuIdResponse> {
		Ok(self.default_rich_menu_id_with_http_info().await?.body)
	}

	/// Variant of [`Client::default_rich_menu_id`] that also returns status and
	/// headers.
	pub async fn default_rich_menu_id_with_http_info(
		&self,
	) -> Result<ApiResponse<RichMenuIdResponse>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/user/all/richmenu");

		self.request(ApiCall::new(ENDPOINT)).await
	}

	/// Makes a rich menu the default for every user without a per-user link.
	pub async fn set_default_rich_menu(&self, rich_menu_id: &str) -> Result<()> {
		Ok(self.set_default_rich_menu_with_http_info(rich_menu_id).await?.body)
	}

	/// Variant of [`Client::set_default_rich_menu`] that also returns status and
	/// headers.
	pub async fn set_default_rich_menu_with_http_info(
		&self,
		rich_menu_id: &str,
	) -> Result<ApiResponse<()>> {
		const ENDPOINT: Endpoint = Endpoint::json(
			Method::Post,
			Surface::Messaging,
			"/v2/bot/user/all/richmenu/{richMenuId}",
		);

		self.request_empty(ApiCall::new(ENDPOINT).path_values(&[rich_menu_id])).await
	}

	/// Clears the default rich menu.
	pub async fn cancel_default_rich_menu(&self) -> Result<()> {
		Ok(self.cancel_default_rich_menu_with_http_info().await?.body)
	}

	/// Variant of [`Client::cancel_default_rich_menu`] that also returns status and
	/// headers.
	pub async fn cancel_default_rich_menu_with_http_info(&self) -> Result<ApiResponse<()>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Delete, Surface::Messaging, "/v2/bot/user/all/richmenu");

		self.request_empty(ApiCall::new(ENDPOINT)).await
	}

	/// Creates an alias pointing at a rich menu, e.g. for rich menu switch actions.
	pub async fn create_rich_menu_alias(&self, request: &RichMenuAliasRequest) -> Result<()> {
		Ok(self.create_rich_menu_alias_with_http_info(request).await?.body)
	}

	/// Variant of [`Client::create_rich_menu_alias`] that also returns status and
	/// headers.
	pub async fn create_rich_menu_alias_with_http_info(
		&self,
		request: &RichMenuAliasRequest,
	) -> Result<ApiResponse<()>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Post, Surface::Messaging, "/v2/bot/richmenu/alias");

		self.request_empty(ApiCall::new(ENDPOINT).payload(RequestPayload::json(request)?)).await
	}

	/// Repoints an existing alias at another rich menu.
	pub async fn update_rich_menu_alias(
		&self,
		rich_menu_alias_id: &str,
		request: &RichMenuAliasUpdateRequest,
	) -> Result<()> {
		Ok(self.update_rich_menu_alias_with_http_info(rich_menu_alias_id, request).await?.body)
	}

	/// Variant of [`Client::update_rich_menu_alias`] that also returns status and
	/// headers.
	pub async fn update_rich_menu_alias_with_http_info(
		&self,
		rich_menu_alias_id: &str,
		request: &RichMenuAliasUpdateRequest,
	) -> Result<ApiResponse<()>> {
		const ENDPOINT: Endpoint = Endpoint::json(
			Method::Post,
			Surface::Messaging,
			"/v2/bot/richmenu/alias/{richMenuAliasId}",
		);

		self.request_empty(
			ApiCall::new(ENDPOINT)
				.path_values(&[rich_menu_alias_id])
				.payload(RequestPayload::json(request)?),
		)
		.await
	}

	/// Deletes a rich menu alias.
	pub async fn delete_rich_menu_alias(&self, rich_menu_alias_id: &str) -> Result<()> {
		Ok(self.delete_rich_menu_alias_with_http_info(rich_menu_alias_id).await?.body)
	}

	/// Variant of [`Client::delete_rich_menu_alias`] that also returns status and
	/// headers.
	pub async fn delete_rich_menu_alias_with_http_info(
		&self,
		rich_menu_alias_id: &str,
	) -> Result<ApiResponse<()>> {
		const ENDPOINT: Endpoint = Endpoint::json(
			Method::Delete,
			Surface::Messaging,
			"/v2/bot/richmenu/alias/{richMenuAliasId}",
		);

		self.request_empty(ApiCall::new(ENDPOINT).path_values(&[rich_menu_alias_id])).await
	}

	/// Fetches one rich menu alias by id.
	pub async fn rich_menu_alias(&self, rich_menu_alias_id: &str) -> Result<RichMenuAliasResponse> {
		Ok(self.rich_menu_alias_with_http_info(rich_menu_alias_id).await?.body)
	}

	/// Variant of [`Client::rich_menu_alias`] that also returns status and headers.
	pub async fn rich_menu_alias_with_http_info(
		&self,
		rich_menu_alias_id: &str,
	) -> Result<ApiResponse<RichMenuAliasResponse>> {
		const ENDPOINT: Endpoint = Endpoint::json(
			Method::Get,
			Surface::Messaging,
			"/v2/bot/richmenu/alias/{richMenuAliasId}",
		);

		self.request(ApiCall::new(ENDPOINT).path_values(&[rich_menu_alias_id])).await
	}

	/// Lists every rich menu alias owned by the channel.
	pub async fn rich_menu_alias_list(&self) -> Result<RichMenuAliasListResponse> {
		Ok(self.rich_menu_alias_list_with_http_info().await?.body)
	}

	/// Variant of [`Client::rich_menu_alias_list`] that also returns status and
	/// headers.
	pub async fn rich_menu_alias_list_with_http_info(
		&self,
	) -> Result<ApiResponse<RichMenuAliasListResponse>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/richmenu/alias/list");

		self.request(ApiCall::new(ENDPOINT)).await
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		error::Error,
		http::{TransportFuture, TransportRequest},
	};

	struct PanickingTransport;
	impl HttpTransport for PanickingTransport {
		type TransportError = std::io::Error;

		fn execute(&self, _: TransportRequest) -> TransportFuture<'_, Self::TransportError> {
			panic!("Validation failures must not reach the transport.");
		}
	}

	#[tokio::test]
	async fn unsupported_image_types_fail_before_dispatch() {
		let client = Client::with_transport(PanickingTransport, "token")
			.expect("Construction should succeed.");
		let err = client
			.set_rich_menu_image("richmenu-1", "image/gif", vec![0x47, 0x49, 0x46])
			.await
			.expect_err("GIF uploads should be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::UnsupportedImageType { .. })));
	}
}
