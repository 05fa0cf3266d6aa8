//! Audience group management operations.

// self
use crate::{
	_prelude::*,
	client::Client,
	dispatch::{ApiCall, ApiResponse, RequestPayload},
	endpoint::{Endpoint, Method, Surface},
	http::{HttpTransport, UploadField},
	models::{
		AddAudienceToAudienceGroupRequest, AudienceGroupDetail, AudienceGroupListResponse,
		CreateAudienceGroupRequest, CreateAudienceGroupResponse,
	},
};

impl<T> Client<T>
where
	T: ?Sized + HttpTransport,
{
	/// Creates an upload audience group from inline user ids.
	pub async fn create_upload_audience_group(
		&self,
		request: &CreateAudienceGroupRequest,
	) -> Result<CreateAudienceGroupResponse> {
		Ok(self.create_upload_audience_group_with_http_info(request).await?.body)
	}

	/// Variant of [`Client::create_upload_audience_group`] that also returns status and
	/// headers.
	pub async fn create_upload_audience_group_with_http_info(
		&self,
		request: &CreateAudienceGroupRequest,
	) -> Result<ApiResponse<CreateAudienceGroupResponse>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Post, Surface::Messaging, "/v2/bot/audienceGroup/upload");

		self.request(ApiCall::new(ENDPOINT).payload(RequestPayload::json(request)?)).await
	}

	/// Appends user ids to an existing upload audience group.
	pub async fn add_audience_to_upload_group(
		&self,
		request: &AddAudienceToAudienceGroupRequest,
	) -> Result<()> {
		Ok(self.add_audience_to_upload_group_with_http_info(request).await?.body)
	}

	/// Variant of [`Client::add_audience_to_upload_group`] that also returns status and
	/// headers.
	pub async fn add_audience_to_upload_group_with_http_info(
		&self,
		request: &AddAudienceToAudienceGroupRequest,
	) -> Result<ApiResponse<()>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Put, Surface::Messaging, "/v2/bot/audienceGroup/upload");

		self.request_empty(ApiCall::new(ENDPOINT).payload(RequestPayload::json(request)?)).await
	}

	/// Creates an upload audience group from a text file of user ids, one per line.
	///
	/// Sent as `multipart/form-data` against the data surface; the file part is
	/// declared `text/plain`.
	pub async fn create_upload_audience_group_by_file(
		&self,
		description: &str,
		is_ifa_audience: Option<bool>,
		upload_description: Option<&str>,
		file: Vec<u8>,
	) -> Result<CreateAudienceGroupResponse> {
		Ok(self
			.create_upload_audience_group_by_file_with_http_info(
				description,
				is_ifa_audience,
				upload_description,
				file,
			)
			.await?
			.body)
	}

	/// Variant of [`Client::create_upload_audience_group_by_file`] that also returns
	/// status and headers.
	pub async fn create_upload_audience_group_by_file_with_http_info(
		&self,
		description: &str,
		is_ifa_audience: Option<bool>,
		upload_description: Option<&str>,
		file: Vec<u8>,
	) -> Result<ApiResponse<CreateAudienceGroupResponse>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Post, Surface::Data, "/v2/bot/audienceGroup/upload/byFile");

		let mut fields =
			vec![UploadField::Text { name: "description".into(), value: description.into() }];

		if let Some(is_ifa_audience) = is_ifa_audience {
			fields.push(UploadField::Text {
				name: "isIfaAudience".into(),
				value: is_ifa_audience.to_string(),
			});
		}
		if let Some(upload_description) = upload_description {
			fields.push(UploadField::Text {
				name: "uploadDescription".into(),
				value: upload_description.into(),
			});
		}

		fields.push(audience_file_field(file));

		self.request(ApiCall::new(ENDPOINT).payload(RequestPayload::Multipart(fields))).await
	}

	/// Appends the user ids in a text file to an existing upload audience group.
	pub async fn add_audience_to_upload_group_by_file(
		&self,
		audience_group_id: i64,
		upload_description: Option<&str>,
		file: Vec<u8>,
	) -> Result<()> {
		Ok(self
			.add_audience_to_upload_group_by_file_with_http_info(
				audience_group_id,
				upload_description,
				file,
			)
			.await?
			.body)
	}

	/// Variant of [`Client::add_audience_to_upload_group_by_file`] that also returns
	/// status and headers.
	pub async fn add_audience_to_upload_group_by_file_with_http_info(
		&self,
		audience_group_id: i64,
		upload_description: Option<&str>,
		file: Vec<u8>,
	) -> Result<ApiResponse<()>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Put, Surface::Data, "/v2/bot/audienceGroup/upload/byFile");

		let mut fields = vec![UploadField::Text {
			name: "audienceGroupId".into(),
			value: audience_group_id.to_string(),
		}];

		if let Some(upload_description) = upload_description {
			fields.push(UploadField::Text {
				name: "uploadDescription".into(),
				value: upload_description.into(),
			});
		}

		fields.push(audience_file_field(file));

		self.request_empty(ApiCall::new(ENDPOINT).payload(RequestPayload::Multipart(fields))).await
	}

	/// Fetches one audience group with its upload job history.
	pub async fn audience_group(&self, audience_group_id: i64) -> Result<AudienceGroupDetail> {
		Ok(self.audience_group_with_http_info(audience_group_id).await?.body)
	}

	/// Variant of [`Client::audience_group`] that also returns status and headers.
	pub async fn audience_group_with_http_info(
		&self,
		audience_group_id: i64,
	) -> Result<ApiResponse<AudienceGroupDetail>> {
		const ENDPOINT: Endpoint = Endpoint::json(
			Method::Get,
			Surface::Messaging,
			"/v2/bot/audienceGroup/{audienceGroupId}",
		);

		let audience_group_id = audience_group_id.to_string();
		let values = [audience_group_id.as_str()];

		self.request(ApiCall::new(ENDPOINT).path_values(&values)).await
	}

	/// One page of the channel's audience groups.
	///
	/// `page` is one-based; `size` defaults to the platform's page size. `description`
	/// filters by partial name match.
	pub async fn audience_group_list(
		&self,
		page: u32,
		size: Option<u32>,
		description: Option<&str>,
	) -> Result<AudienceGroupListResponse> {
		Ok(self.audience_group_list_with_http_info(page, size, description).await?.body)
	}

	/// Variant of [`Client::audience_group_list`] that also returns status and headers.
	pub async fn audience_group_list_with_http_info(
		&self,
		page: u32,
		size: Option<u32>,
		description: Option<&str>,
	) -> Result<ApiResponse<AudienceGroupListResponse>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/audienceGroup/list");

		let mut call = ApiCall::new(ENDPOINT).query_pair("page", page.to_string());

		if let Some(size) = size {
			call = call.query_pair("size", size.to_string());
		}
		if let Some(description) = description {
			call = call.query_pair("description", description);
		}

		self.request(call).await
	}

	/// Deletes an audience group.
	pub async fn delete_audience_group(&self, audience_group_id: i64) -> Result<()> {
		Ok(self.delete_audience_group_with_http_info(audience_group_id).await?.body)
	}

	/// Variant of [`Client::delete_audience_group`] that also returns status and
	/// headers.
	pub async fn delete_audience_group_with_http_info(
		&self,
		audience_group_id: i64,
	) -> Result<ApiResponse<()>> {
		const ENDPOINT: Endpoint = Endpoint::json(
			Method::Delete,
			Surface::Messaging,
			"/v2/bot/audienceGroup/{audienceGroupId}",
		);

		let audience_group_id = audience_group_id.to_string();
		let values = [audience_group_id.as_str()];

		self.request_empty(ApiCall::new(ENDPOINT).path_values(&values)).await
	}
}

fn audience_file_field(file: Vec<u8>) -> UploadField {
	UploadField::File {
		name: "file".into(),
		file_name: "audiences.txt".into(),
		content_type: "text/plain".into(),
		bytes: file,
	}
}
