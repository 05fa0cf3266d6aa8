//! Audience group shapes shared by the audience management endpoints.

// self
use crate::_prelude::*;

/// Request body for creating an upload audience group from inline user ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAudienceGroupRequest {
	/// Audience group name, at most one hundred twenty characters.
	pub description: String,
	/// `true` when the audiences carry IFA identifiers instead of user ids.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub is_ifa_audience: Option<bool>,
	/// Free-form note for the first upload job.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub upload_description: Option<String>,
	/// Initial members.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub audiences: Vec<Audience>,
}
impl CreateAudienceGroupRequest {
	/// Upload audience group with the given name and members.
	pub fn new(description: impl Into<String>, audiences: Vec<Audience>) -> Self {
		Self {
			description: description.into(),
			is_ifa_audience: None,
			upload_description: None,
			audiences,
		}
	}
}

/// One audience group member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audience {
	/// User id or IFA identifier.
	pub id: String,
}
impl Audience {
	/// Member with the given identifier.
	pub fn new(id: impl Into<String>) -> Self {
		Self { id: id.into() }
	}
}

/// Response body of the upload audience group creation endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAudienceGroupResponse {
	/// Identifier assigned on creation.
	pub audience_group_id: i64,
	/// Always `UPLOAD` for these endpoints.
	#[serde(rename = "type")]
	pub kind: AudienceGroupType,
	/// Audience group name.
	pub description: String,
	/// When the group was created, epoch seconds.
	pub created: i64,
	/// `true` when the members carry IFA identifiers.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub is_ifa_audience: Option<bool>,
	/// What the requesting channel may do with the group.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub permission: Option<AudienceGroupPermission>,
	/// Seconds until the group expires.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub expire_timestamp: Option<i64>,
}

/// Request body for appending members to an upload audience group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAudienceToAudienceGroupRequest {
	/// Target audience group.
	pub audience_group_id: i64,
	/// Free-form note for this upload job.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub upload_description: Option<String>,
	/// Members to append.
	pub audiences: Vec<Audience>,
}
impl AddAudienceToAudienceGroupRequest {
	/// Append request for the given group and members.
	pub fn new(audience_group_id: i64, audiences: Vec<Audience>) -> Self {
		Self { audience_group_id, upload_description: None, audiences }
	}
}

/// How an audience group collects its members.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudienceGroupType {
	/// Members uploaded by the channel.
	Upload,
	/// Users who clicked a delivered link.
	Click,
	/// Users who opened a delivered message.
	Imp,
	/// Group built by chat-tag targeting.
	ChatTag,
	/// Group built by friend-path targeting.
	FriendPath,
	/// Group built from reservation data.
	Reservation,
	/// Group built by app-event targeting.
	AppEvent,
	/// Group built by video-view targeting.
	VideoView,
	/// Group built by rich menu impressions.
	RichmenuImp,
	/// Group built by rich menu clicks.
	RichmenuClick,
	/// Kind added after this crate was published.
	#[serde(other)]
	Unknown,
}

/// Readiness of an audience group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudienceGroupStatus {
	/// Members are still being resolved.
	InProgress,
	/// Ready for use in a narrowcast.
	Ready,
	/// Resolution failed.
	Failed,
	/// Expired and no longer usable.
	Expired,
	/// Inactive and no longer usable.
	Inactive,
	/// Status added after this crate was published.
	#[serde(other)]
	Unknown,
}

/// What the requesting channel may do with an audience group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudienceGroupPermission {
	/// Usable in sends but not modifiable.
	Read,
	/// Usable and modifiable.
	ReadWrite,
	/// Permission added after this crate was published.
	#[serde(other)]
	Unknown,
}

/// One audience group summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceGroup {
	/// Audience group identifier.
	pub audience_group_id: i64,
	/// How the group collects members.
	#[serde(rename = "type")]
	pub kind: AudienceGroupType,
	/// Audience group name.
	pub description: String,
	/// Readiness of the group.
	pub status: AudienceGroupStatus,
	/// Member count once resolved.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub audience_count: Option<i64>,
	/// When the group was created, epoch seconds.
	pub created: i64,
	/// `true` when the members carry IFA identifiers.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub is_ifa_audience: Option<bool>,
	/// What the requesting channel may do with the group.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub permission: Option<AudienceGroupPermission>,
	/// Seconds until the group expires.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub expire_timestamp: Option<i64>,
	/// Reason the group failed, when `status` is `FAILED`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub failed_type: Option<String>,
}

/// One page of the audience group list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceGroupListResponse {
	/// Groups on this page.
	#[serde(default)]
	pub audience_groups: Vec<AudienceGroup>,
	/// `true` when a later page exists.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub has_next_page: Option<bool>,
	/// Total number of groups across all pages.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub total_count: Option<i64>,
	/// Current page size.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub size: Option<i64>,
	/// Current page number, one-based.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub page: Option<i64>,
}

/// Full detail of one audience group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceGroupDetail {
	/// The group summary.
	pub audience_group: AudienceGroup,
	/// Upload jobs run against the group, newest first.
	#[serde(default)]
	pub jobs: Vec<AudienceGroupJob>,
}

/// One upload job of an audience group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceGroupJob {
	/// Job identifier.
	pub audience_group_job_id: i64,
	/// Group the job belongs to.
	pub audience_group_id: i64,
	/// Free-form note supplied with the upload.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Job kind, `DIFF_ADD` for appends.
	#[serde(rename = "type")]
	pub kind: String,
	/// Job status.
	pub job_status: AudienceGroupJobStatus,
	/// Members added by the job once finished.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub audience_count: Option<i64>,
	/// When the job was created, epoch seconds.
	pub created: i64,
	/// Reason the job failed, when `job_status` is `FAILED`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub failed_type: Option<String>,
}

/// Status of an audience group upload job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudienceGroupJobStatus {
	/// Queued behind other jobs.
	Queued,
	/// Running now.
	Working,
	/// Finished successfully.
	Finished,
	/// Aborted.
	Failed,
	/// Status added after this crate was published.
	#[serde(other)]
	Unknown,
}
