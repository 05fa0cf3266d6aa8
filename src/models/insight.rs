//! Statistics shapes returned by the insight endpoints.

// self
use crate::_prelude::*;

/// Readiness of an insight figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightStatus {
	/// Figure is final.
	Ready,
	/// Figure is still being calculated.
	Unready,
	/// Date is within the calculation window but no figure exists.
	UnavailableForPrivacy,
	/// Date is outside the queryable window.
	OutOfService,
}

/// Number of messages delivered on one day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInsight {
	/// Readiness of the figures.
	pub status: InsightStatus,
	/// Deliveries through the push endpoint.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub api_push: Option<i64>,
	/// Deliveries through the reply endpoint.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub api_reply: Option<i64>,
	/// Deliveries through the multicast endpoint.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub api_multicast: Option<i64>,
	/// Deliveries through the broadcast endpoint.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub api_broadcast: Option<i64>,
	/// Deliveries through the narrowcast endpoint.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub api_narrowcast: Option<i64>,
}

/// Follower counts on one day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowerInsight {
	/// Readiness of the figures.
	pub status: InsightStatus,
	/// Accounts that have ever friended the channel.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub followers: Option<i64>,
	/// Followers reachable by targeted sends.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub targeted_reaches: Option<i64>,
	/// Followers who have blocked the channel.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub blocks: Option<i64>,
}

/// Demographic composition of the follower base.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemographicInsight {
	/// `true` once enough followers exist for the breakdown to be published.
	pub available: bool,
	/// Share per gender.
	#[serde(default)]
	pub genders: Vec<GenderShare>,
	/// Share per age band.
	#[serde(default)]
	pub ages: Vec<AgeShare>,
	/// Share per region.
	#[serde(default)]
	pub areas: Vec<AreaShare>,
	/// Share per client OS.
	#[serde(default)]
	pub app_types: Vec<AppTypeShare>,
	/// Share per friendship duration.
	#[serde(default)]
	pub subscription_periods: Vec<SubscriptionPeriodShare>,
}

/// Follower share of one gender.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderShare {
	/// Gender label, e.g. `male` or `unknown`.
	pub gender: String,
	/// Share in percent.
	pub percentage: f64,
}

/// Follower share of one age band.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeShare {
	/// Age band label, e.g. `from15to19`.
	pub age: String,
	/// Share in percent.
	pub percentage: f64,
}

/// Follower share of one region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaShare {
	/// Region label.
	pub area: String,
	/// Share in percent.
	pub percentage: f64,
}

/// Follower share of one client OS.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppTypeShare {
	/// Client OS label, e.g. `ios`.
	pub app_type: String,
	/// Share in percent.
	pub percentage: f64,
}

/// Follower share of one friendship duration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPeriodShare {
	/// Duration label, e.g. `within7days`.
	pub subscription_period: String,
	/// Share in percent.
	pub percentage: f64,
}

/// Interaction statistics of one broadcast or narrowcast.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEventInsight {
	/// Aggregate figures across the whole send.
	pub overview: MessageEventOverview,
	/// Figures per message bubble.
	#[serde(default)]
	pub messages: Vec<MessageEventMessageInsight>,
	/// Figures per tappable element.
	#[serde(default)]
	pub clicks: Vec<MessageEventClickInsight>,
}

/// Aggregate interaction figures of one send.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEventOverview {
	/// Request id the figures belong to.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub request_id: Option<String>,
	/// Messages delivered.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub delivered: Option<i64>,
	/// Users who opened the send.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub unique_impression: Option<i64>,
	/// Users who clicked any element.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub unique_click: Option<i64>,
	/// Users who started media playback.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub unique_media_played: Option<i64>,
	/// Users who played media to completion.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub unique_media_played_100_percent: Option<i64>,
}

/// Interaction figures of one message bubble.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEventMessageInsight {
	/// Bubble position within the send, one-based.
	pub seq: i64,
	/// Impressions of the bubble.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub impression: Option<i64>,
	/// Users who opened the bubble.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub unique_impression: Option<i64>,
	/// Media playback starts.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub media_played: Option<i64>,
	/// Playbacks reaching the end.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub media_played_100_percent: Option<i64>,
}

/// Interaction figures of one tappable element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEventClickInsight {
	/// Bubble position within the send, one-based.
	pub seq: i64,
	/// Target URL of the element.
	pub url: String,
	/// Total clicks.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub click: Option<i64>,
	/// Users who clicked.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub unique_click: Option<i64>,
	/// Users who clicked any element sharing this URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub unique_click_of_request: Option<i64>,
}

/// Number of aggregation units used this month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationUnitUsage {
	/// Distinct unit names counted so far.
	pub num_of_custom_aggregation_units: i64,
}

/// One page of aggregation unit names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationUnitNamesResponse {
	/// Unit names on this page.
	#[serde(default)]
	pub custom_aggregation_units: Vec<String>,
	/// Continuation token; absent on the last page.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub next: Option<String>,
}

/// Outcome of the local aggregation unit name check.
///
/// Produced without a network call; a failed check is a value, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitValidation {
	/// `true` when every rule passed.
	pub valid: bool,
	/// One explanation per violated rule, empty when valid.
	pub messages: Vec<String>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn insight_status_uses_snake_case() {
		assert_eq!(
			serde_json::to_value(InsightStatus::OutOfService).expect("Status should serialize."),
			serde_json::json!("out_of_service")
		);
	}

	#[test]
	fn delivery_insight_deserializes_partial_figures() {
		let insight: DeliveryInsight = serde_json::from_value(serde_json::json!({
			"status": "ready",
			"apiBroadcast": 59
		}))
		.expect("Insight should deserialize.");

		assert_eq!(insight.status, InsightStatus::Ready);
		assert_eq!(insight.api_broadcast, Some(59));
		assert_eq!(insight.api_push, None);
	}

	#[test]
	fn demographic_insight_defaults_missing_breakdowns() {
		let insight: DemographicInsight = serde_json::from_value(serde_json::json!({
			"available": true,
			"genders": [{ "gender": "male", "percentage": 40.0 }]
		}))
		.expect("Insight should deserialize.");

		assert!(insight.available);
		assert_eq!(insight.genders.len(), 1);
		assert!(insight.ages.is_empty());
	}
}
