//! Narrowcast targeting trees and progress reporting.

// self
use crate::{_prelude::*, models::message::Message};

/// Request body for the narrowcast endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrowcastRequest {
	/// Messages delivered in order.
	pub messages: Vec<Message>,
	/// Recipient tree; all followers when absent.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub recipient: Option<Recipient>,
	/// Demographic filter applied after recipient selection.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub filter: Option<Filter>,
	/// Delivery cap.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub limit: Option<NarrowcastLimit>,
	/// Suppresses the push notification when `true`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub notification_disabled: Option<bool>,
}
impl NarrowcastRequest {
	/// Narrowcast request with the given messages and no targeting.
	pub fn new(messages: Vec<Message>) -> Self {
		Self { messages, recipient: None, filter: None, limit: None, notification_disabled: None }
	}
}

/// Recipient tree node.
///
/// Operator nodes nest arbitrarily; audience and redelivery nodes are the leaves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Recipient {
	/// Members of an audience group.
	Audience(AudienceRecipient),
	/// Recipients of an earlier narrowcast, by request id.
	Redelivery(RedeliveryRecipient),
	/// Logical combination of child nodes.
	Operator(Box<RecipientOperator>),
}
impl Recipient {
	/// Leaf selecting the given audience group.
	pub fn audience(audience_group_id: i64) -> Self {
		Self::Audience(AudienceRecipient { audience_group_id })
	}

	/// Leaf selecting recipients of the request with the given id.
	pub fn redelivery(request_id: impl Into<String>) -> Self {
		Self::Redelivery(RedeliveryRecipient { request_id: request_id.into() })
	}

	/// Node matching users in every child.
	pub fn and(children: Vec<Recipient>) -> Self {
		Self::Operator(Box::new(RecipientOperator { and: children, or: Vec::new(), not: None }))
	}

	/// Node matching users in any child.
	pub fn or(children: Vec<Recipient>) -> Self {
		Self::Operator(Box::new(RecipientOperator { and: Vec::new(), or: children, not: None }))
	}

	/// Node excluding users in the child.
	pub fn not(child: Recipient) -> Self {
		Self::Operator(Box::new(RecipientOperator {
			and: Vec::new(),
			or: Vec::new(),
			not: Some(child),
		}))
	}
}

/// Audience group leaf of the recipient tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceRecipient {
	/// Audience group identifier.
	pub audience_group_id: i64,
}

/// Redelivery leaf of the recipient tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeliveryRecipient {
	/// `x-line-request-id` of the earlier narrowcast.
	pub request_id: String,
}

/// Logical operator node; exactly one of the three members should be populated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientOperator {
	/// Children combined with logical AND.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub and: Vec<Recipient>,
	/// Children combined with logical OR.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub or: Vec<Recipient>,
	/// Child whose members are excluded.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub not: Option<Recipient>,
}

/// Demographic filter wrapper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
	/// Root of the demographic tree.
	pub demographic: DemographicFilter,
}
impl Filter {
	/// Filter with the given root.
	pub fn new(demographic: DemographicFilter) -> Self {
		Self { demographic }
	}
}

/// Demographic filter node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DemographicFilter {
	/// Filter by gender.
	Gender(GenderFilter),
	/// Filter by age band.
	Age(AgeFilter),
	/// Filter by client OS.
	AppType(AppTypeFilter),
	/// Filter by region.
	Area(AreaFilter),
	/// Filter by friendship duration.
	SubscriptionPeriod(SubscriptionPeriodFilter),
	/// Logical combination of child filters.
	Operator(Box<DemographicOperator>),
}
impl DemographicFilter {
	/// Node matching users in every child.
	pub fn and(children: Vec<DemographicFilter>) -> Self {
		Self::Operator(Box::new(DemographicOperator { and: children, or: Vec::new(), not: None }))
	}

	/// Node matching users in any child.
	pub fn or(children: Vec<DemographicFilter>) -> Self {
		Self::Operator(Box::new(DemographicOperator { and: Vec::new(), or: children, not: None }))
	}

	/// Node excluding users in the child.
	pub fn not(child: DemographicFilter) -> Self {
		Self::Operator(Box::new(DemographicOperator {
			and: Vec::new(),
			or: Vec::new(),
			not: Some(child),
		}))
	}
}

/// Gender leaf.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderFilter {
	/// Genders matched by the leaf.
	pub one_of: Vec<Gender>,
}

/// Gender value recognized by the demographic filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
	/// Estimated male.
	Male,
	/// Estimated female.
	Female,
}

/// Age band leaf, matching `gte <= age < lt`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeFilter {
	/// Inclusive lower bound.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub gte: Option<AgeBand>,
	/// Exclusive upper bound.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub lt: Option<AgeBand>,
}

/// Age band boundary value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeBand {
	/// Fifteen years.
	#[serde(rename = "age_15")]
	Age15,
	/// Twenty years.
	#[serde(rename = "age_20")]
	Age20,
	/// Twenty-five years.
	#[serde(rename = "age_25")]
	Age25,
	/// Thirty years.
	#[serde(rename = "age_30")]
	Age30,
	/// Thirty-five years.
	#[serde(rename = "age_35")]
	Age35,
	/// Forty years.
	#[serde(rename = "age_40")]
	Age40,
	/// Forty-five years.
	#[serde(rename = "age_45")]
	Age45,
	/// Fifty years.
	#[serde(rename = "age_50")]
	Age50,
}

/// Client OS leaf.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppTypeFilter {
	/// Client OSes matched by the leaf.
	pub one_of: Vec<AppType>,
}

/// Client OS value recognized by the demographic filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppType {
	/// iOS clients.
	Ios,
	/// Android clients.
	Android,
}

/// Region leaf.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaFilter {
	/// Region codes matched by the leaf, e.g. `jp_01` for Hokkaido.
	pub one_of: Vec<String>,
}

/// Friendship duration leaf, matching `gte <= days < lt`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPeriodFilter {
	/// Inclusive lower bound.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub gte: Option<SubscriptionPeriod>,
	/// Exclusive upper bound.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub lt: Option<SubscriptionPeriod>,
}

/// Friendship duration boundary value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscriptionPeriod {
	/// Seven days.
	#[serde(rename = "day_7")]
	Day7,
	/// Thirty days.
	#[serde(rename = "day_30")]
	Day30,
	/// Ninety days.
	#[serde(rename = "day_90")]
	Day90,
	/// One hundred eighty days.
	#[serde(rename = "day_180")]
	Day180,
	/// Three hundred sixty-five days.
	#[serde(rename = "day_365")]
	Day365,
}

/// Logical operator node; exactly one of the three members should be populated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemographicOperator {
	/// Children combined with logical AND.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub and: Vec<DemographicFilter>,
	/// Children combined with logical OR.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub or: Vec<DemographicFilter>,
	/// Child whose members are excluded.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub not: Option<DemographicFilter>,
}

/// Delivery cap for a narrowcast.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrowcastLimit {
	/// Maximum number of deliveries.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max: Option<i64>,
	/// Reserves remaining quota for later sends when `true`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub up_to_remaining_quota: Option<bool>,
}

/// Progress of an accepted narrowcast.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrowcastProgress {
	/// Current delivery phase.
	pub phase: NarrowcastPhase,
	/// Successful deliveries so far.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub success_count: Option<i64>,
	/// Failed deliveries so far.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub failure_count: Option<i64>,
	/// Deliveries attempted so far.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub target_count: Option<i64>,
	/// Reason the narrowcast failed.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub failed_description: Option<String>,
	/// Internal error code recorded on failure.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error_code: Option<i64>,
	/// When the narrowcast was accepted, epoch seconds.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub accepted_time: Option<String>,
	/// When delivery completed, epoch seconds.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub completed_time: Option<String>,
}

/// Narrowcast delivery phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NarrowcastPhase {
	/// Accepted but not yet delivering.
	Waiting,
	/// Delivering now.
	Sending,
	/// All deliveries finished.
	Succeeded,
	/// Delivery aborted.
	Failed,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn recipient_tree_serializes_with_operator_tags() {
		let recipient = Recipient::and(vec![
			Recipient::audience(5614991017776),
			Recipient::not(Recipient::redelivery("5b59509c-c57b-11e9-aa8c-2a2ae2dbcce4")),
		]);
		let value = serde_json::to_value(&recipient).expect("Recipient should serialize.");

		assert_eq!(
			value,
			serde_json::json!({
				"type": "operator",
				"and": [
					{ "type": "audience", "audienceGroupId": 5614991017776_i64 },
					{
						"type": "operator",
						"not": {
							"type": "redelivery",
							"requestId": "5b59509c-c57b-11e9-aa8c-2a2ae2dbcce4"
						}
					}
				]
			})
		);
	}

	#[test]
	fn age_bands_use_wire_names() {
		let filter = DemographicFilter::Age(AgeFilter {
			gte: Some(AgeBand::Age20),
			lt: Some(AgeBand::Age25),
		});
		let value = serde_json::to_value(&filter).expect("Filter should serialize.");

		assert_eq!(value, serde_json::json!({ "type": "age", "gte": "age_20", "lt": "age_25" }));
	}

	#[test]
	fn progress_phase_deserializes() {
		let progress: NarrowcastProgress = serde_json::from_value(serde_json::json!({
			"phase": "succeeded",
			"successCount": 10,
			"failureCount": 0,
			"targetCount": 10
		}))
		.expect("Progress should deserialize.");

		assert_eq!(progress.phase, NarrowcastPhase::Succeeded);
		assert_eq!(progress.success_count, Some(10));
	}
}
