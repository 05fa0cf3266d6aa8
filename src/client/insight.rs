//! Statistics operations and the local aggregation unit name check.

// crates.io
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};
// self
use crate::{
	_prelude::*,
	client::Client,
	dispatch::{ApiCall, ApiResponse},
	endpoint::{Endpoint, Method, Surface},
	error::ConfigError,
	http::HttpTransport,
	models::{
		AggregationUnitNamesResponse, AggregationUnitUsage, DeliveryInsight, DemographicInsight,
		FollowerInsight, MessageEventInsight, UnitValidation,
	},
};

/// Wire format of insight date parameters, `yyyyMMdd`.
const INSIGHT_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
	format_description!("[year][month][day]");
/// Longest accepted custom aggregation unit name.
const MAX_UNIT_LENGTH: usize = 30;

impl<T> Client<T>
where
	T: ?Sized + HttpTransport,
{
	/// Number of messages delivered on the given day, broken down by send endpoint.
	pub async fn message_delivery_insight(&self, date: Date) -> Result<DeliveryInsight> {
		Ok(self.message_delivery_insight_with_http_info(date).await?.body)
	}

	/// Variant of [`Client::message_delivery_insight`] that also returns status and
	/// headers.
	pub async fn message_delivery_insight_with_http_info(
		&self,
		date: Date,
	) -> Result<ApiResponse<DeliveryInsight>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/insight/message/delivery");

		self.request(ApiCall::new(ENDPOINT).query_pair("date", insight_date(date)?)).await
	}

	/// Follower counts on the given day.
	pub async fn follower_insight(&self, date: Date) -> Result<FollowerInsight> {
		Ok(self.follower_insight_with_http_info(date).await?.body)
	}

	/// Variant of [`Client::follower_insight`] that also returns status and headers.
	pub async fn follower_insight_with_http_info(
		&self,
		date: Date,
	) -> Result<ApiResponse<FollowerInsight>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/insight/followers");

		self.request(ApiCall::new(ENDPOINT).query_pair("date", insight_date(date)?)).await
	}

	/// Demographic composition of the follower base.
	pub async fn demographic_insight(&self) -> Result<DemographicInsight> {
		Ok(self.demographic_insight_with_http_info().await?.body)
	}

	/// Variant of [`Client::demographic_insight`] that also returns status and headers.
	pub async fn demographic_insight_with_http_info(
		&self,
	) -> Result<ApiResponse<DemographicInsight>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/insight/demographic");

		self.request(ApiCall::new(ENDPOINT)).await
	}

	/// Interaction statistics of one broadcast or narrowcast, by its request id.
	pub async fn message_event_insight(&self, request_id: &str) -> Result<MessageEventInsight> {
		Ok(self.message_event_insight_with_http_info(request_id).await?.body)
	}

	/// Variant of [`Client::message_event_insight`] that also returns status and
	/// headers.
	pub async fn message_event_insight_with_http_info(
		&self,
		request_id: &str,
	) -> Result<ApiResponse<MessageEventInsight>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/insight/message/event");

		self.request(ApiCall::new(ENDPOINT).query_pair("requestId", request_id)).await
	}

	/// Number of aggregation units used this month.
	pub async fn aggregation_unit_usage(&self) -> Result<AggregationUnitUsage> {
		Ok(self.aggregation_unit_usage_with_http_info().await?.body)
	}

	/// Variant of [`Client::aggregation_unit_usage`] that also returns status and
	/// headers.
	pub async fn aggregation_unit_usage_with_http_info(
		&self,
	) -> Result<ApiResponse<AggregationUnitUsage>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/message/aggregation/info");

		self.request(ApiCall::new(ENDPOINT)).await
	}

	/// One page of the aggregation unit names used this month.
	pub async fn aggregation_unit_names(
		&self,
		limit: Option<u32>,
		start: Option<&str>,
	) -> Result<AggregationUnitNamesResponse> {
		Ok(self.aggregation_unit_names_with_http_info(limit, start).await?.body)
	}

	/// Variant of [`Client::aggregation_unit_names`] that also returns status and
	/// headers.
	pub async fn aggregation_unit_names_with_http_info(
		&self,
		limit: Option<u32>,
		start: Option<&str>,
	) -> Result<ApiResponse<AggregationUnitNamesResponse>> {
		const ENDPOINT: Endpoint =
			Endpoint::json(Method::Get, Surface::Messaging, "/v2/bot/message/aggregation/list");

		let mut call = ApiCall::new(ENDPOINT);

		if let Some(limit) = limit {
			call = call.query_pair("limit", limit.to_string());
		}
		if let Some(start) = start {
			call = call.query_pair("start", start);
		}

		self.request(call).await
	}

	/// Checks custom aggregation unit names locally, without a network call.
	///
	/// A failed check is reported through [`UnitValidation`], never as an error: a
	/// request accepts at most one unit, and a name is limited to thirty alphanumeric
	/// or underscore characters.
	pub fn validate_custom_aggregation_units(&self, units: &[impl AsRef<str>]) -> UnitValidation {
		check_aggregation_units(units)
	}
}

fn check_aggregation_units(units: &[impl AsRef<str>]) -> UnitValidation {
	let mut messages = Vec::new();

	if units.len() > 1 {
		messages
			.push(format!("A request accepts only one unit; {} were supplied.", units.len()));
	}

	for unit in units {
		let unit = unit.as_ref();

		if unit.chars().count() > MAX_UNIT_LENGTH {
			messages
				.push(format!("Unit name `{unit}` exceeds the {MAX_UNIT_LENGTH} character limit."));
		}
		if !unit.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
			messages.push(format!(
				"Unit name `{unit}` may contain only alphanumeric characters and underscores."
			));
		}
	}

	UnitValidation { valid: messages.is_empty(), messages }
}

fn insight_date(date: Date) -> Result<String, ConfigError> {
	date.format(INSIGHT_DATE_FORMAT).map_err(|source| ConfigError::DateFormat { source })
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros::date;
	// self
	use super::*;

	#[test]
	fn insight_dates_render_compact() {
		assert_eq!(
			insight_date(date!(2024 - 04 - 01)).expect("Formatting should succeed."),
			"20240401"
		);
		assert_eq!(
			insight_date(date!(2024 - 12 - 31)).expect("Formatting should succeed."),
			"20241231"
		);
	}

	#[test]
	fn single_valid_unit_passes() {
		let validation = check_aggregation_units(&["promotion_a"]);

		assert!(validation.valid);
		assert!(validation.messages.is_empty());
	}

	#[test]
	fn two_units_yield_exactly_one_message() {
		let validation = check_aggregation_units(&["a", "b"]);

		assert!(!validation.valid);
		assert_eq!(validation.messages.len(), 1);
		assert!(validation.messages[0].contains("only one unit"));
	}

	#[test]
	fn overlong_unit_cites_the_character_limit() {
		let unit = "a".repeat(31);
		let validation = check_aggregation_units(&[unit.as_str()]);

		assert!(!validation.valid);
		assert_eq!(validation.messages.len(), 1);
		assert!(validation.messages[0].contains("30 character"));
	}

	#[test]
	fn exactly_thirty_characters_pass() {
		let unit = "a".repeat(30);
		let validation = check_aggregation_units(&[unit.as_str()]);

		assert!(validation.valid);
	}

	#[test]
	fn punctuation_cites_the_character_set() {
		let validation = check_aggregation_units(&["promo!"]);

		assert!(!validation.valid);
		assert_eq!(validation.messages.len(), 1);
		assert!(validation.messages[0].contains("alphanumeric"));
	}

	#[test]
	fn one_unit_can_violate_both_name_rules() {
		let unit = format!("{}!", "a".repeat(31));
		let validation = check_aggregation_units(&[unit.as_str()]);

		assert!(!validation.valid);
		assert_eq!(validation.messages.len(), 2);
	}
}
