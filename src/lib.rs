//! Typed LINE Messaging API client - push, reply, narrowcast, rich menu, audience, and
//! insight operations plus webhook signature checks and channel token flows, all served
//! through one transport-agnostic dispatcher built for production.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod dispatch;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod models;
pub mod oauth;
pub mod obs;
pub mod webhook;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;
	pub use crate::error::Error;

	// self
	use crate::{
		client::{Client, ReqwestBotClient},
		endpoint::EndpointSet,
		http::ReqwestTransport,
		oauth::{OauthClient, ReqwestOauthClient},
	};

	/// Builds a reqwest transport that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_transport() -> ReqwestTransport {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestTransport::with_client(client)
	}

	/// Endpoint set that resolves every surface against a single mock server.
	pub fn test_endpoints(base_url: &str) -> EndpointSet {
		let base = Url::parse(base_url).expect("Mock server URL should parse.");

		EndpointSet::builder()
			.api_base(base.clone())
			.data_base(base)
			.build()
			.expect("Mock endpoint set should build.")
	}

	/// Constructs a [`Client`] that talks to a mock server over the insecure reqwest
	/// transport used across integration tests.
	pub fn build_reqwest_test_client(
		base_url: &str,
		channel_access_token: &str,
	) -> ReqwestBotClient {
		Client::with_transport(test_reqwest_transport(), channel_access_token)
			.expect("Test channel access token should be accepted.")
			.with_endpoints(test_endpoints(base_url))
	}

	/// Constructs an [`OauthClient`] that talks to a mock server over the insecure
	/// reqwest transport used across integration tests.
	pub fn build_reqwest_test_oauth_client(base_url: &str) -> ReqwestOauthClient {
		OauthClient::with_transport(test_reqwest_transport()).with_endpoints(test_endpoints(base_url))
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::Result;
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _};
