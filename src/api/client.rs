use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use super::error::SearchError;
use super::params::QueryParams;
use super::types::{Envelope, ErrorBody, Task, User};

/// Host used when the configuration does not name one.
pub const DEFAULT_HOST: &str = "https://www.wrike.com";

const API_PREFIX: &str = "api/v4/";
const CONTACTS_ENDPOINT: &str = "contacts";
const TASKS_ENDPOINT: &str = "tasks";

/// Read-only access to the two list endpoints a search needs.
///
/// Every call takes a cancellation token; implementations must return
/// [`SearchError::Cancelled`] once the token fires instead of a late result.
#[async_trait]
pub trait TaskSource: Send + Sync {
	async fn contacts(&self, cancel: &CancellationToken) -> Result<Vec<User>, SearchError>;

	async fn tasks(
		&self,
		params: &QueryParams,
		cancel: &CancellationToken,
	) -> Result<Vec<Task>, SearchError>;
}

/// Thin REST client for the Wrike v4 API.
#[derive(Debug, Clone)]
pub struct WrikeClient {
	http: reqwest::Client,
	api_root: Url,
	token: String,
}

impl WrikeClient {
	pub fn new(host: &Url, token: impl Into<String>) -> Result<Self, SearchError> {
		let http = reqwest::Client::builder()
			.user_agent(concat!("wrz/", env!("CARGO_PKG_VERSION")))
			.build()?;
		Ok(Self::with_http(http, host, token))
	}

	pub fn with_http(http: reqwest::Client, host: &Url, token: impl Into<String>) -> Self {
		let mut base = host.clone();
		if !base.path().ends_with('/') {
			let path = format!("{}/", base.path());
			base.set_path(&path);
		}
		// `join` cannot fail for a relative path on an http(s) base.
		let api_root = base.join(API_PREFIX).unwrap_or(base);
		Self {
			http,
			api_root,
			token: token.into(),
		}
	}

	/// Absolute URL for a list endpoint such as `tasks`.
	pub fn endpoint_url(&self, endpoint: &str) -> Result<Url, SearchError> {
		self.api_root
			.join(endpoint)
			.map_err(|err| SearchError::Transport(format!("invalid endpoint '{endpoint}': {err}")))
	}

	/// Issue a GET against `endpoint` and return its `data` list.
	pub async fn get<T>(
		&self,
		endpoint: &'static str,
		params: &QueryParams,
		cancel: &CancellationToken,
	) -> Result<Vec<T>, SearchError>
	where
		T: DeserializeOwned,
	{
		if cancel.is_cancelled() {
			return Err(SearchError::Cancelled);
		}

		debug!(endpoint, params = params.len(), "Getting {endpoint}");
		let request = self
			.http
			.get(self.endpoint_url(endpoint)?)
			.query(params.as_pairs())
			.header(AUTHORIZATION, format!("bearer {}", self.token));

		// Dropping the request future on cancellation aborts the transport.
		tokio::select! {
			biased;
			_ = cancel.cancelled() => Err(SearchError::Cancelled),
			result = fetch(request, endpoint) => result,
		}
	}
}

#[async_trait]
impl TaskSource for WrikeClient {
	async fn contacts(&self, cancel: &CancellationToken) -> Result<Vec<User>, SearchError> {
		self.get(CONTACTS_ENDPOINT, &QueryParams::new(), cancel)
			.await
	}

	async fn tasks(
		&self,
		params: &QueryParams,
		cancel: &CancellationToken,
	) -> Result<Vec<Task>, SearchError> {
		self.get(TASKS_ENDPOINT, params, cancel).await
	}
}

async fn fetch<T>(request: reqwest::RequestBuilder, endpoint: &'static str) -> Result<Vec<T>, SearchError>
where
	T: DeserializeOwned,
{
	let response = request.send().await?;
	let status = response.status();
	let body = response.bytes().await?;
	decode_response(endpoint, status, &body)
}

/// Map a raw response into either the `data` list or a [`SearchError`].
pub(crate) fn decode_response<T>(
	endpoint: &'static str,
	status: StatusCode,
	body: &[u8],
) -> Result<Vec<T>, SearchError>
where
	T: DeserializeOwned,
{
	let value: Option<serde_json::Value> = serde_json::from_slice(body).ok();
	let reports_error = value
		.as_ref()
		.is_some_and(|value| value.get("errorDescription").is_some());

	if !status.is_success() || reports_error {
		let message = value
			.and_then(|value| serde_json::from_value::<ErrorBody>(value).ok())
			.and_then(ErrorBody::description)
			.unwrap_or_else(|| status_text(status));
		return Err(SearchError::Api {
			status: status.as_u16(),
			message,
		});
	}

	let value = value.ok_or_else(|| SearchError::malformed(endpoint, "body is not valid JSON"))?;
	let envelope: Envelope<T> =
		serde_json::from_value(value).map_err(|err| SearchError::malformed(endpoint, err))?;
	Ok(envelope.data)
}

fn status_text(status: StatusCode) -> String {
	status
		.canonical_reason()
		.map(str::to_string)
		.unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

#[cfg(test)]
mod tests;
