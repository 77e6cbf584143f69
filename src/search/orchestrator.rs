use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::query::build_params;
use super::runtime::SearchRuntime;
use super::state::{Notification, SearchState, SearchUpdate};
use crate::api::{SearchError, Task, TaskSource};

/// Resolve the current user, build the parameters and fetch the task list.
///
/// The contacts lookup happens on every call; the API has no "who am I"
/// endpoint and nothing is cached between searches.
pub async fn perform_search<S>(
	source: &S,
	query: &str,
	cancel: &CancellationToken,
) -> Result<Vec<Task>, SearchError>
where
	S: TaskSource + ?Sized,
{
	let contacts = source.contacts(cancel).await?;
	let current_user = contacts.iter().find(|user| user.me);
	if let Some(user) = current_user {
		debug!(id = %user.id, name = %user.display_name(), "resolved current user");
	}
	let params = build_params(query, current_user)?;
	let tasks = source.tasks(&params, cancel).await?;

	if cancel.is_cancelled() {
		return Err(SearchError::Cancelled);
	}
	Ok(tasks)
}

/// A search that has been registered with an [`Orchestrator`] but not yet run.
#[derive(Debug, Clone)]
pub struct SearchTicket {
	id: u64,
	query: String,
	cancel: CancellationToken,
}

impl SearchTicket {
	#[must_use]
	pub fn id(&self) -> u64 {
		self.id
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn cancellation(&self) -> &CancellationToken {
		&self.cancel
	}

	/// Execute the search. The result still has to be handed back to
	/// [`Orchestrator::apply`] to reach the state.
	pub async fn run<S>(self, source: &S) -> SearchResult
	where
		S: TaskSource + ?Sized,
	{
		let outcome = perform_search(source, &self.query, &self.cancel).await;
		SearchResult {
			id: self.id,
			query: self.query,
			outcome,
		}
	}
}

/// The finished form of a [`SearchTicket`].
#[derive(Debug, Clone)]
pub struct SearchResult {
	pub id: u64,
	pub query: String,
	pub outcome: Result<Vec<Task>, SearchError>,
}

/// Owns the [`SearchState`] and decides which search results may touch it.
#[derive(Debug, Default)]
pub struct Orchestrator {
	state: SearchState,
	runtime: SearchRuntime,
}

impl Orchestrator {
	#[must_use]
	pub fn new() -> Self {
		Self {
			state: SearchState::default(),
			runtime: SearchRuntime::new(),
		}
	}

	#[must_use]
	pub fn state(&self) -> &SearchState {
		&self.state
	}

	#[must_use]
	pub fn is_in_flight(&self) -> bool {
		self.runtime.is_in_flight()
	}

	/// Cancel the previous search and register a new one.
	pub fn begin(&mut self, query: impl Into<String>) -> SearchTicket {
		let (id, cancel) = self.runtime.issue_search();
		self.state.is_loading = true;
		SearchTicket {
			id,
			query: query.into(),
			cancel,
		}
	}

	/// Apply a finished search. Results from superseded or torn-down searches
	/// are dropped without touching the state.
	pub fn apply(&mut self, result: SearchResult) -> SearchUpdate {
		if !self.runtime.matches_latest(result.id) {
			debug!(id = result.id, query = %result.query, "discarding stale search result");
			return SearchUpdate::Stale;
		}
		self.runtime.record_result_completion(result.id);
		self.state.is_loading = false;

		match result.outcome {
			Ok(results) => {
				debug!(id = result.id, count = results.len(), "search completed");
				self.state.results = results;
				SearchUpdate::Results
			}
			Err(SearchError::Cancelled) => SearchUpdate::Cancelled,
			Err(err) => {
				warn!(id = result.id, query = %result.query, error = %err, "search error");
				SearchUpdate::Failed(Notification::search_failed(&err))
			}
		}
	}

	/// Tear down: cancel the live search and clear the loading flag.
	pub fn cancel(&mut self) {
		if self.runtime.cancel_in_flight() {
			debug!("cancelled in-flight search");
		}
		self.state.is_loading = false;
	}

	/// Run one search to completion against `source`.
	pub async fn search<S>(&mut self, source: &S, query: impl Into<String>) -> SearchUpdate
	where
		S: TaskSource + ?Sized,
	{
		let ticket = self.begin(query);
		let result = ticket.run(source).await;
		self.apply(result)
	}
}
