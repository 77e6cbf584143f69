use serde::Serialize;

use crate::api::{SearchError, Task};

/// What the front end renders: the latest accepted result list and whether a
/// search is still running.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchState {
	pub results: Vec<Task>,
	pub is_loading: bool,
}

/// A transient, user-facing failure message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
	pub title: String,
	pub message: String,
}

impl Notification {
	pub const SEARCH_FAILED: &'static str = "Could not perform search";

	#[must_use]
	pub fn search_failed(error: &SearchError) -> Self {
		Self {
			title: Self::SEARCH_FAILED.to_string(),
			message: error.to_string(),
		}
	}
}

/// How a finished search changed the [`SearchState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchUpdate {
	/// The result list was replaced.
	Results,
	/// The search failed; the previous results are kept.
	Failed(Notification),
	/// The search was cancelled; only the loading flag changed.
	Cancelled,
	/// A newer search has started since; nothing changed.
	Stale,
}
