use serde::{Deserialize, Serialize};

/// A single Wrike task as returned by the `tasks` endpoint.
///
/// Records are display-only: nothing in the crate mutates them after they are
/// decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
	pub id: String,
	pub title: String,
	/// HTML rich text. Only present when `fields=[description]` was requested.
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub brief_description: String,
	pub status: String,
	pub permalink: String,
}

impl Task {
	/// Clipboard payload combining the title and permalink.
	#[must_use]
	pub fn title_with_link(&self) -> String {
		format!("{} - {}", self.title, self.permalink)
	}
}

/// A Wrike contact. Exactly one contact in the account is flagged `me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
	pub id: String,
	#[serde(default)]
	pub me: bool,
	#[serde(default)]
	pub first_name: Option<String>,
	#[serde(default)]
	pub last_name: Option<String>,
}

impl User {
	/// Human readable name, falling back to the identifier.
	#[must_use]
	pub fn display_name(&self) -> String {
		let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
			.into_iter()
			.flatten()
			.map(str::trim)
			.filter(|part| !part.is_empty())
			.collect();
		if parts.is_empty() {
			self.id.clone()
		} else {
			parts.join(" ")
		}
	}
}

/// Successful response envelope shared by every list endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
	pub(crate) data: Vec<T>,
}

/// Error body returned by the API. Older endpoints use `message` instead of
/// `errorDescription`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorBody {
	pub(crate) error_description: Option<String>,
	pub(crate) message: Option<String>,
}

impl ErrorBody {
	pub(crate) fn description(self) -> Option<String> {
		self.error_description.or(self.message)
	}
}
