use thiserror::Error;

/// Failures produced while talking to the Wrike API or running a search.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
	/// The request was superseded or torn down. Never shown to the user.
	#[error("search cancelled")]
	Cancelled,

	/// The HTTP request could not be completed.
	#[error("{0}")]
	Transport(String),

	/// The API answered with an error status or an error body.
	#[error("{message}")]
	Api { status: u16, message: String },

	/// The response body did not have the expected shape.
	#[error("unexpected response from {endpoint}: {reason}")]
	Malformed {
		endpoint: &'static str,
		reason: String,
	},

	/// No contact in the account is flagged as the authenticated caller.
	#[error("could not determine the current Wrike user")]
	NoCurrentUser,
}

impl SearchError {
	#[must_use]
	pub fn is_cancelled(&self) -> bool {
		matches!(self, Self::Cancelled)
	}

	pub(crate) fn malformed(endpoint: &'static str, reason: impl ToString) -> Self {
		Self::Malformed {
			endpoint,
			reason: reason.to_string(),
		}
	}
}

impl From<reqwest::Error> for SearchError {
	fn from(err: reqwest::Error) -> Self {
		Self::Transport(err.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn api_errors_display_server_message() {
		let err = SearchError::Api {
			status: 401,
			message: "Access token is invalid".into(),
		};
		assert_eq!(err.to_string(), "Access token is invalid");
		assert!(!err.is_cancelled());
		assert!(SearchError::Cancelled.is_cancelled());
	}
}
