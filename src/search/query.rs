use crate::api::{QueryParams, SearchError, User};

/// Cap applied to the default "my active tasks" listing.
pub const DEFAULT_LIMIT: u32 = 100;

/// Status filter used for the default listing.
pub const ACTIVE_STATUS: &str = "Active";

/// Build the `tasks` parameters for a search text.
///
/// An empty text lists the active tasks authored by `current_user`, newest
/// update first. Any other text filters by title and orders by status. The
/// description field is requested in both cases so the detail view can be
/// rendered without another round trip.
pub fn build_params(query: &str, current_user: Option<&User>) -> Result<QueryParams, SearchError> {
	let params = QueryParams::new().with("fields", "[description]");

	if query.is_empty() {
		let user = current_user.ok_or(SearchError::NoCurrentUser)?;
		Ok(params
			.with("authors", format!("[{}]", user.id))
			.with("status", ACTIVE_STATUS)
			.with("sortField", "UpdatedDate")
			.with("sortOrder", "Desc")
			.with("limit", DEFAULT_LIMIT.to_string()))
	} else {
		Ok(params
			.with("title", query)
			.with("sortField", "status")
			.with("sortOrder", "Asc"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn me() -> User {
		User {
			id: "KUAAAAAA".into(),
			me: true,
			first_name: None,
			last_name: None,
		}
	}

	#[test]
	fn empty_query_lists_my_active_tasks() {
		let params = build_params("", Some(&me())).expect("params");
		let pairs: Vec<_> = params.iter().collect();
		assert_eq!(
			pairs,
			vec![
				("fields", "[description]"),
				("authors", "[KUAAAAAA]"),
				("status", "Active"),
				("sortField", "UpdatedDate"),
				("sortOrder", "Desc"),
				("limit", "100"),
			]
		);
	}

	#[test]
	fn text_query_filters_by_title_only() {
		let params = build_params("release plan", Some(&me())).expect("params");
		let pairs: Vec<_> = params.iter().collect();
		assert_eq!(
			pairs,
			vec![
				("fields", "[description]"),
				("title", "release plan"),
				("sortField", "status"),
				("sortOrder", "Asc"),
			]
		);
		assert!(!params.contains_key("authors"));
		assert!(!params.contains_key("status"));
		assert!(!params.contains_key("limit"));
	}

	#[test]
	fn text_query_does_not_need_a_current_user() {
		let params = build_params("x", None).expect("params");
		assert_eq!(params.get("title"), Some("x"));
	}

	#[test]
	fn empty_query_without_current_user_fails() {
		assert_eq!(build_params("", None).unwrap_err(), SearchError::NoCurrentUser);
	}

	#[test]
	fn whitespace_is_a_title_search() {
		let params = build_params(" ", Some(&me())).expect("params");
		assert_eq!(params.get("title"), Some(" "));
		assert!(!params.contains_key("authors"));
	}
}
