//! Detail view for a single task: markdown body plus status and link
//! metadata.

mod html;
mod status;

use std::fmt::Write;

use serde::Serialize;

use crate::api::Task;

pub use html::to_markdown;
pub use status::{FALLBACK_STATUS_COLOR, STATUS_COLORS, status_color};

/// Label of the link back to the task in Wrike.
pub const OPEN_IN_WRIKE: &str = "Open in Wrike";

/// A status label with its tag colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusTag {
	pub text: String,
	pub color: &'static str,
}

/// Link metadata shown beside the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailLink {
	pub title: &'static str,
	pub text: &'static str,
	pub target: String,
}

/// Everything needed to present a task on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDetail {
	pub navigation_title: String,
	pub markdown: String,
	pub status: StatusTag,
	pub link: DetailLink,
}

impl TaskDetail {
	#[must_use]
	pub fn from_task(task: &Task) -> Self {
		let description = to_markdown(&task.description);
		let mut markdown = format!("# {}\n\n## Description\n", task.title);
		if !description.is_empty() {
			let _ = writeln!(markdown, "{description}");
		}

		Self {
			navigation_title: task.title.clone(),
			markdown,
			status: StatusTag {
				text: task.status.clone(),
				color: status_color(&task.status),
			},
			link: DetailLink {
				title: "Link",
				text: OPEN_IN_WRIKE,
				target: task.permalink.clone(),
			},
		}
	}

	/// Plain-text rendering: the markdown body followed by the metadata.
	#[must_use]
	pub fn to_text(&self) -> String {
		let mut text = self.markdown.clone();
		let _ = writeln!(text);
		let _ = writeln!(text, "Status: {} ({})", self.status.text, self.status.color);
		let _ = writeln!(text, "{}: {} <{}>", self.link.title, self.link.text, self.link.target);
		text
	}
}
