use anyhow::Result;
use serde_json::json;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use wrz::{Notification, Task, TaskDetail};

const SECTION_TITLE: &str = "Results";
const TITLE_COLUMN_MAX: usize = 48;
const SUBTITLE_COLUMN_MAX: usize = 56;

/// Truncate `text` to at most `max` display columns, marking the cut with an
/// ellipsis.
fn truncate_to_width(text: &str, max: usize) -> String {
	if text.width() <= max {
		return text.to_string();
	}
	let mut out = String::new();
	let mut used = 0;
	for ch in text.chars() {
		let width = ch.width().unwrap_or(0);
		if used + width + 1 > max {
			break;
		}
		out.push(ch);
		used += width;
	}
	out.push('…');
	out
}

fn pad_to_width(text: &str, width: usize) -> String {
	let padding = width.saturating_sub(text.width());
	format!("{text}{}", " ".repeat(padding))
}

/// Single-line form of a description: whitespace runs become one space.
fn one_line(text: &str) -> String {
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Format the result list as a titled table: title, brief description and
/// status.
pub(crate) fn format_results_plain(results: &[Task]) -> String {
	let mut lines = vec![format!("{SECTION_TITLE} ({})", results.len())];

	let rows: Vec<(String, String, &str)> = results
		.iter()
		.map(|task| {
			(
				truncate_to_width(&one_line(&task.title), TITLE_COLUMN_MAX),
				truncate_to_width(&one_line(&task.brief_description), SUBTITLE_COLUMN_MAX),
				task.status.as_str(),
			)
		})
		.collect();
	let title_width = rows.iter().map(|(title, ..)| title.width()).max().unwrap_or(0);
	let subtitle_width = rows
		.iter()
		.map(|(_, subtitle, _)| subtitle.width())
		.max()
		.unwrap_or(0);

	for (index, (title, subtitle, status)) in rows.iter().enumerate() {
		let line = format!(
			"{:>3}. {}  {}  [{}]",
			index + 1,
			pad_to_width(title, title_width),
			pad_to_width(subtitle, subtitle_width),
			status
		);
		lines.push(line);
	}

	lines.join("\n")
}

/// Format the result list as JSON.
pub(crate) fn format_results_json(results: &[Task]) -> Result<String> {
	let payload = json!({
		"count": results.len(),
		"results": results,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn format_detail_json(detail: &TaskDetail) -> Result<String> {
	Ok(serde_json::to_string_pretty(detail)?)
}

/// Print the result list in plain text.
pub(crate) fn print_plain(results: &[Task]) {
	println!("{}", format_results_plain(results));
}

/// Print the JSON representation of the result list.
pub(crate) fn print_json(results: &[Task]) -> Result<()> {
	println!("{}", format_results_json(results)?);
	Ok(())
}

/// Surface a failure the way a toast would: one line on stderr.
pub(crate) fn print_notification(notification: &Notification) {
	eprintln!("{}: {}", notification.title, notification.message);
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	fn task(id: &str, title: &str, brief: &str, status: &str) -> Task {
		Task {
			id: id.into(),
			title: title.into(),
			description: String::new(),
			brief_description: brief.into(),
			status: status.into(),
			permalink: format!("https://www.wrike.com/open.htm?id={id}"),
		}
	}

	#[test]
	fn plain_output_lists_rows_in_order_with_count() {
		let output = format_results_plain(&[
			task("1", "Release plan", "Cut the branch", "Active"),
			task("2", "Docs", "", "Completed"),
		]);
		let lines: Vec<&str> = output.lines().collect();
		assert_eq!(lines[0], "Results (2)");
		assert!(lines[1].starts_with("  1. Release plan"));
		assert!(lines[1].ends_with("[Active]"));
		assert!(lines[2].starts_with("  2. Docs        "));
		assert!(lines[2].ends_with("[Completed]"));
	}

	#[test]
	fn empty_results_print_only_the_header() {
		assert_eq!(format_results_plain(&[]), "Results (0)");
	}

	#[test]
	fn long_titles_are_truncated_by_display_width() {
		let truncated = truncate_to_width("日本語のタスク名", 7);
		assert_eq!(truncated, "日本語…");
		assert!(truncated.width() <= 7);
		assert_eq!(truncate_to_width("short", 10), "short");
	}

	#[test]
	fn json_output_keeps_server_order() {
		let json = format_results_json(&[task("b", "B", "", "Active"), task("a", "A", "", "Active")])
			.expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["count"], 2);
		assert_eq!(value["results"][0]["id"], "b");
		assert_eq!(value["results"][1]["briefDescription"], "");
	}
}
