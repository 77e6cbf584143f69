//! HTML to markdown for task descriptions.
//!
//! Wrike stores descriptions as rich-text HTML. Conversion is delegated to
//! `htmd`; this module only picks the output style and tidies blank lines.

use htmd::HtmlToMarkdown;
use htmd::options::{BulletListMarker, HeadingStyle, Options};
use tracing::warn;

fn converter() -> HtmlToMarkdown {
	HtmlToMarkdown::builder()
		.options(Options {
			heading_style: HeadingStyle::Atx,
			bullet_list_marker: BulletListMarker::Dash,
			..Options::default()
		})
		.skip_tags(vec!["script", "style", "head"])
		.build()
}

/// Convert an HTML fragment to markdown.
///
/// A fragment the converter rejects is returned as-is so the detail view
/// still shows something.
#[must_use]
pub fn to_markdown(html: &str) -> String {
	if html.trim().is_empty() {
		return String::new();
	}
	match converter().convert(html) {
		Ok(markdown) => tidy(&markdown),
		Err(err) => {
			warn!(error = %err, "could not convert task description");
			html.trim().to_string()
		}
	}
}

/// Trim trailing spaces and collapse runs of blank lines to one.
fn tidy(markdown: &str) -> String {
	let mut out = String::with_capacity(markdown.len());
	let mut blank_run = 0;
	for line in markdown.lines() {
		let line = line.trim_end();
		if line.is_empty() {
			blank_run += 1;
			if blank_run > 1 {
				continue;
			}
		} else {
			blank_run = 0;
		}
		out.push_str(line);
		out.push('\n');
	}
	out.trim().to_string()
}
