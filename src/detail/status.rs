/// Colour used for statuses missing from [`STATUS_COLORS`].
pub const FALLBACK_STATUS_COLOR: &str = "#8c8c8c";

/// Tag colours for the built-in Wrike workflow statuses.
pub const STATUS_COLORS: &[(&str, &str)] = &[
	("Active", "#3cb043"),
	("Completed", "#2d9cdb"),
	("Deferred", "#f2994a"),
	("Cancelled", "#eb5757"),
];

/// Look up the tag colour for a status label, ignoring case.
#[must_use]
pub fn status_color(status: &str) -> &'static str {
	let status = status.trim();
	STATUS_COLORS
		.iter()
		.find(|(name, _)| name.eq_ignore_ascii_case(status))
		.map(|(_, color)| *color)
		.unwrap_or(FALLBACK_STATUS_COLOR)
}
