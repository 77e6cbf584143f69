mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, ResultAction, parse_cli};
pub(crate) use output::{
	format_detail_json, print_json, print_notification, print_plain,
};
