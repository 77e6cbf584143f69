use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, ResultAction};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `wrz` binary.
#[derive(Parser, Debug)]
#[command(
    name = "wrz",
    version,
    long_version = long_version(),
    about = "Search and browse Wrike tasks",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        value_name = "QUERY",
        help = "Search task titles; leave empty to list your active tasks (default: search.initial_query)"
    )]
    pub(crate) query: Option<String>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "WRZ_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long,
        value_name = "TOKEN",
        env = "WRIKE_TOKEN",
        hide_env_values = true,
        help = "Wrike API bearer token (default: api.token)"
    )]
    pub(crate) token: Option<String>,
    #[arg(
        long,
        value_name = "URL",
        help = "Wrike API host (default: https://www.wrike.com)"
    )]
    pub(crate) host: Option<String>,
    #[arg(
        short = 'i',
        long,
        conflicts_with = "select",
        help = "Read search text line by line from stdin; each line replaces the running search (default: disabled)"
    )]
    pub(crate) interactive: bool,
    #[arg(
        long = "debounce-ms",
        value_name = "MS",
        help = "Wait this long after the last input line before searching (default: 0)"
    )]
    pub(crate) debounce_ms: Option<u64>,
    #[arg(
        short = 's',
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Pick the Nth result (1-based) and apply --action to it"
    )]
    pub(crate) select: Option<u64>,
    #[arg(
        short = 'a',
        long,
        value_enum,
        requires = "select",
        default_value_t = ResultAction::Detail,
        help = "Action applied to the selected result"
    )]
    pub(crate) action: ResultAction,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'v',
        long,
        help = "Log requests and search lifecycle to stderr (default: WRZ_LOG or warn)"
    )]
    pub(crate) verbose: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
}
