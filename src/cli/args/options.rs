use clap::ValueEnum;

/// What to do with the result picked by `--select`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum ResultAction {
    /// Show the task description, status and link.
    #[default]
    Detail,
    /// Open the task in the default browser.
    Open,
    /// Print "<title> - <permalink>" for the clipboard.
    #[clap(name = "copy-title-link")]
    CopyTitleLink,
    /// Print the permalink for the clipboard.
    #[clap(name = "copy-link")]
    CopyLink,
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}
