mod cli;
mod settings;
mod workflow;

use std::process::ExitCode;

use anyhow::Result;
use cli::parse_cli;
use workflow::{RunOptions, SearchWorkflow};

#[tokio::main]
async fn main() -> Result<ExitCode> {
	let cli = parse_cli();
	wrz::logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let options = RunOptions {
		format: cli.output,
		interactive: cli.interactive,
		select: cli.select,
		action: cli.action,
	};
	let workflow = SearchWorkflow::from_config(resolved)?;
	let succeeded = workflow.run(options).await?;

	Ok(if succeeded {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	})
}
