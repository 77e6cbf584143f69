use std::io::BufRead;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use arboard::Clipboard;
use tokio::sync::mpsc;
use tracing::debug;
use wrz::{
	Notification, Orchestrator, Presenter, SearchSession, SearchState, SearchUpdate, SessionEvent,
	Task, TaskDetail, WrikeClient,
};

use crate::cli::{
	OutputFormat, ResultAction, format_detail_json, print_json, print_notification, print_plain,
};
use crate::settings::ResolvedConfig;

/// How the search should be presented, taken from the command line.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RunOptions {
	pub(crate) format: OutputFormat,
	pub(crate) interactive: bool,
	pub(crate) select: Option<u64>,
	pub(crate) action: ResultAction,
}

/// Coordinates building the API client and running searches against it.
pub(crate) struct SearchWorkflow {
	client: Arc<WrikeClient>,
	initial_query: String,
	debounce: Duration,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			token,
			host,
			initial_query,
			debounce,
		} = config;

		let client = WrikeClient::new(&host, token).context("failed to build the HTTP client")?;
		Ok(Self {
			client: Arc::new(client),
			initial_query,
			debounce,
		})
	}

	/// Run the workflow. Returns `false` when a search failed.
	pub(crate) async fn run(self, options: RunOptions) -> Result<bool> {
		if options.interactive {
			self.run_interactive(options.format).await
		} else {
			self.run_once(options).await
		}
	}

	async fn run_once(self, options: RunOptions) -> Result<bool> {
		let mut orchestrator = Orchestrator::new();
		let update = orchestrator
			.search(self.client.as_ref(), self.initial_query.as_str())
			.await;

		match update {
			SearchUpdate::Results => {}
			SearchUpdate::Failed(notification) => {
				print_notification(&notification);
				return Ok(false);
			}
			SearchUpdate::Cancelled | SearchUpdate::Stale => return Ok(true),
		}

		let results = &orchestrator.state().results;
		match options.select {
			Some(position) => {
				let task = pick(results, position)?;
				apply_action(task, options.action, options.format)?;
			}
			None => print_results(results, options.format)?,
		}
		Ok(true)
	}

	async fn run_interactive(self, format: OutputFormat) -> Result<bool> {
		let (tx, rx) = mpsc::channel(16);
		tx.send(SessionEvent::SearchText(self.initial_query.clone()))
			.await
			.context("search session stopped before start")?;

		// Ctrl-C tears the session down; it must not keep the channel open
		// after stdin reaches EOF.
		let interrupt = tx.downgrade();
		let interrupt_task = tokio::spawn(async move {
			if tokio::signal::ctrl_c().await.is_ok()
				&& let Some(tx) = interrupt.upgrade()
			{
				let _ = tx.send(SessionEvent::Teardown).await;
			}
		});

		// A blocking read on stdin cannot be cancelled, so it gets its own
		// thread instead of a runtime task.
		thread::spawn(move || {
			for line in std::io::stdin().lock().lines() {
				let Ok(line) = line else { break };
				if tx.blocking_send(SessionEvent::SearchText(line)).is_err() {
					break;
				}
			}
			debug!("stdin closed");
		});

		let mut presenter = TerminalPresenter::new(format);
		let session = SearchSession::new(Arc::clone(&self.client)).with_debounce(self.debounce);
		session.run(rx, &mut presenter).await;

		interrupt_task.abort();
		Ok(!presenter.failed)
	}
}

/// Resolve a 1-based `--select` position.
fn pick(results: &[Task], position: u64) -> Result<&Task> {
	let index = usize::try_from(position)
		.ok()
		.and_then(|position| position.checked_sub(1));
	index
		.and_then(|index| results.get(index))
		.with_context(|| format!("no result #{position}; the search returned {} results", results.len()))
}

fn print_results(results: &[Task], format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Plain => print_plain(results),
		OutputFormat::Json => print_json(results)?,
	}
	Ok(())
}

fn apply_action(task: &Task, action: ResultAction, format: OutputFormat) -> Result<()> {
	match action {
		ResultAction::Detail => {
			let detail = TaskDetail::from_task(task);
			match format {
				OutputFormat::Plain => print!("{}", detail.to_text()),
				OutputFormat::Json => println!("{}", format_detail_json(&detail)?),
			}
		}
		ResultAction::Open => {
			open::that(&task.permalink)
				.with_context(|| format!("failed to open {}", task.permalink))?;
		}
		ResultAction::CopyTitleLink => copy_to_clipboard(&task.title_with_link()),
		ResultAction::CopyLink => copy_to_clipboard(&task.permalink),
	}
	Ok(())
}

/// Put `text` on the system clipboard. Without one (headless sessions, no
/// display server) the text goes to stdout instead.
fn copy_to_clipboard(text: &str) {
	match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
		Ok(()) => eprintln!("Copied to clipboard"),
		Err(err) => {
			debug!(error = %err, "clipboard unavailable; printing instead");
			println!("{text}");
		}
	}
}

/// Prints each settled result list; failures go to stderr.
struct TerminalPresenter {
	format: OutputFormat,
	failed: bool,
}

impl TerminalPresenter {
	fn new(format: OutputFormat) -> Self {
		Self {
			format,
			failed: false,
		}
	}
}

impl Presenter for TerminalPresenter {
	fn present(&mut self, state: &SearchState) {
		if state.is_loading {
			return;
		}
		if let Err(err) = print_results(&state.results, self.format) {
			eprintln!("failed to print results: {err}");
		}
	}

	fn notify(&mut self, notification: &Notification) {
		self.failed = true;
		print_notification(notification);
	}
}
