use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tracing::debug;

use super::orchestrator::{Orchestrator, SearchResult};
use super::state::{Notification, SearchState, SearchUpdate};
use crate::api::TaskSource;

/// Input coming from the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
	/// The search text changed.
	SearchText(String),
	/// The front end is going away; cancel whatever is running.
	Teardown,
}

/// Receives state snapshots and notifications from a running session.
pub trait Presenter {
	fn present(&mut self, state: &SearchState);

	fn notify(&mut self, notification: &Notification);
}

/// Drives an [`Orchestrator`] from a stream of [`SessionEvent`]s.
///
/// Text changes are debounced by `debounce`; each accepted change cancels the
/// previous search before starting a new one. When the event channel closes
/// the session waits for the last search to land, while
/// [`SessionEvent::Teardown`] cancels it immediately.
pub struct SearchSession<S> {
	source: Arc<S>,
	orchestrator: Orchestrator,
	debounce: Duration,
}

impl<S> SearchSession<S>
where
	S: TaskSource + 'static,
{
	pub fn new(source: Arc<S>) -> Self {
		Self {
			source,
			orchestrator: Orchestrator::new(),
			debounce: Duration::ZERO,
		}
	}

	#[must_use]
	pub fn with_debounce(mut self, debounce: Duration) -> Self {
		self.debounce = debounce;
		self
	}

	#[must_use]
	pub fn state(&self) -> &SearchState {
		self.orchestrator.state()
	}

	pub async fn run<P>(mut self, mut events: mpsc::Receiver<SessionEvent>, presenter: &mut P) -> SearchState
	where
		P: Presenter,
	{
		let (result_tx, mut result_rx) = mpsc::unbounded_channel::<SearchResult>();
		let mut pending: Option<(String, Instant)> = None;
		let mut input_closed = false;

		loop {
			if input_closed && pending.is_none() && !self.orchestrator.is_in_flight() {
				break;
			}
			let deadline = pending.as_ref().map(|(_, at)| *at);

			tokio::select! {
				event = events.recv(), if !input_closed => match event {
					Some(SessionEvent::SearchText(text)) => {
						pending = Some((text, Instant::now() + self.debounce));
					}
					Some(SessionEvent::Teardown) => {
						self.orchestrator.cancel();
						presenter.present(self.orchestrator.state());
						break;
					}
					None => {
						debug!("search input closed");
						input_closed = true;
					}
				},
				_ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
					if let Some((text, _)) = pending.take() {
						self.start(text, &result_tx);
						presenter.present(self.orchestrator.state());
					}
				}
				Some(result) = result_rx.recv() => {
					match self.orchestrator.apply(result) {
						SearchUpdate::Results | SearchUpdate::Cancelled => {
							presenter.present(self.orchestrator.state());
						}
						SearchUpdate::Failed(notification) => {
							presenter.present(self.orchestrator.state());
							presenter.notify(&notification);
						}
						SearchUpdate::Stale => {}
					}
				}
			}
		}

		self.orchestrator.state().clone()
	}

	fn start(&mut self, text: String, results: &mpsc::UnboundedSender<SearchResult>) {
		let ticket = self.orchestrator.begin(text);
		let source = Arc::clone(&self.source);
		let results = results.clone();
		tokio::spawn(async move {
			let result = ticket.run(source.as_ref()).await;
			// The session may have been torn down already.
			let _ = results.send(result);
		});
	}
}
