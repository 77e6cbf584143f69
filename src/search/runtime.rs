use tokio_util::sync::CancellationToken;

/// Tracks which search is authoritative.
///
/// Every issued search gets a fresh id and cancellation token. Issuing a new
/// search cancels the previous token first, so at most one request is live.
#[derive(Debug, Default)]
pub(crate) struct SearchRuntime {
	next_query_id: u64,
	current_query_id: Option<u64>,
	cancel: Option<CancellationToken>,
	in_flight: bool,
}

impl SearchRuntime {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	/// Cancel whatever is running and hand out the id and token for the next
	/// search.
	pub(crate) fn issue_search(&mut self) -> (u64, CancellationToken) {
		self.cancel_in_flight();
		self.next_query_id = self.next_query_id.wrapping_add(1);
		let id = self.next_query_id;
		let token = CancellationToken::new();
		self.current_query_id = Some(id);
		self.cancel = Some(token.clone());
		self.in_flight = true;
		(id, token)
	}

	pub(crate) fn matches_latest(&self, result_id: u64) -> bool {
		Some(result_id) == self.current_query_id
	}

	pub(crate) fn record_result_completion(&mut self, result_id: u64) {
		if self.matches_latest(result_id) {
			self.in_flight = false;
			self.cancel = None;
		}
	}

	/// Cancel the live search, if any, and retire its id so a result that
	/// already finished can no longer be applied. Returns whether something
	/// was running.
	pub(crate) fn cancel_in_flight(&mut self) -> bool {
		let running = self.in_flight;
		if let Some(token) = self.cancel.take() {
			token.cancel();
		}
		self.current_query_id = None;
		self.in_flight = false;
		running
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight
	}
}
