use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

use crate::api::{QueryParams, SearchError, Task, TaskSource, User};

pub(crate) fn task(id: &str, title: &str) -> Task {
	Task {
		id: id.into(),
		title: title.into(),
		description: format!("<p>{title}</p>"),
		brief_description: title.into(),
		status: "Active".into(),
		permalink: format!("https://www.wrike.com/open.htm?id={id}"),
	}
}

pub(crate) fn me() -> User {
	User {
		id: "ME".into(),
		me: true,
		first_name: None,
		last_name: None,
	}
}

/// In-memory [`TaskSource`] keyed by search text. Individual searches can be
/// held open until [`FakeSource::release`] is called.
#[derive(Default)]
pub(crate) struct FakeSource {
	contacts: Vec<User>,
	responses: Mutex<HashMap<String, Result<Vec<Task>, SearchError>>>,
	gates: Mutex<HashMap<String, Arc<Notify>>>,
	requests: Mutex<Vec<QueryParams>>,
	contact_calls: AtomicUsize,
}

impl FakeSource {
	pub(crate) fn new() -> Self {
		Self {
			contacts: vec![
				User {
					id: "OTHER".into(),
					me: false,
					first_name: None,
					last_name: None,
				},
				me(),
			],
			..Self::default()
		}
	}

	pub(crate) fn without_current_user() -> Self {
		Self::default()
	}

	pub(crate) fn respond(self, query: &str, outcome: Result<Vec<Task>, SearchError>) -> Self {
		self.responses
			.lock()
			.unwrap()
			.insert(query.to_string(), outcome);
		self
	}

	/// Hold searches for `query` until released.
	pub(crate) fn gate(self, query: &str) -> Self {
		self.gates
			.lock()
			.unwrap()
			.insert(query.to_string(), Arc::new(Notify::new()));
		self
	}

	pub(crate) fn release(&self, query: &str) {
		if let Some(gate) = self.gates.lock().unwrap().get(query) {
			gate.notify_one();
		}
	}

	pub(crate) fn requests(&self) -> Vec<QueryParams> {
		self.requests.lock().unwrap().clone()
	}

	pub(crate) fn contact_calls(&self) -> usize {
		self.contact_calls.load(Ordering::SeqCst)
	}

	fn key(params: &QueryParams) -> String {
		params.get("title").unwrap_or_default().to_string()
	}
}

#[async_trait]
impl TaskSource for FakeSource {
	async fn contacts(&self, cancel: &CancellationToken) -> Result<Vec<User>, SearchError> {
		self.contact_calls.fetch_add(1, Ordering::SeqCst);
		if cancel.is_cancelled() {
			return Err(SearchError::Cancelled);
		}
		Ok(self.contacts.clone())
	}

	async fn tasks(
		&self,
		params: &QueryParams,
		cancel: &CancellationToken,
	) -> Result<Vec<Task>, SearchError> {
		self.requests.lock().unwrap().push(params.clone());
		let key = Self::key(params);
		let gate = self.gates.lock().unwrap().get(&key).cloned();
		if let Some(gate) = gate {
			tokio::select! {
				_ = gate.notified() => {}
				_ = cancel.cancelled() => return Err(SearchError::Cancelled),
			}
		}
		if cancel.is_cancelled() {
			return Err(SearchError::Cancelled);
		}
		self.responses
			.lock()
			.unwrap()
			.get(&key)
			.cloned()
			.unwrap_or_else(|| Ok(Vec::new()))
	}
}
