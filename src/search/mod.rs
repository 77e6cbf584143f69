//! Search orchestration: parameter building, the generation-guarded
//! orchestrator and the event-driven session used by interactive front ends.

mod orchestrator;
mod query;
mod runtime;
mod session;
mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use orchestrator::{Orchestrator, SearchResult, SearchTicket, perform_search};
pub use query::{ACTIVE_STATUS, DEFAULT_LIMIT, build_params};
pub use session::{Presenter, SearchSession, SessionEvent};
pub use state::{Notification, SearchState, SearchUpdate};
