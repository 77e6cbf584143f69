//! Search and browse Wrike tasks.
//!
//! The crate is split into the REST client ([`api`]), the search orchestrator
//! that keeps exactly one authoritative request in flight ([`search`]) and the
//! task detail renderer ([`detail`]). The root module re-exports the types a
//! front end needs.

pub mod api;
pub mod app_dirs;
pub mod detail;
pub mod logging;
pub mod search;

pub use api::{DEFAULT_HOST, QueryParams, SearchError, Task, TaskSource, User, WrikeClient};
pub use detail::TaskDetail;
pub use search::{
	Notification, Orchestrator, Presenter, SearchSession, SearchState, SearchUpdate, SessionEvent,
};
