//! Minimal Wrike REST client: the `contacts` and `tasks` list endpoints.

mod client;
mod error;
mod params;
mod types;

pub use client::{DEFAULT_HOST, TaskSource, WrikeClient};
pub use error::SearchError;
pub use params::QueryParams;
pub use types::{Task, User};
