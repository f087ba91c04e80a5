//! Web layer for the timetable query resolver.
//!
//! Provides HTTP endpoints for resolving free-text queries and fetching
//! the matching trains.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
