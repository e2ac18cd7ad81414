//! HTTP API module for the punch timesheet engine.
//!
//! This module exposes the summarization pipeline over REST so a spreadsheet
//! front end can post a raw punch table and receive daily summaries back.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CellValue, SummaryRequest};
pub use response::ApiError;
pub use state::AppState;
