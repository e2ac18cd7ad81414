//! Configuration loading for the punch timesheet engine.
//!
//! This module loads the header aliases used to find the punch date, punch
//! time, direction and employee id columns in an input table, along with a
//! little metadata about the deployment.
//!
//! # Example
//!
//! ```no_run
//! use punch_timesheet::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/timesheet").unwrap();
//! println!("Loaded profile: {}", config.profile().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ColumnAliases, DetectedColumns, ProfileMetadata, TimesheetConfig};
