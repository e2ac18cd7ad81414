//! Punch Timesheet Engine
//!
//! This crate turns a table of raw time-clock punches, whose date cells may be
//! written day-first or month-first, into per-day worked and resting hours for
//! an employee. The date order is decided once per batch by majority vote over
//! calendar months, then "in"/"out" punches are paired chronologically.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
