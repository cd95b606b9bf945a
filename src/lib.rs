//! SUVIDHA - a self-service civic kiosk for the terminal.
//!
//! Citizens log in with a mobile number, file complaints against the
//! electricity, gas and municipal departments, track them through
//! Submitted → Under Review → Assigned → Resolved and export a receipt.
//! Staff advance complaints from the admin screen.
//!
//! The library exposes its modules for integration tests and benchmarks.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod lifecycle;
pub mod logging;
pub mod models;
pub mod storage;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
