//! # Country Challenge
//!
//! A terminal browser over the public country catalog.
//!
//! ## Features
//! - One catalog fetch at startup
//! - Case-insensitive search by name or region
//! - Remove countries from the session's list
//! - Mark favorites, listed in the order they were picked
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use models::CountryRecord;
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{filter_countries, AppState, AppActor, ViewState};
pub use network::{CountrySource, FetchError, HttpCountrySource, NetworkActor};
