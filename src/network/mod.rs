//! Network layer - the catalog fetch
//!
//! The Network actor receives fetch commands and sends back parsed countries.

pub mod actor;
pub mod client;
pub mod error;

pub use actor::NetworkActor;
pub use client::{CountrySource, HttpCountrySource};
pub use error::FetchError;
