//! Network messages - communication between App and Network layers

use crate::models::CountryRecord;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the whole country catalog
    FetchCountries { id: u64 },

    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Catalog fetched and parsed
    Countries {
        id: u64,
        records: Vec<CountryRecord>,
        time_ms: u64,
    },
    /// Status, transport or parse failure collapsed into one message
    FetchFailed {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Countries { id, .. } => *id,
            NetworkResponse::FetchFailed { id, .. } => *id,
        }
    }
}
