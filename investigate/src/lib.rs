//! Investigate - client for the breach-search API behind MeOnTheWeb
//!
//! Looks up leaked credentials and exposure counters for an email, domain,
//! phone, username or card number. Every call resolves to an [`ApiOutcome`]:
//! either the parsed payload or exactly one problem tag, never an error.

// Core modules
pub mod config;
pub mod error;
pub mod outcome;
pub mod types;
pub mod traits;

// Request plumbing
pub mod cancel;
pub mod credentials;
pub mod http;
pub mod url_builder;

// Main functionality modules
pub mod analysis;
pub mod client;
pub mod validation;

pub mod testing;

// Re-export main types for convenience
pub use cancel::CancelToken;
pub use client::SearchClient;
pub use config::{ApiConfig, ApiConfigBuilder};
pub use credentials::{ApiToken, EnvTokenProvider, StaticTokenProvider};
pub use error::{InvestigateError, Result};
pub use outcome::{ApiOutcome, ApiProblem};
pub use traits::{TokenProvider, Transport};
pub use types::{
    BreachRecord, CountersRequest, Entity, IndexCounter, IndicesCountersResponse, License,
    SearchFilter, SearchIndex, SearchRequest, SearchResponse,
};
pub use validation::{is_valid_email, is_valid_verification_code};
