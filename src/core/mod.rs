//! Core business logic abstractions

pub mod calendar;
pub mod config;
pub mod error;
pub mod fare;
pub mod log;

// Re-export main types for cleaner imports
pub use error::{ProviderError, SearchError};
pub use fare::{
    FareProvider, NormalizedQuery, ProviderOutcome, ProviderRequest, ProviderSpec, Quote,
    SearchQuery,
};
