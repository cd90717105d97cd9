//! product-search - Client for the RapidAPI Real-Time Product Search API
//!
//! Six operations (search, product details, offers, reviews, deals, store
//! reviews), each one GET whose JSON body is passed through untouched.
//! Failures come back as `{"error": "..."}` values instead of `Err`.

pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod rapidapi;

pub use config::Settings;
pub use error::ConfigError;
pub use rapidapi::{ApiResponse, ProductSearch, ProductSearchClient, QueryParams};
