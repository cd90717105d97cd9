//! RapidAPI Real-Time Product Search: client, endpoints, parameters and responses.

pub mod client;
pub mod endpoint;
pub mod params;
pub mod response;

pub use client::{host_header, ProductSearch, ProductSearchClient};
pub use endpoint::Endpoint;
pub use params::{ParamValue, QueryParams};
pub use response::{ApiError, ApiResponse};
