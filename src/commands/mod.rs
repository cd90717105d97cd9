//! CLI command implementations.

pub mod deals;
pub mod product;
pub mod search;
pub mod store;

pub use deals::DealsCommand;
pub use product::{ProductCommand, ProductView};
pub use search::SearchCommand;
pub use store::StoreReviewsCommand;

use crate::config::OutputFormat;
use crate::format::Formatter;
use crate::rapidapi::{ApiResponse, ParamValue, QueryParams};

/// Optional request parameters collected from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub sort: Option<String>,
    pub country: Option<String>,
    pub category: Option<String>,
    pub store: Option<String>,
    /// Free-form `--param key=value` entries, in command-line order
    pub extra: Vec<(String, ParamValue)>,
}

impl RequestOptions {
    /// Builds query parameters: named flags first, then the extra entries.
    ///
    /// An extra entry with the same key as a named flag overrides it.
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert_opt("limit", self.limit);
        params.insert_opt("page", self.page);
        params.insert_opt("sort", self.sort.clone());
        params.insert_opt("country", self.country.clone());
        params.insert_opt("category", self.category.clone());
        params.insert_opt("store", self.store.clone());
        params.extend(self.extra.iter().cloned());
        params
    }
}

/// Rendered command result.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn render(format: OutputFormat, response: &ApiResponse) -> Self {
        Self {
            text: Formatter::new(format).format_response(response),
            success: response.is_success(),
        }
    }
}

/// Rejects blank identifiers before any request is made.
///
/// The value is returned untouched.
fn require_non_empty<'a>(what: &str, value: &'a str) -> anyhow::Result<&'a str> {
    if value.trim().is_empty() {
        anyhow::bail!("{} must not be empty", what);
    }
    Ok(value)
}
