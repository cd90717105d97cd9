//! Search command implementation.

use super::{require_non_empty, CommandOutput, RequestOptions};
use crate::config::Settings;
use crate::rapidapi::{ProductSearch, ProductSearchClient};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Executes a product search.
pub struct SearchCommand {
    settings: Settings,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Executes the search and returns formatted output.
    pub async fn execute(&self, query: &str, options: &RequestOptions) -> Result<CommandOutput> {
        let client =
            ProductSearchClient::new(&self.settings).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, query, options).await
    }

    /// Executes the search with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl ProductSearch,
        query: &str,
        options: &RequestOptions,
    ) -> Result<CommandOutput> {
        let query = require_non_empty("Search query", query)?;
        info!("Searching for: {}", query);

        let params = options.to_params();
        if !params.is_empty() {
            debug!("Search parameters: {}", params.to_query_string());
        }

        let response = client.search_products(query, &params).await;
        Ok(CommandOutput::render(self.settings.format, &response))
    }
}
