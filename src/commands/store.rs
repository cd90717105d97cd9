//! Store reviews command implementation.

use super::{require_non_empty, CommandOutput, RequestOptions};
use crate::config::Settings;
use crate::rapidapi::{ProductSearch, ProductSearchClient};
use anyhow::{Context, Result};
use tracing::info;

/// Fetches reviews for a store.
pub struct StoreReviewsCommand {
    settings: Settings,
}

impl StoreReviewsCommand {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn execute(&self, store_id: &str, options: &RequestOptions) -> Result<CommandOutput> {
        let client =
            ProductSearchClient::new(&self.settings).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, store_id, options).await
    }

    /// Fetches store reviews with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl ProductSearch,
        store_id: &str,
        options: &RequestOptions,
    ) -> Result<CommandOutput> {
        let store_id = require_non_empty("Store ID", store_id)?;
        info!("Fetching reviews for store: {}", store_id);

        let response = client.get_store_reviews(store_id, &options.to_params()).await;
        Ok(CommandOutput::render(self.settings.format, &response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::mock::MockClient;
    use crate::rapidapi::{ApiResponse, ParamValue};
    use serde_json::json;

    #[tokio::test]
    async fn test_store_reviews() {
        let client = MockClient::new(ApiResponse::Success(json!({"reviews": [], "count": 0})));
        let cmd = StoreReviewsCommand::new(Settings::with_api_key("test-key"));
        let options = RequestOptions {
            page: Some(3),
            sort: Some("LOWEST_RATING".to_string()),
            extra: vec![("verified".to_string(), ParamValue::Bool(true))],
            ..Default::default()
        };

        let output = cmd.execute_with_client(&client, "walmart.com", &options).await.unwrap();

        assert!(output.success);
        let calls = client.calls();
        assert_eq!(calls[0].operation, "store-reviews");
        assert_eq!(calls[0].id.as_deref(), Some("walmart.com"));
        assert_eq!(calls[0].params.to_query_string(), "page=3&sort=LOWEST_RATING&verified=true");
    }

    #[tokio::test]
    async fn test_store_reviews_empty_id() {
        let client = MockClient::new(ApiResponse::Success(json!({})));
        let cmd = StoreReviewsCommand::new(Settings::with_api_key("test-key"));

        let result = cmd.execute_with_client(&client, "", &RequestOptions::default()).await;

        assert!(result.is_err());
        assert!(client.calls().is_empty());
    }
}
