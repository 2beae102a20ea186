use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::NarrationRecord;
use crate::error::AppError;

/// Record store contract: create one record, list them all.
///
/// Listing follows managed-backend semantics where field-level errors can
/// accompany or replace the data.
#[async_trait]
pub trait MetricsStore: Send + Sync {
    async fn create(&self, record: &NarrationRecord) -> Result<(), AppError>;
    async fn list(&self) -> Result<Vec<NarrationRecord>, AppError>;
}

/// List response shape of the records API.
#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    data: Vec<NarrationRecord>,
    errors: Option<Value>,
}

/// Client for the managed records API backing the metrics export.
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpStore {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    fn records_url(&self) -> String {
        format!("{}/records", self.base_url.trim_end_matches('/'))
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("x-api-key", key),
            None => request,
        }
    }
}

#[async_trait]
impl MetricsStore for HttpStore {
    async fn create(&self, record: &NarrationRecord) -> Result<(), AppError> {
        let response = self
            .with_auth(self.client.post(self.records_url()).json(record))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let details = response
                .json::<Value>()
                .await
                .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
            tracing::error!(status, %details, "Record store create failed");
            return Err(AppError::Store(details));
        }

        Ok(())
    }

    async fn list(&self) -> Result<Vec<NarrationRecord>, AppError> {
        let response = self
            .with_auth(self.client.get(self.records_url()))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let details = response
                .json::<Value>()
                .await
                .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
            tracing::error!(status, %details, "Record store list failed");
            return Err(AppError::Store(details));
        }

        let body: ListResponse = response.json().await?;

        if let Some(errors) = body.errors {
            return Err(AppError::Store(errors));
        }

        Ok(body.data)
    }
}
