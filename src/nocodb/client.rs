//! HTTP client for the NocoDB v2 meta API
//!
//! Every call is a single request: no retries, no backoff.

use super::traits::NocoDbApi;
use super::types::{parse_list, RemoteTable, RemoteView};
use crate::config::{ApiConfig, API_TOKEN_VAR};
use crate::error::ProvisionError;
use crate::forms::{CreateFormRequest, CreateTableRequest};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Header carrying the API token
const TOKEN_HEADER: &str = "xc-token";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the meta endpoints of one NocoDB base
pub struct NocoDbClient {
    http: Client,
    api_root: String,
    base_id: String,
}

impl NocoDbClient {
    /// Create a new client for the configured base
    pub fn new(config: &ApiConfig) -> Result<Self, ProvisionError> {
        let mut token = HeaderValue::from_str(&config.api_token).map_err(|_| {
            ProvisionError::Configuration {
                var: API_TOKEN_VAR.to_string(),
            }
        })?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(TOKEN_HEADER, token);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ProvisionError::transport(config.api_root(), e.to_string()))?;

        Ok(Self {
            http,
            api_root: config.api_root(),
            base_id: config.base_id.clone(),
        })
    }

    fn tables_endpoint(&self) -> String {
        format!("/meta/bases/{}/tables", self.base_id)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_root, endpoint)
    }

    async fn get(&self, endpoint: &str) -> Result<Value, ProvisionError> {
        self.execute(self.http.get(self.url(endpoint)), endpoint)
            .await
    }

    async fn post<B: Serialize + ?Sized + Sync>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Value, ProvisionError> {
        self.execute(self.http.post(self.url(endpoint)).json(body), endpoint)
            .await
    }

    async fn execute(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> Result<Value, ProvisionError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!(endpoint, error = %e, "Request to NocoDB failed");
            ProvisionError::transport(endpoint, e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(endpoint, status = status.as_u16(), body = %body, "NocoDB API error");
            return Err(ProvisionError::remote(endpoint, status.as_u16(), body));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ProvisionError::transport(endpoint, format!("Invalid JSON response: {e}")))
    }
}

#[async_trait]
impl NocoDbApi for NocoDbClient {
    async fn list_tables(&self) -> Result<Vec<RemoteTable>, ProvisionError> {
        let response = self.get(&self.tables_endpoint()).await?;
        Ok(parse_list(response))
    }

    async fn create_table(
        &self,
        request: &CreateTableRequest,
    ) -> Result<RemoteTable, ProvisionError> {
        let endpoint = self.tables_endpoint();
        let response = self.post(&endpoint, request).await?;
        created_table(response, request, &endpoint)
    }

    async fn list_views(&self, table_id: &str) -> Result<Vec<RemoteView>, ProvisionError> {
        let response = self.get(&format!("/meta/tables/{table_id}/views")).await?;
        Ok(parse_list(response))
    }

    async fn create_form(
        &self,
        table_id: &str,
        request: &CreateFormRequest,
    ) -> Result<RemoteView, ProvisionError> {
        let endpoint = format!("/meta/tables/{table_id}/forms");
        let response = self.post(&endpoint, request).await?;
        serde_json::from_value(response).map_err(|e| {
            ProvisionError::transport(endpoint, format!("Unexpected form view response: {e}"))
        })
    }
}

/// Interpret the create-table response
///
/// A bare string is taken as the new table id.
fn created_table(
    response: Value,
    request: &CreateTableRequest,
    endpoint: &str,
) -> Result<RemoteTable, ProvisionError> {
    match response {
        Value::String(id) => {
            tracing::warn!(endpoint, "Unexpected table creation response, using it as id");
            Ok(RemoteTable {
                id,
                table_name: request.table_name.clone(),
                title: Some(request.title.clone()),
            })
        }
        other => {
            let mut table: RemoteTable = serde_json::from_value(other).map_err(|e| {
                ProvisionError::transport(endpoint, format!("Unexpected table response: {e}"))
            })?;
            if table.table_name.is_empty() {
                table.table_name = request.table_name.clone();
            }
            Ok(table)
        }
    }
}
