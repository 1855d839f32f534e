//! Trait abstraction for the NocoDB client to enable mocking in tests

use super::types::{RemoteTable, RemoteView};
use crate::error::ProvisionError;
use crate::forms::{CreateFormRequest, CreateTableRequest};
use async_trait::async_trait;

/// Meta API operations used to provision tables and form views
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NocoDbApi: Send + Sync {
    /// List the tables of the configured base
    async fn list_tables(&self) -> Result<Vec<RemoteTable>, ProvisionError>;

    /// Create a table with all its columns in one call
    async fn create_table(
        &self,
        request: &CreateTableRequest,
    ) -> Result<RemoteTable, ProvisionError>;

    /// List the views of a table
    async fn list_views(&self, table_id: &str) -> Result<Vec<RemoteView>, ProvisionError>;

    /// Create a form view bound to a table
    async fn create_form(
        &self,
        table_id: &str,
        request: &CreateFormRequest,
    ) -> Result<RemoteView, ProvisionError>;
}
