//! Idempotent provisioning of festival tables and form views
//!
//! For each form type the table is ensured first, then the form view bound
//! to it. A table that already exists is reused as is: its columns are not
//! compared with the schema. A failure of the form view step does not undo
//! the table; the table id stands in for the form id instead.

use crate::error::ProvisionError;
use crate::forms::{
    columns_for, ColumnSpec, CreateFormRequest, CreateTableRequest, FormType, FORM_VIEW_TYPE,
};
use crate::nocodb::{NocoDbApi, RemoteTable, RemoteView};
use std::collections::BTreeMap;

/// Outcome of provisioning one form type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionResult {
    pub table_id: String,
    pub form_id: String,
    pub form_url: String,
    /// Set when the form view step failed and `form_id` is the table id
    pub form_fallback: bool,
}

/// Public URL of a form view
pub fn form_url(base_url: &str, form_id: &str) -> String {
    format!("{base_url}/dashboard/#/nc/form/{form_id}")
}

/// Drives the ensure-exists operations against a NocoDB base
pub struct Provisioner<A> {
    api: A,
    base_url: String,
}

impl<A: NocoDbApi> Provisioner<A> {
    pub fn new(api: A, base_url: impl Into<String>) -> Self {
        Self {
            api,
            base_url: base_url.into(),
        }
    }

    /// Provision every given form type, skipping the ones that fail
    pub async fn provision_all(
        &self,
        form_types: &[FormType],
    ) -> BTreeMap<FormType, ProvisionResult> {
        let mut results = BTreeMap::new();

        for &form_type in form_types {
            tracing::info!(form_type = %form_type, "Provisioning form type");
            match self.provision(form_type).await {
                Ok(result) => {
                    tracing::info!(form_type = %form_type, "Form type provisioned");
                    results.insert(form_type, result);
                }
                Err(e) => {
                    tracing::error!(form_type = %form_type, error = %e, "Failed to provision form type");
                }
            }
        }

        results
    }

    /// Ensure the table and the form view of one form type
    pub async fn provision(&self, form_type: FormType) -> Result<ProvisionResult, ProvisionError> {
        let columns = columns_for(form_type);

        let table = self.ensure_table(form_type, &columns).await?;
        tracing::info!(form_type = %form_type, table_id = %table.id, "Table ready");

        let (form_id, form_fallback) = match self.ensure_form(form_type, &table, &columns).await {
            Ok(view) => (view.id, false),
            Err(e) => {
                tracing::warn!(
                    form_type = %form_type,
                    error = %e,
                    "Form view step failed, using the table id as form id"
                );
                (table.id.clone(), true)
            }
        };

        let url = form_url(&self.base_url, &form_id);
        tracing::info!(form_type = %form_type, url = %url, "Form URL");

        Ok(ProvisionResult {
            table_id: table.id,
            form_id,
            form_url: url,
            form_fallback,
        })
    }

    /// Return the table of this form type, creating it if absent
    pub async fn ensure_table(
        &self,
        form_type: FormType,
        columns: &[ColumnSpec],
    ) -> Result<RemoteTable, ProvisionError> {
        let table_name = form_type.config().table_name;
        tracing::info!(table = table_name, "Ensuring table");

        match self.find_table(table_name).await {
            Ok(Some(table)) => {
                tracing::info!(table = table_name, table_id = %table.id, "Table already exists");
                return Ok(table);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(table = table_name, error = %e, "Could not check whether the table exists");
            }
        }

        let request = CreateTableRequest::new(form_type, columns);
        match self.api.create_table(&request).await {
            Ok(table) => {
                tracing::info!(
                    table = table_name,
                    title = table.title.as_deref().unwrap_or_default(),
                    table_id = %table.id,
                    "Table created"
                );
                Ok(table)
            }
            Err(err) if err.is_already_exists() => {
                tracing::info!(table = table_name, "Table already exists, fetching it");
                match self.find_table(table_name).await {
                    Ok(Some(table)) => Ok(table),
                    Ok(None) => Err(err),
                    Err(inner) => {
                        tracing::error!(table = table_name, error = %inner, "Could not fetch the existing table");
                        Err(err)
                    }
                }
            }
            Err(err) => Err(err),
        }
    }

    /// Return the form view of this form type on `table`, creating it if absent
    pub async fn ensure_form(
        &self,
        form_type: FormType,
        table: &RemoteTable,
        columns: &[ColumnSpec],
    ) -> Result<RemoteView, ProvisionError> {
        let form_title = form_type.config().form_title;
        tracing::info!(form = form_title, table_id = %table.id, "Ensuring form view");

        match self.api.list_views(&table.id).await {
            Ok(views) => {
                if let Some(view) = views
                    .into_iter()
                    .find(|v| v.title == form_title && v.view_type == FORM_VIEW_TYPE)
                {
                    tracing::info!(form = form_title, form_id = %view.id, "Form view already exists");
                    return Ok(view);
                }
            }
            Err(e) => {
                tracing::warn!(form = form_title, error = %e, "Could not check whether the form view exists");
            }
        }

        let request = CreateFormRequest::new(form_type, columns);
        let view = self.api.create_form(&table.id, &request).await?;
        tracing::info!(form = form_title, form_id = %view.id, "Form view created");
        Ok(view)
    }

    async fn find_table(&self, table_name: &str) -> Result<Option<RemoteTable>, ProvisionError> {
        let tables = self.api.list_tables().await?;
        Ok(tables.into_iter().find(|t| t.table_name == table_name))
    }
}
