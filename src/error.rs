//! Error types for provisioning

use thiserror::Error;

/// Errors that can occur while provisioning festival forms
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// A required environment variable is missing or empty
    #[error("Configuration error: environment variable {var} is missing")]
    Configuration { var: String },

    /// The NocoDB API answered with a non-2xx status, or the request never completed
    #[error("NocoDB API error on {endpoint}{}: {message}", status_suffix(.status))]
    Remote {
        endpoint: String,
        status: Option<u16>,
        message: String,
    },

    /// Identifier outside stands / ateliers / conferences
    #[error("Unknown form type: {0}")]
    UnknownFormType(String),
}

impl ProvisionError {
    /// Build a remote error for a request that got an HTTP response
    pub fn remote(endpoint: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::Remote {
            endpoint: endpoint.into(),
            status: Some(status),
            message: message.into(),
        }
    }

    /// Build a remote error for a transport or decoding failure
    pub fn transport(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            endpoint: endpoint.into(),
            status: None,
            message: message.into(),
        }
    }

    /// Whether NocoDB refused a creation because the resource already exists
    pub fn is_already_exists(&self) -> bool {
        match self {
            Self::Remote {
                status, message, ..
            } => *status == Some(409) || message.to_lowercase().contains("already exists"),
            _ => false,
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({s})")).unwrap_or_default()
}
