//! Command-line arguments

use crate::forms::FormType;
use crate::error::ProvisionError;
use clap::Parser;

/// Provision the festival call-for-participation tables and forms in NocoDB
#[derive(Parser, Debug, Clone)]
#[command(name = "festival-forms", version, about, long_about = None)]
pub struct Cli {
    /// Form types to provision (default: all of them)
    #[arg(value_name = "FORM_TYPE", value_parser = parse_form_type)]
    pub form_types: Vec<FormType>,
}

/// Parse a form type identifier (stands, ateliers, conferences)
fn parse_form_type(s: &str) -> Result<FormType, ProvisionError> {
    s.parse()
}

impl Cli {
    /// Selected form types, deduplicated, in provisioning order
    pub fn selected(&self) -> Vec<FormType> {
        if self.form_types.is_empty() {
            return FormType::ALL.to_vec();
        }
        FormType::ALL
            .into_iter()
            .filter(|form_type| self.form_types.contains(form_type))
            .collect()
    }
}
