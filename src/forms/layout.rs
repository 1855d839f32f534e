//! Request payloads derived from a form type and its schema

use super::column::ColumnSpec;
use super::columns::CONTACT_COLUMNS;
use super::form_type::{BannerImage, FormType};
use serde::Serialize;
use serde_json::Value;

/// NocoDB view type code for form views
pub const FORM_VIEW_TYPE: u8 = 1;

const SUCCESS_MESSAGE: &str = "Merci ! Les organisateurs vous communiqueront les infos rapidement.";

/// Body of `POST /meta/bases/{base_id}/tables`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTableRequest {
    pub table_name: String,
    pub title: String,
    pub columns: Vec<Value>,
}

impl CreateTableRequest {
    pub fn new(form_type: FormType, columns: &[ColumnSpec]) -> Self {
        let config = form_type.config();
        Self {
            table_name: config.table_name.to_string(),
            title: config.title.to_string(),
            columns: columns.iter().map(ColumnSpec::to_table_column).collect(),
        }
    }
}

/// Per-column presentation in a form view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormColumn {
    pub fk_column_id: String,
    pub description: Option<String>,
    pub help: Option<String>,
    pub label: String,
    pub meta: Option<Value>,
    /// 1-based position on the form
    pub order: usize,
    pub required: u8,
    pub show: u8,
}

/// Titled group of form fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSection {
    pub title: String,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormMeta {
    pub sections: Vec<FormSection>,
}

/// Body of `POST /meta/tables/{table_id}/forms`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateFormRequest {
    pub title: String,
    #[serde(rename = "type")]
    pub view_type: u8,
    pub show: bool,
    pub banner_image_url: BannerImage,
    pub columns: Vec<FormColumn>,
    pub show_blank_form: bool,
    pub submit_another_form: bool,
    pub success_msg: String,
    pub heading: String,
    pub subheading: String,
    #[serde(rename = "helpText")]
    pub help_text: String,
    pub meta: FormMeta,
}

impl CreateFormRequest {
    pub fn new(form_type: FormType, columns: &[ColumnSpec]) -> Self {
        let config = form_type.config();

        let form_columns = columns
            .iter()
            .enumerate()
            .map(|(index, column)| FormColumn {
                fk_column_id: column.name.clone(),
                description: column.help.clone(),
                help: column.help.clone(),
                label: column.title.clone(),
                meta: None,
                order: index + 1,
                required: u8::from(column.required),
                show: 1,
            })
            .collect();

        let (contact, proposal): (Vec<&ColumnSpec>, Vec<&ColumnSpec>) = columns
            .iter()
            .partition(|column| CONTACT_COLUMNS.contains(&column.name.as_str()));

        let sections = vec![
            FormSection {
                title: config.sections.about_you.to_string(),
                fields: contact.iter().map(|c| c.name.clone()).collect(),
            },
            FormSection {
                title: config.sections.about_proposal.to_string(),
                fields: proposal.iter().map(|c| c.name.clone()).collect(),
            },
        ];

        Self {
            title: config.form_title.to_string(),
            view_type: FORM_VIEW_TYPE,
            show: true,
            banner_image_url: config.banner_image.clone(),
            columns: form_columns,
            show_blank_form: true,
            submit_another_form: false,
            success_msg: SUCCESS_MESSAGE.to_string(),
            heading: config.form_title.to_string(),
            subheading: config.description.to_string(),
            help_text: config.help_text.to_string(),
            meta: FormMeta { sections },
        }
    }
}
