//! Column descriptors

use serde_json::{json, Value};

/// Semantic type of a column, as NocoDB understands it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    ShortText,
    LongText,
    Email,
    Phone,
    Url,
    SingleSelect,
    Attachment,
}

impl ColumnType {
    /// NocoDB `uidt` value
    pub fn uidt(&self) -> &'static str {
        match self {
            Self::ShortText => "SingleLineText",
            Self::LongText => "LongText",
            Self::Email => "Email",
            Self::Phone => "PhoneNumber",
            Self::Url => "URL",
            Self::SingleSelect => "SingleSelect",
            Self::Attachment => "Attachment",
        }
    }
}

/// A single table column with its form presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Database column name
    pub name: String,
    /// Label shown on the form
    pub title: String,
    pub column_type: ColumnType,
    pub required: bool,
    pub help: Option<String>,
    pub placeholder: Option<String>,
    /// Choices for single-select columns
    pub options: Vec<String>,
}

impl ColumnSpec {
    /// Create a new column of the given type
    pub fn new(name: &str, title: &str, column_type: ColumnType) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            column_type,
            required: false,
            help: None,
            placeholder: None,
            options: Vec::new(),
        }
    }

    /// Create a new single-select column
    pub fn select(name: &str, title: &str, options: &[&str]) -> Self {
        Self {
            options: options.iter().map(|o| o.to_string()).collect(),
            ..Self::new(name, title, ColumnType::SingleSelect)
        }
    }

    /// Mark the column as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach help text
    pub fn help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }

    /// Attach a placeholder
    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    /// Column definition as sent to the create-table endpoint
    pub fn to_table_column(&self) -> Value {
        let mut column = json!({
            "title": self.title,
            "column_name": self.name,
            "uidt": self.column_type.uidt(),
            "rqd": self.required,
            "description": Value::Null,
        });

        if self.help.is_some() || self.placeholder.is_some() {
            let mut meta = serde_json::Map::new();
            if let Some(help) = &self.help {
                meta.insert("help".into(), json!(help));
            }
            if let Some(placeholder) = &self.placeholder {
                meta.insert("placeholder".into(), json!(placeholder));
            }
            column["meta"] = Value::Object(meta);
        }

        if self.column_type == ColumnType::SingleSelect {
            let options: Vec<Value> = self
                .options
                .iter()
                .map(|title| json!({ "title": title }))
                .collect();
            column["colOptions"] = json!({ "options": options });
        }

        column
    }
}
