//! Resources returned by the NocoDB meta API

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// A table of the base
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteTable {
    pub id: String,
    #[serde(default)]
    pub table_name: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// A view of a table (grid, form, gallery...)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteView {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub view_type: u8,
}

/// Extract the entries of a listing response
///
/// NocoDB answers either with a bare array or with `{ "list": [...] }`.
/// Entries that do not have the expected shape are skipped.
pub(crate) fn parse_list<T: DeserializeOwned>(value: Value) -> Vec<T> {
    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(mut object) => match object.remove("list") {
            Some(Value::Array(entries)) => entries,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_wrapped_list() {
        let value = json!({
            "list": [
                { "id": "m1", "table_name": "Stands_Festival", "title": "Stands Festival" },
                { "id": "m2", "table_name": "Other" }
            ],
            "pageInfo": { "totalRows": 2 }
        });

        let tables: Vec<RemoteTable> = parse_list(value);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].table_name, "Stands_Festival");
        assert_eq!(tables[1].title, None);
    }

    #[test]
    fn test_parse_bare_list() {
        let value = json!([{ "id": "v1", "title": "Proposez un stand", "type": 1 }]);
        let views: Vec<RemoteView> = parse_list(value);
        assert_eq!(
            views,
            vec![RemoteView {
                id: "v1".into(),
                title: "Proposez un stand".into(),
                view_type: 1,
            }]
        );
    }

    #[test]
    fn test_parse_skips_malformed_entries() {
        let value = json!({ "list": ["oops", { "title": "no id" }, { "id": "m3" }] });
        let tables: Vec<RemoteTable> = parse_list(value);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].id, "m3");
    }

    #[test]
    fn test_parse_unexpected_shape_is_empty() {
        let tables: Vec<RemoteTable> = parse_list(json!({ "msg": "nope" }));
        assert!(tables.is_empty());
        let tables: Vec<RemoteTable> = parse_list(json!("text"));
        assert!(tables.is_empty());
    }
}
