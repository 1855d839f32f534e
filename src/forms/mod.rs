//! Form domain layer
//!
//! Static form type registry, column schemas and the NocoDB payloads
//! derived from them.

mod column;
mod columns;
mod form_type;
mod layout;

pub use column::ColumnSpec;
pub use columns::columns_for;
pub use form_type::FormType;
pub use layout::{CreateFormRequest, CreateTableRequest, FORM_VIEW_TYPE};
