use crate::datamodel::ResultTable;
use crate::session::SessionState;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldView {
    /// Field label, `Attribute N`.
    pub label: String,
    /// Raw comma-separated text.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionView {
    pub session_id: Uuid,
    pub field_count: usize,
    pub fields: Vec<FieldView>,
    pub prefix: String,
    pub download_available: bool,
    /// Rows of the last generated table.
    pub row_count: Option<usize>,
}

impl SessionView {
    pub fn new(session_id: Uuid, state: &SessionState) -> Self {
        Self {
            session_id,
            field_count: state.fields.count(),
            fields: state
                .fields
                .iter()
                .map(|(label, text)| FieldView {
                    label,
                    text: text.to_string(),
                })
                .collect(),
            prefix: state.prefix.clone(),
            download_available: state.download_available(),
            row_count: state.result().map(ResultTable::row_count),
        }
    }
}

/// A result table as displayed: every column including `RESULT`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl From<&ResultTable> for TableView {
    fn from(table: &ResultTable) -> Self {
        Self {
            columns: table.header().into_iter().map(ToString::to_string).collect(),
            rows: table
                .records()
                .map(|record| record.into_iter().map(ToString::to_string).collect())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerationView {
    pub row_count: usize,
    pub message: String,
    pub table: TableView,
}

impl GenerationView {
    pub fn new(table: TableView) -> Self {
        let row_count = table.rows.len();
        Self {
            row_count,
            message: format!("{} combinations generated.", row_count),
            table,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldTextRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PrefixRequest {
    pub prefix: String,
}
