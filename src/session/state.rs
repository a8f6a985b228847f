use super::attribute_fields::{AttributeFields, DEFAULT_FIELD_COUNT, DEFAULT_MAX_FIELD_COUNT};
use crate::combinations::generate_table;
use crate::datamodel::{Prefix, ResultTable};
use crate::error::CombinationError;
use crate::exporters::XlsxConverter;

/// Default prefix of a new session.
pub const DEFAULT_PREFIX: &str = "BSB";

/// Defaults applied to every new session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDefaults {
    pub field_count: usize,
    pub max_field_count: usize,
    pub prefix: String,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            field_count: DEFAULT_FIELD_COUNT,
            max_field_count: DEFAULT_MAX_FIELD_COUNT,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// Everything one interactive session remembers between actions.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub fields: AttributeFields,
    /// Raw prefix input, trimmed only when generating.
    pub prefix: String,
    result: Option<ResultTable>,
}

impl SessionState {
    pub fn new(defaults: &SessionDefaults) -> Self {
        Self {
            fields: AttributeFields::with_max_count(defaults.field_count, defaults.max_field_count),
            prefix: defaults.prefix.clone(),
            result: None,
        }
    }

    /// Last successfully generated table, if the last generation succeeded.
    pub fn result(&self) -> Option<&ResultTable> {
        self.result.as_ref()
    }

    pub fn download_available(&self) -> bool {
        self.result.is_some()
    }

    /// Rebuild the attribute set from the fields and generate a fresh table.
    ///
    /// The table is only kept when it can be exported, so a download offered
    /// afterwards does not hit the worksheet limits. A failed generation
    /// clears the previous table.
    pub fn generate(&mut self) -> Result<&ResultTable, CombinationError> {
        self.result = None;
        let attributes = self.fields.collect();
        let table = generate_table(&attributes, &Prefix::new(&self.prefix))?;
        XlsxConverter::check_table(&table)?;
        Ok(&*self.result.insert(table))
    }
}
