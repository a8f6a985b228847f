/// Name of the derived identifier column.
pub const RESULT_COLUMN: &str = "RESULT";

/// One combination, one value per attribute column.
pub type CombinationRow = Vec<String>;

/// Generated table: attribute columns plus the derived `RESULT` column.
///
/// Built once per generate action and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<CombinationRow>,
    results: Vec<String>,
}

impl ResultTable {
    /// Assemble a table from its parts.
    ///
    /// Returns `None` when a row does not match the column count or when the
    /// identifier count differs from the row count.
    pub fn new(
        columns: Vec<String>,
        rows: Vec<CombinationRow>,
        results: Vec<String>,
    ) -> Option<Self> {
        if rows.len() != results.len() || rows.iter().any(|row| row.len() != columns.len()) {
            return None;
        }
        Some(Self::from_parts(columns, rows, results))
    }

    pub(crate) fn from_parts(
        columns: Vec<String>,
        rows: Vec<CombinationRow>,
        results: Vec<String>,
    ) -> Self {
        debug_assert_eq!(rows.len(), results.len());
        Self {
            columns,
            rows,
            results,
        }
    }

    /// Attribute column names, without `RESULT`.
    pub fn attribute_columns(&self) -> &[String] {
        &self.columns
    }

    /// Full header: attribute columns followed by `RESULT`.
    pub fn header(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(RESULT_COLUMN))
            .collect()
    }

    pub fn rows(&self) -> &[CombinationRow] {
        &self.rows
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns including `RESULT`.
    pub fn column_count(&self) -> usize {
        self.columns.len() + 1
    }

    /// Iterate over full records: the row values followed by the identifier.
    pub fn records(&self) -> impl Iterator<Item = Vec<&str>> {
        self.rows.iter().zip(self.results.iter()).map(|(row, result)| {
            row.iter()
                .map(String::as_str)
                .chain(std::iter::once(result.as_str()))
                .collect()
        })
    }
}
