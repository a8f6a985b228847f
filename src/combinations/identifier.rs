use super::engine::Combinations;
use crate::datamodel::{Prefix, ResultTable};

/// Separator between identifier segments.
pub const IDENTIFIER_SEPARATOR: &str = "-";

/// Build the identifier of one combination.
///
/// Values are joined with `-` in column order; a non-empty prefix becomes the
/// first segment.
pub fn format_identifier<S: AsRef<str>>(values: &[S], prefix: &Prefix) -> String {
    let joined = values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(IDENTIFIER_SEPARATOR);

    if prefix.is_empty() {
        joined
    } else {
        format!("{}{}{}", prefix.as_str(), IDENTIFIER_SEPARATOR, joined)
    }
}

/// Derive the `RESULT` column and assemble the final table.
pub fn append_result_column(combinations: Combinations, prefix: &Prefix) -> ResultTable {
    let Combinations { columns, rows } = combinations;
    let results = rows
        .iter()
        .map(|row| format_identifier(row, prefix))
        .collect();

    ResultTable::from_parts(columns, rows, results)
}
