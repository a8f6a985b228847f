//! Turn an attribute set into the final combination table.

pub mod engine;
pub mod identifier;

pub use engine::{
    Combinations, MAX_COMBINATIONS, cartesian_product, generate_combinations,
    generate_combinations_with_limit, product_len,
};
pub use identifier::{append_result_column, format_identifier};

use crate::datamodel::{AttributeSet, Prefix, ResultTable};
use crate::error::CombinationError;

/// Run the whole generation: cross product, then the `RESULT` column.
///
/// Either a complete table is produced or nothing is.
pub fn generate_table(
    attributes: &AttributeSet,
    prefix: &Prefix,
) -> Result<ResultTable, CombinationError> {
    let combinations = generate_combinations(attributes)?;
    Ok(append_result_column(combinations, prefix))
}
