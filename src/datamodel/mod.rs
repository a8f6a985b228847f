pub mod attribute_set;
pub mod prefix;
pub mod result_table;

pub use attribute_set::{Attribute, AttributeSet};
pub use prefix::Prefix;
pub use result_table::{CombinationRow, RESULT_COLUMN, ResultTable};
