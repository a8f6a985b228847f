pub mod attribute_values;

pub use attribute_values::parse_attribute_values;
