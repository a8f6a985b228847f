//! Attribute inputs shared by the tests.

use crate::datamodel::AttributeSet;
use crate::parsing::parse_attribute_values;
use crate::session::field_label;

/// Two attributes of two values each: "A,B" and "X,Y".
pub const TWO_BY_TWO: [&str; 2] = ["A,B", "X,Y"];

/// A single attribute with padded values.
pub const PADDED_COLORS: &str = "Red, Blue , Green";

/// Build an attribute set the way the fields would, labeling them `Attribute N`.
pub fn attribute_set_from_texts(texts: &[&str]) -> AttributeSet {
    texts
        .iter()
        .enumerate()
        .map(|(idx, text)| (field_label(idx + 1), parse_attribute_values(text)))
        .collect()
}

/// Build an attribute set from explicit names and value lists.
pub fn attribute_set(attributes: &[(&str, &[&str])]) -> AttributeSet {
    attributes
        .iter()
        .map(|(name, values)| {
            (
                name.to_string(),
                values.iter().map(|value| value.to_string()).collect(),
            )
        })
        .collect()
}
