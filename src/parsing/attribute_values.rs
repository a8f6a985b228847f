/// Separator between candidate values in a raw attribute field.
pub const VALUE_SEPARATOR: char = ',';

/// Parse the raw text of an attribute field into its candidate values.
///
/// Pieces are split on commas and trimmed; empty pieces are dropped. A field
/// that is blank after trimming yields no value at all.
pub fn parse_attribute_values(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    raw.split(VALUE_SEPARATOR)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .collect()
}
