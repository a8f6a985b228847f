use crate::datamodel::AttributeSet;
use crate::error::CombinationError;
use crate::parsing::parse_attribute_values;

/// Default number of attribute fields of a new session.
pub const DEFAULT_FIELD_COUNT: usize = 3;
/// Default cap on the number of attribute fields of a session.
pub const DEFAULT_MAX_FIELD_COUNT: usize = 256;

/// Label of the field at a 1-based index.
pub fn field_label(index: usize) -> String {
    format!("Attribute {}", index)
}

/// The dynamic list of raw attribute fields of a session.
///
/// There is always at least one field, and never more than `max_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeFields {
    texts: Vec<String>,
    max_count: usize,
}

impl Default for AttributeFields {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_COUNT)
    }
}

impl AttributeFields {
    pub fn new(count: usize) -> Self {
        Self::with_max_count(count, DEFAULT_MAX_FIELD_COUNT)
    }

    /// `count` is clamped to `1..=max_count`.
    pub fn with_max_count(count: usize, max_count: usize) -> Self {
        let max_count = max_count.max(1);
        Self {
            texts: vec![String::new(); count.clamp(1, max_count)],
            max_count,
        }
    }

    pub fn count(&self) -> usize {
        self.texts.len()
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Append an empty field.
    pub fn add_field(&mut self) -> Result<(), CombinationError> {
        if self.texts.len() >= self.max_count {
            return Err(CombinationError::TooManyFields {
                limit: self.max_count,
            });
        }
        self.texts.push(String::new());
        Ok(())
    }

    /// Drop the last field and its text. Returns false when only one field is left.
    pub fn remove_field(&mut self) -> bool {
        if self.texts.len() <= 1 {
            return false;
        }
        self.texts.pop();
        true
    }

    /// Replace the raw text of the field at a 1-based index.
    ///
    /// Returns false when no such field exists.
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) -> bool {
        match index.checked_sub(1).and_then(|idx| self.texts.get_mut(idx)) {
            Some(slot) => {
                *slot = text.into();
                true
            }
            None => false,
        }
    }

    pub fn text(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|idx| self.texts.get(idx))
            .map(String::as_str)
    }

    /// Iterate over `(label, raw text)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (String, &str)> {
        self.texts
            .iter()
            .enumerate()
            .map(|(idx, text)| (field_label(idx + 1), text.as_str()))
    }

    /// Parse every field and keep the ones with at least one value.
    pub fn collect(&self) -> AttributeSet {
        self.iter()
            .map(|(label, text)| (label, parse_attribute_values(text)))
            .collect()
    }
}
