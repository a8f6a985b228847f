/// One named attribute and its candidate values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub values: Vec<String>,
}

/// Ordered mapping from attribute name to its candidate values.
///
/// Insertion order is the column order of the generated table. Attributes
/// without any value are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    attributes: Vec<Attribute>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute.
    ///
    /// Replacing keeps the original position. An empty value list removes the
    /// attribute instead, so the set only ever holds attributes with values.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<String>) {
        let name = name.into();
        let position = self.attributes.iter().position(|attr| attr.name == name);

        match (position, values.is_empty()) {
            (Some(idx), true) => {
                self.attributes.remove(idx);
            }
            (Some(idx), false) => self.attributes[idx].values = values,
            (None, true) => {}
            (None, false) => self.attributes.push(Attribute { name, values }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.values.as_slice())
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.attributes.iter().map(|attr| attr.name.clone()).collect()
    }

    pub fn value_lists(&self) -> Vec<&[String]> {
        self.attributes
            .iter()
            .map(|attr| attr.values.as_slice())
            .collect()
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<String>)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (N, Vec<String>)>>(iter: I) -> Self {
        let mut set = AttributeSet::new();
        for (name, values) in iter {
            set.insert(name, values);
        }
        set
    }
}
