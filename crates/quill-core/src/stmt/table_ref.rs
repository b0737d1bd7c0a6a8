/// A table reference: name plus optional alias.
///
/// Names are stored raw; quoting and escaping belong to the dialect
/// serializer alone.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRef {
    pub name: String,

    /// Alias used to qualify columns when the table participates in joins
    /// or appears more than once.
    pub alias: Option<String>,
}

impl TableRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }

    /// The name columns should qualify themselves with: the alias when one
    /// is set, the table name otherwise.
    pub fn qualifier(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

impl From<&str> for TableRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TableRef {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
