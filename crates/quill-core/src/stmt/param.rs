use super::{Operand, Value};

/// A named parameter carrying its bound value.
///
/// The name is a construction-time convenience only. Final parameter
/// identity is the ordinal the serializer assigns from the deduplicated
/// value list, so two params with different names but equal values share
/// one placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,

    pub value: Value,
}

impl Param {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl From<Param> for Operand {
    fn from(value: Param) -> Self {
        Self::Param(value)
    }
}
