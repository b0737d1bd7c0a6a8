use super::{Condition, Select};

/// An EXISTS test over a subquery, negatable.
#[derive(Debug, Clone, PartialEq)]
pub struct Exists {
    pub query: Box<Select>,

    pub negate: bool,
}

impl Exists {
    pub fn new(query: Select) -> Self {
        Self {
            query: Box::new(query),
            negate: false,
        }
    }
}

impl Condition {
    pub fn exists(query: Select) -> Self {
        Exists::new(query).into()
    }

    pub fn not_exists(query: Select) -> Self {
        Condition::exists(query).negate()
    }
}

impl From<Exists> for Condition {
    fn from(value: Exists) -> Self {
        Self::Exists(value)
    }
}
