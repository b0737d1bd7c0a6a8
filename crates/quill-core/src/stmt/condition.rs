use super::{Compare, ConditionGroup, Exists};

/// A WHERE/ON condition tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// A single field/operator/values comparison
    Compare(Compare),

    /// An ordered list of child conditions with AND/OR links
    Group(ConditionGroup),

    /// An EXISTS test over a subquery
    Exists(Exists),
}

impl Condition {
    /// Returns `true` when the tree contains no comparison at all, i.e.
    /// only (nested) empty groups. Updates and deletes refuse to render
    /// with an empty condition.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Compare(_) | Self::Exists(_) => false,
            Self::Group(group) => group
                .items
                .iter()
                .all(|item| item.condition.is_empty()),
        }
    }

    /// Flips the negation flag on the root node.
    pub fn negate(mut self) -> Self {
        match &mut self {
            Self::Compare(compare) => compare.negate = !compare.negate,
            Self::Group(group) => group.negate = !group.negate,
            Self::Exists(exists) => exists.negate = !exists.negate,
        }
        self
    }

    pub fn as_compare(&self) -> Option<&Compare> {
        match self {
            Self::Compare(compare) => Some(compare),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&ConditionGroup> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }
}
