use super::Condition;

/// How a group item connects to the item after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Link {
    #[default]
    And,
    Or,
}

/// An ordered list of child conditions.
///
/// Each item carries the link joining it to the NEXT item; the last item's
/// link is never rendered. `a && (b && c)` and `(a && b) && c` therefore
/// differ in tree shape but render with identical meaning.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConditionGroup {
    pub items: Vec<ConditionItem>,

    /// Negates the whole group: `NOT (…)`.
    pub negate: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionItem {
    pub condition: Condition,

    /// Link to the next item in the group.
    pub link: Link,
}

impl ConditionGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, condition: Condition, link: Link) {
        self.items.push(ConditionItem { condition, link });
    }
}

impl Condition {
    pub fn and(left: Condition, right: Condition) -> Condition {
        Condition::group([left, right], Link::And)
    }

    pub fn or(left: Condition, right: Condition) -> Condition {
        Condition::group([left, right], Link::Or)
    }

    /// Groups conditions under one link kind.
    pub fn group(conditions: impl IntoIterator<Item = Condition>, link: Link) -> Condition {
        let mut group = ConditionGroup::new();
        for condition in conditions {
            group.push(condition, link);
        }
        Condition::Group(group)
    }
}

impl From<ConditionGroup> for Condition {
    fn from(value: ConditionGroup) -> Self {
        Self::Group(value)
    }
}
