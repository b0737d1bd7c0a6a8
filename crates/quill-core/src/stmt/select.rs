use super::{Condition, Field, Join, OrderBy, Operand, Shape, Source, Statement, TableRef};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub distinct: bool,

    /// Row limit: `LIMIT n` or `TOP (n)` depending on dialect.
    pub limit: Option<u64>,

    /// Whole-source field groups, rendered `alias.*` before the explicit
    /// fields.
    pub wildcards: Vec<TableRef>,

    /// Explicit projected fields.
    pub fields: Vec<Field>,

    /// The FROM part.
    pub source: Source,

    /// Joins whose left operand is the preceding FROM item.
    pub joins: Vec<Join>,

    /// WHERE clause.
    pub filter: Option<Condition>,

    pub group_by: Vec<Operand>,

    pub order_by: Vec<OrderBy>,

    /// Pending rewrite into a scalar existence/universality/membership
    /// test. Resolved exactly once by the serializer.
    pub shape: Option<Shape>,
}

impl Select {
    pub fn new(source: impl Into<Source>) -> Self {
        Self {
            distinct: false,
            limit: None,
            wildcards: vec![],
            fields: vec![],
            source: source.into(),
            joins: vec![],
            filter: None,
            group_by: vec![],
            order_by: vec![],
            shape: None,
        }
    }

    pub fn field(mut self, field: impl Into<Field>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn wildcard(mut self, table: impl Into<TableRef>) -> Self {
        self.wildcards.push(table.into());
        self
    }

    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    pub fn filter(mut self, condition: Condition) -> Self {
        self.filter = Some(condition);
        self
    }

    /// ANDs a condition onto the existing filter.
    pub fn add_filter(&mut self, condition: Condition) {
        self.filter = Some(match self.filter.take() {
            Some(existing) => Condition::and(existing, condition),
            None => condition,
        });
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by.push(order_by);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
