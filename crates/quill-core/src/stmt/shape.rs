use super::Operand;

/// A pending rewrite of a whole select into a scalar test.
///
/// At most one shape is ever active, by construction. The serializer
/// resolves it exactly once (wrapping the statement in the corresponding
/// `CASE WHEN …` form) and renders the inner select with the shape cleared.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Existence test: `CASE WHEN EXISTS (…) THEN 1 ELSE 0 END`.
    Any,

    /// Universality test: the filter is negated and the whole statement
    /// wrapped in `CASE WHEN NOT EXISTS (…) THEN 1 ELSE 0 END`, which is
    /// vacuously true over an empty source.
    All,

    /// Membership test for the carried probe value:
    /// `CASE WHEN probe IN (…) THEN 1 ELSE 0 END`.
    Contains(Operand),
}
