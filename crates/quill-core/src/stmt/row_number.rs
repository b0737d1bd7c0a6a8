use super::OrderBy;

/// `ROW_NUMBER() OVER (ORDER BY …)`, used for offset/paging emulation.
#[derive(Debug, Clone, PartialEq)]
pub struct RowNumber {
    pub order_by: Vec<OrderBy>,
}

impl RowNumber {
    pub fn new(order_by: impl IntoIterator<Item = OrderBy>) -> Self {
        Self {
            order_by: order_by.into_iter().collect(),
        }
    }
}
