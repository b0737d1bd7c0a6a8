use super::{RoutineParam, ValueType};
use crate::stmt::Select;

/// A desired table-valued function, rendered
/// `CREATE FUNCTION … RETURNS TABLE AS RETURN (…)`. Server dialect only.
#[derive(Debug, Clone)]
pub struct Function {
    pub name: String,

    pub params: Vec<RoutineParam>,

    pub select: Select,
}

impl Function {
    pub fn new(name: impl Into<String>, select: Select) -> Self {
        Self {
            name: name.into(),
            params: vec![],
            select,
        }
    }

    pub fn param(mut self, name: impl Into<String>, ty: ValueType) -> Self {
        self.params.push(RoutineParam {
            name: name.into(),
            ty,
            max_length: None,
        });
        self
    }
}
