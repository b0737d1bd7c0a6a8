use super::ValueType;
use crate::stmt::Statement;

/// A desired stored procedure. Server dialect only.
#[derive(Debug, Clone)]
pub struct Procedure {
    pub name: String,

    pub params: Vec<RoutineParam>,

    pub body: RoutineBody,
}

/// One declared parameter of a procedure or function.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutineParam {
    /// Declared without the leading `@`; the serializer adds it.
    pub name: String,

    pub ty: ValueType,

    pub max_length: Option<u32>,
}

/// The body of a stored procedure: either a statement rendered with
/// parameters substituted as literals, or hand-written SQL text kept
/// verbatim.
#[derive(Debug, Clone)]
pub enum RoutineBody {
    Statement(Box<Statement>),
    Raw(String),
}

impl Procedure {
    pub fn new(name: impl Into<String>, body: RoutineBody) -> Self {
        Self {
            name: name.into(),
            params: vec![],
            body,
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

    pub fn string_param(mut self, name: impl Into<String>, max_length: u32) -> Self {
        self.params.push(RoutineParam {
            name: name.into(),
            ty: ValueType::String,
            max_length: Some(max_length),
        });
        self
    }
}

impl RoutineBody {
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    pub fn statement(statement: impl Into<Statement>) -> Self {
        Self::Statement(Box::new(statement.into()))
    }
}
