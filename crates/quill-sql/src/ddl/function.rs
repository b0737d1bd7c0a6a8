use crate::stmt::Statement;

use quill_core::schema::Function;

/// `CREATE FUNCTION [name] (@p type, …) RETURNS TABLE AS RETURN
/// (<select>)`. Server dialect only.
#[derive(Debug, Clone)]
pub struct CreateFunction {
    pub function: Function,
}

/// `ALTER FUNCTION`, same rendering with the keyword swapped.
#[derive(Debug, Clone)]
pub struct AlterFunction {
    pub function: Function,
}

impl Statement {
    pub fn create_function(function: &Function) -> Self {
        CreateFunction {
            function: function.clone(),
        }
        .into()
    }

    pub fn alter_function(function: &Function) -> Self {
        AlterFunction {
            function: function.clone(),
        }
        .into()
    }
}

impl From<CreateFunction> for Statement {
    fn from(value: CreateFunction) -> Self {
        Self::CreateFunction(value)
    }
}

impl From<AlterFunction> for Statement {
    fn from(value: AlterFunction) -> Self {
        Self::AlterFunction(value)
    }
}
