use crate::stmt::Statement;

use quill_core::schema::Procedure;

/// `CREATE PROCEDURE [name] @p type, … AS BEGIN <body> END`. Server
/// dialect only.
#[derive(Debug, Clone)]
pub struct CreateProcedure {
    pub procedure: Procedure,
}

/// `ALTER PROCEDURE`, same rendering with the keyword swapped.
#[derive(Debug, Clone)]
pub struct AlterProcedure {
    pub procedure: Procedure,
}

impl Statement {
    pub fn create_procedure(procedure: &Procedure) -> Self {
        CreateProcedure {
            procedure: procedure.clone(),
        }
        .into()
    }

    pub fn alter_procedure(procedure: &Procedure) -> Self {
        AlterProcedure {
            procedure: procedure.clone(),
        }
        .into()
    }
}

impl From<CreateProcedure> for Statement {
    fn from(value: CreateProcedure) -> Self {
        Self::CreateProcedure(value)
    }
}

impl From<AlterProcedure> for Statement {
    fn from(value: AlterProcedure) -> Self {
        Self::AlterProcedure(value)
    }
}
