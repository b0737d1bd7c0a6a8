use crate::ddl::{
    AddColumn, AddDefault, AddForeignKey, AddPrimaryKey, AlterColumn, AlterFunction,
    AlterProcedure, AlterView, CreateFunction, CreateProcedure, CreateTable, CreateView,
    DropConstraint, SetIdentityInsert,
};

pub use quill_core::stmt::*;

/// Any statement a dialect serializer can render: the query statements
/// plus the schema-change statements the migrators emit.
#[derive(Debug, Clone)]
pub enum Statement {
    Delete(Delete),
    Insert(Insert),
    Select(Select),
    Update(Update),
    CreateTable(CreateTable),
    AddColumn(AddColumn),
    AlterColumn(AlterColumn),
    AddPrimaryKey(AddPrimaryKey),
    DropConstraint(DropConstraint),
    AddDefault(AddDefault),
    AddForeignKey(AddForeignKey),
    SetIdentityInsert(SetIdentityInsert),
    CreateView(CreateView),
    AlterView(AlterView),
    CreateProcedure(CreateProcedure),
    AlterProcedure(AlterProcedure),
    CreateFunction(CreateFunction),
    AlterFunction(AlterFunction),
}

impl From<quill_core::stmt::Statement> for Statement {
    fn from(value: quill_core::stmt::Statement) -> Self {
        use quill_core::stmt::Statement::*;

        match value {
            Delete(stmt) => Self::Delete(stmt),
            Insert(stmt) => Self::Insert(stmt),
            Select(stmt) => Self::Select(stmt),
            Update(stmt) => Self::Update(stmt),
        }
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
