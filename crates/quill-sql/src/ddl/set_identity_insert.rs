use crate::stmt::Statement;

/// `SET IDENTITY_INSERT [table] ON|OFF`, bracketing seed inserts that
/// supply explicit values for an identity column. Server dialect only.
#[derive(Debug, Clone)]
pub struct SetIdentityInsert {
    pub table: String,

    pub on: bool,
}

impl Statement {
    pub fn set_identity_insert(table: impl Into<String>, on: bool) -> Self {
        SetIdentityInsert {
            table: table.into(),
            on,
        }
        .into()
    }
}

impl From<SetIdentityInsert> for Statement {
    fn from(value: SetIdentityInsert) -> Self {
        Self::SetIdentityInsert(value)
    }
}
