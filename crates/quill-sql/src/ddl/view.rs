use crate::stmt::Statement;

use quill_core::schema::View;

/// `CREATE VIEW [name] AS <select>`, the select rendered with values
/// inlined as literals. Server dialect only.
#[derive(Debug, Clone)]
pub struct CreateView {
    pub view: View,
}

/// `ALTER VIEW`, emitted when the stored definition text differs from the
/// desired one.
#[derive(Debug, Clone)]
pub struct AlterView {
    pub view: View,
}

impl Statement {
    pub fn create_view(view: &View) -> Self {
        CreateView { view: view.clone() }.into()
    }

    pub fn alter_view(view: &View) -> Self {
        AlterView { view: view.clone() }.into()
    }
}

impl From<CreateView> for Statement {
    fn from(value: CreateView) -> Self {
        Self::CreateView(value)
    }
}

impl From<AlterView> for Statement {
    fn from(value: AlterView) -> Self {
        Self::AlterView(value)
    }
}
