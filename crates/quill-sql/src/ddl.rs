//! Schema-change statements.
//!
//! These cover exactly what the migrators emit; they are serialized through
//! the same formatter as the query statements and never carry placeholders.

mod add_column;
pub use add_column::AddColumn;

mod add_default;
pub use add_default::AddDefault;

mod add_foreign_key;
pub use add_foreign_key::AddForeignKey;

mod add_primary_key;
pub use add_primary_key::AddPrimaryKey;

mod alter_column;
pub use alter_column::AlterColumn;

mod create_table;
pub use create_table::CreateTable;

mod drop_constraint;
pub use drop_constraint::DropConstraint;

mod function;
pub use function::{AlterFunction, CreateFunction};

mod procedure;
pub use procedure::{AlterProcedure, CreateProcedure};

mod set_identity_insert;
pub use set_identity_insert::SetIdentityInsert;

mod view;
pub use view::{AlterView, CreateView};
