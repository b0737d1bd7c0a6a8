mod column;
pub use column::Column;

mod function;
pub use function::Function;

mod procedure;
pub use procedure::{Procedure, RoutineBody, RoutineParam};

mod relationship;
pub use relationship::Relationship;

mod schema;
pub use schema::Schema;

mod table;
pub use table::Table;

mod ty;
pub use ty::ValueType;

mod view;
pub use view::View;
