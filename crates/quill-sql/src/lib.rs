pub mod catalog;
pub use catalog::Catalog;

pub mod ddl;

pub mod migrate;
pub use migrate::MigrationMode;

pub mod serializer;
pub use serializer::{Command, NoParams, Params, Placeholder, Serializer};

pub mod stmt;
pub use stmt::Statement;

pub use quill_core::{Error, Result};
