use super::Column;
use crate::stmt::Value;

/// A desired database table.
#[derive(Debug, Clone)]
pub struct Table {
    /// Name of the table
    pub name: String,

    /// The table's columns, in declaration order
    pub columns: Vec<Column>,

    /// Name of the primary key column, if the table has one
    pub primary_key: Option<String>,

    /// Literal rows that must exist after migration, each ordered like
    /// `columns`. Inserted additively, never updated.
    pub seed: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: vec![],
            primary_key: None,
            seed: vec![],
        }
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_key = Some(column.into());
        self
    }

    pub fn seed_row(mut self, row: impl IntoIterator<Item = Value>) -> Self {
        self.seed.push(row.into_iter().collect());
        self
    }

    /// Case-insensitive column lookup.
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.name.eq_ignore_ascii_case(name))
    }

    /// The primary key column's position in `columns`, used to pick key
    /// values out of seed rows.
    pub fn primary_key_index(&self) -> Option<usize> {
        let pk = self.primary_key.as_deref()?;
        self.columns
            .iter()
            .position(|column| column.name.eq_ignore_ascii_case(pk))
    }

    pub fn primary_key_column(&self) -> Option<&Column> {
        self.primary_key_index().map(|i| &self.columns[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ValueType;

    #[test]
    fn primary_key_lookup_is_case_insensitive() {
        let table = Table::new("customers")
            .column(Column::new("Id", ValueType::I64))
            .column(Column::new("city", ValueType::String))
            .primary_key("id");

        assert_eq!(table.primary_key_index(), Some(0));
        assert_eq!(table.primary_key_column().unwrap().name, "Id");
        assert!(table.find_column("CITY").is_some());
    }
}
