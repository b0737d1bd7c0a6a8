use super::{Function, Procedure, Table, View};

/// The desired state of a database, supplied by the mapping layer and
/// reconciled against a live catalog by the migrators.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    pub tables: Vec<Table>,

    pub views: Vec<View>,

    pub procedures: Vec<Procedure>,

    pub functions: Vec<Function>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    pub fn view(mut self, view: View) -> Self {
        self.views.push(view);
        self
    }

    pub fn procedure(mut self, procedure: Procedure) -> Self {
        self.procedures.push(procedure);
        self
    }

    pub fn function(mut self, function: Function) -> Self {
        self.functions.push(function);
        self
    }

    /// Case-insensitive table lookup, matching how catalogs key names.
    pub fn find_table(&self, name: &str) -> Option<&Table> {
        self.tables
            .iter()
            .find(|table| table.name.eq_ignore_ascii_case(name))
    }
}
