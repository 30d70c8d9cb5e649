use super::{Table, TableId};

use std::collections::BTreeSet;

/// The in-memory model of an introspected database schema.
///
/// Built by the introspector, relation-annotated by the resolver, consumed
/// read-only by the emitter.
#[derive(Debug, Default)]
pub struct Schema {
    /// Tables in catalog order (sorted by name).
    pub tables: Vec<Table>,

    /// Import paths the generated source must declare. An ordered set so
    /// emission stays deterministic.
    pub imports: BTreeSet<String>,
}

impl Schema {
    pub fn table(&self, id: TableId) -> &Table {
        &self.tables[id.0]
    }

    pub fn table_mut(&mut self, id: TableId) -> &mut Table {
        &mut self.tables[id.0]
    }

    pub fn table_id(&self, name: &str) -> Option<TableId> {
        self.tables
            .iter()
            .position(|table| table.name == name)
            .map(TableId)
    }

    /// Appends a table, assigning it the next id.
    pub fn push_table(&mut self, name: impl Into<String>, comment: impl Into<String>) -> TableId {
        let id = TableId(self.tables.len());
        self.tables.push(Table::new(id, name, comment));
        id
    }
}
