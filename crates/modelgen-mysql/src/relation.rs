use crate::Introspector;

use modelgen_core::{
    schema::{Relation, Schema, TableId},
    Error, Result,
};
use mysql_async::{prelude::Queryable, Conn};

// Scoping every schema column to the working schema filters out
// cross-database references; the NOT NULL filters drop unique-constraint
// rows that are not true foreign keys.
const RELATIONS_SQL: &str = "\
    SELECT Relations.CONSTRAINT_NAME, \
           Relations.COLUMN_NAME, \
           Relations.REFERENCED_TABLE_NAME, \
           Relations.REFERENCED_COLUMN_NAME \
    FROM   information_schema.KEY_COLUMN_USAGE AS Relations \
    WHERE  Relations.CONSTRAINT_SCHEMA = ? AND \
           Relations.TABLE_SCHEMA = ? AND \
           Relations.REFERENCED_TABLE_SCHEMA = ? AND \
           Relations.TABLE_NAME = ? AND \
           Relations.REFERENCED_TABLE_NAME IS NOT NULL AND \
           Relations.REFERENCED_COLUMN_NAME IS NOT NULL";

impl Introspector {
    /// Fills in each table's relation list from its foreign-key
    /// constraints. Produces only the forward, belongs-to direction: one
    /// foreign key yields one navigable relation on the owning table.
    pub async fn resolve_relations(&self, conn: &mut Conn, schema: &mut Schema) -> Result<()> {
        for index in 0..schema.tables.len() {
            let id = TableId(index);
            let table_name = schema.table(id).name.clone();
            let name = self.schema_name();

            let rows: Vec<(String, String, String, String)> = conn
                .exec(RELATIONS_SQL, (name, name, name, table_name.as_str()))
                .await
                .map_err(Error::catalog)?;

            for (constraint, column, target_table, target_column) in rows {
                tracing::debug!(
                    constraint = %constraint,
                    "{table_name}.{column} -> {target_table}.{target_column}"
                );

                let relation = Relation::infer(
                    schema,
                    id,
                    &constraint,
                    &column,
                    &target_table,
                    &target_column,
                )?;
                schema.table_mut(id).relations.push(relation);
            }
        }

        Ok(())
    }
}
