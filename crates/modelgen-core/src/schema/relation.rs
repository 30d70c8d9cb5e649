use super::{ColumnId, Schema, TableId};
use crate::{Error, Result};

/// A directed association inferred from a foreign-key constraint, from the
/// owning table to the referenced one.
#[derive(Debug)]
pub struct Relation {
    /// Display name: `<base>` for a `<base>_id` column, the raw constraint
    /// name otherwise. Best-effort heuristic.
    pub name: String,

    /// The foreign-key column on the owning table.
    pub column: ColumnId,

    /// The referenced table.
    pub target_table: TableId,

    /// The referenced column. Always belongs to `target_table`.
    pub target_column: ColumnId,
}

impl Relation {
    /// Builds a relation from one foreign-key constraint row.
    ///
    /// All tables are introspected before any relation is resolved, so the
    /// referenced table and column must already be present in the schema; a
    /// miss means the catalog and the model disagree.
    pub fn infer(
        schema: &Schema,
        table: TableId,
        constraint: &str,
        column: &str,
        target_table: &str,
        target_column: &str,
    ) -> Result<Relation> {
        let owner = schema.table(table);

        let column_index = owner.field_index(column).ok_or_else(|| {
            Error::schema_consistency(format!(
                "foreign key `{constraint}` uses unknown column `{}`.`{column}`",
                owner.name
            ))
        })?;

        let target_id = schema.table_id(target_table).ok_or_else(|| {
            Error::schema_consistency(format!(
                "foreign key `{constraint}` references unknown table `{target_table}`"
            ))
        })?;

        let target_index = schema
            .table(target_id)
            .field_index(target_column)
            .ok_or_else(|| {
                Error::schema_consistency(format!(
                    "foreign key `{constraint}` references unknown column \
                     `{target_table}`.`{target_column}`"
                ))
            })?;

        let name = match column.strip_suffix("_id") {
            Some(base) if !base.is_empty() => base.to_string(),
            _ => constraint.to_string(),
        };

        Ok(Relation {
            name,
            column: ColumnId {
                table,
                index: column_index,
            },
            target_table: target_id,
            target_column: ColumnId {
                table: target_id,
                index: target_index,
            },
        })
    }
}
