use crate::Introspector;

use modelgen_core::{
    schema::{Field, Schema, TableId},
    Error, Result, ScalarType,
};
use mysql_async::{prelude::Queryable, Conn};

const TABLES_SQL: &str = "\
    SELECT   Tables.TABLE_NAME, \
             Tables.TABLE_COMMENT \
    FROM     information_schema.TABLES AS Tables \
    WHERE    Tables.TABLE_SCHEMA = ? AND Tables.TABLE_TYPE = 'BASE TABLE' \
    ORDER BY Tables.TABLE_NAME";

const COLUMNS_SQL: &str = "\
    SELECT   Columns.COLUMN_NAME, \
             Columns.COLUMN_DEFAULT, \
             Columns.IS_NULLABLE, \
             Columns.COLUMN_TYPE, \
             Columns.COLUMN_KEY, \
             Columns.EXTRA, \
             Columns.COLUMN_COMMENT \
    FROM     information_schema.COLUMNS AS Columns \
    WHERE    Columns.TABLE_SCHEMA = ? AND Columns.TABLE_NAME = ? \
    ORDER BY Columns.ORDINAL_POSITION";

/// One row of the column listing: (name, default, nullable, declared type,
/// key designation, extra attributes, comment).
type ColumnRow = (
    String,
    Option<String>,
    String,
    String,
    String,
    String,
    String,
);

impl Introspector {
    /// Builds the schema model: every base table in name order, then each
    /// table's columns in ordinal order.
    ///
    /// Any query or decode failure aborts introspection; there is no
    /// partial-schema recovery.
    pub async fn introspect(&self, conn: &mut Conn) -> Result<Schema> {
        let mut schema = Schema::default();

        let tables: Vec<(String, String)> = conn
            .exec(TABLES_SQL, (self.schema_name(),))
            .await
            .map_err(Error::catalog)?;

        for (name, comment) in tables {
            schema.push_table(name, comment);
        }

        for index in 0..schema.tables.len() {
            self.fetch_columns(conn, &mut schema, TableId(index)).await?;
        }

        tracing::info!(
            schema = self.schema_name(),
            tables = schema.tables.len(),
            "introspected schema"
        );

        Ok(schema)
    }

    async fn fetch_columns(
        &self,
        conn: &mut Conn,
        schema: &mut Schema,
        id: TableId,
    ) -> Result<()> {
        let table_name = schema.table(id).name.clone();

        let rows: Vec<ColumnRow> = conn
            .exec(COLUMNS_SQL, (self.schema_name(), table_name.as_str()))
            .await
            .map_err(Error::catalog)?;

        for (name, default, nullable, declared_ty, key, extra, comment) in rows {
            let nullable = nullable == "YES";
            let ty = ScalarType::resolve(&declared_ty, nullable)
                .map_err(|err| err.with_column(&table_name, &name))?;

            if let Some(import) = ty.import() {
                schema.imports.insert(import.to_string());
            }

            let mut field = Field::new(name, ty);
            field.default = default;
            field.nullable = nullable;
            field.primary = key == "PRI";
            field.auto_increment = field.primary && extra == "auto_increment";
            field.comment = comment;

            schema.table_mut(id).push_field(field);
        }

        Ok(())
    }
}
