mod field;
pub use field::{rust_ident, ColumnId, Field};

mod relation;
pub use relation::Relation;

mod schema;
pub use schema::Schema;

mod table;
pub use table::{Table, TableId};
