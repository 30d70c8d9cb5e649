use super::{Field, Relation};
use crate::ScalarType;

use heck::ToUpperCamelCase;
use pluralizer::pluralize;

/// A database table and the entity generated for it.
#[derive(Debug)]
pub struct Table {
    /// Uniquely identifies the table in the schema.
    pub id: TableId,

    /// Name of the table as declared in SQL.
    pub name: String,

    /// Backtick-quoted name for SQL emission.
    pub escaped_name: String,

    /// PascalCase singular entity name (`articles` → `Article`).
    pub singular: String,

    /// PascalCase plural entity name (`articles` → `Articles`).
    pub plural: String,

    /// Free-text comment from the catalog.
    pub comment: String,

    /// Columns in ordinal order.
    pub fields: Vec<Field>,

    /// Indices into `fields` of the primary-key columns, in column order.
    pub identity: Vec<usize>,

    /// Foreign-key relations owned by this table. Append-only.
    pub relations: Vec<Relation>,
}

/// Uniquely identifies a table
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct TableId(pub usize);

impl Table {
    pub fn new(id: TableId, name: impl Into<String>, comment: impl Into<String>) -> Self {
        let name = name.into();
        let lower = name.to_lowercase();
        let singular = pluralize(&lower, 1, false).to_upper_camel_case();
        let plural = pluralize(&lower, 2, false).to_upper_camel_case();

        Self {
            id,
            escaped_name: format!("`{name}`"),
            name,
            singular,
            plural,
            comment: comment.into(),
            fields: vec![],
            identity: vec![],
            relations: vec![],
        }
    }

    /// Appends a column; primary-key columns also join the identity, in
    /// column order.
    pub fn push_field(&mut self, field: Field) {
        if field.primary {
            self.identity.push(self.fields.len());
        }
        self.fields.push(field);
    }

    /// Looks up a field by its raw SQL column name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    pub fn identity_fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.identity.iter().map(|index| &self.fields[*index])
    }

    /// The identity field when the primary key is a single integer column.
    /// This shape gets a typed lookup helper in generated code.
    pub fn int_identity(&self) -> Option<&Field> {
        match self.identity[..] {
            [index] => {
                let field = &self.fields[index];
                (field.ty == ScalarType::Int).then_some(field)
            }
            _ => None,
        }
    }

    /// Fields that are not part of the primary key, in ordinal order.
    pub fn non_identity_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| !field.primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScalarType;

    #[test]
    fn entity_names_inflect() {
        let table = Table::new(TableId(0), "articles", "");
        assert_eq!(table.singular, "Article");
        assert_eq!(table.plural, "Articles");

        let table = Table::new(TableId(0), "category", "");
        assert_eq!(table.singular, "Category");
        assert_eq!(table.plural, "Categories");

        let table = Table::new(TableId(0), "blog_posts", "");
        assert_eq!(table.singular, "BlogPost");
        assert_eq!(table.escaped_name, "`blog_posts`");
    }

    #[test]
    fn identity_retains_column_order() {
        let mut table = Table::new(TableId(0), "grants", "");

        let mut user_id = Field::new("user_id", ScalarType::Int);
        user_id.primary = true;
        table.push_field(user_id);

        table.push_field(Field::new("note", ScalarType::String));

        let mut role_id = Field::new("role_id", ScalarType::Int);
        role_id.primary = true;
        table.push_field(role_id);

        let identity: Vec<_> = table.identity_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(identity, ["user_id", "role_id"]);
        assert_eq!(table.identity, [0, 2]);
    }

    #[test]
    fn int_identity_requires_single_integer_key() {
        let mut table = Table::new(TableId(0), "articles", "");
        let mut id = Field::new("id", ScalarType::Int);
        id.primary = true;
        table.push_field(id);
        assert_eq!(table.int_identity().unwrap().name, "id");

        let mut table = Table::new(TableId(0), "codes", "");
        let mut code = Field::new("code", ScalarType::String);
        code.primary = true;
        table.push_field(code);
        assert!(table.int_identity().is_none());
    }
}
