use super::TableId;
use crate::ScalarType;

use heck::ToSnakeCase;

/// A table column and the struct field generated for it.
///
/// Owned exclusively by its [`Table`](super::Table).
#[derive(Debug)]
pub struct Field {
    /// Name of the column as declared in SQL.
    pub name: String,

    /// Rust-safe identifier derived from the column name.
    pub rust_name: String,

    /// Backtick-quoted name for SQL emission.
    pub escaped_name: String,

    /// Declared default value, if any.
    pub default: Option<String>,

    /// Whether the column accepts NULL.
    pub nullable: bool,

    /// Resolved Rust type.
    pub ty: ScalarType,

    /// True if the column is part of the table's primary key.
    pub primary: bool,

    /// True if the column is an auto-incremented primary key.
    pub auto_increment: bool,

    /// Free-text comment from the catalog.
    pub comment: String,
}

/// Uniquely identifies a column in the schema.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct ColumnId {
    pub table: TableId,
    pub index: usize,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: ScalarType) -> Self {
        let name = name.into();
        Self {
            rust_name: rust_ident(&name),
            escaped_name: format!("`{name}`"),
            name,
            default: None,
            nullable: ty.is_nullable(),
            ty,
            primary: false,
            auto_increment: false,
            comment: String::new(),
        }
    }
}

/// Derives a Rust-safe snake_case identifier from a SQL name. Reserved
/// words are escaped as raw identifiers; the few that cannot be raw get a
/// trailing underscore instead.
pub fn rust_ident(name: &str) -> String {
    let snake = name.to_snake_case();
    match snake.as_str() {
        "self" | "super" | "crate" => format!("{snake}_"),
        _ if KEYWORDS.contains(&snake.as_str()) => format!("r#{snake}"),
        _ => snake,
    }
}

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
    "where", "while",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_names_are_snake_case() {
        assert_eq!(rust_ident("create_date"), "create_date");
        assert_eq!(rust_ident("CreateDate"), "create_date");
        assert_eq!(rust_ident("ID"), "id");
    }

    #[test]
    fn reserved_words_escape() {
        assert_eq!(rust_ident("type"), "r#type");
        assert_eq!(rust_ident("match"), "r#match");
        assert_eq!(rust_ident("self"), "self_");
    }

    #[test]
    fn new_field_derives_names() {
        let field = Field::new("category_id", ScalarType::Int);
        assert_eq!(field.rust_name, "category_id");
        assert_eq!(field.escaped_name, "`category_id`");
        assert!(!field.nullable);
        assert!(!field.primary);

        let field = Field::new("note", ScalarType::NullString);
        assert!(field.nullable);
    }
}
