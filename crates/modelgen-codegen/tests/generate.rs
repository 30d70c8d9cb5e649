use modelgen_codegen::generate;
use modelgen_core::{
    schema::{Field, Relation, Schema, TableId},
    ScalarType, TemporalKind,
};
use pretty_assertions::assert_eq;

/// The article/category pair: `article` has an auto-increment integer
/// identity, a temporal column, and a foreign key into `category`.
fn article_category() -> Schema {
    let mut schema = Schema::default();

    let article = schema.push_table("article", "Published articles");
    {
        let table = schema.table_mut(article);

        let mut id = Field::new("id", ScalarType::Int);
        id.primary = true;
        id.auto_increment = true;
        table.push_field(id);

        table.push_field(Field::new("title", ScalarType::String));
        table.push_field(Field::new(
            "create_date",
            ScalarType::Time(TemporalKind::DateTime),
        ));
        table.push_field(Field::new("category_id", ScalarType::Int));
    }
    schema.imports.insert("chrono::NaiveDateTime".to_string());

    let category = schema.push_table("category", "");
    {
        let table = schema.table_mut(category);

        let mut id = Field::new("id", ScalarType::Int);
        id.primary = true;
        table.push_field(id);

        table.push_field(Field::new("name", ScalarType::String));
    }

    let relation = Relation::infer(
        &schema,
        article,
        "fk_article_category",
        "category_id",
        "category",
        "id",
    )
    .unwrap();
    schema.table_mut(article).relations.push(relation);

    schema
}

#[test]
fn entities_emit_in_table_order() {
    let source = generate(&article_category()).unwrap();

    let article = source.find("pub struct Article").expect("Article struct");
    let category = source.find("pub struct Category").expect("Category struct");
    assert!(article < category, "article must come before category");
}

#[test]
fn header_declares_imports_and_error_type() {
    let source = generate(&article_category()).unwrap();

    assert!(source.contains("use mysql_async::prelude::Queryable;"));
    assert!(source.contains("use chrono::NaiveDateTime;"));
    assert!(source.contains("pub enum ModelError"));
    assert!(source.contains("Time(chrono::ParseError)"));
}

#[test]
fn temporal_fields_scan_through_text() {
    let source = generate(&article_category()).unwrap();

    assert!(source.contains("pub create_date: NaiveDateTime,"));
    assert!(source.contains("CAST(`create_date` AS CHAR)"));
    assert!(source.contains("NaiveDateTime::parse_from_str"));
    assert!(source.contains("%Y-%m-%d %H:%M:%S"));
}

#[test]
fn single_int_identity_gets_a_typed_find() {
    let source = generate(&article_category()).unwrap();

    assert!(source.contains("fn find("));
    assert!(source.contains("id: i64"));
    assert!(source.contains("WHERE `article`.`id` = ?"));
}

#[test]
fn save_branches_on_the_identity_zero_value() {
    let source = generate(&article_category()).unwrap();

    assert!(source.contains("if self.id == 0 {"));
    assert!(source.contains(
        "INSERT INTO `article` (`title`, `create_date`, `category_id`) VALUES (?, ?, ?)"
    ));
    assert!(source.contains(
        "UPDATE `article` SET `title` = ?, `create_date` = ?, `category_id` = ? WHERE `id` = ?"
    ));
    // Auto-increment identity is back-filled after insert.
    assert!(source.contains("last_insert_id()"));
    // Temporal fields serialize with their recorded format.
    assert!(source.contains(".format(\"%Y-%m-%d %H:%M:%S\")"));
}

#[test]
fn relations_navigate_to_the_target_entity() {
    let source = generate(&article_category()).unwrap();

    assert!(source.contains("pub async fn find_category("));
    assert!(source.contains("WHERE `category`.`id` = ?"));
}

#[test]
fn emission_is_deterministic() {
    let schema = article_category();
    let first = generate(&schema).unwrap();
    let second = generate(&schema).unwrap();
    assert_eq!(first, second);
}

#[test]
fn string_identity_falls_back_to_the_generic_lookup() {
    let mut schema = Schema::default();
    let id = schema.push_table("country", "");
    {
        let table = schema.table_mut(id);
        let mut code = Field::new("code", ScalarType::String);
        code.primary = true;
        table.push_field(code);
        table.push_field(Field::new("name", ScalarType::String));
    }

    let source = generate(&schema).unwrap();

    assert!(!source.contains("fn find(conn"), "no typed find for a string key");
    assert!(source.contains("fn find_where("));
    assert!(source.contains("if self.code.is_empty() {"));
    assert!(!source.contains("last_insert_id()"));
    assert!(!source.contains("chrono"), "no temporal machinery without temporal columns");
}

#[test]
fn composite_identity_joins_predicates_in_field_order() {
    let mut schema = Schema::default();
    let id = schema.push_table("grants", "");
    {
        let table = schema.table_mut(id);

        let mut user_id = Field::new("user_id", ScalarType::Int);
        user_id.primary = true;
        table.push_field(user_id);

        let mut role_id = Field::new("role_id", ScalarType::Int);
        role_id.primary = true;
        table.push_field(role_id);

        table.push_field(Field::new("note", ScalarType::NullString));
    }

    let source = generate(&schema).unwrap();

    assert!(source.contains("if self.user_id == 0 && self.role_id == 0 {"));
    assert!(source.contains("WHERE `user_id` = ? AND `role_id` = ?"));
    assert!(!source.contains("fn find(conn"), "composite keys use find_where");
}

#[test]
fn reserved_column_names_emit_raw_identifiers() {
    let mut schema = Schema::default();
    let id = schema.push_table("event", "");
    {
        let table = schema.table_mut(id);
        let mut pk = Field::new("id", ScalarType::Int);
        pk.primary = true;
        table.push_field(pk);
        table.push_field(Field::new("type", ScalarType::String));
    }

    let source = generate(&schema).unwrap();
    assert!(source.contains("pub r#type: String,"));
}

#[test]
fn temporal_identity_aborts_emission() {
    let mut schema = Schema::default();
    let id = schema.push_table("snapshot", "");
    {
        let table = schema.table_mut(id);
        let mut taken = Field::new("taken_at", ScalarType::Time(TemporalKind::DateTime));
        taken.primary = true;
        table.push_field(taken);
        table.push_field(Field::new("state", ScalarType::String));
    }

    let err = generate(&schema).unwrap_err();
    assert!(err.is_unsupported_column());
    assert!(err.to_string().contains("snapshot.taken_at"));
}

#[test]
fn column_comments_become_doc_comments() {
    let mut schema = Schema::default();
    let id = schema.push_table("article", "Published articles");
    {
        let table = schema.table_mut(id);
        let mut pk = Field::new("id", ScalarType::Int);
        pk.primary = true;
        table.push_field(pk);

        let mut title = Field::new("title", ScalarType::String);
        title.comment = "Headline shown in listings".to_string();
        table.push_field(title);
    }

    let source = generate(&schema).unwrap();
    assert!(source.contains("Published articles"));
    assert!(source.contains("Headline shown in listings"));
}

#[test]
fn empty_schema_still_renders_the_header() {
    let schema = Schema::default();
    let source = generate(&schema).unwrap();

    assert!(source.contains("pub enum ModelError"));
    assert!(!source.contains("pub struct"));
}
