pub use modelgen_core::{schema, Error, Result, ScalarType, Schema, TemporalKind};
pub use modelgen_mysql::Introspector;

/// End-to-end generator: introspects one MySQL schema and renders the
/// model source for it.
///
/// The pipeline runs strictly one way: catalog rows → schema model →
/// relation graph → rendered text. Each stage completes before the next
/// begins, and the first error aborts the whole run.
#[derive(Debug)]
pub struct Generator {
    introspector: Introspector,
}

impl Generator {
    /// Creates a generator from a `mysql://` connection URL. The database
    /// named in the URL path is the schema that gets introspected.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            introspector: Introspector::new(url)?,
        })
    }

    /// Runs introspection, relation resolution, and emission, returning
    /// the formatted source text.
    pub async fn generate(&self) -> Result<String> {
        let mut conn = self.introspector.connect().await?;
        let mut schema = self.introspector.introspect(&mut conn).await?;
        self.introspector.resolve_relations(&mut conn, &mut schema).await?;
        drop(conn);

        modelgen_codegen::generate(&schema)
    }

    /// Renders source for an already-built schema model. Useful when the
    /// model comes from somewhere other than a live database.
    pub fn render(schema: &Schema) -> Result<String> {
        modelgen_codegen::generate(schema)
    }

    /// The schema this generator targets.
    pub fn schema_name(&self) -> &str {
        self.introspector.schema_name()
    }
}
