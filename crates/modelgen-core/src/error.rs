use std::fmt;

/// An error produced while introspecting a schema or emitting model code.
///
/// Generation has no partial-success mode: the first error aborts the run
/// and is surfaced to the caller unchanged.
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    /// A catalog query or result decode failed.
    Catalog(anyhow::Error),

    /// A column uses a type/nullability combination with no safe Rust
    /// mapping.
    UnsupportedColumn {
        /// `table.column` once known; empty at the type-mapping layer.
        column: String,
        ty: String,
    },

    /// A foreign key references a table or column missing from the
    /// introspected set.
    SchemaConsistency(String),

    /// The generated source failed to parse.
    Emit(anyhow::Error),

    /// Bridged ad-hoc error.
    Anyhow(anyhow::Error),
}

impl Error {
    /// A catalog query or result-scan failure.
    pub fn catalog(err: impl Into<anyhow::Error>) -> Self {
        ErrorKind::Catalog(err.into()).into()
    }

    /// A column type that cannot be mapped (e.g. a nullable temporal
    /// column).
    pub fn unsupported_column(ty: impl Into<String>) -> Self {
        ErrorKind::UnsupportedColumn {
            column: String::new(),
            ty: ty.into(),
        }
        .into()
    }

    /// A relation referencing a table or column the introspector never saw.
    pub fn schema_consistency(msg: impl Into<String>) -> Self {
        ErrorKind::SchemaConsistency(msg.into()).into()
    }

    /// Generated text that does not parse as Rust.
    pub fn emit(err: impl Into<anyhow::Error>) -> Self {
        ErrorKind::Emit(err.into()).into()
    }

    /// Attaches `table`/`column` context to an unsupported-column error.
    /// Other kinds pass through untouched.
    pub fn with_column(mut self, table: &str, column: &str) -> Self {
        if let ErrorKind::UnsupportedColumn { column: slot, .. } = &mut self.kind {
            *slot = format!("{table}.{column}");
        }
        self
    }

    pub fn is_unsupported_column(&self) -> bool {
        matches!(self.kind, ErrorKind::UnsupportedColumn { .. })
    }

    pub fn is_schema_consistency(&self) -> bool {
        matches!(self.kind, ErrorKind::SchemaConsistency(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("Error").field("kind", &self.kind).finish()
        } else {
            fmt::Display::fmt(&self.kind, f)
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Catalog(err) | ErrorKind::Emit(err) | ErrorKind::Anyhow(err) => {
                Some(err.as_ref())
            }
            _ => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Catalog(err) => write!(f, "catalog query failed: {err}"),
            ErrorKind::UnsupportedColumn { column, ty } if column.is_empty() => {
                write!(f, "unsupported column type `{ty}`")
            }
            ErrorKind::UnsupportedColumn { column, ty } => {
                write!(f, "column `{column}` has unsupported type `{ty}`")
            }
            ErrorKind::SchemaConsistency(msg) => write!(f, "inconsistent schema: {msg}"),
            ErrorKind::Emit(err) => write!(f, "generated source failed to format: {err}"),
            ErrorKind::Anyhow(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { kind }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        ErrorKind::Anyhow(err).into()
    }
}
