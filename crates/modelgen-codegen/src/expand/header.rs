use modelgen_core::Schema;
use proc_macro2::TokenStream;
use quote::quote;

/// Header block: file doc, import declarations, and the shared error type
/// for generated operations.
///
/// Generated operations take the connection as an explicit parameter;
/// there is no process-wide handle to register.
pub(super) fn expand(schema: &Schema) -> TokenStream {
    let imports = schema.imports.iter().map(|path| {
        let path: TokenStream = path.parse().expect("import paths always tokenize");
        quote!(use #path;)
    });

    let has_temporal = schema
        .tables
        .iter()
        .flat_map(|table| &table.fields)
        .any(|field| field.ty.temporal_kind().is_some());

    let time_variant = has_temporal.then(|| {
        quote! {
            /// A temporal column failed to parse with its recorded format.
            Time(chrono::ParseError),
        }
    });
    let time_display = has_temporal.then(|| {
        quote! {
            ModelError::Time(err) => write!(f, "temporal parse error: {err}"),
        }
    });
    let time_source = has_temporal.then(|| {
        quote! {
            ModelError::Time(err) => Some(err),
        }
    });
    let time_from = has_temporal.then(|| {
        quote! {
            impl From<chrono::ParseError> for ModelError {
                fn from(err: chrono::ParseError) -> ModelError {
                    ModelError::Time(err)
                }
            }
        }
    });

    quote! {
        #![doc = " Database model generated by modelgen. Do not edit by hand."]

        use mysql_async::prelude::Queryable;
        #(#imports)*

        /// Error returned by generated model operations.
        #[derive(Debug)]
        pub enum ModelError {
            /// The underlying database operation failed.
            Db(mysql_async::Error),
            /// A column value could not be converted to the field type.
            Value(mysql_async::FromValueError),
            #time_variant
            /// The row was missing an expected column.
            MissingColumn(usize),
            /// An insert did not produce an auto-increment id.
            MissingInsertId,
        }

        impl std::fmt::Display for ModelError {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    ModelError::Db(err) => write!(f, "database error: {err}"),
                    ModelError::Value(err) => write!(f, "value conversion error: {err}"),
                    #time_display
                    ModelError::MissingColumn(index) => write!(f, "row missing column {index}"),
                    ModelError::MissingInsertId => write!(f, "insert did not return an id"),
                }
            }
        }

        impl std::error::Error for ModelError {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                match self {
                    ModelError::Db(err) => Some(err),
                    ModelError::Value(err) => Some(err),
                    #time_source
                    _ => None,
                }
            }
        }

        impl From<mysql_async::Error> for ModelError {
            fn from(err: mysql_async::Error) -> ModelError {
                ModelError::Db(err)
            }
        }

        impl From<mysql_async::FromValueError> for ModelError {
            fn from(err: mysql_async::FromValueError) -> ModelError {
                ModelError::Value(err)
            }
        }

        #time_from
    }
}
