use modelgen_core::{schema::Field, ScalarType};
use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::quote;

/// Turns a Rust-safe name (possibly `r#`-prefixed) into an identifier.
pub(crate) fn ident(name: &str) -> Ident {
    match name.strip_prefix("r#") {
        Some(raw) => Ident::new_raw(raw, Span::call_site()),
        None => Ident::new(name, Span::call_site()),
    }
}

/// Unsuffixed integer literal for column ordinals.
pub(crate) fn index(value: usize) -> Literal {
    Literal::usize_unsuffixed(value)
}

/// Tokens for a scalar type's Rust spelling.
pub(crate) fn scalar_type(ty: ScalarType) -> TokenStream {
    ty.rust_type()
        .parse()
        .expect("static type spellings always tokenize")
}

/// Expression producing the `mysql_async::Value` bound for a field when
/// persisting or filtering. Temporal fields serialize to text with their
/// recorded format.
pub(crate) fn value_expr(field: &Field) -> TokenStream {
    let name = ident(&field.rust_name);
    match field.ty {
        ScalarType::Time(kind) => {
            let format = kind.format();
            quote!(mysql_async::Value::from(self.#name.format(#format).to_string()))
        }
        ScalarType::String | ScalarType::NullString => {
            quote!(mysql_async::Value::from(self.#name.clone()))
        }
        _ => quote!(mysql_async::Value::from(self.#name)),
    }
}
