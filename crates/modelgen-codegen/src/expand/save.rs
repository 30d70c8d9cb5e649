use super::{util, Expand};

use modelgen_core::{schema::Field, Error, Result, ScalarType};
use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// `save`: upsert by identity. Inserts when every identity field holds
    /// its zero value, updates otherwise. The update predicate AND-joins
    /// equality over all identity columns, in field order.
    pub(super) fn expand_save_fn(&self) -> Result<TokenStream> {
        let table = self.table;

        let mut zero_checks = Vec::new();
        let mut where_parts = Vec::new();
        let mut identity_values = Vec::new();
        let mut auto_increment: Option<&Field> = None;

        for field in table.identity_fields() {
            zero_checks.push(self.zero_check(field)?);
            where_parts.push(format!("{} = ?", field.escaped_name));
            identity_values.push(util::value_expr(field));
            if field.auto_increment {
                auto_increment = Some(field);
            }
        }

        let insert_cols: Vec<_> = table
            .non_identity_fields()
            .map(|field| field.escaped_name.clone())
            .collect();
        let insert_values: Vec<_> = table.non_identity_fields().map(util::value_expr).collect();
        let placeholders = vec!["?"; insert_cols.len()].join(", ");

        let insert_sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table.escaped_name,
            insert_cols.join(", "),
            placeholders
        );

        let backfill = auto_increment.map(|field| {
            let name = util::ident(&field.rust_name);
            quote! {
                self.#name = conn
                    .last_insert_id()
                    .ok_or(ModelError::MissingInsertId)? as i64;
            }
        });

        let insert_arm = quote! {
            let params = mysql_async::Params::Positional(vec![#(#insert_values),*]);
            conn.exec_drop(#insert_sql, params).await?;
            #backfill
        };

        let doc = " Persists the row: inserts when every identity field is at its zero \
                   value, updates otherwise.";

        // A table with no primary key can only ever insert.
        if zero_checks.is_empty() {
            return Ok(quote! {
                #[doc = #doc]
                pub async fn save(
                    &mut self,
                    conn: &mut mysql_async::Conn,
                ) -> Result<(), ModelError> {
                    #insert_arm
                    Ok(())
                }
            });
        }

        let id_check = zero_checks
            .iter()
            .cloned()
            .reduce(|acc, check| quote!(#acc && #check))
            .expect("identity is non-empty here");

        let update_sets: Vec<_> = table
            .non_identity_fields()
            .map(|field| format!("{} = ?", field.escaped_name))
            .collect();

        let update_arm = if update_sets.is_empty() {
            // Every column is part of the key; there is nothing to update.
            TokenStream::new()
        } else {
            let update_sql = format!(
                "UPDATE {} SET {} WHERE {}",
                table.escaped_name,
                update_sets.join(", "),
                where_parts.join(" AND ")
            );
            let update_values = insert_values.iter().chain(identity_values.iter());
            quote! {
                let params = mysql_async::Params::Positional(vec![#(#update_values),*]);
                conn.exec_drop(#update_sql, params).await?;
            }
        };

        Ok(quote! {
            #[doc = #doc]
            pub async fn save(&mut self, conn: &mut mysql_async::Conn) -> Result<(), ModelError> {
                if #id_check {
                    #insert_arm
                } else {
                    #update_arm
                }
                Ok(())
            }
        })
    }

    /// Zero-value test used for the insert-or-update decision. Identity
    /// fields must be integer, float, string, or boolean; anything else has
    /// no zero value to test and aborts emission.
    fn zero_check(&self, field: &Field) -> Result<TokenStream> {
        let name = util::ident(&field.rust_name);
        Ok(match field.ty {
            ScalarType::Int => quote!(self.#name == 0),
            ScalarType::Float => quote!(self.#name == 0.0),
            ScalarType::String => quote!(self.#name.is_empty()),
            ScalarType::Bool => quote!(!self.#name),
            _ => {
                return Err(Error::unsupported_column(format!(
                    "{} primary key",
                    field.ty.rust_type()
                ))
                .with_column(&self.table.name, &field.name))
            }
        })
    }
}
