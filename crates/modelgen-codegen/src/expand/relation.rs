use super::{util, Expand};

use modelgen_core::schema::rust_ident;
use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// One accessor per foreign key: a filtered lookup on the target table
    /// keyed by the local column value.
    pub(super) fn expand_relation_fns(&self) -> TokenStream {
        self.table
            .relations
            .iter()
            .map(|relation| {
                let target = self.schema.table(relation.target_table);
                let target_ident = util::ident(&target.singular);
                let target_field = &target.fields[relation.target_column.index];
                let local_field = &self.table.fields[relation.column.index];

                let method = util::ident(&rust_ident(&format!("find_{}", relation.name)));
                let value = util::value_expr(local_field);
                let filter = format!(
                    "WHERE {}.{} = ?",
                    target.escaped_name, target_field.escaped_name
                );
                let doc = format!(" Finds the [`{}`] this row references.", target.singular);

                quote! {
                    #[doc = #doc]
                    pub async fn #method(
                        &self,
                        conn: &mut mysql_async::Conn,
                    ) -> Result<Option<#target_ident>, ModelError> {
                        #target_ident::find_where(
                            conn,
                            #filter,
                            mysql_async::Params::Positional(vec![#value]),
                        )
                        .await
                    }
                }
            })
            .collect()
    }
}
