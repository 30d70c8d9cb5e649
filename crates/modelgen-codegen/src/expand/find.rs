use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_find_fns(&self) -> TokenStream {
        let find = self.expand_find();
        let find_where = self.expand_find_where();
        quote! {
            #find
            #find_where
        }
    }

    /// Typed primary-key lookup, emitted only for the single-integer
    /// identity shape. Every other identity shape goes through the generic
    /// `find_where`.
    fn expand_find(&self) -> TokenStream {
        let Some(id_field) = self.table.int_identity() else {
            return TokenStream::new();
        };

        let arg = util::ident(&id_field.rust_name);
        let filter = format!(
            "WHERE {}.{} = ?",
            self.table.escaped_name, id_field.escaped_name
        );
        let doc = format!(" Looks up one [`{}`] by primary key.", self.table.singular);

        quote! {
            #[doc = #doc]
            pub async fn find(
                conn: &mut mysql_async::Conn,
                #arg: i64,
            ) -> Result<Option<Self>, ModelError> {
                Self::find_where(conn, #filter, mysql_async::Params::from((#arg,))).await
            }
        }
    }

    fn expand_find_where(&self) -> TokenStream {
        let select = self.select_sql();
        let doc = format!(
            " Returns the first [`{}`] matching `filter`, a SQL tail such as \
             `WHERE ... = ?`.",
            self.table.singular
        );

        quote! {
            #[doc = #doc]
            pub async fn find_where(
                conn: &mut mysql_async::Conn,
                filter: &str,
                params: mysql_async::Params,
            ) -> Result<Option<Self>, ModelError> {
                let sql = format!(#select, filter);
                let row: Option<mysql_async::Row> = conn.exec_first(sql, params).await?;
                row.map(Self::from_row).transpose()
            }
        }
    }
}
