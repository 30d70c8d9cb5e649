mod entity;
mod find;
mod header;
mod relation;
mod save;
mod scan;
mod util;

use modelgen_core::{
    schema::{Schema, Table},
    Result,
};
use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The full schema model, for relation target lookups.
    schema: &'a Schema,

    /// The table being expanded.
    table: &'a Table,
}

/// Renders the whole schema: header first, then one block per table in
/// table order.
pub(crate) fn schema(schema: &Schema) -> Result<TokenStream> {
    let header = header::expand(schema);

    let mut entities = TokenStream::new();
    for table in &schema.tables {
        entities.extend(Expand { schema, table }.expand()?);
    }

    Ok(quote! {
        #header
        #entities
    })
}

impl Expand<'_> {
    fn expand(&self) -> Result<TokenStream> {
        let entity_struct = self.expand_entity_struct();
        let scan_fn = self.expand_scan_fn();
        let find_fns = self.expand_find_fns();
        let save_fn = self.expand_save_fn()?;
        let relation_fns = self.expand_relation_fns();

        let ident = util::ident(&self.table.singular);

        Ok(quote! {
            #entity_struct

            impl #ident {
                #scan_fn
                #find_fns
                #save_fn
                #relation_fns
            }
        })
    }

    /// SELECT template for this table: every column by escaped name, with
    /// temporal columns cast to text so they can be parsed with their
    /// recorded format. The `{}` slot takes the caller's filter tail.
    fn select_sql(&self) -> String {
        let columns = self
            .table
            .fields
            .iter()
            .map(|field| match field.ty.temporal_kind() {
                Some(_) => format!("CAST({} AS CHAR)", field.escaped_name),
                None => field.escaped_name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ");

        format!("SELECT {columns} FROM {} {{}}", self.table.escaped_name)
    }
}
