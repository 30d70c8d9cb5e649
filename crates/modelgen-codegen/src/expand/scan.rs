use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// `from_row`: one destination slot per column, bound by ordinal.
    /// Temporal columns read an intermediate text slot and parse with
    /// their recorded format; a parse failure fails the whole scan.
    pub(super) fn expand_scan_fn(&self) -> TokenStream {
        let fields = self.table.fields.iter().enumerate().map(|(i, field)| {
            let name = util::ident(&field.rust_name);
            let index = util::index(i);

            match field.ty.temporal_kind() {
                Some(kind) => {
                    let parse_ty = util::ident(field.ty.rust_type());
                    let format = kind.format();
                    quote! {
                        #name: {
                            let text: String = row
                                .take_opt(#index)
                                .ok_or(ModelError::MissingColumn(#index))??;
                            #parse_ty::parse_from_str(&text, #format)?
                        },
                    }
                }
                None => quote! {
                    #name: row
                        .take_opt(#index)
                        .ok_or(ModelError::MissingColumn(#index))??,
                },
            }
        });

        let doc = format!(" Builds a [`{}`] from one result row.", self.table.singular);
        quote! {
            #[doc = #doc]
            pub fn from_row(mut row: mysql_async::Row) -> Result<Self, ModelError> {
                Ok(Self {
                    #(#fields)*
                })
            }
        }
    }
}
