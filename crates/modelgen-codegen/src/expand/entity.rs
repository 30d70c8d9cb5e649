use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// The entity struct: one public field per column, in ordinal order.
    pub(super) fn expand_entity_struct(&self) -> TokenStream {
        let ident = util::ident(&self.table.singular);

        let fields = self.table.fields.iter().map(|field| {
            let name = util::ident(&field.rust_name);
            let ty = util::scalar_type(field.ty);
            let doc = doc_attr(&field.comment);
            quote! {
                #doc
                pub #name: #ty,
            }
        });

        let doc = doc_attr(&self.table.comment);
        quote! {
            #doc
            #[derive(Debug, Clone, PartialEq)]
            pub struct #ident {
                #(#fields)*
            }
        }
    }
}

fn doc_attr(comment: &str) -> Option<TokenStream> {
    if comment.is_empty() {
        return None;
    }
    let text = format!(" {comment}");
    Some(quote!(#[doc = #text]))
}
