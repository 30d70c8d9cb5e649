mod expand;

use modelgen_core::{Error, Result, Schema};

/// Renders a schema model into a formatted Rust source file.
///
/// Emission is a pure function of the model: rendering the same schema
/// twice yields byte-identical output. The concatenated output must parse
/// as a Rust file before it is formatted; if it does not, generation fails
/// and nothing is returned.
pub fn generate(schema: &Schema) -> Result<String> {
    let tokens = expand::schema(schema)?;
    let file =
        syn::parse2::<syn::File>(tokens).map_err(|err| Error::emit(anyhow::Error::from(err)))?;
    Ok(prettyplease::unparse(&file))
}
