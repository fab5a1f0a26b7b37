use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod layout;

#[proc_macro_derive(Layout, attributes(wire))]
pub fn derive_layout(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match layout::expand_layout(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}
