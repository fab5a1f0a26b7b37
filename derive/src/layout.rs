use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Error, Field, Fields, Ident, Result, Type, parse_quote};

pub(crate) fn expand_layout(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new_spanned(
            input,
            "`Layout` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new_spanned(
            input,
            "`Layout` may only be derived on structs with named fields.",
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(FieldMetadata::parse)
        .collect::<Result<Vec<_>>>()?;

    // Each read is a separate statement, fixing the order of the reads.
    let reads = fields.iter().map(|field| {
        let FieldMetadata { name, ty, skip } = field;

        if *skip {
            quote! {
                let #name: #ty = ::core::default::Default::default();
            }
        } else {
            quote! {
                let #name = <#ty as ::trackwire::wire::WireField>::read(__reader)?;
            }
        }
    });

    let writes = fields.iter().filter(|field| !field.skip).map(|field| {
        let FieldMetadata { name, ty, .. } = field;

        quote! {
            <#ty as ::trackwire::wire::WireField>::write(&self.#name, __writer)?;
        }
    });

    let names = fields.iter().map(|field| &field.name);

    // Generic fields must themselves be readable, or defaultable if skipped.
    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        let predicates = &mut generics.make_where_clause().predicates;

        for FieldMetadata { ty, skip, .. } in &fields {
            if *skip {
                predicates.push(parse_quote!(#ty: ::core::default::Default));
            } else {
                predicates.push(parse_quote!(#ty: ::trackwire::wire::WireField));
            }
        }
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::trackwire::wire::Layout for #name #ty_generics #where_clause {
            fn read_fields(
                __reader: &mut ::trackwire::wire::ByteReader<'_>,
            ) -> ::core::result::Result<Self, ::trackwire::wire::ReadError> {
                #(#reads)*
                ::core::result::Result::Ok(Self { #(#names),* })
            }

            fn write_fields(
                &self,
                __writer: &mut ::trackwire::wire::ByteWriter,
            ) -> ::core::result::Result<(), ::trackwire::wire::WriteError> {
                #(#writes)*
                ::core::result::Result::Ok(())
            }
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
struct FieldMetadata {
    name: Ident,
    ty: Type,
    skip: bool,
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Self> {
        let Some(name) = field.ident.clone() else {
            Err(Error::new_spanned(field, "Field must be named."))?
        };

        let mut skip = false;

        for attr in field.attrs.iter().filter(|a| a.path().is_ident("wire")) {
            skip |= parse_skip(attr)?;
        }

        Ok(Self {
            name,
            ty: field.ty.clone(),
            skip,
        })
    }
}

/// Parse a `#[wire(...)]` attribute, returning whether it marks a skip.
fn parse_skip(attr: &Attribute) -> Result<bool> {
    let mut skip = false;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("skip") {
            skip = true;
            Ok(())
        } else {
            Err(meta.error("Unknown `wire` argument, expected `skip`."))
        }
    })?;

    Ok(skip)
}
