use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr};

pub fn derive_model(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let collection = match extract_collection(&input) {
        Ok(collection) => collection,
        Err(err) => return err.to_compile_error().into(),
    };

    let field_names = named_fields(&input);
    if !field_names.iter().any(|f| f == "id") {
        return syn::Error::new_spanned(
            name,
            "Model derive: struct must have a named field `id`",
        )
        .to_compile_error()
        .into();
    }

    let timestamped = if field_names.iter().any(|f| f == "timestamps") {
        quote! {
            impl #impl_generics ::pos_store::Timestamped for #name #ty_generics #where_clause {
                fn timestamps_mut(&mut self) -> &mut ::pos_store::Timestamps {
                    &mut self.timestamps
                }
            }
        }
    } else {
        quote! {}
    };

    let expanded = quote! {
        impl #impl_generics ::pos_store::Record for #name #ty_generics #where_clause {
            fn id(&self) -> &str {
                &self.id
            }
        }

        impl #impl_generics ::pos_store::Model for #name #ty_generics #where_clause {
            const COLLECTION: &'static str = #collection;
        }

        #timestamped
    };

    TokenStream::from(expanded)
}

fn extract_collection(input: &DeriveInput) -> syn::Result<String> {
    for attr in &input.attrs {
        if !attr.path().is_ident("model") {
            continue;
        }

        let mut collection = None;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("collection") {
                let value: LitStr = meta.value()?.parse()?;
                collection = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported model attribute, expected `collection`"))
            }
        })?;

        if let Some(c) = collection {
            return Ok(c);
        }
    }

    // Default: snake_case struct name + "s"
    Ok(format!("{}s", to_snake_case(&input.ident.to_string())))
}

fn named_fields(input: &DeriveInput) -> Vec<String> {
    match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields) => fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref().map(|ident| ident.to_string()))
                .collect(),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}
