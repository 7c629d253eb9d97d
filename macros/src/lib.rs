use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Turn a struct with exactly three named fields into a color model.
///
/// The fields are made public, the usual derives are added and the struct
/// gets a `new` constructor, conversions to and from
/// `crate::color::Components` and `[Component; 3]`, and an implementation of
/// `crate::models::Model`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !matches!(input.fields, syn::Fields::Named(_)) || input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 named fields, one for each channel of the color.");
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.");
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Channels are always accessible.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = match syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Copy, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
    }) {
        Ok(attr) => attr,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color from its three channels.
            pub const fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }
        }

        impl From<crate::color::Components> for #struct_name {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl From<[crate::color::Component; 3]> for #struct_name {
            fn from(value: [crate::color::Component; 3]) -> Self {
                Self::new(value[0], value[1], value[2])
            }
        }

        impl From<#struct_name> for [crate::color::Component; 3] {
            fn from(value: #struct_name) -> Self {
                [value.#field1, value.#field2, value.#field3]
            }
        }

        impl crate::models::Model for #struct_name {
            fn from_components(components: crate::color::Components) -> Self {
                Self::from(components)
            }

            fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
