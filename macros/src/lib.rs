use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, FieldsNamed, LitStr};

/// Derive macro for implementing `IntoProps`
///
/// Every named field becomes an attribute, in declaration order, keyed by the
/// field name. Field types must convert into `AttrValue`; the children field
/// must convert into `Child`.
///
/// # Examples
///
/// ```ignore
/// use html_jsx::{jsx, IntoProps};
///
/// #[derive(IntoProps)]
/// struct LinkProps {
///     href: String,
///     #[props(rename = "class")]
///     class_name: Option<String>,
///     #[props(rename = "data-id")]
///     id: u32,
///     #[props(skip)]
///     analytics_key: String,
///     #[props(children)]
///     label: String,
/// }
///
/// let html = jsx("a", LinkProps { /* ... */ });
/// ```
#[proc_macro_derive(IntoProps, attributes(props))]
pub fn derive_into_props(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_into_props_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate_into_props_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let data = match &input.data {
        Data::Struct(data) => data,
        _ => return Err(syn::Error::new_spanned(input, "IntoProps can only be derived for structs")),
    };

    let fields = match &data.fields {
        Fields::Named(fields) => fields,
        Fields::Unnamed(_) => return Err(syn::Error::new_spanned(input, "IntoProps requires named fields")),
        Fields::Unit => {
            return Ok(quote! {
                impl #impl_generics html_jsx::IntoProps for #name #ty_generics #where_clause {
                    fn into_props(self) -> html_jsx::Props {
                        html_jsx::Props::new()
                    }
                }
            })
        }
    };

    let (inserts, attr_count) = generate_attribute_inserts(fields)?;
    let children = generate_children_assignment(fields)?;

    Ok(quote! {
        impl #impl_generics html_jsx::IntoProps for #name #ty_generics #where_clause {
            fn into_props(self) -> html_jsx::Props {
                let mut props = html_jsx::Props::with_capacity(#attr_count);
                #inserts
                #children
                props
            }
        }
    })
}

fn generate_attribute_inserts(fields: &FieldsNamed) -> syn::Result<(TokenStream2, usize)> {
    let mut inserts = Vec::new();

    for field in &fields.named {
        let attrs = parse_field_attributes(&field.attrs)?;
        if attrs.skip || attrs.children {
            continue;
        }

        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;

        // r#type becomes "type"
        let key = attrs
            .rename
            .unwrap_or_else(|| field_name.to_string().trim_start_matches("r#").to_string());

        if key == "children" {
            return Err(syn::Error::new_spanned(
                field,
                "use #[props(children)] instead of naming an attribute `children`",
            ));
        }

        inserts.push(quote! {
            props.insert(#key, self.#field_name);
        });
    }

    let count = inserts.len();
    Ok((quote! { #(#inserts)* }, count))
}

fn generate_children_assignment(fields: &FieldsNamed) -> syn::Result<TokenStream2> {
    let mut children_field = None;

    for field in &fields.named {
        let attrs = parse_field_attributes(&field.attrs)?;
        if !attrs.children || attrs.skip {
            continue;
        }
        if children_field.is_some() {
            return Err(syn::Error::new_spanned(field, "only one field can be #[props(children)]"));
        }
        children_field = field.ident.as_ref();
    }

    Ok(match children_field {
        Some(field_name) => quote! {
            props.set_children(self.#field_name);
        },
        None => quote! {},
    })
}

#[derive(Default)]
struct FieldAttributes {
    skip: bool,
    children: bool,
    rename: Option<String>,
}

fn parse_field_attributes(attrs: &[Attribute]) -> syn::Result<FieldAttributes> {
    let mut result = FieldAttributes::default();

    for attr in attrs {
        if !attr.path().is_ident("props") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                result.skip = true;
                Ok(())
            } else if meta.path.is_ident("children") {
                result.children = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                result.rename = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("Invalid props attribute; expected `skip`, `children` or `rename = \"...\"`"))
            }
        })?;
    }

    Ok(result)
}
