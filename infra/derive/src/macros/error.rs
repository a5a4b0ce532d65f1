use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, Type, Variant};

/// Arguments accepted by `#[satchel_error(..)]`.
#[derive(Default)]
pub struct ErrorOptions {
    fallback: Option<Ident>,
}

impl ErrorOptions {
    pub fn parse(&mut self, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("fallback") {
            self.fallback = Some(meta.value()?.parse()?);
            return Ok(());
        }
        Err(meta.error("unsupported satchel_error argument, expected `fallback = Variant`"))
    }
}

struct VariantMeta<'a> {
    ident: &'a Ident,
    source_ty: Option<&'a Type>,
    source_field: Option<&'a Ident>,
    has_context: bool,
    has_message: bool,
    cfg_attrs: Vec<Attribute>,
}

pub fn expand_derive(input: DeriveInput, options: &ErrorOptions) -> TokenStream {
    let name = &input.ident;
    let trait_name = format_ident!("{}Ext", name);

    let Data::Enum(data) = &input.data else {
        return quote! { compile_error!("satchel_error can only be applied to enums"); };
    };

    let variants: Vec<VariantMeta<'_>> = match data.variants.iter().map(parse_variant).collect() {
        Ok(v) => v,
        Err(err) => return err,
    };
    if let Some(err) = variants_error(&variants) {
        return err;
    }
    let fallback = match resolve_fallback(&variants, options) {
        Ok(f) => f,
        Err(err) => return err,
    };

    let derived_traits = derived_trait_names(&input);
    let mut derive_tokens = Vec::new();
    if !derived_traits.contains("Debug") {
        derive_tokens.push(quote! { Debug });
    }
    if !derived_traits.contains("Error") {
        derive_tokens.push(quote! { ::thiserror::Error });
    }
    let extra_derives = if derive_tokens.is_empty() {
        quote! {}
    } else {
        quote! { #[derive(#(#derive_tokens),*)] }
    };

    let context_impl = generate_context_trait(name, &trait_name, &variants);
    let from_impls = variants.iter().filter_map(|v| generate_from_impl(name, &trait_name, v));
    let fallback_impls = fallback.map(|v| generate_fallback_impls(name, v));

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #extra_derives
        #input

        #context_impl
        #(#from_impls)*
        #fallback_impls

        #[allow(dead_code)]
        fn format_context(context: &Option<std::borrow::Cow<'static, str>>) -> std::borrow::Cow<'static, str> {
            context.as_ref().map_or(std::borrow::Cow::Borrowed(""), |c| std::borrow::Cow::Owned(format!(" ({c})")))
        }
    }
}

fn parse_variant(v: &Variant) -> Result<VariantMeta<'_>, TokenStream> {
    let Fields::Named(fields) = &v.fields else {
        return Err(syn::Error::new_spanned(
            v,
            "satchel_error requires named fields so context and source can be wired",
        )
        .to_compile_error());
    };

    let context_field = find_context_field(fields)?;
    let source_field = find_source_field(fields);
    let has_message =
        fields.named.iter().any(|f| f.ident.as_ref().is_some_and(|ident| ident == "message"));
    let cfg_attrs = v.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).cloned().collect();

    Ok(VariantMeta {
        ident: &v.ident,
        source_ty: source_field.map(|field| &field.ty),
        source_field: source_field.and_then(|field| field.ident.as_ref()),
        has_context: context_field.is_some(),
        has_message,
        cfg_attrs,
    })
}

fn find_context_field(fields: &syn::FieldsNamed) -> Result<Option<&syn::Field>, TokenStream> {
    let Some(field) =
        fields.named.iter().find(|f| f.ident.as_ref().is_some_and(|ident| ident == "context"))
    else {
        return Ok(None);
    };
    if !is_context_type(&field.ty) {
        return Err(syn::Error::new_spanned(
            &field.ty,
            "context field must be Option<Cow<'static, str>>",
        )
        .to_compile_error());
    }
    Ok(Some(field))
}

fn find_source_field(fields: &syn::FieldsNamed) -> Option<&syn::Field> {
    fields.named.iter().find(|field| {
        let is_source_name = field.ident.as_ref().is_some_and(|ident| ident == "source");
        is_source_name || field_has_attr(field, "source") || field_has_attr(field, "from")
    })
}

fn resolve_fallback<'v, 'a>(
    variants: &'v [VariantMeta<'a>],
    options: &ErrorOptions,
) -> Result<Option<&'v VariantMeta<'a>>, TokenStream> {
    let Some(requested) = &options.fallback else {
        return Ok(variants.iter().find(|v| v.ident == "Internal" && v.has_message));
    };
    let Some(found) = variants.iter().find(|v| v.ident == requested) else {
        return Err(syn::Error::new_spanned(requested, "fallback variant does not exist")
            .to_compile_error());
    };
    if !found.has_message {
        return Err(syn::Error::new_spanned(
            requested,
            "fallback variant must have a `message: Cow<'static, str>` field",
        )
        .to_compile_error());
    }
    Ok(Some(found))
}

fn generate_context_trait(
    name: &Ident,
    trait_name: &Ident,
    variants: &[VariantMeta<'_>],
) -> TokenStream {
    let context_variants = variants.iter().filter(|v| v.has_context).map(|v| {
        let cfg_attrs = &v.cfg_attrs;
        let ident = v.ident;
        quote! { #(#cfg_attrs)* #name::#ident { context: c, .. } => *c = Some(context.into()), }
    });

    quote! {
        pub trait #trait_name<T> {
            /// Attaches a human readable context to the error branch.
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;

            /// Like `context`, but only builds the message when the result is an error.
            fn with_context<C, F>(self, f: F) -> Result<T, #name>
            where
                C: Into<std::borrow::Cow<'static, str>>,
                F: FnOnce() -> C;
        }

        #[automatically_derived]
        impl<T> #trait_name<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut e| {
                    match &mut e {
                        #( #context_variants )*
                        _ => {}
                    }
                    e
                })
            }

            #[inline]
            fn with_context<C, F>(self, f: F) -> Self
            where
                C: Into<std::borrow::Cow<'static, str>>,
                F: FnOnce() -> C,
            {
                match self {
                    Ok(v) => Ok(v),
                    Err(e) => Err::<T, #name>(e).context(f()),
                }
            }
        }
    }
}

fn generate_from_impl(
    name: &Ident,
    trait_name: &Ident,
    v: &VariantMeta<'_>,
) -> Option<TokenStream> {
    let source_ty = v.source_ty?;
    let source_field = v.source_field?;
    let v_ident = v.ident;
    let cfg_attrs = &v.cfg_attrs;

    Some(quote! {
        #(#cfg_attrs)*
        #[automatically_derived]
        impl From<#source_ty> for #name {
            #[inline]
            fn from(#source_field: #source_ty) -> Self { Self::#v_ident { #source_field, context: None } }
        }

        #(#cfg_attrs)*
        #[automatically_derived]
        impl<T> #trait_name<T> for std::result::Result<T, #source_ty> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> std::result::Result<T, #name> {
                self.map_err(|#source_field| #name::#v_ident { #source_field, context: Some(context.into()) })
            }

            #[inline]
            fn with_context<C, F>(self, f: F) -> std::result::Result<T, #name>
            where
                C: Into<std::borrow::Cow<'static, str>>,
                F: FnOnce() -> C,
            {
                self.map_err(|#source_field| #name::#v_ident { #source_field, context: Some(f().into()) })
            }
        }
    })
}

fn generate_fallback_impls(name: &Ident, fallback: &VariantMeta<'_>) -> TokenStream {
    let cfg_attrs = &fallback.cfg_attrs;
    let ident = fallback.ident;
    let context = if fallback.has_context { quote! { , context: None } } else { quote! {} };

    quote! {
        #(#cfg_attrs)*
        #[automatically_derived]
        impl From<&'static str> for #name {
            #[inline]
            fn from(s: &'static str) -> Self { Self::#ident { message: std::borrow::Cow::Borrowed(s) #context } }
        }
        #(#cfg_attrs)*
        #[automatically_derived]
        impl From<String> for #name {
            #[inline]
            fn from(s: String) -> Self { Self::#ident { message: std::borrow::Cow::Owned(s) #context } }
        }
    }
}

fn field_has_attr(field: &syn::Field, name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(name))
}

fn derived_trait_names(input: &DeriveInput) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                traits.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }

    traits
}

fn variants_error(variants: &[VariantMeta<'_>]) -> Option<TokenStream> {
    variants.iter().find(|v| v.source_ty.is_some() && !v.has_context).map(|v| {
        syn::Error::new_spanned(
            v.ident,
            "satchel_error requires `context: Option<Cow<'static, str>>` next to a source field",
        )
        .to_compile_error()
    })
}

/// Matches `Option<Cow<'static, str>>`, tolerating path prefixes on every segment.
fn is_context_type(ty: &Type) -> bool {
    let Some(option_args) = last_segment_args(ty, "Option") else {
        return false;
    };
    let Some(syn::GenericArgument::Type(cow)) = option_args.first() else {
        return false;
    };
    let Some(cow_args) = last_segment_args(cow, "Cow") else {
        return false;
    };
    let mut args = cow_args.iter();
    let Some(syn::GenericArgument::Lifetime(lt)) = args.next() else {
        return false;
    };
    let Some(syn::GenericArgument::Type(Type::Path(str_path))) = args.next() else {
        return false;
    };
    lt.ident == "static" && str_path.path.segments.last().is_some_and(|seg| seg.ident == "str")
}

fn last_segment_args<'t>(
    ty: &'t Type,
    expected: &str,
) -> Option<&'t syn::punctuated::Punctuated<syn::GenericArgument, syn::token::Comma>> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != expected {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    Some(&args.args)
}
