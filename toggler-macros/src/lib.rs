use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Field, Fields, GenericArgument, Index, Member, PathArguments, Type,
    parse_macro_input, spanned::Spanned,
};

/// Derive macro for implementing `FeatureState`.
///
/// Uses the field marked `#[feature_state]`, or else the only field whose
/// type is `FeatureBase<P>`.
///
/// ```rust,ignore
/// #[derive(toggler::FeatureState)]
/// struct Credits {
///     base: FeatureBase<CreditsPayload>,
///     shown: bool,
/// }
/// ```
#[proc_macro_derive(FeatureState, attributes(feature_state))]
pub fn derive_feature_state(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match feature_state_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn feature_state_impl(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "FeatureState can only be derived for structs",
        ));
    };

    let (member, field) = state_field(&data.fields, name)?;
    let payload = payload_type(&field.ty)?;

    Ok(quote! {
        impl #impl_generics ::toggler::FeatureState for #name #ty_generics #where_clause {
            type Payload = #payload;

            fn state(&self) -> &::toggler::FeatureBase<Self::Payload> {
                &self.#member
            }

            fn state_mut(&mut self) -> &mut ::toggler::FeatureBase<Self::Payload> {
                &mut self.#member
            }
        }
    })
}

/// Picks the field holding the feature state.
fn state_field<'a>(fields: &'a Fields, name: &syn::Ident) -> syn::Result<(Member, &'a Field)> {
    let members = fields.iter().enumerate().map(|(i, field)| {
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(i)),
        };
        (member, field)
    });

    let marked: Vec<_> = members
        .clone()
        .filter(|(_, field)| {
            field
                .attrs
                .iter()
                .any(|attr| attr.path().is_ident("feature_state"))
        })
        .collect();

    let candidates = if marked.is_empty() {
        members
            .filter(|(_, field)| is_feature_base(&field.ty))
            .collect()
    } else {
        marked
    };

    match <[_; 1]>::try_from(candidates) {
        Ok([found]) => Ok(found),
        Err(candidates) if candidates.is_empty() => Err(syn::Error::new_spanned(
            name,
            "no `FeatureBase<P>` field found; mark one with #[feature_state]",
        )),
        Err(candidates) => Err(syn::Error::new(
            candidates[1].1.span(),
            "more than one feature state field; mark one with #[feature_state]",
        )),
    }
}

fn is_feature_base(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "FeatureBase"),
        _ => false,
    }
}

/// Extracts `P` from `FeatureBase<P>`.
fn payload_type(ty: &Type) -> syn::Result<&Type> {
    let Type::Path(path) = ty else {
        return Err(syn::Error::new_spanned(ty, "expected `FeatureBase<P>`"));
    };
    let segment = path
        .path
        .segments
        .last()
        .ok_or_else(|| syn::Error::new_spanned(ty, "expected `FeatureBase<P>`"))?;

    if let PathArguments::AngleBracketed(args) = &segment.arguments {
        for arg in &args.args {
            if let GenericArgument::Type(payload) = arg {
                return Ok(payload);
            }
        }
    }
    Err(syn::Error::new_spanned(
        ty,
        "feature state field must be `FeatureBase<P>` with an explicit payload type",
    ))
}
