use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Expr, Fields, Result};

/// The `message`, `labels`, and `help` expressions given to the `error` attribute.
#[derive(Default)]
struct ReportParts {
    message: Option<Expr>,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl ReportParts {
    /// Reads the parts from the first `error` attribute, if there is one.
    fn from_attrs(input: &DeriveInput) -> Result<Self> {
        let mut parts = Self::default();
        let Some(attr) = input.attrs.iter().find(|attr| attr.path().is_ident("error")) else {
            return Ok(parts);
        };

        attr.parse_nested_meta(|meta| {
            let slot = if meta.path.is_ident("message") {
                &mut parts.message
            } else if meta.path.is_ident("labels") {
                &mut parts.labels
            } else if meta.path.is_ident("help") {
                &mut parts.help
            } else {
                return Err(meta.error("expected `message`, `labels`, or `help`"));
            };
            *slot = Some(meta.value()?.parse()?);
            Ok(())
        })?;

        Ok(parts)
    }
}

/// Generates the body of the `ErrorKind` impl for the given struct.
pub fn expand(input: &DeriveInput) -> Result<TokenStream2> {
    let name = &input.ident;
    let bindings = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => {
                let names = fields.named.iter().map(|field| &field.ident);
                quote! { let #name { #(#names),* } = self; }
            },
            Fields::Unit => quote! {},
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(name, "`ErrorKind` cannot be derived for tuple structs"));
            },
        },
        _ => return Err(syn::Error::new_spanned(name, "`ErrorKind` can only be derived for structs")),
    };

    let parts = ReportParts::from_attrs(input)?;
    let message = parts.message.map_or_else(|| quote! { "an error occurred" }, |e| quote! { #e });
    let labels = parts.labels.map_or_else(|| quote! { [""] }, |e| quote! { #e });
    let help = parts.help.map(|e| quote! { builder.set_help(#e); });

    Ok(quote! {
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[std::ops::Range<usize>],
        ) -> ariadne::Report<'a, (&'a str, std::ops::Range<usize>)> {
            #[allow(unused_variables)]
            #bindings

            let offset = spans.first().map_or(0, |span| span.start);
            let labels = #labels.into_iter().zip(spans).map(|(text, span)| {
                let text = text.to_string();
                let label = ariadne::Label::new((src_id, span.clone())).with_color(symba_error::EXPR);
                if text.is_empty() { label } else { label.with_message(text) }
            });

            #[allow(unused_mut)]
            let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                .with_message(#message)
                .with_labels(labels);
            #help
            builder.finish()
        }
    })
}
