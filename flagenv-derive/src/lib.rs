//! Derive macro implementation for flagenv

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type};

mod attrs;

use attrs::FieldAttrs;

/// Converts a CamelCase identifier to a kebab-case name.
fn kebab_case(ident: &str) -> String {
    let mut out = String::new();
    for (i, ch) in ident.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Whether a type is `Option<T>`.
fn is_option(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty {
        type_path
            .path
            .segments
            .last()
            .map(|seg| seg.ident == "Option")
            .unwrap_or(false)
    } else {
        false
    }
}

/// `Flags` derive macro
///
/// Implements `from_args()` and `from_os_args()` constructors which
/// register one command-line flag per field, parse the given arguments,
/// and fill flags left unset from environment variables.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[flag(prefix = "PREFIX")]`: prefix for derived environment variable
///   names
///
/// **Field-level**:
/// - `#[flag(name = "flag-name")]`: custom flag name
/// - `#[flag(help = "...")]`: help text for usage output
/// - `#[flag(default = value)]`: explicit default value; fields without it
///   use `Default::default()`
/// - `#[flag(parser = "func")]`: use a custom parse function instead of
///   `FromStr`
///
/// # Example
///
/// See the `flagenv` crate documentation for usage examples.
#[proc_macro_derive(Flags, attributes(flag))]
pub fn derive_flags(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    // Struct name
    let struct_name = &input.ident;

    // Parse struct-level attributes (prefix)
    let mut prefix = String::new();

    for attr in &input.attrs {
        if !attr.path().is_ident("flag") {
            continue;
        }

        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("prefix") {
                let value = meta.value()?;
                let lit: syn::Lit = value.parse()?;
                if let syn::Lit::Str(s) = lit {
                    prefix = s.value();
                }
                return Ok(());
            }

            Err(meta.error("unsupported struct-level flag attribute"))
        });
    }

    // Extract fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(
                    &input,
                    "Flags only supports structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(&input, "Flags only supports structs")
                .to_compile_error()
                .into();
        }
    };

    let set_name = kebab_case(&struct_name.to_string());

    // Generate registration and initialization code for each field
    let mut registrations = Vec::new();
    let mut initializers = Vec::new();

    for field in fields {
        let field_name = field.ident.as_ref().unwrap();
        let field_type = &field.ty;

        // Parse attributes
        let field_attrs = FieldAttrs::from_field(field);

        if is_option(field_type) {
            return syn::Error::new_spanned(
                field,
                "Option<T> fields are not supported, flags always carry a value",
            )
            .to_compile_error()
            .into();
        }

        // Determine the flag name
        let flag_name = field_attrs
            .name
            .unwrap_or_else(|| field_name.to_string().replace('_', "-"));

        let help = field_attrs.help.unwrap_or_default();

        let default_expr = match field_attrs.default {
            Some(Some(expr)) => quote! { #expr },
            _ => quote! { <#field_type as ::std::default::Default>::default() },
        };

        let handle = format_ident!("__flag_{}", field_name);

        let registration = if let Some(parser_path) = field_attrs.parser {
            let parser: proc_macro2::TokenStream = match parser_path.parse() {
                Ok(tokens) => tokens,
                Err(_) => {
                    return syn::Error::new_spanned(
                        field,
                        "parser attribute is not a valid function path",
                    )
                    .to_compile_error()
                    .into();
                }
            };

            quote! {
                let #handle: ::flagenv::Flag<#field_type> = __flags.flag_with(
                    #flag_name,
                    #default_expr,
                    #help,
                    |__raw: &str| #parser(__raw),
                );
            }
        } else {
            quote! {
                let #handle: ::flagenv::Flag<#field_type> =
                    __flags.flag(#flag_name, #default_expr, #help);
            }
        };

        registrations.push(registration);
        initializers.push(quote! { #field_name: #handle.get() });
    }

    // Generate the from_args() and from_os_args() constructors
    let expanded = quote! {
        impl #struct_name {
            /// Registers one flag per field, parses `args`, then fills
            /// flags left unset from environment variables.
            ///
            /// # Errors
            ///
            /// - An argument names an unknown flag or omits a required value
            /// - A command-line or environment value cannot be parsed into
            ///   the field's type
            pub fn from_args<I, S>(args: I) -> ::flagenv::anyhow::Result<Self>
            where
                I: ::std::iter::IntoIterator<Item = S>,
                S: ::std::convert::Into<::std::string::String>,
            {
                let mut __flags = ::flagenv::FlagSet::new(#set_name);
                #(#registrations)*
                __flags.parse(args)?;
                ::flagenv::bind_parsed(&mut __flags, #prefix)?;
                Ok(Self {
                    #(#initializers),*
                })
            }

            /// Like `from_args`, reading the process arguments.
            pub fn from_os_args() -> ::flagenv::anyhow::Result<Self> {
                Self::from_args(::std::env::args().skip(1))
            }
        }
    };

    TokenStream::from(expanded)
}
