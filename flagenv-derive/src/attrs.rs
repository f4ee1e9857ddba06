//! Attribute parsing for `#[flag(...)]` annotations.
//!
//! This module extracts and validates flag options from struct fields
//! during macro expansion.

use syn::{Expr, Field, Lit};

/// Parsed `#[flag(...)]` attributes from a struct field.
///
/// Represents all options that can be specified on individual fields of a
/// `Flags`-derived struct.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Custom flag name override.
    ///
    /// If `None`, the field name is converted to kebab-case.
    pub name: Option<String>,

    /// Help text shown in usage output.
    pub help: Option<String>,

    /// Default value strategy:
    /// - `None`: Use `Default::default()`
    /// - `Some(None)`: Use `Default::default()` (explicit bare `default`)
    /// - `Some(Some(expr))`: Use the given expression as the default value
    pub default: Option<Option<Expr>>,

    /// Custom parser function path (e.g., `"serde_json::from_str"`).
    ///
    /// When specified, bypasses `FromStr` and uses this function instead.
    pub parser: Option<String>,
}

impl FieldAttrs {
    /// Extract and parse `#[flag(...)]` attributes from a struct field.
    ///
    /// Silently ignores unrecognized attributes to allow other macros to
    /// process them.
    pub fn from_field(field: &Field) -> Self {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("flag") {
                continue;
            }

            // Parse #[flag(...)] contents
            let _ = attr.parse_nested_meta(|meta| {
                // name = "..."
                if meta.path.is_ident("name") {
                    let value = meta.value()?;
                    let name: Lit = value.parse()?;
                    if let Lit::Str(s) = name {
                        attrs.name = Some(s.value());
                    }
                    return Ok(());
                }

                // help = "..."
                if meta.path.is_ident("help") {
                    let value = meta.value()?;
                    let help: Lit = value.parse()?;
                    if let Lit::Str(s) = help {
                        attrs.help = Some(s.value());
                    }
                    return Ok(());
                }

                // default or default = value
                if meta.path.is_ident("default") {
                    if meta.input.peek(syn::Token![=]) {
                        // default = value - explicit value
                        let value = meta.value()?;
                        let expr: Expr = value.parse()?;
                        attrs.default = Some(Some(expr));
                    } else {
                        // default - use Default::default()
                        attrs.default = Some(None);
                    }
                    return Ok(());
                }

                // parser = "function::path"
                if meta.path.is_ident("parser") {
                    let value = meta.value()?;
                    let func: Lit = value.parse()?;
                    if let Lit::Str(s) = func {
                        attrs.parser = Some(s.value());
                    }
                    return Ok(());
                }

                Err(meta.error("unsupported flag attribute"))
            });
        }

        attrs
    }
}
