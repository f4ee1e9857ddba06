//! Environment variable name derivation

/// Returns a function which generates environment variable names from flag
/// names, using an optional prefix.
///
/// The prefix is normalized once: a `_` separator is appended to non-empty
/// prefixes that do not already end in one. The generated name is the
/// normalized prefix followed by the flag name, with every `-` replaced by
/// `_`, converted to uppercase.
///
/// This is a pure function of its inputs; re-deriving a name always
/// produces the same result.
///
/// # Example
///
/// ```rust
/// let to_env = flagenv::env_name_from_prefix("app");
/// assert_eq!(to_env("log-level"), "APP_LOG_LEVEL");
/// assert_eq!(to_env("host"), "APP_HOST");
/// ```
pub fn env_name_from_prefix(prefix: &str) -> impl Fn(&str) -> String {
    let mut prefix = prefix.to_owned();
    if !prefix.is_empty() && !prefix.ends_with('_') {
        prefix.push('_');
    }
    move |flag_name: &str| {
        format!("{prefix}{flag_name}")
            .replace('-', "_")
            .to_uppercase()
    }
}
