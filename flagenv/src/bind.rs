//! Filling unset flags from environment variables

use std::env;

use crate::error::BindError;
use crate::name::env_name_from_prefix;
use crate::registry::FlagSet;

/// Sets every flag in `flags` that has not been explicitly set, using the
/// value of its corresponding environment variable, when one exists.
///
/// The environment variable name for each flag is derived with
/// [`env_name_from_prefix`]: the flag name with the optional prefix
/// prepended, uppercased, and with every `-` replaced by `_`.
///
/// Flags without a matching environment variable keep their defaults.
/// Values found in the environment go through the flag's typed setter; the
/// pass stops at the first value the setter rejects, and overrides applied
/// before that point are not rolled back.
///
/// # Example
///
/// ```rust
/// use flagenv::{bind, FlagSet};
///
/// std::env::set_var("BINDDOC_RETRIES", "5");
///
/// let mut flags = FlagSet::new("demo");
/// let retries = flags.flag("retries", 3u32, "retry count");
/// let host = flags.flag("host", "localhost".to_string(), "server host");
///
/// bind(&mut flags, "BINDDOC").unwrap();
///
/// // BINDDOC_RETRIES overrides the default.
/// assert_eq!(retries.get(), 5);
/// // BINDDOC_HOST is not set, so the default stands.
/// assert_eq!(host.get(), "localhost");
/// # std::env::remove_var("BINDDOC_RETRIES");
/// ```
pub fn bind(flags: &mut FlagSet, prefix: &str) -> Result<(), BindError> {
    let to_env = env_name_from_prefix(prefix);

    // The unset names are computed fresh on every call, from the registry's
    // own per-entry set state.
    let unset: Vec<String> = flags
        .iter()
        .filter(|flag| !flag.is_set())
        .map(|flag| flag.name().to_owned())
        .collect();

    for flag_name in unset {
        let env_name = to_env(&flag_name);
        if let Ok(value) = env::var(&env_name) {
            if let Err(source) = flags.set(&flag_name, &value) {
                return Err(BindError::Override {
                    flag: flag_name,
                    env_name,
                    source,
                });
            }
        }
    }
    Ok(())
}

/// Like [`bind`], but insists that command-line parsing has already
/// happened, so that the explicitly-set state reflects actual user input
/// rather than an empty initial state.
///
/// Returns [`BindError::NotParsed`] without touching the environment if
/// [`FlagSet::parse`] has not run on `flags`.
pub fn bind_parsed(flags: &mut FlagSet, prefix: &str) -> Result<(), BindError> {
    if !flags.parsed() {
        return Err(BindError::NotParsed);
    }
    bind(flags, prefix)
}
