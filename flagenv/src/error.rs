//! Error types for flag registration and environment binding

/// Errors that can occur when setting or parsing flags.
///
/// This error type covers failures of the registry itself: references to
/// flags that were never registered, command-line arguments that omit a
/// required value, and string values that cannot be coerced into a flag's
/// declared type.
#[derive(Debug, thiserror::Error)]
pub enum FlagError {
    /// A flag name was used that is not registered on the set.
    #[error("flag provided but not defined: '{name}'")]
    Unknown {
        /// Name of the unregistered flag
        name: String,
    },

    /// A flag that takes a value was passed without one.
    ///
    /// Occurs during command-line parsing when a non-boolean flag appears
    /// as the final argument with no value following it.
    #[error("flag '{name}' needs an argument")]
    MissingValue {
        /// Name of the flag missing its value
        name: String,
    },

    /// A string value could not be parsed into the flag's declared type.
    ///
    /// Occurs when the value cannot be converted to the flag's type, either
    /// via `FromStr` or a custom parse function.
    #[error("invalid value '{value}' for flag '{name}': failed to parse as {type_name}: {message}")]
    Invalid {
        /// Name of the flag being set
        name: String,
        /// The rejected string value
        value: String,
        /// Fully qualified type name that parsing was attempted for
        type_name: String,
        /// Error message from the parser (FromStr or custom function)
        message: String,
    },

    /// `-h` or `--help` was passed and no flag with that name is registered.
    #[error("help requested")]
    Help,
}

impl FlagError {
    /// Create an invalid-value error carrying the target type's name.
    pub(crate) fn invalid<T>(
        name: impl Into<String>,
        value: impl Into<String>,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::Invalid {
            name: name.into(),
            value: value.into(),
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }
}

/// Errors that can occur when filling unset flags from the environment.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// [`bind_parsed`](crate::bind_parsed) was called before
    /// [`FlagSet::parse`](crate::FlagSet::parse).
    ///
    /// Reported immediately; no environment lookups are performed and no
    /// flags are mutated.
    #[error("command-line arguments not yet parsed, FlagSet::parse should be called first")]
    NotParsed,

    /// An environment variable's value was rejected by the flag's typed
    /// setter.
    ///
    /// Flags overridden before the failing one keep their new values;
    /// flags not yet reached keep their defaults.
    #[error("unable to set flag '{flag}' from environment variable '{env_name}': {source}")]
    Override {
        /// Name of the flag that could not be set
        flag: String,
        /// Derived name of the environment variable holding the value
        env_name: String,
        /// Underlying coercion failure
        source: FlagError,
    },
}
