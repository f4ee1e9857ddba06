//! Set unset command-line flags from environment variables
//!
//! `flagenv` fills in flags that were not passed on the command line with
//! values read from the process environment, so command-line tools get
//! environment variable overrides without hand-written per-flag lookup
//! code.
//!
//! Flags are registered on a [`FlagSet`] with a typed default, parsed from
//! command-line arguments, and then handed to [`bind_parsed`], which looks
//! up an environment variable for every flag the user left unset. Values
//! found in the environment go through the same typed parsing as
//! command-line values, and explicitly set flags are never overwritten.
//!
//! # Features
//!
//! - **Deterministic naming**: environment variable names are derived from
//!   flag names by a fixed convention, so other tools can match them
//! - **Declarative**: automatic flag registration with `#[derive(Flags)]`
//! - **Type-safe**: values are coerced through each flag's declared type
//! - **Explicit ordering**: binding refuses to run before command-line
//!   parsing, so user input always wins
//! - **Custom parsers**: flags may parse with a function instead of
//!   `FromStr`, for durations, JSON-encoded collections, and similar
//!
//! # Naming convention
//!
//! The environment variable name for a flag is the flag name with an
//! optional prefix prepended, converted to uppercase, with every `-`
//! replaced by `_`. Non-empty prefixes that do not end in `_` get one
//! appended.
//!
//! | Prefix  | Flag               | Environment variable   |
//! |---------|--------------------|------------------------|
//! | (empty) | `log-level`        | `LOG_LEVEL`            |
//! | `app`   | `host`             | `APP_HOST`             |
//! | `app_`  | `host`             | `APP_HOST`             |
//! | `SVC`   | `enable-feature-x` | `SVC_ENABLE_FEATURE_X` |
//!
//! # Example
//!
//! ```rust
//! use flagenv::{bind_parsed, FlagSet};
//!
//! # fn main() -> anyhow::Result<()> {
//! std::env::set_var("DOCS_CONFIG_FILE", "from-env.toml");
//!
//! let mut flags = FlagSet::new("demo");
//! let host = flags.flag("host", "localhost".to_string(), "server host");
//! let port = flags.flag("port", 8080u16, "server port");
//! let config = flags.flag("config-file", "config.toml".to_string(), "config file");
//!
//! // The user explicitly set one flag on the command line.
//! flags.parse(["-port=7777"])?;
//!
//! // Fill the rest from DOCS_* environment variables.
//! bind_parsed(&mut flags, "DOCS")?;
//!
//! assert_eq!(host.get(), "localhost"); // DOCS_HOST unset: default stands
//! assert_eq!(port.get(), 7777); // explicitly set: never overwritten
//! assert_eq!(config.get(), "from-env.toml"); // filled from DOCS_CONFIG_FILE
//! # std::env::remove_var("DOCS_CONFIG_FILE");
//! # Ok(())
//! # }
//! ```
//!
//! # Derive macro
//!
//! The [`Flags`] derive turns a struct into a flag set: one flag per field,
//! named after the field with `_` replaced by `-`. The generated
//! `from_args` constructor registers the flags, parses the arguments,
//! fills unset flags from the environment, and returns the populated
//! struct.
//!
//! ```rust
//! use flagenv::Flags;
//!
//! #[derive(Debug, Flags)]
//! #[flag(prefix = "DOCSAPP")]
//! struct Config {
//!     #[flag(help = "server host", default = "localhost".to_string())]
//!     pub host: String,
//!
//!     #[flag(help = "server port", default = 8080u16)]
//!     pub port: u16,
//!
//!     #[flag(help = "enable debug output")]
//!     pub debug: bool,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! std::env::set_var("DOCSAPP_PORT", "3000");
//!
//! let config = Config::from_args(["--debug"])?;
//! assert_eq!(config.host, "localhost");
//! assert_eq!(config.port, 3000);
//! assert!(config.debug);
//! # std::env::remove_var("DOCSAPP_PORT");
//! # Ok(())
//! # }
//! ```
//!
//! ## Attributes
//!
//! **Struct-level**:
//! - `#[flag(prefix = "PREFIX")]`: prefix for derived environment variable
//!   names
//!
//! **Field-level**:
//! - `#[flag(name = "flag-name")]`: custom flag name
//! - `#[flag(help = "...")]`: help text for usage output
//! - `#[flag(default = value)]`: default when neither the flag nor its
//!   environment variable is given; fields without it use
//!   `Default::default()`
//! - `#[flag(parser = "func")]`: parse with a custom function instead of
//!   `FromStr`, e.g. `serde_json::from_str`

mod bind;
mod error;
mod name;
mod registry;

pub use bind::{bind, bind_parsed};
pub use error::{BindError, FlagError};
pub use flagenv_derive::Flags;
pub use name::env_name_from_prefix;
pub use registry::{Flag, FlagInfo, FlagSet};

// Re-export for macro-generated code
#[doc(hidden)]
pub use anyhow;
