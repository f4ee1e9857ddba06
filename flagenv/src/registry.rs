//! Flag registration, typed storage, and command-line parsing

use std::any::TypeId;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::error::FlagError;

/// A handle to one flag's value.
///
/// Handles are returned at registration time and share the value cell with
/// the owning [`FlagSet`], so they observe updates made later by
/// command-line parsing or environment overrides.
pub struct Flag<T> {
    cell: Rc<RefCell<T>>,
}

impl<T: Clone> Flag<T> {
    /// Returns a copy of the flag's current value.
    pub fn get(&self) -> T {
        self.cell.borrow().clone()
    }
}

impl<T> Clone for Flag<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Flag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Flag").field(&self.cell.borrow()).finish()
    }
}

/// Typed storage behind one registered flag.
trait Value {
    /// Parse `raw` and replace the current value.
    fn set(&self, name: &str, raw: &str) -> Result<(), FlagError>;

    /// Whether the flag holds a `bool`, which may be passed on the command
    /// line without a value.
    fn is_bool(&self) -> bool;
}

struct Slot<T> {
    cell: Rc<RefCell<T>>,
    parse: Box<dyn Fn(&str) -> Result<T, String>>,
}

impl<T: 'static> Value for Slot<T> {
    fn set(&self, name: &str, raw: &str) -> Result<(), FlagError> {
        let value = (self.parse)(raw).map_err(|message| FlagError::invalid::<T>(name, raw, message))?;
        *self.cell.borrow_mut() = value;
        Ok(())
    }

    fn is_bool(&self) -> bool {
        TypeId::of::<T>() == TypeId::of::<bool>()
    }
}

struct Entry {
    help: String,
    default_text: String,
    value: Box<dyn Value>,
    set: bool,
}

/// A registry of named, typed command-line flags.
///
/// Each flag carries a default value, help text, and an explicitly-set
/// marker which records whether any setter has run on it. The set also
/// records whether [`FlagSet::parse`] has completed, so callers can insist
/// on parse-before-bind ordering without hidden global state.
pub struct FlagSet {
    name: String,
    flags: BTreeMap<String, Entry>,
    parsed: bool,
}

impl FlagSet {
    /// Creates an empty flag set. The name appears in usage output.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: BTreeMap::new(),
            parsed: false,
        }
    }

    /// Registers a flag whose values are parsed with [`FromStr`], returning
    /// a handle to its value.
    ///
    /// # Panics
    ///
    /// Panics if a flag with the same name is already registered.
    pub fn flag<T>(&mut self, name: &str, default: T, help: &str) -> Flag<T>
    where
        T: FromStr + fmt::Debug + 'static,
        T::Err: fmt::Display,
    {
        self.insert(
            name,
            default,
            help,
            Box::new(|raw: &str| raw.parse::<T>().map_err(|e| e.to_string())),
        )
    }

    /// Registers a flag whose values are parsed with a custom function
    /// instead of [`FromStr`].
    ///
    /// Useful for types without a `FromStr` implementation, such as
    /// durations or JSON-encoded collections.
    ///
    /// # Panics
    ///
    /// Panics if a flag with the same name is already registered.
    pub fn flag_with<T, P, E>(&mut self, name: &str, default: T, help: &str, parse: P) -> Flag<T>
    where
        T: fmt::Debug + 'static,
        P: Fn(&str) -> Result<T, E> + 'static,
        E: fmt::Display,
    {
        self.insert(
            name,
            default,
            help,
            Box::new(move |raw| parse(raw).map_err(|e| e.to_string())),
        )
    }

    fn insert<T: fmt::Debug + 'static>(
        &mut self,
        name: &str,
        default: T,
        help: &str,
        parse: Box<dyn Fn(&str) -> Result<T, String>>,
    ) -> Flag<T> {
        assert!(
            !self.flags.contains_key(name),
            "flag '{name}' registered twice on flag set '{}'",
            self.name
        );

        let default_text = format!("{default:?}");
        let cell = Rc::new(RefCell::new(default));
        self.flags.insert(
            name.to_owned(),
            Entry {
                help: help.to_owned(),
                default_text,
                value: Box::new(Slot {
                    cell: Rc::clone(&cell),
                    parse,
                }),
                set: false,
            },
        );
        Flag { cell }
    }

    /// Sets a registered flag from its string form, marking it explicitly
    /// set.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), FlagError> {
        let entry = self
            .flags
            .get_mut(name)
            .ok_or_else(|| FlagError::Unknown {
                name: name.to_owned(),
            })?;
        entry.value.set(name, value)?;
        entry.set = true;
        Ok(())
    }

    /// Whether the named flag has been explicitly set.
    pub fn is_set(&self, name: &str) -> bool {
        self.flags.get(name).is_some_and(|entry| entry.set)
    }

    /// Whether [`FlagSet::parse`] has completed on this set.
    pub fn parsed(&self) -> bool {
        self.parsed
    }

    /// The name given to this set at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterates over every registered flag together with its set state.
    pub fn iter(&self) -> impl Iterator<Item = FlagInfo<'_>> + '_ {
        self.flags
            .iter()
            .map(|(name, entry)| FlagInfo { name, entry })
    }

    /// Parses command-line arguments, setting flags until the first
    /// positional argument or a `--` terminator. Arguments not consumed by
    /// flag parsing are returned.
    ///
    /// Flags may be passed as `-name value`, `-name=value`, or with a `--`
    /// prefix. Boolean flags may omit the value. `-h` or `--help` yields
    /// [`FlagError::Help`] unless a flag with that name is registered.
    ///
    /// The set is considered parsed once this method runs, even when it
    /// returns an error.
    pub fn parse<I, S>(&mut self, args: I) -> Result<Vec<String>, FlagError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parsed = true;

        let mut args = args.into_iter().map(Into::into);
        let mut rest = Vec::new();

        while let Some(arg) = args.next() {
            if arg == "--" {
                rest.extend(args);
                break;
            }
            let Some(stripped) = strip_dashes(&arg) else {
                // The first positional argument ends flag parsing.
                rest.push(arg);
                rest.extend(args);
                break;
            };
            let (name, inline) = match stripped.split_once('=') {
                Some((name, value)) => (name, Some(value.to_owned())),
                None => (stripped, None),
            };

            let is_bool = match self.flags.get(name) {
                Some(entry) => entry.value.is_bool(),
                None if name == "h" || name == "help" => return Err(FlagError::Help),
                None => {
                    return Err(FlagError::Unknown {
                        name: name.to_owned(),
                    })
                }
            };
            let value = match inline {
                Some(value) => value,
                None if is_bool => "true".to_owned(),
                None => args.next().ok_or_else(|| FlagError::MissingValue {
                    name: name.to_owned(),
                })?,
            };
            self.set(name, &value)?;
        }

        Ok(rest)
    }

    /// Returns usage text listing every flag with its help and default.
    pub fn usage(&self) -> String {
        let mut out = format!("Usage of {}:\n", self.name);
        for flag in self.iter() {
            out.push_str(&format!("  -{}\n", flag.name()));
            if flag.help().is_empty() {
                out.push_str(&format!("    \t(default {})\n", flag.default_text()));
            } else {
                out.push_str(&format!(
                    "    \t{} (default {})\n",
                    flag.help(),
                    flag.default_text()
                ));
            }
        }
        out
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagSet")
            .field("name", &self.name)
            .field("flags", &self.flags.keys().collect::<Vec<_>>())
            .field("parsed", &self.parsed)
            .finish()
    }
}

/// A read-only view of one registered flag.
#[derive(Clone, Copy)]
pub struct FlagInfo<'a> {
    name: &'a str,
    entry: &'a Entry,
}

impl<'a> FlagInfo<'a> {
    /// The flag's registered name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The flag's help text.
    pub fn help(&self) -> &'a str {
        &self.entry.help
    }

    /// The default value in its `Debug` rendering, for usage output.
    pub fn default_text(&self) -> &'a str {
        &self.entry.default_text
    }

    /// Whether this flag has been explicitly set.
    pub fn is_set(&self) -> bool {
        self.entry.set
    }
}

impl fmt::Debug for FlagInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagInfo")
            .field("name", &self.name)
            .field("set", &self.entry.set)
            .finish()
    }
}

/// Strips one or two leading dashes, or returns `None` for a positional
/// argument. A bare `-` is positional.
fn strip_dashes(arg: &str) -> Option<&str> {
    let stripped = arg
        .strip_prefix("--")
        .or_else(|| arg.strip_prefix('-'))?;
    if stripped.is_empty() {
        return None;
    }
    Some(stripped)
}
