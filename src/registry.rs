//! Flag registries.
//!
//! [`Registry`] is the seam between the merge engine and whatever owns the
//! host's flags. [`FlagSet`] is the bundled implementation: an ordered set of
//! typed [`Flag`]s that remembers which ones were assigned on the command line.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::error::CfgFlagsError;
use crate::flag::{Flag, FlagValue, ParseValueError};
use crate::resolve;

/// Name of the reserved flag that carries the configuration file path.
pub const CONFIG_FLAG: &str = "config";

/// Usage text of the reserved [`CONFIG_FLAG`].
pub const CONFIG_FLAG_USAGE: &str = "Configuration file path";

/// Access to a set of named flags.
///
/// Values cross this boundary as strings; the registry owns type conversion.
pub trait Registry {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Names of every registered flag.
    fn all_names(&self) -> impl Iterator<Item = &str>;

    /// Names of the flags that received a value on the command line.
    fn explicit_names(&self) -> impl Iterator<Item = &str>;

    /// String form of the flag's current value, or `None` if no such flag.
    fn current_value(&self, name: &str) -> Option<String>;

    /// Convert `value` to the flag's type and store it without marking the
    /// flag as explicitly set.
    fn set_value(&mut self, name: &str, value: &str) -> Result<(), Self::Error>;
}

/// Why [`FlagSet::set_value`] failed.
#[derive(Debug, thiserror::Error)]
pub enum SetValueError {
    #[error("no such flag: {0}")]
    NoSuchFlag(String),

    #[error(transparent)]
    Parse(#[from] ParseValueError),
}

/// An ordered collection of typed flags.
///
/// Flags are kept sorted by name. A new set always contains the reserved
/// [`CONFIG_FLAG`].
#[derive(Debug, Clone)]
pub struct FlagSet {
    name: String,
    flags: BTreeMap<String, Flag>,
    explicit: BTreeSet<String>,
}

impl FlagSet {
    pub fn new(name: &str) -> Self {
        let mut flags = BTreeMap::new();
        flags.insert(
            CONFIG_FLAG.to_string(),
            Flag::new(CONFIG_FLAG, "", CONFIG_FLAG_USAGE),
        );
        Self {
            name: name.to_string(),
            flags,
            explicit: BTreeSet::new(),
        }
    }

    /// Program name, used for the command line and template header.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a flag. The type of `default` fixes the flag's type.
    ///
    /// The name must be usable both as `--name` and as a file key: non-empty,
    /// no leading `-`, `;`, `#` or `[`, and no `=`, whitespace or control
    /// characters.
    pub fn define(
        &mut self,
        name: &str,
        default: impl Into<FlagValue>,
        usage: &str,
    ) -> Result<&mut Self, CfgFlagsError> {
        if let Err(reason) = check_name(name) {
            return Err(CfgFlagsError::InvalidFlagName {
                name: name.to_string(),
                reason,
            });
        }
        if self.flags.contains_key(name) {
            return Err(CfgFlagsError::DuplicateFlag(name.to_string()));
        }
        self.flags
            .insert(name.to_string(), Flag::new(name, default, usage));
        Ok(self)
    }

    pub fn lookup(&self, name: &str) -> Option<&Flag> {
        self.flags.get(name)
    }

    /// All flags, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = &Flag> {
        self.flags.values()
    }

    /// Assign a value as if it came from the command line.
    ///
    /// The flag is marked explicitly set, so configuration files will not
    /// override it.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), CfgFlagsError> {
        let flag = self
            .flags
            .get_mut(name)
            .ok_or_else(|| CfgFlagsError::NoSuchFlag(name.to_string()))?;
        flag.set(value).map_err(|e| CfgFlagsError::FlagConversion {
            name: name.to_string(),
            source: Box::new(e),
        })?;
        self.explicit.insert(name.to_string());
        Ok(())
    }

    /// Whether `name` was assigned on the command line.
    pub fn is_set(&self, name: &str) -> bool {
        self.explicit.contains(name)
    }

    /// Value of the reserved `config` flag (empty when not given).
    pub fn config_path(&self) -> &str {
        self.get_str(CONFIG_FLAG).unwrap_or_default()
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.lookup(name)?.value() {
            FlagValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.lookup(name)?.value() {
            FlagValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.lookup(name)?.value() {
            FlagValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn get_uint(&self, name: &str) -> Option<u64> {
        match self.lookup(name)?.value() {
            FlagValue::Uint(u) => Some(*u),
            _ => None,
        }
    }

    pub fn get_float(&self, name: &str) -> Option<f64> {
        match self.lookup(name)?.value() {
            FlagValue::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Fill flags not set on the command line from the configuration file.
    ///
    /// See [`apply`](crate::apply).
    pub fn apply(&mut self, default_path: impl AsRef<Path>) -> Result<(), CfgFlagsError> {
        resolve::apply(self, default_path)
    }
}

fn check_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("name is empty");
    }
    if name.starts_with(['-', ';', '#', '[']) {
        return Err("name starts with '-', ';', '#' or '['");
    }
    if name.contains('=') {
        return Err("name contains '='");
    }
    if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err("name contains whitespace or control characters");
    }
    Ok(())
}

impl Registry for FlagSet {
    type Error = SetValueError;

    fn all_names(&self) -> impl Iterator<Item = &str> {
        self.flags.keys().map(String::as_str)
    }

    fn explicit_names(&self) -> impl Iterator<Item = &str> {
        self.explicit.iter().map(String::as_str)
    }

    fn current_value(&self, name: &str) -> Option<String> {
        self.flags.get(name).map(|f| f.value().to_string())
    }

    fn set_value(&mut self, name: &str, value: &str) -> Result<(), SetValueError> {
        let flag = self
            .flags
            .get_mut(name)
            .ok_or_else(|| SetValueError::NoSuchFlag(name.to_string()))?;
        flag.set(value)?;
        Ok(())
    }
}
