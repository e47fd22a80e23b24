//! Environment variables behind a trait, so that code reading them can be tested with a fixed
//! set of variables.

use crate::Os;
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Separator between directories in a path on the current OS.
pub const DIR_SEPARATOR: char = Os::CURRENT.dir_separator();

/// Separator between entries of a path list on the current OS.
pub const PATH_SEPARATOR: char = Os::CURRENT.path_separator();

/// A set of environment variables.
///
/// Keys are case-insensitive for [`get`](Environment::get): `path`, `Path` and `PATH` name the
/// same variable. [`get_all`](Environment::get_all) reports keys with their original case.
pub trait Environment {
    /// Returns the value of `key`, if set.
    fn get(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value`.
    fn set(&mut self, key: &str, value: &str);

    /// Returns every variable, keyed with its original case.
    fn get_all(&self) -> BTreeMap<String, String>;

    /// Directory for temporary files: `TMPDIR`, `TEMP` or `TMP`, falling back to `/tmp`.
    fn temp_path(&self) -> String {
        self.get("TMPDIR")
            .or_else(|| self.get("TEMP"))
            .or_else(|| self.get("TMP"))
            .unwrap_or_else(|| String::from("/tmp"))
    }

    /// Home directory of the current user.
    ///
    /// Uses `HOMEDRIVE` + `HOMEPATH` when both are set, then `HOMEPATH`, then `HOME`, and
    /// finally falls back to [`temp_path`](Environment::temp_path).
    fn user_home(&self) -> String {
        match (self.get("HOMEDRIVE"), self.get("HOMEPATH")) {
            (Some(drive), Some(path)) => format!("{drive}{path}"),
            (None, Some(path)) => path,
            _ => self.get("HOME").unwrap_or_else(|| self.temp_path()),
        }
    }

    /// Replaces `~` with the user home and `%NAME%` with the value of `NAME`.
    ///
    /// Variables that are not set expand to the empty string.
    fn expand(&self, text: &str) -> String {
        let Some(pattern) = expand_pattern() else {
            return text.to_owned();
        };
        pattern
            .replace_all(text, |caps: &Captures<'_>| match caps.get(1) {
                Some(name) => self.get(name.as_str()).unwrap_or_default(),
                None => self.user_home(),
            })
            .into_owned()
    }
}

fn expand_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"~|%(\w+)%").ok())
        .as_ref()
}

fn normalize(key: &str) -> String {
    key.trim().to_uppercase()
}

/// Variables with their original keys, plus an index by normalized key.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct VarTable {
    entries: BTreeMap<String, String>,
    normalized: BTreeMap<String, String>,
}

impl VarTable {
    fn insert(&mut self, key: String, value: String) {
        self.normalized.insert(normalize(&key), value.clone());
        self.entries.insert(key, value);
    }

    fn get(&self, key: &str) -> Option<&String> {
        self.normalized.get(&normalize(key))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VarTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = VarTable::default();
        for (key, value) in iter {
            table.insert(key.into(), value.into());
        }
        table
    }
}

/// The process environment, with a table of local overrides.
///
/// The process variables are read once, when the value is created. [`Environment::set`]
/// never touches the real process environment: it records an override local to this value,
/// which takes precedence over the process variable of the same name.
#[derive(Clone, Debug)]
pub struct SystemEnvironment {
    vars: VarTable,
    overrides: VarTable,
}

impl SystemEnvironment {
    /// Snapshots the variables of the current process.
    ///
    /// Keys and values that are not valid Unicode are converted lossily.
    pub fn new() -> Self {
        Self::from_vars(std::env::vars_os().map(|(key, value)| {
            (
                key.to_string_lossy().into_owned(),
                value.to_string_lossy().into_owned(),
            )
        }))
    }

    /// Uses `vars` in place of the process variables.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars.into_iter().collect(),
            overrides: VarTable::default(),
        }
    }

    /// Variables set through [`Environment::set`], keyed with their original case.
    pub fn overrides(&self) -> &BTreeMap<String, String> {
        &self.overrides.entries
    }
}

impl Default for SystemEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for SystemEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        self.overrides
            .get(key)
            .or_else(|| self.vars.get(key))
            .cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        tracing::trace!(key, "overriding environment variable");
        self.overrides.insert(key.to_owned(), value.to_owned());
    }

    fn get_all(&self) -> BTreeMap<String, String> {
        let mut all = self.vars.entries.clone();
        for (key, value) in &self.overrides.entries {
            let normalized = normalize(key);
            all.retain(|existing, _| normalize(existing) != normalized);
            all.insert(key.clone(), value.clone());
        }
        all
    }
}

/// An environment made only of the variables it was given.
///
/// ```
/// use platform_bytes::{CustomEnvironment, Environment};
///
/// let env: CustomEnvironment = [("HOME", "/home/ferris")].into_iter().collect();
/// assert_eq!(env.get("home").as_deref(), Some("/home/ferris"));
/// assert_eq!(env.expand("~/src"), "/home/ferris/src");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CustomEnvironment {
    vars: VarTable,
}

impl CustomEnvironment {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CustomEnvironment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

impl Environment for CustomEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_owned(), value.to_owned());
    }

    fn get_all(&self) -> BTreeMap<String, String> {
        self.vars.entries.clone()
    }
}
