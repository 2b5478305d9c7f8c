//! Immutable snapshot of the key-value environment.
//!
//! Pure data: the infrastructure layer gathers the `.env` file and the
//! process environment, this module layers and normalizes them once.

use std::collections::BTreeMap;

/// Normalized, read-only view of the environment for one invocation.
///
/// Empty values are dropped from every layer before merging, so a variable
/// injected as `""` behaves exactly like one that was never set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Build a snapshot from a single source.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            vars: normalize(pairs),
        }
    }

    /// Layer `.env` file values under the live process environment.
    ///
    /// The process environment wins on conflict, unless its value is empty.
    pub fn layered<F, P>(file: F, process: P) -> Self
    where
        F: IntoIterator<Item = (String, String)>,
        P: IntoIterator<Item = (String, String)>,
    {
        let mut vars = normalize(file);
        vars.extend(normalize(process));
        Self { vars }
    }

    /// Value of `key`, or `None` when unset or empty.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Whether `key` carries a non-empty value.
    #[must_use]
    pub fn is_set(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Drop empty values so downstream code sees them as unset.
pub fn normalize<I>(pairs: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    pairs.into_iter().filter(|(_, v)| !v.is_empty()).collect()
}
