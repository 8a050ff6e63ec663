//! Composition of the inherited process environment with synthesized vars.

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use crate::env::EnvVar;

/// The environment handed to the child process.
///
/// Two ordered sequences: what the launcher inherited, then what it
/// synthesized from the runtime configuration. Nothing is deduplicated until
/// [`resolved`](Environment::resolved) is called, where the last occurrence
/// of a key wins.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    inherited: Vec<(OsString, OsString)>,
    synthesized: Vec<EnvVar>,
}

impl Environment {
    pub fn new(
        inherited: impl IntoIterator<Item = (OsString, OsString)>,
        synthesized: Vec<EnvVar>,
    ) -> Self {
        Self {
            inherited: inherited.into_iter().collect(),
            synthesized,
        }
    }

    /// Start from the current process environment.
    pub fn from_process(synthesized: Vec<EnvVar>) -> Self {
        Self::new(std::env::vars_os(), synthesized)
    }

    pub fn synthesized(&self) -> &[EnvVar] {
        &self.synthesized
    }

    /// Inherited entries followed by synthesized ones, duplicates included.
    pub fn entries(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.inherited
            .iter()
            .map(|(k, v)| (k.as_os_str(), v.as_os_str()))
            .chain(
                self.synthesized
                    .iter()
                    .map(|var| (OsStr::new(&var.key), OsStr::new(&var.value))),
            )
    }

    /// One entry per key. A key keeps the position of its first occurrence
    /// and the value of its last.
    pub fn resolved(&self) -> Vec<(OsString, OsString)> {
        let mut index: HashMap<&OsStr, usize> = HashMap::new();
        let mut resolved: Vec<(&OsStr, &OsStr)> = Vec::new();

        for (key, value) in self.entries() {
            match index.get(key) {
                Some(&i) => resolved[i].1 = value,
                None => {
                    index.insert(key, resolved.len());
                    resolved.push((key, value));
                }
            }
        }

        resolved
            .into_iter()
            .map(|(k, v)| (k.to_os_string(), v.to_os_string()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inherited.len() + self.synthesized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
