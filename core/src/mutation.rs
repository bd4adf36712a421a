//! The per-test-case mutation map.

use crate::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Replacement values for one fuzz case, keyed by qualified element name.
///
/// Built and owned by whoever drives the fuzz iteration. Elements only read
/// it: an element whose qualified name is absent renders its original value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mutation {
    mutations: BTreeMap<String, Value>,
}

impl Mutation {
    /// Create an empty mutation (every element renders its original value).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mutation replacing exactly one element.
    pub fn single(qualified_name: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut mutation = Self::new();
        mutation.insert(qualified_name, value);
        mutation
    }

    /// Add a replacement, returning self for chaining.
    pub fn with(mut self, qualified_name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(qualified_name, value);
        self
    }

    /// Add or overwrite a replacement.
    pub fn insert(&mut self, qualified_name: impl Into<String>, value: impl Into<Value>) {
        self.mutations.insert(qualified_name.into(), value.into());
    }

    /// Get the replacement for a qualified name.
    pub fn get(&self, qualified_name: &str) -> Option<&Value> {
        self.mutations.get(qualified_name)
    }

    /// Returns true if the qualified name is addressed.
    pub fn contains(&self, qualified_name: &str) -> bool {
        self.mutations.contains_key(qualified_name)
    }

    /// Combine with another mutation. Entries in `other` win on conflict.
    pub fn merge(mut self, other: Mutation) -> Self {
        self.mutations.extend(other.mutations);
        self
    }

    /// Number of addressed elements.
    pub fn len(&self) -> usize {
        self.mutations.len()
    }

    /// Returns true if no element is addressed.
    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }

    /// Addressed qualified names, in sorted order.
    pub fn qualified_names(&self) -> impl Iterator<Item = &str> {
        self.mutations.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Mutation {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mutation = Self::new();
        for (k, v) in iter {
            mutation.insert(k, v);
        }
        mutation
    }
}

/// Helper macro to build a `Mutation`.
#[macro_export]
macro_rules! mutation {
    () => {
        $crate::Mutation::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut mutation = $crate::Mutation::new();
            $(
                mutation.insert($key, $crate::Value::from($value));
            )+
            mutation
        }
    };
}
