//! Naming and cursor state shared by every element variant.

use fuzzable_core::{qualify, Mutation, Value, NAME_COUNTER};
use std::cell::OnceCell;
use tracing::trace;

/// Lazy, single-pass sequence of mutation descriptors.
pub type Mutations<'a> = Box<dyn Iterator<Item = Mutation> + 'a>;

/// State every fuzzable variant embeds.
///
/// Holds the name, the context path set by a parent during assembly, the
/// fuzzable flag and the legacy mutant index. Variants expose it through
/// `Fuzzable::element` and get naming and the legacy cursor for free.
#[derive(Debug, Clone)]
pub struct Element {
    /// Variant name used as the prefix of auto-generated names.
    type_name: &'static str,
    /// Set explicitly or drawn from the global counter on first read.
    name: OnceCell<String>,
    /// Dotted path of the containing structure.
    context_path: Option<String>,
    /// Whether this element participates in mutation.
    fuzzable: bool,
    /// 0 renders the original value, n renders the n-th mutation.
    mutant_index: usize,
}

impl Element {
    /// Create an unnamed, fuzzable element of the given variant.
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            name: OnceCell::new(),
            context_path: None,
            fuzzable: true,
            mutant_index: 0,
        }
    }

    /// Create an explicitly named, fuzzable element.
    pub fn named(type_name: &'static str, name: impl Into<String>) -> Self {
        Self::new(type_name).with_name(name)
    }

    /// Set an explicit name. Has no effect once the name has been read.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        if let Err(ignored) = self.name.set(name.into()) {
            trace!(name = %self.name(), %ignored, "name already fixed, ignoring late name");
        }
        self
    }

    /// Set the fuzzable flag.
    pub fn with_fuzzable(mut self, fuzzable: bool) -> Self {
        self.fuzzable = fuzzable;
        self
    }

    /// Element name, stable once read.
    pub fn name(&self) -> &str {
        self.name.get_or_init(|| NAME_COUNTER.auto_name(self.type_name))
    }

    pub fn context_path(&self) -> Option<&str> {
        self.context_path.as_deref()
    }

    /// Overwrites any previous path. No validation.
    pub fn set_context_path(&mut self, context_path: Option<String>) {
        self.context_path = context_path;
    }

    /// `context_path.name`, or just `name` without a path.
    pub fn qualified_name(&self) -> String {
        qualify([self.context_path(), Some(self.name())])
    }

    pub fn fuzzable(&self) -> bool {
        self.fuzzable
    }

    pub fn mutant_index(&self) -> usize {
        self.mutant_index
    }

    /// Step the legacy cursor toward `limit`.
    ///
    /// Returns false without moving once the index has reached `limit`.
    pub fn advance(&mut self, limit: usize) -> bool {
        if self.mutant_index < limit {
            self.mutant_index += 1;
            true
        } else {
            false
        }
    }

    /// Return the legacy cursor to the original value.
    pub fn reset(&mut self) {
        self.mutant_index = 0;
    }

    /// Turn a variant's replacement values into descriptors addressed to this
    /// element. Yields nothing when the element is not fuzzable.
    pub fn describe<'a, I>(&self, values: I) -> Mutations<'a>
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: 'a,
    {
        if !self.fuzzable {
            return Box::new(std::iter::empty());
        }
        let qualified_name = self.qualified_name();
        Box::new(
            values
                .into_iter()
                .map(move |value| Mutation::single(qualified_name.clone(), value)),
        )
    }

    /// Apply the fuzzable gate to a variant's mutation count.
    pub fn gate(&self, count: usize) -> usize {
        if self.fuzzable {
            count
        } else {
            0
        }
    }
}
