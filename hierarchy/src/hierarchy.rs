//! The Hierarchy - an assembled, validated message tree.

use crate::{Block, DefinitionError, DefinitionResult};
use fuzzable_core::{Mutation, RenderError, RenderResult, Value};
use fuzzable_element::{Fuzzable, Mutations};
use std::collections::BTreeMap;

/// A validated message tree. Its shape and names are fixed after
/// construction; only the legacy cursor at the root moves.
#[derive(Debug)]
pub struct Hierarchy {
    /// Root block holding every top-level element.
    root: Block,
    /// Qualified name to child-index path from the root.
    index: BTreeMap<String, Vec<usize>>,
}

impl Hierarchy {
    /// Create a hierarchy (use HierarchyBuilder for construction).
    pub(crate) fn new(root: Block, index: BTreeMap<String, Vec<usize>>) -> Self {
        Self { root, index }
    }

    // ==================== Lookups ====================

    /// Name of the root block.
    pub fn name(&self) -> &str {
        self.root.name()
    }

    /// Get an element by qualified name.
    pub fn get(&self, qualified_name: &str) -> Option<&dyn Fuzzable> {
        let path = self.index.get(qualified_name)?;
        let mut current: &dyn Fuzzable = &self.root;
        for &i in path {
            current = current.children().get(i)?.as_ref();
        }
        Some(current)
    }

    /// Returns true if an element has this qualified name.
    pub fn contains(&self, qualified_name: &str) -> bool {
        self.index.contains_key(qualified_name)
    }

    /// All qualified names, in sorted order (the root included).
    pub fn qualified_names(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// Number of elements in the tree, the root included.
    pub fn element_count(&self) -> usize {
        self.index.len()
    }

    // ==================== Mutations ====================

    /// Total number of test cases the tree yields.
    pub fn num_mutations(&self) -> usize {
        self.root.num_mutations()
    }

    /// Every element's mutation descriptors, in tree order.
    pub fn mutations(&self) -> Mutations<'_> {
        self.root.mutations()
    }

    /// Check that every key of `mutation` addresses an element in this tree.
    ///
    /// Rendering never requires this: unknown keys are simply not seen by
    /// any element. It catches misspelled names when mutations are built by
    /// hand or replayed from storage.
    pub fn check(&self, mutation: &Mutation) -> DefinitionResult<()> {
        match mutation.qualified_names().find(|name| !self.contains(name)) {
            Some(name) => Err(DefinitionError::unknown_target(name)),
            None => Ok(()),
        }
    }

    // ==================== Rendering ====================

    /// Render the whole tree under a mutation.
    pub fn render(&self, mutation: &Mutation) -> RenderResult<Vec<u8>> {
        let rendered = self.root.render_mutated(mutation)?;
        into_bytes(&self.root, rendered)
    }

    /// Render with every element at its original value.
    pub fn render_original(&self) -> RenderResult<Vec<u8>> {
        self.render(&Mutation::new())
    }

    // ==================== Legacy cursor ====================

    /// Step the root to its next test case.
    pub fn mutate(&mut self) -> bool {
        self.root.mutate()
    }

    /// Render the test case selected by the root's mutant index.
    pub fn render_current(&self) -> RenderResult<Vec<u8>> {
        let rendered = self.root.render()?;
        into_bytes(&self.root, rendered)
    }

    pub fn mutant_index(&self) -> usize {
        self.root.mutant_index()
    }

    /// Return to the original message.
    pub fn reset(&mut self) {
        self.root.reset();
    }
}

fn into_bytes(root: &Block, rendered: Value) -> RenderResult<Vec<u8>> {
    rendered
        .to_bytes()
        .ok_or_else(|| RenderError::not_bytes(root.qualified_name(), rendered.type_name()))
}
