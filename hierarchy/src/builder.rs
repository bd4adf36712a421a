//! HierarchyBuilder for assembling an immutable Hierarchy.

use crate::{Block, DefinitionError, DefinitionResult, Hierarchy, HierarchyConfig};
use fuzzable_element::Fuzzable;
use std::collections::BTreeMap;
use tracing::debug;

/// Builder for a message tree rooted at a single block.
#[derive(Debug)]
pub struct HierarchyBuilder {
    /// Root block collecting top-level elements.
    root: Block,
    /// Checks applied by `build`.
    config: HierarchyConfig,
}

impl HierarchyBuilder {
    /// Create a builder whose root block has the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            root: Block::new(name),
            config: HierarchyConfig::default(),
        }
    }

    /// Replace the assembly options.
    pub fn with_config(mut self, config: HierarchyConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach an element directly under the root.
    ///
    /// Returns the element's qualified name.
    pub fn add(&mut self, element: impl Fuzzable + 'static) -> DefinitionResult<String> {
        self.add_boxed(Box::new(element))
    }

    /// Attach an already boxed element directly under the root.
    pub fn add_boxed(&mut self, element: Box<dyn Fuzzable>) -> DefinitionResult<String> {
        attach(&mut self.root, element, &self.config)
    }

    /// Start a block under the root.
    pub fn add_block(&mut self, name: impl Into<String>) -> BlockBuilder<'_> {
        BlockBuilder {
            parent: &mut self.root,
            config: &self.config,
            block: Block::new(name),
        }
    }

    /// Validate the whole tree and build the immutable Hierarchy.
    pub fn build(self) -> DefinitionResult<Hierarchy> {
        let mut index = BTreeMap::new();
        let mut path = Vec::new();
        if let Err(error) = index_element(&self.root, &self.config, &mut path, &mut index) {
            debug!(hierarchy = %self.root.name(), %error, "rejected definition");
            return Err(error);
        }

        debug!(
            hierarchy = %self.root.name(),
            elements = index.len(),
            mutations = self.root.num_mutations(),
            "assembled hierarchy"
        );
        Ok(Hierarchy::new(self.root, index))
    }
}

/// Builder for a block nested under a root or another block.
pub struct BlockBuilder<'a> {
    parent: &'a mut Block,
    config: &'a HierarchyConfig,
    block: Block,
}

impl<'a> BlockBuilder<'a> {
    /// Append a child element.
    pub fn child(mut self, element: impl Fuzzable + 'static) -> Self {
        self.block.push(Box::new(element));
        self
    }

    /// Exclude this block's subtree from mutation.
    pub fn not_fuzzable(mut self) -> Self {
        self.block = self.block.with_fuzzable(false);
        self
    }

    /// Finish building this block and attach it to its parent.
    ///
    /// Returns the block's qualified name.
    pub fn done(self) -> DefinitionResult<String> {
        attach(self.parent, Box::new(self.block), self.config)
    }
}

/// Push under `parent`, rejecting empty names and sibling name collisions.
fn attach(
    parent: &mut Block,
    element: Box<dyn Fuzzable>,
    config: &HierarchyConfig,
) -> DefinitionResult<String> {
    if element.name().is_empty() {
        return Err(DefinitionError::empty_name(parent.qualified_name()));
    }
    if !config.allow_duplicate_names && parent.child(element.name()).is_some() {
        return Err(DefinitionError::duplicate_qualified_name(format!(
            "{}.{}",
            parent.qualified_name(),
            element.name()
        )));
    }
    parent.push(element);
    Ok(parent
        .children()
        .last()
        .map(|attached| attached.qualified_name())
        .unwrap_or_default())
}

/// Walk the tree depth-first, recording each element's child-index path.
fn index_element(
    element: &dyn Fuzzable,
    config: &HierarchyConfig,
    path: &mut Vec<usize>,
    index: &mut BTreeMap<String, Vec<usize>>,
) -> DefinitionResult<()> {
    if element.name().is_empty() {
        return Err(DefinitionError::empty_name(
            element.context_path().unwrap_or_default(),
        ));
    }

    let qualified_name = element.qualified_name();
    if index.contains_key(&qualified_name) {
        if !config.allow_duplicate_names {
            return Err(DefinitionError::duplicate_qualified_name(qualified_name));
        }
    } else {
        index.insert(qualified_name.clone(), path.clone());
    }

    if config.verify_mutation_counts {
        let declared = element.num_mutations();
        let yielded = element.mutations().count();
        if declared != yielded {
            return Err(DefinitionError::mutation_count_mismatch(
                qualified_name,
                declared,
                yielded,
            ));
        }
    }

    for (i, child) in element.children().iter().enumerate() {
        path.push(i);
        index_element(child.as_ref(), config, path, index)?;
        path.pop();
    }
    Ok(())
}
