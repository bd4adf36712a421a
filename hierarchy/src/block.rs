//! The Block container.

use fuzzable_core::{Mutation, RenderError, RenderResult, Value};
use fuzzable_element::{Element, Fuzzable, Mutations};
use std::cell::OnceCell;
use std::fmt;

/// A named group of elements rendered back to back.
///
/// Children are attached under the block's qualified name. The block has no
/// mutations of its own: it yields its children's descriptors in order. A
/// mutation addressing the block itself replaces the whole rendered body.
/// A non-fuzzable block silences its whole subtree.
#[derive(Debug)]
pub struct Block {
    element: Element,
    children: Vec<Box<dyn Fuzzable>>,
    /// Children rendered at their original values, filled on first use.
    original: OnceCell<Value>,
}

impl Block {
    /// Create an empty block.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            element: Element::named("Block", name),
            children: Vec::new(),
            original: OnceCell::new(),
        }
    }

    /// Create an empty block named from the global counter.
    pub fn unnamed() -> Self {
        Self {
            element: Element::new("Block"),
            children: Vec::new(),
            original: OnceCell::new(),
        }
    }

    /// Stop the whole subtree from being mutated.
    pub fn with_fuzzable(mut self, fuzzable: bool) -> Self {
        self.element = self.element.with_fuzzable(fuzzable);
        self
    }

    /// Append a child, returning self for chaining.
    pub fn with_child(mut self, child: impl Fuzzable + 'static) -> Self {
        self.push(Box::new(child));
        self
    }

    /// Append a child and attach it under this block.
    pub fn push(&mut self, mut child: Box<dyn Fuzzable>) {
        child.set_context_path(Some(self.qualified_name()));
        self.children.push(child);
        self.original.take();
    }

    /// Find a direct child by name.
    pub fn child(&self, name: &str) -> Option<&dyn Fuzzable> {
        self.children
            .iter()
            .find(|child| child.name() == name)
            .map(|child| child.as_ref())
    }

    fn render_children(&self, mutation: &Mutation) -> RenderResult<Vec<u8>> {
        let mut out = Vec::new();
        for child in &self.children {
            let rendered = child.render_mutated(mutation)?;
            match rendered.to_bytes() {
                Some(bytes) => out.extend(bytes),
                None => {
                    return Err(RenderError::not_bytes(
                        child.qualified_name(),
                        rendered.type_name(),
                    ))
                }
            }
        }
        Ok(out)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Block({}, {} children)",
            self.qualified_name(),
            self.children.len()
        )
    }
}

impl Fuzzable for Block {
    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    /// The children's original renders, concatenated.
    ///
    /// Null if a child has no byte form at its original value; rendering
    /// the block reports that child's error.
    fn original_value(&self) -> Value {
        self.original
            .get_or_init(|| {
                self.render_children(&Mutation::new())
                    .map(Value::Bytes)
                    .unwrap_or(Value::Null)
            })
            .clone()
    }

    fn mutations(&self) -> Mutations<'_> {
        if !self.fuzzable() {
            return Box::new(std::iter::empty());
        }
        Box::new(self.children.iter().flat_map(|child| child.mutations()))
    }

    fn num_mutations(&self) -> usize {
        self.element
            .gate(self.children.iter().map(|child| child.num_mutations()).sum())
    }

    fn len(&self) -> usize {
        match self.mutant_index() {
            0 => self.original_value().as_bytes().map_or(0, <[u8]>::len),
            _ => self.rendered_len().unwrap_or(0),
        }
    }

    fn set_context_path(&mut self, context_path: Option<String>) {
        self.element.set_context_path(context_path);
        let own = self.qualified_name();
        for child in &mut self.children {
            child.set_context_path(Some(own.clone()));
        }
    }

    fn children(&self) -> &[Box<dyn Fuzzable>] {
        &self.children
    }

    /// Rendered children, unless the block itself is being replaced.
    fn get_child_data(&self, mutation: &Mutation) -> RenderResult<Option<Value>> {
        if mutation.contains(&self.qualified_name()) {
            return Ok(None);
        }
        self.render_children(mutation).map(|bytes| Some(Value::Bytes(bytes)))
    }

    fn encode(&self, value: Value, child_data: Option<&Value>) -> RenderResult<Value> {
        if let Some(data) = child_data {
            return Ok(data.clone());
        }
        value
            .to_bytes()
            .map(Value::Bytes)
            .ok_or_else(|| RenderError::not_bytes(self.qualified_name(), value.type_name()))
    }
}
