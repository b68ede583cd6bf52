//! Single-attribute writes against a document.

use super::Document;
use crate::error::{Error, Result};
use serde_json::Value;

/// The host's write primitive.
///
/// Mutation helpers never touch the tree directly; every change goes
/// through `set_node_attribute`, and [`AttributeWriter::doc`] exposes the
/// state the writer has accumulated so far.
pub trait AttributeWriter {
    /// The document as seen by this writer, including earlier writes.
    fn doc(&self) -> &Document;

    /// Set one attribute on the node starting at `pos`.
    fn set_node_attribute(&mut self, pos: usize, key: &str, value: Value) -> Result<()>;
}

/// A recorded attribute write.
#[derive(Debug, Clone, PartialEq)]
pub struct AttrStep {
    /// Position of the node that was written
    pub pos: usize,
    /// Attribute name
    pub key: String,
    /// New value
    pub value: Value,
    /// Value before the write, if any
    pub previous: Option<Value>,
}

/// An in-memory transaction: a working copy of a document plus the steps
/// applied to it.
#[derive(Debug, Clone)]
pub struct Transaction {
    doc: Document,
    steps: Vec<AttrStep>,
}

impl Transaction {
    /// Start a transaction on a copy of `doc`.
    pub fn new(doc: &Document) -> Self {
        Self {
            doc: doc.clone(),
            steps: Vec::new(),
        }
    }

    /// Get the recorded steps.
    pub fn steps(&self) -> &[AttrStep] {
        &self.steps
    }

    /// Check if any write was recorded.
    pub fn doc_changed(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Finish the transaction and return the resulting document.
    pub fn apply(self) -> Document {
        self.doc
    }
}

impl AttributeWriter for Transaction {
    fn doc(&self) -> &Document {
        &self.doc
    }

    fn set_node_attribute(&mut self, pos: usize, key: &str, value: Value) -> Result<()> {
        let node = self
            .doc
            .node_at_mut(pos)
            .ok_or(Error::NoNodeAtPosition(pos))?;
        if node.is_text() {
            return Err(Error::TextNodeAttribute(pos));
        }

        let previous = node.attrs.set(key, value.clone());
        self.steps.push(AttrStep {
            pos,
            key: key.to_string(),
            value,
            previous,
        });
        Ok(())
    }
}
