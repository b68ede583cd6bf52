//! Document-level types.

use super::{Node, NodeType};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A paginated document: a `doc` root whose direct children are pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    root: Node,
}

impl Document {
    /// Create a document from a list of page nodes.
    pub fn new(pages: Vec<Node>) -> Self {
        Self {
            root: Node::new(NodeType::Doc).with_children(pages),
        }
    }

    /// Wrap an existing root node.
    pub fn from_root(root: Node) -> Self {
        Self { root }
    }

    /// Parse a document from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Get the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Get the root node mutably.
    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    /// Iterate page nodes with their absolute positions.
    pub fn pages(&self) -> impl Iterator<Item = (usize, &Node)> {
        self.root
            .children_with_offsets()
            .filter(|(_, node)| node.is_page())
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages().count()
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.page_count() == 0
    }

    /// Get a page by number (0-indexed).
    pub fn page(&self, page_num: usize) -> Option<&Node> {
        self.page_with_pos(page_num).map(|(_, page)| page)
    }

    /// Get a page by number (0-indexed) together with its position.
    pub fn page_with_pos(&self, page_num: usize) -> Option<(usize, &Node)> {
        self.pages().nth(page_num)
    }

    /// Find the number of the page containing `pos`.
    pub fn page_number_at(&self, pos: usize) -> Option<usize> {
        self.pages()
            .position(|(start, page)| start <= pos && pos < start + page.node_size())
    }

    /// Find the node starting at `pos`.
    pub fn node_at(&self, pos: usize) -> Option<&Node> {
        self.root.node_at(pos)
    }

    /// Find the node starting at `pos`, mutably.
    pub fn node_at_mut(&mut self, pos: usize) -> Option<&mut Node> {
        self.root.node_at_mut(pos)
    }

    /// Collect every node with its absolute position, in document order.
    pub fn descendants(&self) -> Vec<(usize, &Node)> {
        self.root.descendants()
    }

    /// Get the size of the document content.
    pub fn content_size(&self) -> usize {
        self.root.content_size()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
