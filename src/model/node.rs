//! Tree nodes and position arithmetic.

use super::{AttrKey, Attrs};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Attribute that tags a `header_footer` node as a header or a footer.
pub const REGION_TAG_ATTR: &str = "type";

/// The type of a tree node.
///
/// Header and footer share [`NodeType::HeaderFooter`] and are told apart by
/// their [`REGION_TAG_ATTR`] attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeType {
    /// Document root holding the pages
    Doc,
    /// A page holding header, body and footer regions
    Page,
    /// Header or footer region, told apart by its tag
    HeaderFooter,
    /// Body region
    Body,
    /// Paragraph of inline content
    Paragraph,
    /// Text run
    Text,
    /// Line break (leaf)
    HardBreak,
    /// Inline image (leaf)
    Image,
    /// Horizontal rule (leaf)
    HorizontalRule,
    /// Any node type this crate does not interpret
    Other(String),
}

impl NodeType {
    /// Get the host name of this node type.
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Doc => "doc",
            NodeType::Page => "page",
            NodeType::HeaderFooter => "header_footer",
            NodeType::Body => "body",
            NodeType::Paragraph => "paragraph",
            NodeType::Text => "text",
            NodeType::HardBreak => "hardBreak",
            NodeType::Image => "image",
            NodeType::HorizontalRule => "horizontalRule",
            NodeType::Other(name) => name,
        }
    }

    /// Leaf nodes occupy exactly one position.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            NodeType::HardBreak | NodeType::Image | NodeType::HorizontalRule
        )
    }
}

impl From<String> for NodeType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "doc" => NodeType::Doc,
            "page" => NodeType::Page,
            "header_footer" => NodeType::HeaderFooter,
            "body" => NodeType::Body,
            "paragraph" => NodeType::Paragraph,
            "text" => NodeType::Text,
            "hardBreak" => NodeType::HardBreak,
            "image" => NodeType::Image,
            "horizontalRule" => NodeType::HorizontalRule,
            _ => NodeType::Other(name),
        }
    }
}

impl From<NodeType> for String {
    fn from(node_type: NodeType) -> Self {
        node_type.as_str().to_string()
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the document tree, in the host's JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node type
    #[serde(rename = "type")]
    pub node_type: NodeType,

    /// Attribute bag
    #[serde(default, skip_serializing_if = "Attrs::is_empty")]
    pub attrs: Attrs,

    /// Child nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,

    /// Text content (text nodes only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Node {
    /// Create an empty node of the given type.
    pub fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            attrs: Attrs::new(),
            content: Vec::new(),
            text: None,
        }
    }

    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(NodeType::Text)
        }
    }

    /// Create a paragraph holding a single text run.
    pub fn paragraph(text: impl Into<String>) -> Self {
        let text = text.into();
        let node = Self::new(NodeType::Paragraph);
        if text.is_empty() {
            node
        } else {
            node.with_children(vec![Self::text(text)])
        }
    }

    /// Create a page node.
    pub fn page(children: Vec<Node>) -> Self {
        Self::new(NodeType::Page).with_children(children)
    }

    /// Create a body region node.
    pub fn body(children: Vec<Node>) -> Self {
        Self::new(NodeType::Body).with_children(children)
    }

    /// Create a header region node.
    pub fn header(children: Vec<Node>) -> Self {
        Self::new(NodeType::HeaderFooter)
            .with_attr(REGION_TAG_ATTR, "header")
            .with_children(children)
    }

    /// Create a footer region node.
    pub fn footer(children: Vec<Node>) -> Self {
        Self::new(NodeType::HeaderFooter)
            .with_attr(REGION_TAG_ATTR, "footer")
            .with_children(children)
    }

    /// Set an attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.set(key, value.into());
        self
    }

    /// Replace the children.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.content = children;
        self
    }

    /// Get a raw attribute value.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    /// Read a typed attribute.
    pub fn get<T: DeserializeOwned>(&self, key: AttrKey<T>) -> Option<T> {
        key.read(&self.attrs)
    }

    /// Check if this is a text node.
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Check if this is a page node.
    pub fn is_page(&self) -> bool {
        self.node_type == NodeType::Page
    }

    /// Check if this is a body node.
    pub fn is_body(&self) -> bool {
        self.node_type == NodeType::Body
    }

    /// Check if this is a header or footer node.
    pub fn is_header_footer(&self) -> bool {
        self.node_type == NodeType::HeaderFooter
    }

    /// Get the number of positions this node occupies in its parent.
    pub fn node_size(&self) -> usize {
        if let Some(text) = &self.text {
            return text.chars().count();
        }
        if self.node_type.is_leaf() {
            return 1;
        }
        self.content_size() + 2
    }

    /// Get the total size of this node's children.
    pub fn content_size(&self) -> usize {
        self.content.iter().map(Node::node_size).sum()
    }

    /// Get the number of direct children.
    pub fn child_count(&self) -> usize {
        self.content.len()
    }

    /// Iterate direct children paired with their offset inside this node's
    /// content.
    pub fn children_with_offsets(&self) -> impl Iterator<Item = (usize, &Node)> {
        self.content.iter().scan(0usize, |offset, child| {
            let at = *offset;
            *offset += child.node_size();
            Some((at, child))
        })
    }

    /// Collect every descendant in document order with its position
    /// relative to the start of this node's content.
    pub fn descendants(&self) -> Vec<(usize, &Node)> {
        fn walk<'a>(node: &'a Node, base: usize, out: &mut Vec<(usize, &'a Node)>) {
            for (offset, child) in node.children_with_offsets() {
                let pos = base + offset;
                out.push((pos, child));
                walk(child, pos + 1, out);
            }
        }

        let mut out = Vec::new();
        walk(self, 0, &mut out);
        out
    }

    /// Find the node starting at `pos`, relative to this node's content.
    pub fn node_at(&self, pos: usize) -> Option<&Node> {
        for (offset, child) in self.children_with_offsets() {
            if offset == pos {
                return Some(child);
            }
            let end = offset + child.node_size();
            if pos < end {
                if child.is_text() || child.node_type.is_leaf() {
                    return None;
                }
                return child.node_at(pos - offset - 1);
            }
        }
        None
    }

    /// Mutable counterpart of [`Node::node_at`].
    pub fn node_at_mut(&mut self, pos: usize) -> Option<&mut Node> {
        let mut offset = 0;
        for child in self.content.iter_mut() {
            let size = child.node_size();
            if offset == pos {
                return Some(child);
            }
            if pos < offset + size {
                if child.is_text() || child.node_type.is_leaf() {
                    return None;
                }
                return child.node_at_mut(pos - offset - 1);
            }
            offset += size;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_size() {
        assert_eq!(Node::text("hello").node_size(), 5);
        assert_eq!(Node::new(NodeType::HardBreak).node_size(), 1);
        assert_eq!(Node::paragraph("").node_size(), 2);
        // <p>hi</p> inside a body: 2 + (2 + 2)
        assert_eq!(Node::body(vec![Node::paragraph("hi")]).node_size(), 6);
    }

    #[test]
    fn test_children_with_offsets() {
        let page = Node::page(vec![
            Node::header(vec![Node::paragraph("a")]),
            Node::body(vec![Node::paragraph("bcd")]),
        ]);
        let offsets: Vec<usize> = page.children_with_offsets().map(|(o, _)| o).collect();
        assert_eq!(offsets, vec![0, 5]);
    }

    #[test]
    fn test_node_at() {
        let page = Node::page(vec![
            Node::header(vec![Node::paragraph("a")]),
            Node::body(vec![Node::paragraph("bcd")]),
        ]);
        assert!(page.node_at(0).unwrap().is_header_footer());
        assert!(page.node_at(5).unwrap().is_body());
        assert_eq!(page.node_at(6).unwrap().node_type, NodeType::Paragraph);
        // inside a text run
        assert!(page.node_at(8).is_none());
        assert!(page.node_at(100).is_none());
    }

    #[test]
    fn test_descendants_positions() {
        let body = Node::body(vec![Node::paragraph("ab"), Node::paragraph("c")]);
        let found: Vec<(usize, String)> = body
            .descendants()
            .into_iter()
            .map(|(p, n)| (p, n.node_type.to_string()))
            .collect();
        assert_eq!(
            found,
            vec![
                (0, "paragraph".to_string()),
                (1, "text".to_string()),
                (4, "paragraph".to_string()),
                (5, "text".to_string()),
            ]
        );
    }

    #[test]
    fn test_node_json_shape() {
        let node = Node::footer(vec![]).with_attr("height", 12.0);
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({"type": "header_footer", "attrs": {"height": 12.0, "type": "footer"}})
        );

        let back: Node = serde_json::from_value(json!({"type": "callout"})).unwrap();
        assert_eq!(back.node_type, NodeType::Other("callout".to_string()));
    }
}
