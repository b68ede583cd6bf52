//! Region classification and lookup inside a page.

use crate::error::{Error, Result};
use crate::model::{Node, NodeType, REGION_TAG_ATTR};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two kinds sharing the `header_footer` node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderFooter {
    /// Region at the top of the page
    Header,
    /// Region at the bottom of the page
    Footer,
}

impl HeaderFooter {
    /// Parse the host tag value.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "header" => Some(HeaderFooter::Header),
            "footer" => Some(HeaderFooter::Footer),
            _ => None,
        }
    }

    /// Host tag value.
    pub fn tag(&self) -> &'static str {
        match self {
            HeaderFooter::Header => "header",
            HeaderFooter::Footer => "footer",
        }
    }

    /// Read the tag of a `header_footer` node.
    ///
    /// Fails with [`Error::UnknownRegionKind`] when the tag is missing or
    /// not one of `header`/`footer`.
    pub fn of_node(node: &Node) -> Result<Self> {
        let tag = node.attr(REGION_TAG_ATTR).and_then(|v| v.as_str());
        tag.and_then(Self::from_tag).ok_or_else(|| {
            Error::UnknownRegionKind(
                tag.map(str::to_string)
                    .unwrap_or_else(|| "<untagged>".to_string()),
            )
        })
    }
}

/// A region of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    /// Header region
    Header,
    /// Body region
    Body,
    /// Footer region
    Footer,
}

impl RegionKind {
    /// All kinds in page order.
    pub const ALL: [RegionKind; 3] = [RegionKind::Header, RegionKind::Body, RegionKind::Footer];

    /// Classify a page child.
    ///
    /// Returns `Ok(None)` for nodes that are not regions at all, and an
    /// error for a `header_footer` node with an unrecognised tag.
    pub fn classify(node: &Node) -> Result<Option<Self>> {
        match node.node_type {
            NodeType::Body => Ok(Some(RegionKind::Body)),
            NodeType::HeaderFooter => HeaderFooter::of_node(node).map(|hf| Some(hf.into())),
            _ => Ok(None),
        }
    }

    /// The header/footer view of this kind, if any.
    pub fn header_footer(&self) -> Option<HeaderFooter> {
        match self {
            RegionKind::Header => Some(HeaderFooter::Header),
            RegionKind::Footer => Some(HeaderFooter::Footer),
            RegionKind::Body => None,
        }
    }

    /// Host name of the region.
    pub fn name(&self) -> &'static str {
        match self {
            RegionKind::Header => "header",
            RegionKind::Body => "body",
            RegionKind::Footer => "footer",
        }
    }
}

impl From<HeaderFooter> for RegionKind {
    fn from(kind: HeaderFooter) -> Self {
        match kind {
            HeaderFooter::Header => RegionKind::Header,
            HeaderFooter::Footer => RegionKind::Footer,
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The node an attribute is read from: the page itself or one of its
/// regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrTarget {
    /// The page node itself
    Page,
    /// One region of the page
    Region(RegionKind),
}

impl From<RegionKind> for AttrTarget {
    fn from(kind: RegionKind) -> Self {
        AttrTarget::Region(kind)
    }
}

impl From<HeaderFooter> for AttrTarget {
    fn from(kind: HeaderFooter) -> Self {
        AttrTarget::Region(kind.into())
    }
}

fn is_kind(node: &Node, kind: RegionKind) -> bool {
    matches!(RegionKind::classify(node), Ok(Some(k)) if k == kind)
}

/// Result of a position-aware region lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegionLocation<'a> {
    /// The region and its absolute position
    Found { pos: usize, node: &'a Node },
    /// No child of the page matched
    NotFound,
}

impl<'a> RegionLocation<'a> {
    /// Absolute position, or `-1` when not found.
    pub fn pos(&self) -> i64 {
        match self {
            RegionLocation::Found { pos, .. } => *pos as i64,
            RegionLocation::NotFound => -1,
        }
    }

    /// The region node, if found.
    pub fn node(&self) -> Option<&'a Node> {
        match self {
            RegionLocation::Found { node, .. } => Some(*node),
            RegionLocation::NotFound => None,
        }
    }

    /// Check if the region was found.
    pub fn is_found(&self) -> bool {
        matches!(self, RegionLocation::Found { .. })
    }
}

/// Find the region of `kind` among the page's direct children.
///
/// Duplicates resolve to the last match.
pub fn locate_region(page: &Node, kind: RegionKind) -> Option<&Node> {
    page.content.iter().filter(|child| is_kind(child, kind)).last()
}

/// Find the region of `kind` and its absolute position, given the page's
/// own position `page_pos`.
pub fn locate_region_with_pos(page: &Node, page_pos: usize, kind: RegionKind) -> RegionLocation<'_> {
    let start = page_pos + 1;
    let (_, found) = page
        .content
        .iter()
        .fold((start, RegionLocation::NotFound), |(offset, found), child| {
            let found = if is_kind(child, kind) {
                RegionLocation::Found {
                    pos: offset,
                    node: child,
                }
            } else {
                found
            };
            (offset + child.node_size(), found)
        });
    found
}

/// The three regions of one page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageRegions<'a> {
    pub header: Option<&'a Node>,
    pub body: Option<&'a Node>,
    pub footer: Option<&'a Node>,
}

impl<'a> PageRegions<'a> {
    /// Classify every child of `page` in one pass. Unknown header/footer
    /// tags are skipped.
    pub fn of_page(page: &'a Node) -> Self {
        page.content
            .iter()
            .fold(Self::default(), |regions, child| match RegionKind::classify(child) {
                Ok(Some(RegionKind::Header)) => Self {
                    header: Some(child),
                    ..regions
                },
                Ok(Some(RegionKind::Body)) => Self {
                    body: Some(child),
                    ..regions
                },
                Ok(Some(RegionKind::Footer)) => Self {
                    footer: Some(child),
                    ..regions
                },
                Ok(None) => regions,
                Err(e) => {
                    log::debug!("Skipping page child: {}", e);
                    regions
                }
            })
    }

    /// Get the region of `kind`.
    pub fn get(&self, kind: RegionKind) -> Option<&'a Node> {
        match kind {
            RegionKind::Header => self.header,
            RegionKind::Body => self.body,
            RegionKind::Footer => self.footer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page() -> Node {
        Node::page(vec![
            Node::header(vec![Node::paragraph("h")]),
            Node::body(vec![Node::paragraph("body")]),
            Node::footer(vec![Node::paragraph("f")]),
        ])
    }

    #[test]
    fn test_locate_each_kind() {
        let page = sample_page();
        for kind in RegionKind::ALL {
            let node = locate_region(&page, kind).unwrap();
            assert_eq!(RegionKind::classify(node).unwrap(), Some(kind));
        }
    }

    #[test]
    fn test_locate_with_pos_accumulates_sizes() {
        let page = sample_page();
        // header = 2 + (2 + 1) = 5, body = 2 + (2 + 4) = 8
        assert_eq!(locate_region_with_pos(&page, 10, RegionKind::Header).pos(), 11);
        assert_eq!(locate_region_with_pos(&page, 10, RegionKind::Body).pos(), 16);
        assert_eq!(locate_region_with_pos(&page, 10, RegionKind::Footer).pos(), 24);
    }

    #[test]
    fn test_empty_page_not_found() {
        let page = Node::page(vec![]);
        assert!(locate_region(&page, RegionKind::Body).is_none());
        let location = locate_region_with_pos(&page, 0, RegionKind::Body);
        assert!(!location.is_found());
        assert_eq!(location.pos(), -1);
        assert!(location.node().is_none());
    }

    #[test]
    fn test_duplicates_last_wins() {
        let page = Node::page(vec![
            Node::header(vec![]).with_attr("height", 5.0),
            Node::header(vec![]).with_attr("height", 7.0),
        ]);
        let node = locate_region(&page, RegionKind::Header).unwrap();
        assert_eq!(node.attr("height"), Some(&serde_json::json!(7.0)));
        assert_eq!(locate_region_with_pos(&page, 0, RegionKind::Header).pos(), 3);
    }

    #[test]
    fn test_unknown_tag() {
        let aside = Node::new(NodeType::HeaderFooter).with_attr(REGION_TAG_ATTR, "aside");
        assert!(matches!(
            RegionKind::classify(&aside),
            Err(Error::UnknownRegionKind(tag)) if tag == "aside"
        ));

        let page = Node::page(vec![aside, Node::body(vec![])]);
        let regions = PageRegions::of_page(&page);
        assert!(regions.header.is_none());
        assert!(regions.body.is_some());
    }

    #[test]
    fn test_paragraph_is_not_a_region() {
        assert_eq!(RegionKind::classify(&Node::paragraph("x")).unwrap(), None);
    }
}
