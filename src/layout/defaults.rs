//! Default attribute values per node kind.
//!
//! Whenever a page or region is missing, or a node has no value for an
//! attribute, resolution falls through to this registry.

use super::{
    keys, AttrTarget, BorderConfig, HeaderFooter, MarginConfig, Orientation, PaperSize,
    RegionKind, XMarginConfig,
};
use crate::model::AttrKey;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default margin on every body side (one inch).
pub const DEFAULT_MARGIN_MM: f64 = 25.4;

/// Default header/footer height.
pub const DEFAULT_HEADER_FOOTER_HEIGHT_MM: f64 = 10.0;

/// Default header distance from the top edge.
pub const DEFAULT_HEADER_OFFSET_MM: f64 = 10.0;

/// Default footer offset, relative to the bottom edge.
pub const DEFAULT_FOOTER_OFFSET_MM: f64 = -10.0;

/// Default paper colour.
pub const DEFAULT_PAPER_COLOUR: &str = "#fff";

/// Defaults for page nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDefaults {
    pub paper_size: PaperSize,
    pub paper_colour: String,
    pub paper_orientation: Orientation,
    pub page_borders: BorderConfig,
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            paper_colour: DEFAULT_PAPER_COLOUR.to_string(),
            paper_orientation: Orientation::Portrait,
            page_borders: BorderConfig::default(),
        }
    }
}

/// Defaults for body nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyDefaults {
    pub page_margins: MarginConfig,
}

impl Default for BodyDefaults {
    fn default() -> Self {
        Self {
            page_margins: MarginConfig::uniform(DEFAULT_MARGIN_MM),
        }
    }
}

/// Defaults shared by headers and footers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderFooterBase {
    pub height: f64,
    pub x_margins: XMarginConfig,
}

impl Default for HeaderFooterBase {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEADER_FOOTER_HEIGHT_MM,
            x_margins: XMarginConfig::uniform(DEFAULT_MARGIN_MM),
        }
    }
}

/// Defaults for one of header or footer: the shared base plus the
/// kind-specific page-end offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderFooterDefaults {
    #[serde(flatten)]
    pub base: HeaderFooterBase,
    pub page_end_offset: f64,
}

impl HeaderFooterDefaults {
    /// Built-in defaults for `kind`.
    pub fn for_kind(kind: HeaderFooter) -> Self {
        let page_end_offset = match kind {
            HeaderFooter::Header => DEFAULT_HEADER_OFFSET_MM,
            HeaderFooter::Footer => DEFAULT_FOOTER_OFFSET_MM,
        };
        Self {
            base: HeaderFooterBase::default(),
            page_end_offset,
        }
    }
}

/// The registry: defaults for every node kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDefaults {
    pub page: PageDefaults,
    pub body: BodyDefaults,
    pub header: HeaderFooterDefaults,
    pub footer: HeaderFooterDefaults,
}

impl AttributeDefaults {
    /// The built-in registry.
    pub fn builtin() -> Self {
        Self {
            page: PageDefaults::default(),
            body: BodyDefaults::default(),
            header: HeaderFooterDefaults::for_kind(HeaderFooter::Header),
            footer: HeaderFooterDefaults::for_kind(HeaderFooter::Footer),
        }
    }

    /// Defaults for a header or footer.
    pub fn header_footer(&self, kind: HeaderFooter) -> &HeaderFooterDefaults {
        match kind {
            HeaderFooter::Header => &self.header,
            HeaderFooter::Footer => &self.footer,
        }
    }

    /// Mutable defaults for a header or footer.
    pub fn header_footer_mut(&mut self, kind: HeaderFooter) -> &mut HeaderFooterDefaults {
        match kind {
            HeaderFooter::Header => &mut self.header,
            HeaderFooter::Footer => &mut self.footer,
        }
    }

    /// Look up a default by attribute name.
    ///
    /// Returns `None` when the attribute is not recognised for `target`.
    pub fn lookup(&self, target: AttrTarget, name: &str) -> Option<Value> {
        fn value<T: Serialize>(key: AttrKey<T>, v: &T) -> Option<Value> {
            key.to_value(v).ok()
        }

        match target {
            AttrTarget::Page => match name {
                n if n == keys::PAPER_SIZE.name() => value(keys::PAPER_SIZE, &self.page.paper_size),
                n if n == keys::PAPER_COLOUR.name() => {
                    value(keys::PAPER_COLOUR, &self.page.paper_colour)
                }
                n if n == keys::PAPER_ORIENTATION.name() => {
                    value(keys::PAPER_ORIENTATION, &self.page.paper_orientation)
                }
                n if n == keys::PAGE_BORDERS.name() => {
                    value(keys::PAGE_BORDERS, &self.page.page_borders)
                }
                _ => None,
            },
            AttrTarget::Region(RegionKind::Body) => match name {
                n if n == keys::PAGE_MARGINS.name() => {
                    value(keys::PAGE_MARGINS, &self.body.page_margins)
                }
                _ => None,
            },
            AttrTarget::Region(kind) => {
                let hf = kind.header_footer()?;
                let defaults = self.header_footer(hf);
                match name {
                    n if n == keys::HEIGHT.name() => value(keys::HEIGHT, &defaults.base.height),
                    n if n == keys::X_MARGINS.name() => {
                        value(keys::X_MARGINS, &defaults.base.x_margins)
                    }
                    n if n == keys::PAGE_END_OFFSET.name() => {
                        value(keys::PAGE_END_OFFSET, &defaults.page_end_offset)
                    }
                    _ => None,
                }
            }
        }
    }
}

impl Default for AttributeDefaults {
    fn default() -> Self {
        Self::builtin()
    }
}
