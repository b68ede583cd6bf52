//! Effective attribute values for pages and regions.
//!
//! Every read goes through [`resolve_with`]: the stored node value wins,
//! otherwise the supplied default. Missing pages and regions degrade to the
//! default and out-of-range page numbers are clamped to the nearest page.

use super::{
    keys, locate_region, AttrTarget, AttributeDefaults, BorderConfig, HeaderFooter,
    MarginConfig, Orientation, PaperDimensions, PaperSize, RegionKind, XMarginConfig,
};
use crate::model::{AttrKey, Document, Node};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Clamp a page number into `[0, page_count)`.
///
/// With no pages every number clamps to 0.
pub fn clamp_page_number(page_number: i64, page_count: usize) -> usize {
    if page_number < 0 {
        0
    } else {
        (page_number as u64).min(page_count.saturating_sub(1) as u64) as usize
    }
}

/// Resolve an attribute of page `page_number` (0-indexed).
///
/// The accessor reads the value from the target node; `default` is returned
/// when the document has no pages, the target node is missing, or the
/// accessor yields `None`.
pub fn resolve_with<T, F>(
    doc: &Document,
    page_number: i64,
    target: AttrTarget,
    accessor: F,
    default: T,
) -> T
where
    F: Fn(&Node) -> Option<T>,
{
    resolve_inner(doc, page_number, target, &accessor, default, false)
}

fn resolve_inner<T, F>(
    doc: &Document,
    page_number: i64,
    target: AttrTarget,
    accessor: &F,
    default: T,
    recovered: bool,
) -> T
where
    F: Fn(&Node) -> Option<T>,
{
    let page_count = doc.page_count();
    if page_count == 0 {
        return default;
    }

    if page_number < 0 || page_number as u64 >= page_count as u64 {
        if recovered {
            return default;
        }
        let clamped = clamp_page_number(page_number, page_count);
        log::debug!(
            "Page {} out of range (document has {} pages), using page {}",
            page_number,
            page_count,
            clamped
        );
        return resolve_inner(doc, clamped as i64, target, accessor, default, true);
    }

    let Some(page) = doc.page(page_number as usize) else {
        return default;
    };

    let node = match target {
        AttrTarget::Page => page,
        AttrTarget::Region(kind) => match locate_region(page, kind) {
            Some(region) => region,
            None => return default,
        },
    };

    accessor(node).unwrap_or(default)
}

/// Resolve a typed attribute by key.
pub fn resolve_attribute<T: DeserializeOwned>(
    doc: &Document,
    page_number: i64,
    target: AttrTarget,
    key: AttrKey<T>,
    default: T,
) -> T {
    resolve_with(doc, page_number, target, |node| node.get(key), default)
}

/// Resolved attributes of a page node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageAttributes {
    pub paper_size: PaperSize,
    pub paper_colour: String,
    pub paper_orientation: Orientation,
    pub page_borders: BorderConfig,
}

impl PageAttributes {
    /// Paper dimensions for this size and orientation.
    pub fn dimensions(&self) -> PaperDimensions {
        PaperDimensions::new(self.paper_size, self.paper_orientation)
    }
}

/// Resolved attributes of a header or footer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderFooterAttributes {
    pub page_end_offset: f64,
    pub height: f64,
    pub x_margins: XMarginConfig,
}

/// Resolved attributes of a body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyAttributes {
    pub page_margins: MarginConfig,
}

/// Snapshot of all region attributes of one page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageRegionAttributes {
    pub header: HeaderFooterAttributes,
    pub body: BodyAttributes,
    pub footer: HeaderFooterAttributes,
}

/// Attribute resolution against one document and one default registry.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    doc: &'a Document,
    defaults: &'a AttributeDefaults,
}

impl<'a> Resolver<'a> {
    /// Create a resolver.
    pub fn new(doc: &'a Document, defaults: &'a AttributeDefaults) -> Self {
        Self { doc, defaults }
    }

    /// Get the document.
    pub fn doc(&self) -> &'a Document {
        self.doc
    }

    /// Get the default registry.
    pub fn defaults(&self) -> &'a AttributeDefaults {
        self.defaults
    }

    /// Resolve a typed attribute, defaulting from the registry.
    ///
    /// Returns `None` only when the registry has no default for `key` on
    /// `target` and the node has no value either.
    pub fn attribute<T: DeserializeOwned>(
        &self,
        page_number: i64,
        target: AttrTarget,
        key: AttrKey<T>,
    ) -> Option<T> {
        let default = self
            .defaults
            .lookup(target, key.name())
            .and_then(|v| serde_json::from_value(v).ok());
        resolve_with(
            self.doc,
            page_number,
            target,
            |node| node.get(key).map(Some),
            default,
        )
    }

    /// Resolve an attribute by name, as a raw value.
    ///
    /// Falls back to the registry default, then to `null`.
    pub fn by_name(&self, page_number: i64, target: AttrTarget, name: &str) -> Value {
        let default = self.defaults.lookup(target, name).unwrap_or(Value::Null);
        resolve_with(
            self.doc,
            page_number,
            target,
            |node| node.attr(name).filter(|v| !v.is_null()).cloned(),
            default,
        )
    }

    /// Paper size of a page.
    pub fn paper_size(&self, page_number: i64) -> PaperSize {
        resolve_attribute(
            self.doc,
            page_number,
            AttrTarget::Page,
            keys::PAPER_SIZE,
            self.defaults.page.paper_size,
        )
    }

    /// Paper colour of a page.
    pub fn paper_colour(&self, page_number: i64) -> String {
        resolve_attribute(
            self.doc,
            page_number,
            AttrTarget::Page,
            keys::PAPER_COLOUR,
            self.defaults.page.paper_colour.clone(),
        )
    }

    /// Paper orientation of a page.
    pub fn paper_orientation(&self, page_number: i64) -> Orientation {
        resolve_attribute(
            self.doc,
            page_number,
            AttrTarget::Page,
            keys::PAPER_ORIENTATION,
            self.defaults.page.paper_orientation,
        )
    }

    /// Border widths of a page.
    pub fn page_borders(&self, page_number: i64) -> BorderConfig {
        resolve_attribute(
            self.doc,
            page_number,
            AttrTarget::Page,
            keys::PAGE_BORDERS,
            self.defaults.page.page_borders,
        )
    }

    /// Paper dimensions of a page, in millimetres.
    pub fn paper_dimensions(&self, page_number: i64) -> PaperDimensions {
        PaperDimensions::new(
            self.paper_size(page_number),
            self.paper_orientation(page_number),
        )
    }

    /// Stored body margins of a page.
    pub fn body_margins(&self, page_number: i64) -> MarginConfig {
        resolve_attribute(
            self.doc,
            page_number,
            RegionKind::Body.into(),
            keys::PAGE_MARGINS,
            self.defaults.body.page_margins,
        )
    }

    /// Page-end offset of a header or footer.
    pub fn page_end_offset(&self, page_number: i64, kind: HeaderFooter) -> f64 {
        resolve_attribute(
            self.doc,
            page_number,
            kind.into(),
            keys::PAGE_END_OFFSET,
            self.defaults.header_footer(kind).page_end_offset,
        )
    }

    /// Height of a header or footer.
    pub fn header_footer_height(&self, page_number: i64, kind: HeaderFooter) -> f64 {
        resolve_attribute(
            self.doc,
            page_number,
            kind.into(),
            keys::HEIGHT,
            self.defaults.header_footer(kind).base.height,
        )
    }

    /// Horizontal margins of a header or footer.
    pub fn x_margins(&self, page_number: i64, kind: HeaderFooter) -> XMarginConfig {
        resolve_attribute(
            self.doc,
            page_number,
            kind.into(),
            keys::X_MARGINS,
            self.defaults.header_footer(kind).base.x_margins,
        )
    }

    /// All page-node attributes of a page.
    pub fn page_attributes(&self, page_number: i64) -> PageAttributes {
        PageAttributes {
            paper_size: self.paper_size(page_number),
            paper_colour: self.paper_colour(page_number),
            paper_orientation: self.paper_orientation(page_number),
            page_borders: self.page_borders(page_number),
        }
    }

    /// All attributes of a header or footer.
    pub fn header_footer_attributes(
        &self,
        page_number: i64,
        kind: HeaderFooter,
    ) -> HeaderFooterAttributes {
        HeaderFooterAttributes {
            page_end_offset: self.page_end_offset(page_number, kind),
            height: self.header_footer_height(page_number, kind),
            x_margins: self.x_margins(page_number, kind),
        }
    }

    /// Snapshot of every region attribute of a page.
    pub fn page_region_attributes(&self, page_number: i64) -> PageRegionAttributes {
        PageRegionAttributes {
            header: self.header_footer_attributes(page_number, HeaderFooter::Header),
            body: BodyAttributes {
                page_margins: self.body_margins(page_number),
            },
            footer: self.header_footer_attributes(page_number, HeaderFooter::Footer),
        }
    }

    /// Snapshots for every page, in page order.
    pub fn all_page_region_attributes(&self, parallel: bool) -> Vec<PageRegionAttributes> {
        let count = self.doc.page_count() as i64;

        #[cfg(feature = "parallel")]
        {
            if parallel {
                use rayon::prelude::*;
                return (0..count)
                    .into_par_iter()
                    .map(|n| self.page_region_attributes(n))
                    .collect();
            }
        }

        #[cfg(not(feature = "parallel"))]
        let _ = parallel;

        (0..count).map(|n| self.page_region_attributes(n)).collect()
    }
}
