//! # pagewise
//!
//! Pagination layout resolution for paginated document trees.
//!
//! A document is a tree of pages, each holding a header, a body and a
//! footer region. Nodes carry attribute bags that may be partial or stale;
//! this library turns them into a complete, consistent layout: effective
//! attribute values, paper dimensions and render margins that keep the
//! three regions from overlapping.
//!
//! ## Quick Start
//!
//! ```
//! use pagewise::{Diagnostics, Document, HeaderFooter, MeasuredBody, Pagination};
//!
//! fn main() -> pagewise::Result<()> {
//!     let doc = Document::from_json(
//!         r#"{"type":"doc","content":[{"type":"page","attrs":{"paperSize":"A4"},
//!            "content":[{"type":"body"},{"type":"header_footer","attrs":{"type":"footer"}}]}]}"#,
//!     )?;
//!
//!     let pagination = Pagination::new(&doc);
//!     let mut diagnostics = Diagnostics::new();
//!     let footer = pagination.header_footer_margins(
//!         0,
//!         HeaderFooter::Footer,
//!         &MeasuredBody(200.0),
//!         &mut diagnostics,
//!     );
//!     println!("footer margin: {}", pagination.margins_css(&footer));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Default chain**: node value, then configured default, then built-in default
//! - **Out-of-range recovery**: page numbers are clamped to the nearest page
//! - **Render margins**: header, body and footer stack without overlap
//! - **Validated writes**: invalid margins, borders and colours are refused
//! - **Parallel snapshots**: uses Rayon for all-page resolution

pub mod diagnostics;
pub mod error;
pub mod layout;
pub mod model;
pub mod mutate;
mod pagination;

// Re-export commonly used types
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{Error, Result};
pub use layout::{
    margins_to_shorthand, AttrTarget, AttributeDefaults, BodyMetrics, BorderConfig,
    ContentAreaMetrics, HeaderFooter, LayoutOptions, MarginConfig, MeasuredBody, Orientation,
    PageAttributes, PageRegionAttributes, PaperDimensions, PaperSize, RegionKind, Unit,
    XMarginConfig, YMarginConfig,
};
pub use model::{AttributeWriter, Document, Node, NodeType, Transaction};
pub use pagination::Pagination;

/// Parse a document from its JSON form.
///
/// # Example
///
/// ```
/// let doc = pagewise::load_document(r#"{"type":"doc","content":[{"type":"page"}]}"#).unwrap();
/// assert_eq!(doc.page_count(), 1);
/// ```
pub fn load_document(json: &str) -> Result<Document> {
    Document::from_json(json)
}

/// Resolve the region attributes of one page with default options.
///
/// # Arguments
///
/// * `doc` - The document
/// * `page_number` - Page number (0-indexed); out-of-range numbers are clamped
pub fn page_region_attributes(doc: &Document, page_number: i64) -> PageRegionAttributes {
    Pagination::new(doc).page_region_attributes(page_number)
}

/// Resolve the region attributes of every page with custom options.
pub fn all_page_region_attributes(
    doc: &Document,
    options: LayoutOptions,
) -> Vec<PageRegionAttributes> {
    Pagination::with_options(doc, options).all_page_region_attributes()
}
