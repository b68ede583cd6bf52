//! Page-number based access to layout state.

use crate::diagnostics::Diagnostics;
use crate::layout::{
    calculate_body_margins, calculate_header_footer_margins, clamp_page_number, content_area,
    locate_region, margins_to_shorthand, AttrTarget, BodyMetrics, HeaderFooter, LayoutOptions,
    MarginConfig, PageAttributes, PageRegionAttributes, PaperDimensions, RegionKind, Resolver,
};
use crate::model::{AttrKey, Document, Node};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Layout queries against one document.
///
/// Holds no state beyond the borrowed document and the options; every
/// query reads the tree afresh.
#[derive(Debug, Clone)]
pub struct Pagination<'a> {
    doc: &'a Document,
    options: LayoutOptions,
}

impl<'a> Pagination<'a> {
    /// Create with default options.
    pub fn new(doc: &'a Document) -> Self {
        Self::with_options(doc, LayoutOptions::default())
    }

    /// Create with custom options.
    pub fn with_options(doc: &'a Document, options: LayoutOptions) -> Self {
        Self { doc, options }
    }

    /// Get the document.
    pub fn doc(&self) -> &'a Document {
        self.doc
    }

    /// Get the options.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Get a resolver over the document and the configured defaults.
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self.doc, &self.options.defaults)
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> usize {
        self.doc.page_count()
    }

    /// The page node a page number resolves to, after clamping.
    pub fn page_node(&self, page_number: i64) -> Option<&'a Node> {
        let count = self.doc.page_count();
        if count == 0 {
            return None;
        }
        self.doc.page(clamp_page_number(page_number, count))
    }

    /// Resolve a typed attribute.
    pub fn resolve_attribute<T: DeserializeOwned>(
        &self,
        page_number: i64,
        target: AttrTarget,
        key: AttrKey<T>,
    ) -> Option<T> {
        self.resolver().attribute(page_number, target, key)
    }

    /// Resolve an attribute by name.
    pub fn resolve_by_name(&self, page_number: i64, target: AttrTarget, name: &str) -> Value {
        self.resolver().by_name(page_number, target, name)
    }

    /// Resolved page-node attributes.
    pub fn page_attributes(&self, page_number: i64) -> PageAttributes {
        self.resolver().page_attributes(page_number)
    }

    /// Resolved region attributes of one page.
    pub fn page_region_attributes(&self, page_number: i64) -> PageRegionAttributes {
        self.resolver().page_region_attributes(page_number)
    }

    /// Resolved region attributes of every page.
    pub fn all_page_region_attributes(&self) -> Vec<PageRegionAttributes> {
        self.resolver()
            .all_page_region_attributes(self.options.parallel)
    }

    /// Paper dimensions of a page, in millimetres.
    pub fn paper_dimensions(&self, page_number: i64) -> PaperDimensions {
        self.resolver().paper_dimensions(page_number)
    }

    /// Size of the body content box of a page, in millimetres.
    pub fn content_area(&self, page_number: i64) -> PaperDimensions {
        let resolver = self.resolver();
        content_area(
            &resolver.paper_dimensions(page_number),
            &resolver.body_margins(page_number),
        )
    }

    /// Render margins of a page's header or footer.
    ///
    /// A missing page or region is laid out as an empty one carrying only
    /// defaults.
    pub fn header_footer_margins(
        &self,
        page_number: i64,
        kind: HeaderFooter,
        metrics: &dyn BodyMetrics,
        diagnostics: &mut Diagnostics,
    ) -> MarginConfig {
        let placeholder_page;
        let page = match self.page_node(page_number) {
            Some(page) => page,
            None => {
                placeholder_page = Node::page(Vec::new());
                &placeholder_page
            }
        };

        let placeholder_region;
        let region = match locate_region(page, kind.into()) {
            Some(region) => region,
            None => {
                placeholder_region = match kind {
                    HeaderFooter::Header => Node::header(Vec::new()),
                    HeaderFooter::Footer => Node::footer(Vec::new()),
                };
                &placeholder_region
            }
        };

        calculate_header_footer_margins(
            page,
            region,
            &self.options.defaults,
            metrics,
            diagnostics,
        )
    }

    /// Render margins of a page's body.
    pub fn body_margins(&self, page_number: i64, diagnostics: &mut Diagnostics) -> MarginConfig {
        self.page_node(page_number)
            .and_then(|page| locate_region(page, RegionKind::Body))
            .map(|body| calculate_body_margins(body, &self.options.defaults, diagnostics))
            .unwrap_or(self.options.defaults.body.page_margins)
    }

    /// Format margins in the configured unit as a CSS shorthand.
    pub fn margins_css(&self, margins: &MarginConfig) -> String {
        margins_to_shorthand(margins, self.options.unit)
    }
}
