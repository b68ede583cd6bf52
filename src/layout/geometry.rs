//! Render margins for header, body and footer.
//!
//! Stored attributes describe where a region *wants* to be relative to the
//! page edges. Render margins are what a flow layout needs so the three
//! regions stack without overlapping: the header's top margin is measured
//! from the page top, the footer's top margin from the bottom of the body.

use super::{
    is_valid_page_margins, keys, locate_region, AttributeDefaults, HeaderFooter,
    HeaderFooterBase, MarginConfig, PaperDimensions, RegionKind, YMarginConfig,
};
use crate::diagnostics::Diagnostics;
use crate::model::Node;

/// Source of the rendered height of a body region, in millimetres.
pub trait BodyMetrics {
    /// Height the body currently occupies on the page.
    fn body_height(&self, body: &Node, paper: &PaperDimensions, margins: &MarginConfig) -> f64;
}

/// The body fills the page between its top and bottom margins.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentAreaMetrics;

impl BodyMetrics for ContentAreaMetrics {
    fn body_height(&self, _body: &Node, paper: &PaperDimensions, margins: &MarginConfig) -> f64 {
        (paper.height - margins.top - margins.bottom).max(0.0)
    }
}

/// A body height measured by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct MeasuredBody(pub f64);

impl BodyMetrics for MeasuredBody {
    fn body_height(&self, _body: &Node, _paper: &PaperDimensions, _margins: &MarginConfig) -> f64 {
        self.0
    }
}

/// Header top margin: the stored distance from the page top.
pub fn header_top_margin(page_end_offset: f64) -> f64 {
    page_end_offset
}

/// Footer top margin.
///
/// `page_end_offset` is signed and added to the footer height; the sum is
/// the space reserved at the bottom of the page. When the page has a body,
/// `body` carries its `(top margin, rendered height)` and the footer is
/// pulled up by that much so it sits directly below the body.
pub fn footer_top_margin(
    page_height: f64,
    footer_height: f64,
    page_end_offset: f64,
    body: Option<(f64, f64)>,
) -> f64 {
    let top = page_height - (footer_height + page_end_offset);
    match body {
        Some((body_top, body_height)) => top - (body_top + body_height),
        None => top,
    }
}

/// Paper dimensions stored on a page node.
pub fn page_paper_dimensions(page: &Node, defaults: &AttributeDefaults) -> PaperDimensions {
    PaperDimensions::new(
        page.get(keys::PAPER_SIZE)
            .unwrap_or(defaults.page.paper_size),
        page.get(keys::PAPER_ORIENTATION)
            .unwrap_or(defaults.page.paper_orientation),
    )
}

/// Render margins of a body node: its stored margins, or the default when
/// absent or unusable.
pub fn calculate_body_margins(
    body: &Node,
    defaults: &AttributeDefaults,
    diagnostics: &mut Diagnostics,
) -> MarginConfig {
    match body.get(keys::PAGE_MARGINS) {
        Some(margins) if is_valid_page_margins(&margins) => margins,
        Some(margins) => {
            diagnostics.warn(format!(
                "Ignoring invalid body margins {:?}, using defaults",
                margins
            ));
            defaults.body.page_margins
        }
        None => defaults.body.page_margins,
    }
}

/// Render margins of a header or footer node on `page`.
///
/// Y margins depend on the region kind; an unrecognised tag is reported and
/// yields zero Y margins. X margins are the stored ones or the default.
pub fn calculate_header_footer_margins(
    page: &Node,
    region: &Node,
    defaults: &AttributeDefaults,
    metrics: &dyn BodyMetrics,
    diagnostics: &mut Diagnostics,
) -> MarginConfig {
    let kind = match HeaderFooter::of_node(region) {
        Ok(kind) => Some(kind),
        Err(e) => {
            diagnostics.warn(format!("{}, using zero vertical margins", e));
            None
        }
    };

    let x = region.get(keys::X_MARGINS).unwrap_or_else(|| {
        kind.map(|k| defaults.header_footer(k).base.x_margins)
            .unwrap_or(HeaderFooterBase::default().x_margins)
    });

    let y = match kind {
        Some(HeaderFooter::Header) => YMarginConfig {
            top: header_top_margin(
                region
                    .get(keys::PAGE_END_OFFSET)
                    .unwrap_or(defaults.header.page_end_offset),
            ),
            bottom: 0.0,
        },
        Some(HeaderFooter::Footer) => {
            let paper = page_paper_dimensions(page, defaults);
            let height = region
                .get(keys::HEIGHT)
                .unwrap_or(defaults.footer.base.height);
            let offset = region
                .get(keys::PAGE_END_OFFSET)
                .unwrap_or(defaults.footer.page_end_offset);
            let body = locate_region(page, RegionKind::Body).map(|body| {
                let margins = calculate_body_margins(body, defaults, diagnostics);
                (margins.top, metrics.body_height(body, &paper, &margins))
            });
            YMarginConfig {
                top: non_negative_top(
                    footer_top_margin(paper.height, height, offset, body),
                    diagnostics,
                ),
                bottom: 0.0,
            }
        }
        None => YMarginConfig::default(),
    };

    MarginConfig::from_xy(x, y)
}

/// Derived margins must stay usable; an overflowing body would otherwise
/// push the footer above it.
fn non_negative_top(top: f64, diagnostics: &mut Diagnostics) -> f64 {
    if top.is_finite() && top >= 0.0 {
        top
    } else {
        diagnostics.warn(format!(
            "Footer top margin {} is out of range, using 0",
            top
        ));
        0.0
    }
}

/// Width and height of the body content box, inside its margins.
pub fn content_area(paper: &PaperDimensions, margins: &MarginConfig) -> PaperDimensions {
    PaperDimensions {
        width: (paper.width - margins.left - margins.right).max(0.0),
        height: (paper.height - margins.top - margins.bottom).max(0.0),
    }
}
