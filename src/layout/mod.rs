//! Layout resolution for paginated documents.
//!
//! Reading layout state is a pipeline: locate the page and its regions,
//! resolve each attribute through the default chain, then derive render
//! geometry from the resolved values. Every step is a pure function of the
//! document.

mod defaults;
mod geometry;
pub mod keys;
mod margins;
mod options;
mod region;
mod resolve;
mod units;

pub use defaults::{
    AttributeDefaults, BodyDefaults, HeaderFooterBase, HeaderFooterDefaults, PageDefaults,
    DEFAULT_FOOTER_OFFSET_MM, DEFAULT_HEADER_FOOTER_HEIGHT_MM, DEFAULT_HEADER_OFFSET_MM,
    DEFAULT_MARGIN_MM, DEFAULT_PAPER_COLOUR,
};
pub use geometry::{
    calculate_body_margins, calculate_header_footer_margins, content_area, footer_top_margin,
    header_top_margin, page_paper_dimensions, BodyMetrics, ContentAreaMetrics, MeasuredBody,
};
pub use margins::{
    is_valid_margin, is_valid_page_borders, is_valid_page_margins, is_valid_x_margins,
    BorderConfig, MarginConfig, MarginSide, XMarginConfig, YMarginConfig,
};
pub use options::LayoutOptions;
pub use region::{
    locate_region, locate_region_with_pos, AttrTarget, HeaderFooter, PageRegions, RegionKind,
    RegionLocation,
};
pub use resolve::{
    clamp_page_number, resolve_attribute, resolve_with, BodyAttributes, HeaderFooterAttributes,
    PageAttributes, PageRegionAttributes, Resolver,
};
pub use units::{
    format_length, margins_to_shorthand, mm_to_pt, mm_to_px, px_to_mm, Orientation,
    PaperDimensions, PaperSize, Unit, MM_PER_INCH, PT_PER_INCH, PX_PER_INCH,
};
