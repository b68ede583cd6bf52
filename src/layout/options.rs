//! Layout options and configuration.

use super::{
    AttributeDefaults, HeaderFooter, MarginConfig, Orientation, PaperSize, Unit, XMarginConfig,
};

/// Options for resolving and rendering page layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Unit used when formatting lengths for the renderer
    pub unit: Unit,

    /// Whether all-page snapshots are resolved in parallel
    pub parallel: bool,

    /// Default attribute registry
    pub defaults: AttributeDefaults,
}

impl LayoutOptions {
    /// Create new layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rendering unit.
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Enable or disable parallel resolution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel resolution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Replace the whole default registry.
    pub fn with_defaults(mut self, defaults: AttributeDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Set the default paper size.
    pub fn with_paper_size(mut self, size: PaperSize) -> Self {
        self.defaults.page.paper_size = size;
        self
    }

    /// Set the default paper orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.defaults.page.paper_orientation = orientation;
        self
    }

    /// Set the default paper colour.
    pub fn with_paper_colour(mut self, colour: impl Into<String>) -> Self {
        self.defaults.page.paper_colour = colour.into();
        self
    }

    /// Set the default body margins.
    pub fn with_body_margins(mut self, margins: MarginConfig) -> Self {
        self.defaults.body.page_margins = margins;
        self
    }

    /// Set the default height of headers and footers.
    pub fn with_header_footer_height(mut self, height: f64) -> Self {
        self.defaults.header.base.height = height;
        self.defaults.footer.base.height = height;
        self
    }

    /// Set the default horizontal margins of headers and footers.
    pub fn with_header_footer_x_margins(mut self, margins: XMarginConfig) -> Self {
        self.defaults.header.base.x_margins = margins;
        self.defaults.footer.base.x_margins = margins;
        self
    }

    /// Set the default page-end offset of a header or footer.
    pub fn with_page_end_offset(mut self, kind: HeaderFooter, offset: f64) -> Self {
        self.defaults.header_footer_mut(kind).page_end_offset = offset;
        self
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            unit: Unit::Millimeter,
            parallel: cfg!(feature = "parallel"),
            defaults: AttributeDefaults::builtin(),
        }
    }
}
