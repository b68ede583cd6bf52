//! Typed keys for every layout attribute.

use super::{BorderConfig, MarginConfig, Orientation, PaperSize, XMarginConfig};
use crate::model::AttrKey;

/// Page: named paper size.
pub const PAPER_SIZE: AttrKey<PaperSize> = AttrKey::new("paperSize");

/// Page: paper colour as a CSS colour string.
pub const PAPER_COLOUR: AttrKey<String> = AttrKey::new("paperColour");

/// Page: portrait or landscape.
pub const PAPER_ORIENTATION: AttrKey<Orientation> = AttrKey::new("paperOrientation");

/// Page: border widths.
pub const PAGE_BORDERS: AttrKey<BorderConfig> = AttrKey::new("pageBorders");

/// Body: page margins.
pub const PAGE_MARGINS: AttrKey<MarginConfig> = AttrKey::new("pageMargins");

/// Header/footer: signed distance from the nearest page edge.
pub const PAGE_END_OFFSET: AttrKey<f64> = AttrKey::new("pageEndOffset");

/// Header/footer: region height.
pub const HEIGHT: AttrKey<f64> = AttrKey::new("height");

/// Header/footer: left and right margins.
pub const X_MARGINS: AttrKey<XMarginConfig> = AttrKey::new("xMargins");
