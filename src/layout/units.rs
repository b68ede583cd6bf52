//! Paper sizes, orientation and unit conversion.

use super::MarginConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// CSS reference pixels per inch.
pub const PX_PER_INCH: f64 = 96.0;

/// Points per inch.
pub const PT_PER_INCH: f64 = 72.0;

/// Named paper sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaperSize {
    /// 841 x 1189 mm
    A0,
    /// 594 x 841 mm
    A1,
    /// 420 x 594 mm
    A2,
    /// 297 x 420 mm
    A3,
    /// 210 x 297 mm
    #[default]
    A4,
    /// 148 x 210 mm
    A5,
    /// 105 x 148 mm
    A6,
    /// 250 x 353 mm
    B4,
    /// 176 x 250 mm
    B5,
    /// US Letter, 8.5 x 11 in
    Letter,
    /// US Legal, 8.5 x 14 in
    Legal,
    /// 11 x 17 in
    Tabloid,
    /// 7.25 x 10.5 in
    Executive,
}

impl PaperSize {
    /// Every supported size.
    pub const ALL: [PaperSize; 13] = [
        PaperSize::A0,
        PaperSize::A1,
        PaperSize::A2,
        PaperSize::A3,
        PaperSize::A4,
        PaperSize::A5,
        PaperSize::A6,
        PaperSize::B4,
        PaperSize::B5,
        PaperSize::Letter,
        PaperSize::Legal,
        PaperSize::Tabloid,
        PaperSize::Executive,
    ];

    /// Returns portrait (width, height) in millimetres.
    pub fn dimensions_mm(&self) -> (f64, f64) {
        match self {
            PaperSize::A0 => (841.0, 1189.0),
            PaperSize::A1 => (594.0, 841.0),
            PaperSize::A2 => (420.0, 594.0),
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::A6 => (105.0, 148.0),
            PaperSize::B4 => (250.0, 353.0),
            PaperSize::B5 => (176.0, 250.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Executive => (184.15, 266.7),
        }
    }

    /// Host name of the size.
    pub fn name(&self) -> &'static str {
        match self {
            PaperSize::A0 => "A0",
            PaperSize::A1 => "A1",
            PaperSize::A2 => "A2",
            PaperSize::A3 => "A3",
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
            PaperSize::A6 => "A6",
            PaperSize::B4 => "B4",
            PaperSize::B5 => "B5",
            PaperSize::Letter => "Letter",
            PaperSize::Legal => "Legal",
            PaperSize::Tabloid => "Tabloid",
            PaperSize::Executive => "Executive",
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Paper orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Height is the long side
    #[default]
    Portrait,
    /// Width is the long side
    Landscape,
}

/// Physical paper size in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaperDimensions {
    pub width: f64,
    pub height: f64,
}

impl PaperDimensions {
    /// Derive dimensions from a size and orientation. Landscape swaps axes.
    pub fn new(size: PaperSize, orientation: Orientation) -> Self {
        let (width, height) = size.dimensions_mm();
        match orientation {
            Orientation::Portrait => Self { width, height },
            Orientation::Landscape => Self {
                width: height,
                height: width,
            },
        }
    }

    /// Convert both axes to `unit`.
    pub fn to_unit(&self, unit: Unit) -> Self {
        Self {
            width: unit.from_mm(self.width),
            height: unit.from_mm(self.height),
        }
    }
}

impl Default for PaperDimensions {
    fn default() -> Self {
        Self::new(PaperSize::default(), Orientation::default())
    }
}

/// Rendering unit for converted lengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Millimetres (no conversion)
    #[default]
    Millimeter,
    /// CSS pixels (96 per inch)
    Pixel,
    /// Typographic points (72 per inch)
    Point,
}

impl Unit {
    /// CSS suffix of the unit.
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Millimeter => "mm",
            Unit::Pixel => "px",
            Unit::Point => "pt",
        }
    }

    /// Convert a millimetre length to this unit.
    pub fn from_mm(&self, mm: f64) -> f64 {
        match self {
            Unit::Millimeter => mm,
            Unit::Pixel => mm_to_px(mm),
            Unit::Point => mm_to_pt(mm),
        }
    }
}

/// Convert millimetres to CSS pixels.
pub fn mm_to_px(mm: f64) -> f64 {
    mm / MM_PER_INCH * PX_PER_INCH
}

/// Convert CSS pixels to millimetres.
pub fn px_to_mm(px: f64) -> f64 {
    px / PX_PER_INCH * MM_PER_INCH
}

/// Convert millimetres to points.
pub fn mm_to_pt(mm: f64) -> f64 {
    mm / MM_PER_INCH * PT_PER_INCH
}

/// Format a length with its unit suffix, rounded to three decimals.
pub fn format_length(value: f64, unit: Unit) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // avoid "-0mm"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}{}", rounded, unit.suffix())
}

/// Convert margins to `unit` and format them as a CSS shorthand string in
/// `top right bottom left` order.
///
/// ```
/// use pagewise::layout::{margins_to_shorthand, MarginConfig, Unit};
///
/// let css = margins_to_shorthand(&MarginConfig::uniform(25.4), Unit::Millimeter);
/// assert_eq!(css, "25.4mm 25.4mm 25.4mm 25.4mm");
/// ```
pub fn margins_to_shorthand(margins: &MarginConfig, unit: Unit) -> String {
    margins
        .map(|mm| unit.from_mm(mm))
        .to_array()
        .iter()
        .map(|&v| format_length(v, unit))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_swaps_axes() {
        let portrait = PaperDimensions::new(PaperSize::A4, Orientation::Portrait);
        assert_eq!((portrait.width, portrait.height), (210.0, 297.0));

        let landscape = PaperDimensions::new(PaperSize::A4, Orientation::Landscape);
        assert_eq!((landscape.width, landscape.height), (297.0, 210.0));
    }

    #[test]
    fn test_all_sizes_portrait() {
        for size in PaperSize::ALL {
            let (w, h) = size.dimensions_mm();
            assert!(w < h, "{} should be taller than wide", size);
        }
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(mm_to_px(25.4), 96.0);
        assert_eq!(mm_to_pt(25.4), 72.0);
        assert!((px_to_mm(mm_to_px(10.0)) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_shorthand() {
        let margins = MarginConfig::new(10.0, 25.4, 0.0, 5.5);
        assert_eq!(
            margins_to_shorthand(&margins, Unit::Millimeter),
            "10mm 25.4mm 0mm 5.5mm"
        );
        assert_eq!(
            margins_to_shorthand(&MarginConfig::uniform(25.4), Unit::Pixel),
            "96px 96px 96px 96px"
        );
        assert_eq!(
            margins_to_shorthand(&MarginConfig::uniform(10.0), Unit::Pixel),
            "37.795px 37.795px 37.795px 37.795px"
        );
    }

    #[test]
    fn test_paper_size_json() {
        let size: PaperSize = serde_json::from_str("\"Letter\"").unwrap();
        assert_eq!(size, PaperSize::Letter);
        let orientation: Orientation = serde_json::from_str("\"landscape\"").unwrap();
        assert_eq!(orientation, Orientation::Landscape);
    }
}
