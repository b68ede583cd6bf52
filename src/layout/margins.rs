//! Margin and border value types.

use serde::{Deserialize, Serialize};

/// One side of a four-sided box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginSide {
    /// Top edge
    Top,
    /// Right edge
    Right,
    /// Bottom edge
    Bottom,
    /// Left edge
    Left,
}

impl MarginSide {
    /// All sides in shorthand order.
    pub const ALL: [MarginSide; 4] = [
        MarginSide::Top,
        MarginSide::Right,
        MarginSide::Bottom,
        MarginSide::Left,
    ];
}

/// Four-sided margins in millimetres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MarginConfig {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl MarginConfig {
    /// Create margins from each side.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same value on every side.
    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    /// Combine horizontal and vertical margins.
    pub const fn from_xy(x: XMarginConfig, y: YMarginConfig) -> Self {
        Self::new(y.top, x.right, y.bottom, x.left)
    }

    /// Get one side.
    pub fn side(&self, side: MarginSide) -> f64 {
        match side {
            MarginSide::Top => self.top,
            MarginSide::Right => self.right,
            MarginSide::Bottom => self.bottom,
            MarginSide::Left => self.left,
        }
    }

    /// Return a copy with one side replaced.
    pub fn with_side(mut self, side: MarginSide, value: f64) -> Self {
        match side {
            MarginSide::Top => self.top = value,
            MarginSide::Right => self.right = value,
            MarginSide::Bottom => self.bottom = value,
            MarginSide::Left => self.left = value,
        }
        self
    }

    /// Apply `f` to every side.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.top), f(self.right), f(self.bottom), f(self.left))
    }

    /// Sides in shorthand order: top, right, bottom, left.
    pub fn to_array(&self) -> [f64; 4] {
        [self.top, self.right, self.bottom, self.left]
    }

    /// The left/right pair.
    pub fn x(&self) -> XMarginConfig {
        XMarginConfig {
            left: self.left,
            right: self.right,
        }
    }

    /// The top/bottom pair.
    pub fn y(&self) -> YMarginConfig {
        YMarginConfig {
            top: self.top,
            bottom: self.bottom,
        }
    }
}

/// Horizontal margins in millimetres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct XMarginConfig {
    pub left: f64,
    pub right: f64,
}

impl XMarginConfig {
    /// Same value on both sides.
    pub const fn uniform(v: f64) -> Self {
        Self { left: v, right: v }
    }
}

/// Vertical margins in millimetres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct YMarginConfig {
    pub top: f64,
    pub bottom: f64,
}

/// Page border widths in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BorderConfig {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl BorderConfig {
    /// Same width on every side.
    pub const fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// Widths in shorthand order.
    pub fn to_array(&self) -> [f64; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

fn valid_length(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

/// A single margin value is usable when it is finite and not negative.
pub fn is_valid_margin(v: f64) -> bool {
    valid_length(v)
}

/// Margins are usable when every side is finite and not negative.
pub fn is_valid_page_margins(margins: &MarginConfig) -> bool {
    margins.to_array().into_iter().all(valid_length)
}

/// Horizontal margins follow the same rule as page margins.
pub fn is_valid_x_margins(margins: &XMarginConfig) -> bool {
    valid_length(margins.left) && valid_length(margins.right)
}

/// Borders are usable when every width is finite and not negative.
pub fn is_valid_page_borders(borders: &BorderConfig) -> bool {
    borders.to_array().into_iter().all(valid_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_validation() {
        assert!(is_valid_page_margins(&MarginConfig::uniform(25.4)));
        assert!(is_valid_page_margins(&MarginConfig::default()));
        assert!(!is_valid_page_margins(&MarginConfig::new(1.0, -0.1, 1.0, 1.0)));
        assert!(!is_valid_page_margins(&MarginConfig::new(f64::NAN, 1.0, 1.0, 1.0)));
        assert!(!is_valid_page_margins(&MarginConfig::new(
            1.0,
            1.0,
            f64::INFINITY,
            1.0
        )));
    }

    #[test]
    fn test_border_validation() {
        assert!(is_valid_page_borders(&BorderConfig::uniform(2.0)));
        assert!(!is_valid_page_borders(&BorderConfig::uniform(-1.0)));
    }

    #[test]
    fn test_sides() {
        let m = MarginConfig::new(1.0, 2.0, 3.0, 4.0).with_side(MarginSide::Bottom, 9.0);
        assert_eq!(m.side(MarginSide::Bottom), 9.0);
        assert_eq!(m.to_array(), [1.0, 2.0, 9.0, 4.0]);
        assert_eq!(MarginConfig::from_xy(m.x(), m.y()), m);
    }

    #[test]
    fn test_json_shape() {
        let m: MarginConfig =
            serde_json::from_str(r#"{"top":1,"right":2,"bottom":3,"left":4}"#).unwrap();
        assert_eq!(m, MarginConfig::new(1.0, 2.0, 3.0, 4.0));
    }
}
