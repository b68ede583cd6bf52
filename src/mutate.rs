//! Validated attribute writes.
//!
//! Every setter compares the new value with the stored one and only writes
//! through the [`AttributeWriter`] when they differ. The `try_*` forms
//! report why a write was refused; the plain forms log the refusal and
//! return `false`.
//!
//! # Example
//!
//! ```
//! use pagewise::layout::MarginConfig;
//! use pagewise::model::{Document, Node, Transaction};
//! use pagewise::mutate;
//!
//! let doc = Document::new(vec![Node::page(vec![Node::body(vec![])])]);
//! let mut tr = Transaction::new(&doc);
//!
//! // the body sits at position 1, just inside the page
//! assert!(mutate::set_body_node_page_margins(&mut tr, 1, MarginConfig::uniform(20.0)));
//! assert!(!mutate::set_body_node_page_margins(&mut tr, 1, MarginConfig::uniform(20.0)));
//! assert!(!mutate::set_body_node_page_margins(&mut tr, 1, MarginConfig::uniform(-1.0)));
//! ```

use crate::error::{Error, Result};
use crate::layout::{
    is_valid_page_borders, is_valid_page_margins, is_valid_x_margins, keys, AttributeDefaults,
    BorderConfig, HeaderFooter, MarginConfig, MarginSide, Orientation, PaperSize, RegionKind,
    XMarginConfig,
};
use crate::model::{AttrKey, AttributeWriter, Node, NodeType};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::OnceLock;

/// Counts from a batch write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Nodes compared
    pub attempted: usize,
    /// Nodes actually written
    pub changed: usize,
}

impl BatchOutcome {
    /// Check if any node changed.
    pub fn any_changed(&self) -> bool {
        self.changed > 0
    }
}

fn refused(result: Result<bool>) -> bool {
    result.unwrap_or_else(|e| {
        log::warn!("Attribute write refused: {}", e);
        false
    })
}

fn node_at<W: AttributeWriter + ?Sized>(writer: &W, pos: usize) -> Result<&Node> {
    writer.doc().node_at(pos).ok_or(Error::NoNodeAtPosition(pos))
}

fn expect_kind<W: AttributeWriter + ?Sized>(
    writer: &W,
    pos: usize,
    expected: &'static str,
    accept: impl Fn(&Node) -> bool,
) -> Result<()> {
    let node = node_at(writer, pos)?;
    if accept(node) {
        Ok(())
    } else {
        Err(Error::NodeKindMismatch {
            expected,
            found: node.node_type.to_string(),
        })
    }
}

fn typed_value<T: Serialize>(key: AttrKey<T>, value: &T) -> Result<Value> {
    key.to_value(value)
}

/// Structural equality that compares numbers by value, so a stored `12`
/// equals a written `12.0`.
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x == y || x.as_f64() == y.as_f64(),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| values_equal(a, b))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| values_equal(v, w)))
        }
        _ => a == b,
    }
}

fn is_layout_node(node: &Node) -> bool {
    node.is_page() || node.is_body() || node.is_header_footer()
}

fn parse_layout<T: DeserializeOwned>(value: &Value) -> Option<T> {
    serde_json::from_value(value.clone()).ok()
}

/// Check a value written under one of the layout keys. `null` clears the
/// attribute and is always accepted; other keys pass through unchecked.
fn validate_layout_value(key: &str, value: &Value) -> Result<()> {
    if value.is_null() {
        return Ok(());
    }
    let valid = match key {
        k if k == keys::PAGE_MARGINS.name() => {
            parse_layout::<MarginConfig>(value).is_some_and(|m| is_valid_page_margins(&m))
        }
        k if k == keys::X_MARGINS.name() => {
            parse_layout::<XMarginConfig>(value).is_some_and(|m| is_valid_x_margins(&m))
        }
        k if k == keys::PAGE_BORDERS.name() => {
            parse_layout::<BorderConfig>(value).is_some_and(|b| is_valid_page_borders(&b))
        }
        k if k == keys::HEIGHT.name() => {
            parse_layout::<f64>(value).is_some_and(|h| h.is_finite() && h >= 0.0)
        }
        k if k == keys::PAGE_END_OFFSET.name() => {
            parse_layout::<f64>(value).is_some_and(f64::is_finite)
        }
        k if k == keys::PAPER_COLOUR.name() => value.as_str().is_some_and(is_valid_colour),
        _ => true,
    };
    if valid {
        return Ok(());
    }

    Err(match key {
        k if k == keys::PAGE_MARGINS.name() || k == keys::X_MARGINS.name() => {
            Error::InvalidMargins(value.to_string())
        }
        k if k == keys::PAGE_BORDERS.name() => Error::InvalidBorders(value.to_string()),
        k if k == keys::PAPER_COLOUR.name() => Error::InvalidColour(value.to_string()),
        _ => Error::Attribute {
            key: key.to_string(),
            reason: format!("{} is out of range", value),
        },
    })
}

/// Write `value` to the node at `pos` if it differs from the stored value.
///
/// Numbers compare by value. On page, body and header/footer nodes the
/// layout keys are validated the same way as in the typed setters.
/// Returns whether the node changed.
pub fn try_set_node_attribute<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    pos: usize,
    key: &str,
    value: Value,
) -> Result<bool> {
    let node = node_at(writer, pos)?;
    if is_layout_node(node) {
        validate_layout_value(key, &value)?;
    }
    let unchanged = match node.attr(key) {
        Some(current) => values_equal(current, &value),
        None => value.is_null(),
    };
    if unchanged {
        return Ok(false);
    }
    writer.set_node_attribute(pos, key, value)?;
    Ok(true)
}

/// Infallible form of [`try_set_node_attribute`].
pub fn set_node_attribute<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    pos: usize,
    key: &str,
    value: Value,
) -> bool {
    refused(try_set_node_attribute(writer, pos, key, value))
}

/// Write a typed attribute to the node at `pos`.
pub fn try_set_attribute<W: AttributeWriter + ?Sized, T: Serialize>(
    writer: &mut W,
    pos: usize,
    key: AttrKey<T>,
    value: &T,
) -> Result<bool> {
    let value = typed_value(key, value)?;
    try_set_node_attribute(writer, pos, key.name(), value)
}

/// Write `value` to every node matching `predicate`.
///
/// Every matching node is compared, even after one has changed.
pub fn set_all_nodes_attribute<W, P>(
    writer: &mut W,
    predicate: P,
    key: &str,
    value: &Value,
) -> BatchOutcome
where
    W: AttributeWriter + ?Sized,
    P: Fn(&Node) -> bool,
{
    // attribute writes never change node sizes, so positions stay valid
    let positions: Vec<usize> = writer
        .doc()
        .descendants()
        .into_iter()
        .filter(|&(_, node)| predicate(node))
        .map(|(pos, _)| pos)
        .collect();

    positions
        .into_iter()
        .fold(BatchOutcome::default(), |outcome, pos| {
            let changed = set_node_attribute(writer, pos, key, value.clone());
            BatchOutcome {
                attempted: outcome.attempted + 1,
                changed: outcome.changed + usize::from(changed),
            }
        })
}

/// Write `value` to every node of `node_type`. Returns whether any changed.
pub fn set_all_nodes_of_type_attribute<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    node_type: &NodeType,
    key: &str,
    value: &Value,
) -> bool {
    set_all_nodes_attribute(writer, |node| node.node_type == *node_type, key, value).any_changed()
}

/// Write `value` to every region of `kind` in the document. Returns whether
/// any changed.
pub fn set_all_regions_attribute<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    kind: RegionKind,
    key: &str,
    value: &Value,
) -> bool {
    set_all_nodes_attribute(
        writer,
        |node| matches!(RegionKind::classify(node), Ok(Some(k)) if k == kind),
        key,
        value,
    )
    .any_changed()
}

// ---------------------------------------------------------------------------
// Page nodes
// ---------------------------------------------------------------------------

/// Write an attribute to the page node at `pos`.
pub fn try_set_page_node_attribute<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    pos: usize,
    key: &str,
    value: Value,
) -> Result<bool> {
    expect_kind(writer, pos, "page", Node::is_page)?;
    try_set_node_attribute(writer, pos, key, value)
}

/// Infallible form of [`try_set_page_node_attribute`].
pub fn set_page_node_attribute<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    pos: usize,
    key: &str,
    value: Value,
) -> bool {
    refused(try_set_page_node_attribute(writer, pos, key, value))
}

/// Set the paper size of the page at `pos`.
pub fn set_page_paper_size<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    pos: usize,
    size: PaperSize,
) -> bool {
    refused(
        typed_value(keys::PAPER_SIZE, &size)
            .and_then(|v| try_set_page_node_attribute(writer, pos, keys::PAPER_SIZE.name(), v)),
    )
}

/// Set the orientation of the page at `pos`.
pub fn set_page_orientation<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    pos: usize,
    orientation: Orientation,
) -> bool {
    refused(
        typed_value(keys::PAPER_ORIENTATION, &orientation).and_then(|v| {
            try_set_page_node_attribute(writer, pos, keys::PAPER_ORIENTATION.name(), v)
        }),
    )
}

fn colour_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(?:#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})|rgba?\(\s*\d{1,3}\s*,\s*\d{1,3}\s*,\s*\d{1,3}\s*(?:,\s*(?:0|1|0?\.\d+)\s*)?\))$",
        )
        .expect("colour pattern is valid")
    })
}

/// Check whether `colour` is a hex or `rgb()`/`rgba()` colour.
pub fn is_valid_colour(colour: &str) -> bool {
    colour_pattern().is_match(colour.trim())
}

/// Set the paper colour of the page at `pos`.
pub fn try_set_page_paper_colour<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    pos: usize,
    colour: &str,
) -> Result<bool> {
    expect_kind(writer, pos, "page", Node::is_page)?;
    if !is_valid_colour(colour) {
        return Err(Error::InvalidColour(colour.to_string()));
    }
    try_set_node_attribute(
        writer,
        pos,
        keys::PAPER_COLOUR.name(),
        Value::String(colour.trim().to_string()),
    )
}

/// Infallible form of [`try_set_page_paper_colour`].
pub fn set_page_paper_colour<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    pos: usize,
    colour: &str,
) -> bool {
    refused(try_set_page_paper_colour(writer, pos, colour))
}

/// Set the border widths of the page at `pos`.
pub fn try_set_page_borders<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    pos: usize,
    borders: BorderConfig,
) -> Result<bool> {
    expect_kind(writer, pos, "page", Node::is_page)?;
    if !is_valid_page_borders(&borders) {
        return Err(Error::InvalidBorders(format!("{:?}", borders)));
    }
    try_set_attribute(writer, pos, keys::PAGE_BORDERS, &borders)
}

/// Infallible form of [`try_set_page_borders`].
pub fn set_page_borders<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    pos: usize,
    borders: BorderConfig,
) -> bool {
    refused(try_set_page_borders(writer, pos, borders))
}

/// Write `value` to every page. Returns whether any page changed.
pub fn set_all_pages_attribute<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    key: &str,
    value: &Value,
) -> bool {
    set_all_nodes_of_type_attribute(writer, &NodeType::Page, key, value)
}

/// Set the paper size of every page.
pub fn set_all_pages_paper_size<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    size: PaperSize,
) -> bool {
    match typed_value(keys::PAPER_SIZE, &size) {
        Ok(v) => set_all_pages_attribute(writer, keys::PAPER_SIZE.name(), &v),
        Err(e) => refused(Err(e)),
    }
}

/// Set the orientation of every page.
pub fn set_all_pages_orientation<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    orientation: Orientation,
) -> bool {
    match typed_value(keys::PAPER_ORIENTATION, &orientation) {
        Ok(v) => set_all_pages_attribute(writer, keys::PAPER_ORIENTATION.name(), &v),
        Err(e) => refused(Err(e)),
    }
}

// ---------------------------------------------------------------------------
// Body nodes
// ---------------------------------------------------------------------------

/// Set the page margins of the body at `pos`.
///
/// Refused for non-body nodes and for margins failing
/// [`is_valid_page_margins`].
pub fn try_set_body_node_page_margins<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    pos: usize,
    margins: MarginConfig,
) -> Result<bool> {
    expect_kind(writer, pos, "body", Node::is_body)?;
    if !is_valid_page_margins(&margins) {
        return Err(Error::InvalidMargins(format!("{:?}", margins)));
    }
    try_set_attribute(writer, pos, keys::PAGE_MARGINS, &margins)
}

/// Infallible form of [`try_set_body_node_page_margins`].
pub fn set_body_node_page_margins<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    pos: usize,
    margins: MarginConfig,
) -> bool {
    refused(try_set_body_node_page_margins(writer, pos, margins))
}

/// Change one side of the body margins at `pos`, starting from the stored
/// margins or the registry default.
pub fn try_set_body_margin_side<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    pos: usize,
    side: MarginSide,
    value: f64,
    defaults: &AttributeDefaults,
) -> Result<bool> {
    let node = node_at(writer, pos)?;
    let current = node
        .get(keys::PAGE_MARGINS)
        .unwrap_or(defaults.body.page_margins);
    try_set_body_node_page_margins(writer, pos, current.with_side(side, value))
}

/// Infallible form of [`try_set_body_margin_side`].
pub fn set_body_margin_side<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    pos: usize,
    side: MarginSide,
    value: f64,
    defaults: &AttributeDefaults,
) -> bool {
    refused(try_set_body_margin_side(writer, pos, side, value, defaults))
}

/// Set the page margins of every body in the document.
pub fn set_all_bodies_page_margins<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    margins: MarginConfig,
) -> bool {
    if !is_valid_page_margins(&margins) {
        return refused(Err(Error::InvalidMargins(format!("{:?}", margins))));
    }
    match typed_value(keys::PAGE_MARGINS, &margins) {
        Ok(v) => set_all_regions_attribute(writer, RegionKind::Body, keys::PAGE_MARGINS.name(), &v),
        Err(e) => refused(Err(e)),
    }
}

// ---------------------------------------------------------------------------
// Header and footer nodes
// ---------------------------------------------------------------------------

/// Write an attribute to the header or footer at `pos`.
///
/// With `kind` set, the node's tag must match it as well.
pub fn try_set_header_footer_attribute<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    pos: usize,
    kind: Option<HeaderFooter>,
    key: &str,
    value: Value,
) -> Result<bool> {
    let expected = kind.map(|k| k.tag()).unwrap_or("header_footer");
    expect_kind(writer, pos, expected, |node| {
        node.is_header_footer()
            && kind.map_or(true, |k| HeaderFooter::of_node(node).ok() == Some(k))
    })?;
    try_set_node_attribute(writer, pos, key, value)
}

/// Infallible form of [`try_set_header_footer_attribute`].
pub fn set_header_footer_attribute<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    pos: usize,
    kind: Option<HeaderFooter>,
    key: &str,
    value: Value,
) -> bool {
    refused(try_set_header_footer_attribute(writer, pos, kind, key, value))
}

/// Set the height of the header or footer at `pos`.
pub fn set_header_footer_height<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    pos: usize,
    height: f64,
) -> bool {
    if !(height.is_finite() && height >= 0.0) {
        return refused(Err(Error::Attribute {
            key: keys::HEIGHT.name().to_string(),
            reason: format!("{} is not a usable height", height),
        }));
    }
    refused(typed_value(keys::HEIGHT, &height).and_then(|v| {
        try_set_header_footer_attribute(writer, pos, None, keys::HEIGHT.name(), v)
    }))
}

/// Set the page-end offset of the header or footer at `pos`.
pub fn set_page_end_offset<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    pos: usize,
    offset: f64,
) -> bool {
    if !offset.is_finite() {
        return refused(Err(Error::Attribute {
            key: keys::PAGE_END_OFFSET.name().to_string(),
            reason: format!("{} is not finite", offset),
        }));
    }
    refused(typed_value(keys::PAGE_END_OFFSET, &offset).and_then(|v| {
        try_set_header_footer_attribute(writer, pos, None, keys::PAGE_END_OFFSET.name(), v)
    }))
}

/// Set the horizontal margins of the header or footer at `pos`.
pub fn set_header_footer_x_margins<W: AttributeWriter + ?Sized>(
    writer: &mut W,
    pos: usize,
    margins: XMarginConfig,
) -> bool {
    if !is_valid_x_margins(&margins) {
        return refused(Err(Error::InvalidMargins(format!("{:?}", margins))));
    }
    refused(typed_value(keys::X_MARGINS, &margins).and_then(|v| {
        try_set_header_footer_attribute(writer, pos, None, keys::X_MARGINS.name(), v)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Document, Transaction};
    use serde_json::json;

    fn doc() -> Document {
        Document::new(vec![Node::page(vec![
            Node::header(vec![]),
            Node::body(vec![Node::paragraph("x")]),
        ])])
    }

    // page at 0, header at 1, body at 3, paragraph at 4

    #[test]
    fn test_unchanged_value_is_noop() {
        let mut tr = Transaction::new(&doc());
        assert!(set_node_attribute(&mut tr, 3, "k", json!(1)));
        assert!(!set_node_attribute(&mut tr, 3, "k", json!(1)));
        assert_eq!(tr.steps().len(), 1);
    }

    #[test]
    fn test_numbers_compare_by_value() {
        assert!(values_equal(&json!(12), &json!(12.0)));
        assert!(values_equal(
            &json!({"left": 5, "right": [1, 2.5]}),
            &json!({"right": [1.0, 2.5], "left": 5.0})
        ));
        assert!(!values_equal(&json!(12), &json!(12.5)));
        assert!(!values_equal(&json!({"left": 5}), &json!({"left": 5, "right": 5})));
        assert!(!values_equal(&json!("12"), &json!(12)));
    }

    #[test]
    fn test_integer_stored_value_is_unchanged() {
        let doc = Document::new(vec![Node::page(vec![
            Node::header(vec![]).with_attr("height", 12),
            Node::body(vec![]).with_attr(
                "pageMargins",
                json!({"top": 20, "right": 15, "bottom": 20, "left": 15}),
            ),
        ])]);
        let mut tr = Transaction::new(&doc);
        assert!(!set_header_footer_height(&mut tr, 1, 12.0));
        assert!(!set_body_node_page_margins(
            &mut tr,
            3,
            MarginConfig::new(20.0, 15.0, 20.0, 15.0)
        ));
        assert!(!tr.doc_changed());
    }

    #[test]
    fn test_generic_writes_validate_layout_keys() {
        let mut tr = Transaction::new(&doc());
        let err = try_set_node_attribute(
            &mut tr,
            3,
            "pageMargins",
            json!({"top": -5, "right": 0, "bottom": 0, "left": 0}),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidMargins(_)));
        // a partial margin record is not a margin config
        assert!(!set_node_attribute(&mut tr, 3, "pageMargins", json!({"top": 5})));
        assert!(!set_node_attribute(&mut tr, 1, "xMargins", json!({"left": -1, "right": 0})));
        assert!(!set_node_attribute(&mut tr, 1, "height", json!(-3)));
        assert!(!set_node_attribute(&mut tr, 1, "pageEndOffset", json!("far")));
        assert!(!set_node_attribute(&mut tr, 0, "pageBorders", json!({"top": -1})));
        assert!(!set_node_attribute(&mut tr, 0, "paperColour", json!("banana")));
        assert!(!tr.doc_changed());

        assert!(set_node_attribute(&mut tr, 1, "pageEndOffset", json!(-4)));
        assert!(set_node_attribute(&mut tr, 0, "paperColour", json!("#abc")));
        // clearing is always allowed; non-layout nodes are not checked
        assert!(set_node_attribute(&mut tr, 1, "pageEndOffset", Value::Null));
        assert!(set_node_attribute(&mut tr, 4, "height", json!(-3)));
    }

    #[test]
    fn test_null_on_absent_is_noop() {
        let mut tr = Transaction::new(&doc());
        assert!(!set_node_attribute(&mut tr, 3, "k", Value::Null));
        assert!(!tr.doc_changed());
    }

    #[test]
    fn test_guarded_setters_refuse_wrong_kind() {
        let mut tr = Transaction::new(&doc());
        let err = try_set_body_node_page_margins(&mut tr, 0, MarginConfig::uniform(1.0))
            .unwrap_err();
        assert!(matches!(err, Error::NodeKindMismatch { expected: "body", .. }));
        assert!(!set_page_paper_size(&mut tr, 3, PaperSize::A3));
        assert!(!set_header_footer_height(&mut tr, 3, 5.0));
        assert!(!tr.doc_changed());
    }

    #[test]
    fn test_invalid_margins_refused() {
        let mut tr = Transaction::new(&doc());
        let err = try_set_body_node_page_margins(
            &mut tr,
            3,
            MarginConfig::new(1.0, f64::NAN, 1.0, 1.0),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidMargins(_)));
        assert!(!tr.doc_changed());
    }

    #[test]
    fn test_margin_side() {
        let defaults = AttributeDefaults::builtin();
        let mut tr = Transaction::new(&doc());
        assert!(set_body_margin_side(&mut tr, 3, MarginSide::Left, 30.0, &defaults));
        let stored = tr.doc().node_at(3).unwrap().get(keys::PAGE_MARGINS).unwrap();
        assert_eq!(stored, MarginConfig::new(25.4, 25.4, 25.4, 30.0));
        assert!(!set_body_margin_side(&mut tr, 3, MarginSide::Top, -2.0, &defaults));
    }

    #[test]
    fn test_header_footer_kind_guard() {
        let mut tr = Transaction::new(&doc());
        let err = try_set_header_footer_attribute(
            &mut tr,
            1,
            Some(HeaderFooter::Footer),
            "height",
            json!(4.0),
        )
        .unwrap_err();
        assert!(matches!(err, Error::NodeKindMismatch { expected: "footer", .. }));
        assert!(try_set_header_footer_attribute(
            &mut tr,
            1,
            Some(HeaderFooter::Header),
            "height",
            json!(4.0)
        )
        .unwrap());
    }

    #[test]
    fn test_colour_validation() {
        assert!(is_valid_colour("#fff"));
        assert!(is_valid_colour("#A0B1C2"));
        assert!(is_valid_colour("rgb(255, 255, 255)"));
        assert!(is_valid_colour("rgba(0,0,0,0.5)"));
        assert!(!is_valid_colour("white"));
        assert!(!is_valid_colour("banana"));
        assert!(!is_valid_colour("#ggg"));
        assert!(!is_valid_colour("rgb(1,2)"));
        assert!(!is_valid_colour(""));

        let mut tr = Transaction::new(&doc());
        assert!(set_page_paper_colour(&mut tr, 0, "#eee"));
        assert!(!set_page_paper_colour(&mut tr, 0, "not a colour"));
    }
}
