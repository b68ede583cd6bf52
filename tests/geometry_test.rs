//! Integration tests for region lookup and render margins.

use pagewise::layout::{
    calculate_body_margins, calculate_header_footer_margins, locate_region,
    locate_region_with_pos, RegionKind,
};
use pagewise::{
    margins_to_shorthand, AttributeDefaults, ContentAreaMetrics, Diagnostics, Document,
    HeaderFooter, LayoutOptions, MarginConfig, MeasuredBody, Node, NodeType, Pagination,
    PaperSize, Severity, Unit,
};
use serde_json::json;

fn a4_page(children: Vec<Node>) -> Node {
    Node::page(children).with_attr("paperSize", "A4")
}

fn body_with_top(top: f64) -> Node {
    Node::body(vec![Node::paragraph("content")]).with_attr(
        "pageMargins",
        json!({"top": top, "right": 25.4, "bottom": 25.4, "left": 25.4}),
    )
}

#[test]
fn test_footer_sits_below_body() {
    let footer = Node::footer(vec![])
        .with_attr("height", 10.0)
        .with_attr("pageEndOffset", -10.0);
    let doc = Document::new(vec![a4_page(vec![body_with_top(25.4), footer])]);
    let pagination = Pagination::new(&doc);
    let mut diag = Diagnostics::new();

    let margins =
        pagination.header_footer_margins(0, HeaderFooter::Footer, &MeasuredBody(200.0), &mut diag);

    // 297 - (10 + -10) - (25.4 + 200)
    assert!((margins.top - 71.6).abs() < 1e-9);
    assert!(diag.is_empty());
}

#[test]
fn test_header_independent_of_body() {
    let header = Node::header(vec![]).with_attr("pageEndOffset", 15.0);
    let defaults = AttributeDefaults::builtin();

    for body_height in [0.0, 120.0, 250.0] {
        let page = a4_page(vec![header.clone(), body_with_top(40.0)]);
        let margins = calculate_header_footer_margins(
            &page,
            &header,
            &defaults,
            &MeasuredBody(body_height),
            &mut Diagnostics::new(),
        );
        assert_eq!(margins.top, 15.0);
    }
}

#[test]
fn test_footer_without_body_floats() {
    let footer = Node::footer(vec![]).with_attr("pageEndOffset", 5.0);
    let page = a4_page(vec![footer.clone()]);
    let margins = calculate_header_footer_margins(
        &page,
        &footer,
        &AttributeDefaults::builtin(),
        &MeasuredBody(200.0),
        &mut Diagnostics::new(),
    );
    assert_eq!(margins.top, 297.0 - 15.0);
}

#[test]
fn test_landscape_footer_uses_swapped_height() {
    let footer = Node::footer(vec![]);
    let page = Node::page(vec![footer.clone()])
        .with_attr("paperSize", "A4")
        .with_attr("paperOrientation", "landscape");
    let margins = calculate_header_footer_margins(
        &page,
        &footer,
        &AttributeDefaults::builtin(),
        &ContentAreaMetrics,
        &mut Diagnostics::new(),
    );
    assert_eq!(margins.top, 210.0);
}

#[test]
fn test_unknown_region_tag_is_reported() {
    let odd = Node::new(NodeType::HeaderFooter).with_attr("type", "sidebar");
    let page = a4_page(vec![odd.clone()]);
    let mut diag = Diagnostics::new();

    let margins = calculate_header_footer_margins(
        &page,
        &odd,
        &AttributeDefaults::builtin(),
        &ContentAreaMetrics,
        &mut diag,
    );

    assert_eq!(margins.top, 0.0);
    assert_eq!(margins.bottom, 0.0);
    assert_eq!(diag.len(), 1);
    assert_eq!(diag.entries()[0].severity, Severity::Warning);
    assert!(diag.entries()[0].message.contains("sidebar"));
}

#[test]
fn test_body_margins_read_stored_values() {
    let body = body_with_top(30.0);
    let mut diag = Diagnostics::new();
    let margins = calculate_body_margins(&body, &AttributeDefaults::builtin(), &mut diag);
    assert_eq!(margins.top, 30.0);
    assert_eq!(margins.left, 25.4);
    assert!(diag.is_empty());

    let stored = body.attr("pageMargins").unwrap();
    assert_eq!(stored["top"], json!(30.0));
}

#[test]
fn test_region_lookup_on_empty_page() {
    let page = Node::page(vec![]);
    for kind in RegionKind::ALL {
        assert!(locate_region(&page, kind).is_none());
        assert_eq!(locate_region_with_pos(&page, 42, kind).pos(), -1);
    }
}

#[test]
fn test_region_position_counts_subtree_sizes() {
    let doc = Document::new(vec![
        Node::page(vec![Node::body(vec![])]),
        Node::page(vec![
            Node::header(vec![Node::paragraph("head")]),
            Node::body(vec![Node::paragraph("text")]),
            Node::footer(vec![]),
        ]),
    ]);
    let (page_pos, page) = doc.page_with_pos(1).unwrap();
    assert_eq!(page_pos, 4);

    for kind in RegionKind::ALL {
        let location = locate_region_with_pos(page, page_pos, kind);
        let pos = location.pos() as usize;
        assert_eq!(doc.node_at(pos), location.node());
    }
}

#[test]
fn test_shorthand_order_and_units() {
    let margins = MarginConfig::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(
        margins_to_shorthand(&margins, Unit::Millimeter),
        "1mm 2mm 3mm 4mm"
    );
    assert_eq!(
        margins_to_shorthand(&MarginConfig::uniform(25.4), Unit::Point),
        "72pt 72pt 72pt 72pt"
    );
}

#[test]
fn test_content_area_follows_margins() {
    let page = Node::page(vec![body_with_top(40.0)]).with_attr("paperSize", "A5");
    let doc = Document::new(vec![page]);
    let options = LayoutOptions::new().with_paper_size(PaperSize::A4);
    let area = Pagination::with_options(&doc, options).content_area(0);
    assert!((area.width - (148.0 - 50.8)).abs() < 1e-9);
    assert!((area.height - (210.0 - 65.4)).abs() < 1e-9);
}
