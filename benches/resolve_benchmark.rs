//! Benchmarks for layout resolution.
//!
//! Run with: cargo bench
//!
//! These benchmarks resolve attributes over synthetic documents.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagewise::{Diagnostics, Document, HeaderFooter, LayoutOptions, MeasuredBody, Node, Pagination};
use serde_json::json;

/// Creates a document with the given number of pages, every other page
/// carrying explicit attributes.
fn create_test_document(page_count: usize) -> Document {
    let pages = (0..page_count)
        .map(|i| {
            let mut body = Node::body(
                (0..8)
                    .map(|p| Node::paragraph(format!("Page {} paragraph {}", i + 1, p)))
                    .collect(),
            );
            let mut footer = Node::footer(vec![Node::paragraph(format!("{}", i + 1))]);
            let mut page = Node::page(Vec::new());
            if i % 2 == 0 {
                body = body.with_attr(
                    "pageMargins",
                    json!({"top": 20.0, "right": 15.0, "bottom": 20.0, "left": 15.0}),
                );
                footer = footer.with_attr("height", 12.0);
                page = page.with_attr("paperSize", "Letter");
            }
            page.with_children(vec![Node::header(Vec::new()), body, footer])
        })
        .collect();
    Document::new(pages)
}

/// Benchmark single-page snapshots.
fn bench_page_snapshot(c: &mut Criterion) {
    let doc = create_test_document(50);
    let pagination = Pagination::new(&doc);

    c.bench_function("page_region_attributes", |b| {
        b.iter(|| pagination.page_region_attributes(black_box(25)));
    });

    c.bench_function("page_region_attributes_out_of_range", |b| {
        b.iter(|| pagination.page_region_attributes(black_box(10_000)));
    });
}

/// Benchmark all-page snapshots at various sizes.
fn bench_all_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_page_region_attributes");

    for page_count in [10, 100, 500].iter() {
        let doc = create_test_document(*page_count);

        group.bench_function(format!("{}_pages_parallel", page_count), |b| {
            let pagination = Pagination::new(&doc);
            b.iter(|| black_box(pagination.all_page_region_attributes()));
        });

        group.bench_function(format!("{}_pages_sequential", page_count), |b| {
            let pagination = Pagination::with_options(&doc, LayoutOptions::new().sequential());
            b.iter(|| black_box(pagination.all_page_region_attributes()));
        });
    }

    group.finish();
}

/// Benchmark footer margin derivation.
fn bench_footer_margins(c: &mut Criterion) {
    let doc = create_test_document(50);
    let pagination = Pagination::new(&doc);

    c.bench_function("footer_margins", |b| {
        b.iter(|| {
            let mut diagnostics = Diagnostics::new();
            pagination.header_footer_margins(
                black_box(24),
                HeaderFooter::Footer,
                &MeasuredBody(180.0),
                &mut diagnostics,
            )
        });
    });
}

criterion_group!(
    benches,
    bench_page_snapshot,
    bench_all_pages,
    bench_footer_margins,
);
criterion_main!(benches);
