//! Performance benchmarks for passagemark.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use passagemark::{extract_article, rank_passages, HtmlDocument, Options};

fn synthetic_page(paragraphs: usize) -> String {
    let mut body = String::from(
        r#"<html><body>
        <nav><a href="/">Home</a><a href="/news">News</a><a href="/about">About</a></nav>
        <article><h2>Regional Transit Expansion</h2>"#,
    );
    for i in 0..paragraphs {
        body.push_str(&format!(
            "<p>Paragraph {i} discusses the regional transit expansion, stop placement, \
             funding sources, and the projected ridership for the corridor.</p>"
        ));
    }
    body.push_str("</article><footer><p>Copyright 2025 Example.</p></footer></body></html>");
    body
}

fn bench_extract(c: &mut Criterion) {
    let page = synthetic_page(40);
    let mut group = c.benchmark_group("extract");
    group.throughput(Throughput::Bytes(page.len() as u64));
    group.bench_function("extract_article_40p", |b| {
        b.iter(|| {
            let doc = HtmlDocument::parse(black_box(&page));
            extract_article(&doc, doc.linked_data(), &Options::default())
        });
    });
    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let page = synthetic_page(40);
    let doc = HtmlDocument::parse(&page);
    let extraction = extract_article(&doc, doc.linked_data(), &Options::default());

    c.bench_function("rank_passages_40p", |b| {
        b.iter(|| {
            rank_passages(
                black_box(&extraction.blocks),
                black_box("regional transit expansion funding"),
                &Options::default(),
            )
        });
    });
}

criterion_group!(benches, bench_extract, bench_rank);
criterion_main!(benches);
