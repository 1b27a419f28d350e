//! Simple CLI that reads HTML from stdin and prints a scan report as JSON.
//!
//! Usage: `scan_stdin "Article Title Here" < page.html`

use std::io::{self, Read};

use passagemark::{
    encoding::transcode_to_utf8, extract_article, rank_passages, BodySource, HtmlDocument,
    Options, RankedMatch,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Output {
    found: bool,
    source: BodySource,
    reasons: Vec<String>,
    query_token_count: usize,
    chunk_count: usize,
    matches: Vec<RankedMatch>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let Some(title) = std::env::args().nth(1) else {
        eprintln!("usage: scan_stdin <title> < page.html");
        std::process::exit(2);
    };

    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let options = Options::default();
    let doc = HtmlDocument::parse(&transcode_to_utf8(&html));
    let extraction = extract_article(&doc, doc.linked_data(), &options);

    let ranking = if extraction.is_found() {
        Some(rank_passages(&extraction.blocks, &title, &options))
    } else {
        None
    };

    let output = Output {
        found: extraction.is_found(),
        source: extraction.source,
        reasons: extraction.reasons,
        query_token_count: ranking.as_ref().map_or(0, |r| r.query_token_count),
        chunk_count: ranking.as_ref().map_or(0, |r| r.chunk_count),
        matches: ranking.map_or_else(Vec::new, |r| r.matches),
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
