//! End-to-end extraction tests over parsed HTML documents.

use passagemark::{extract_article, BodySource, HtmlDocument, Options};

const FILLER: &str =
    "This paragraph carries enough substantive text to clear every length gate comfortably.";

fn article_page() -> String {
    format!(
        r#"<html>
        <head><title>Example</title></head>
        <body>
            <header><p>Site masthead with a long tagline about the publication itself.</p></header>
            <nav>
                <ul>
                    <li><a href="/">Home</a></li>
                    <li><a href="/politics">Politics</a></li>
                    <li><a href="/sport">Sport</a></li>
                </ul>
            </nav>
            <article>
                <h2>A Heading Worth Keeping</h2>
                <p>{FILLER} First body paragraph.</p>
                <p>{FILLER} Second body paragraph.</p>
                <p>{FILLER} Third body paragraph.</p>
                <p>Read more: our partner coverage of this very topic continues elsewhere.</p>
            </article>
            <aside><p>{FILLER} Sidebar promotion that must never be extracted.</p></aside>
            <footer><p>Copyright 2025 Example Media. All rights reserved everywhere.</p></footer>
        </body>
        </html>"#
    )
}

#[test]
fn extraction_prefers_article_and_drops_chrome() {
    let doc = HtmlDocument::parse(&article_page());
    let extraction = extract_article(&doc, doc.linked_data(), &Options::default());

    assert_eq!(extraction.source, BodySource::ScoredContainer);
    let body = match &extraction.body_text {
        Some(body) => body,
        None => panic!("expected a body"),
    };
    assert!(body.contains("First body paragraph"));
    assert!(body.contains("A Heading Worth Keeping"));
    assert!(!body.contains("Home"));
    assert!(!body.contains("Sidebar promotion"));
    assert!(!body.contains("Copyright"));
    assert!(!body.contains("Read more"));
}

#[test]
fn blocks_are_unique_by_lowercase_text() {
    let html = format!(
        r#"<html><body><article>
        <p>{FILLER} Repeated paragraph.</p>
        <p>{FILLER} REPEATED PARAGRAPH.</p>
        <p>{FILLER} Another paragraph entirely.</p>
        <p>{FILLER} Yet another paragraph of body text.</p>
        </article></body></html>"#
    );
    let doc = HtmlDocument::parse(&html);
    let extraction = extract_article(&doc, doc.linked_data(), &Options::default());

    let mut lowered: Vec<String> = extraction
        .blocks
        .iter()
        .map(|b| b.text.to_lowercase())
        .collect();
    let before = lowered.len();
    lowered.sort();
    lowered.dedup();
    assert_eq!(lowered.len(), before);
    assert_eq!(before, 3);
}

#[test]
fn linked_data_body_wins_over_tree_content() {
    let html = format!(
        r#"<html><head>
        <script type="application/ld+json">
        {{"@type": "NewsArticle",
          "headline": "From Metadata",
          "articleBody": "{FILLER} Metadata paragraph one.\n{FILLER} Metadata paragraph two.\n{FILLER} Metadata paragraph three."}}
        </script>
        </head><body><article>
        <p>{FILLER} Tree paragraph one.</p>
        <p>{FILLER} Tree paragraph two.</p>
        <p>{FILLER} Tree paragraph three.</p>
        </article></body></html>"#
    );
    let doc = HtmlDocument::parse(&html);
    let extraction = extract_article(&doc, doc.linked_data(), &Options::default());

    assert_eq!(extraction.source, BodySource::LinkedData);
    assert_eq!(extraction.blocks.len(), 3);
    assert!(extraction.blocks.iter().all(|b| b.text.contains("Metadata paragraph")));
    assert!(extraction.reasons.contains(&"linked-data:accepted".to_string()));
}

#[test]
fn marked_container_beats_scored_candidates() {
    let html = format!(
        r#"<html><body>
        <div itemprop="articleBody">
            <p>{FILLER} Marked paragraph one.</p>
            <p>{FILLER} Marked paragraph two.</p>
            <p>{FILLER} Marked paragraph three.</p>
        </div>
        <div>
            <p>{FILLER} Decoy paragraph one.</p>
            <p>{FILLER} Decoy paragraph two.</p>
            <p>{FILLER} Decoy paragraph three.</p>
            <p>{FILLER} Decoy paragraph four.</p>
            <p>{FILLER} Decoy paragraph five.</p>
        </div>
        </body></html>"#
    );
    let doc = HtmlDocument::parse(&html);
    let extraction = extract_article(&doc, doc.linked_data(), &Options::default());

    assert_eq!(extraction.source, BodySource::MarkedContainer);
    assert!(extraction.blocks.iter().all(|b| b.text.contains("Marked paragraph")));
}

#[test]
fn thin_page_yields_typed_absence() {
    // Two short paragraphs, 180 characters in total: under both gates.
    let half = "a".repeat(90);
    let html = format!("<html><body><div><p>{half}</p><p>{half}b</p></div></body></html>");
    let doc = HtmlDocument::parse(&html);
    let extraction = extract_article(&doc, doc.linked_data(), &Options::default());

    assert_eq!(extraction.source, BodySource::Absent);
    assert!(!extraction.is_found());
    assert!(extraction.body_text.is_none());
    assert!(extraction.blocks.is_empty());
    assert!(!extraction.reasons.is_empty());
}

#[test]
fn link_dense_container_loses_to_content() {
    let html = format!(
        r#"<html><body>
        <div id="listing">
            <p><a href="/a">A link heavy line of navigation text pointing somewhere</a></p>
            <p><a href="/b">Another link heavy line of navigation text to follow</a></p>
            <p><a href="/c">Yet another link heavy line of listing text right here</a></p>
            <p><a href="/d">One more link heavy line of listing text to finish</a></p>
            <p><a href="/e">A final link heavy line of listing text for the road</a></p>
        </div>
        <div id="story">
            <p>{FILLER} Story paragraph one.</p>
            <p>{FILLER} Story paragraph two.</p>
            <p>{FILLER} Story paragraph three.</p>
        </div>
        </body></html>"#
    );
    let doc = HtmlDocument::parse(&html);
    let extraction = extract_article(&doc, doc.linked_data(), &Options::default());

    assert_eq!(extraction.source, BodySource::ScoredContainer);
    let body = match &extraction.body_text {
        Some(body) => body,
        None => panic!("expected a body"),
    };
    assert!(body.contains("Story paragraph"));
    assert!(!body.contains("link heavy line"));
}
