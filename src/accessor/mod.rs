//! Document accessor capability.
//!
//! The extraction core never touches a concrete markup tree. It works
//! through [`DocumentAccessor`]: ordered descendant queries over a fixed tag
//! vocabulary, excluded-ancestor testing, flattened text retrieval, and
//! containment/equality between opaque node handles. Any backend satisfying
//! the contract is valid; two ship with the crate:
//!
//! - [`html::HtmlDocument`] — a static markup tree parsed with `dom_query`
//! - [`fixture::FixtureDocument`] — a hand-built arena for deterministic tests

pub mod fixture;
pub mod html;

use crate::block::TagKind;

/// Structural container tags shared by the shipped adapters.
pub(crate) fn is_container_tag(tag: &str) -> bool {
    matches!(tag, "article" | "main" | "section" | "div")
}

/// Fixed query vocabularies the accessor must answer.
///
/// Keeping the vocabulary closed lets a backend precompute or translate each
/// query however it likes (CSS selectors, arena scans) without the core
/// knowing about selector syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryTarget {
    /// Block-level content tags: p, h2-h6, blockquote, li.
    Blocks,
    /// Paragraph elements.
    Paragraphs,
    /// Structural containers: article, main, section, div.
    Containers,
    /// Anchor elements.
    Anchors,
    /// Elements explicitly marked as the article body.
    ArticleBodyMarkers,
    /// Semantic candidate seeds: article elements and roles, articleBody
    /// markers, main elements and roles.
    SemanticSeeds,
}

/// Semantic weight a container node carries for composite scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerRole {
    /// An `<article>` element, `role="article"`, or articleBody marker.
    Article,
    /// A `<main>` element or `role="main"`.
    Main,
    /// Anything else.
    Generic,
}

/// Read-only capability over one document tree snapshot.
///
/// Node handles are opaque, cheap to clone, and stable for the lifetime of
/// the accessor, so callers can map extraction results back to source nodes
/// (e.g. for highlighting). Implementations never mutate the tree.
pub trait DocumentAccessor {
    /// Opaque, stable node handle.
    type Node: Clone + std::fmt::Debug;

    /// The document root.
    fn root(&self) -> Option<Self::Node>;

    /// Descendants of `scope` matching `target`, in document order.
    ///
    /// `scope` itself is never included.
    fn query(&self, scope: &Self::Node, target: QueryTarget) -> Vec<Self::Node>;

    /// Whether the node or any ancestor is structural chrome (navigation,
    /// header/footer, forms, embedded media, interactive controls).
    fn in_excluded_subtree(&self, node: &Self::Node) -> bool;

    /// Flattened text content of the node's subtree, whitespace untouched.
    fn text(&self, node: &Self::Node) -> String;

    /// Block tag kind of the node, if it is a block-level content tag.
    fn tag_kind(&self, node: &Self::Node) -> Option<TagKind>;

    /// Semantic container role of the node.
    fn container_role(&self, node: &Self::Node) -> ContainerRole;

    /// Whether `ancestor` strictly contains `node`.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    /// Whether two handles refer to the same node.
    fn same_node(&self, a: &Self::Node, b: &Self::Node) -> bool;
}
