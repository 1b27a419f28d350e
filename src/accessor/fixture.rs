//! Synthetic arena-backed accessor for deterministic tests.
//!
//! Builds a document tree by hand, without HTML parsing. Nodes must be added
//! in preorder (parent before children, siblings in document order) so that
//! arena order equals document order.

use crate::accessor::{is_container_tag, ContainerRole, DocumentAccessor, QueryTarget};
use crate::block::TagKind;
use crate::patterns::EXCLUDED_TAGS;

#[derive(Debug, Clone)]
struct FixtureNode {
    tag: String,
    own_text: String,
    parent: Option<usize>,
    role: Option<String>,
    article_body: bool,
}

/// Hand-built document tree, rooted at an `html` node.
#[derive(Debug, Clone)]
pub struct FixtureDocument {
    nodes: Vec<FixtureNode>,
}

impl FixtureDocument {
    /// Create a document holding only the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![FixtureNode {
                tag: "html".to_string(),
                own_text: String::new(),
                parent: None,
                role: None,
                article_body: false,
            }],
        }
    }

    /// Handle of the root node.
    #[must_use]
    pub fn root_id(&self) -> usize {
        0
    }

    /// Append a child element with direct text content.
    pub fn child(&mut self, parent: usize, tag: &str, text: &str) -> usize {
        self.push(parent, tag, text, None, false)
    }

    /// Append a child element carrying a `role` attribute.
    pub fn child_with_role(&mut self, parent: usize, tag: &str, text: &str, role: &str) -> usize {
        self.push(parent, tag, text, Some(role.to_string()), false)
    }

    /// Append a child element explicitly marked as the article body.
    pub fn child_marked(&mut self, parent: usize, tag: &str, text: &str) -> usize {
        self.push(parent, tag, text, None, true)
    }

    fn push(
        &mut self,
        parent: usize,
        tag: &str,
        text: &str,
        role: Option<String>,
        article_body: bool,
    ) -> usize {
        self.nodes.push(FixtureNode {
            tag: tag.to_ascii_lowercase(),
            own_text: text.to_string(),
            parent: Some(parent),
            role: role.map(|r| r.to_ascii_lowercase()),
            article_body,
        });
        self.nodes.len() - 1
    }

    fn is_descendant(&self, node: usize, ancestor: usize) -> bool {
        let mut current = self.nodes[node].parent;
        while let Some(idx) = current {
            if idx == ancestor {
                return true;
            }
            current = self.nodes[idx].parent;
        }
        false
    }

    fn matches(&self, idx: usize, target: QueryTarget) -> bool {
        let node = &self.nodes[idx];
        let role = node.role.as_deref();
        match target {
            QueryTarget::Blocks => TagKind::from_tag(&node.tag).is_some(),
            QueryTarget::Paragraphs => node.tag == "p",
            QueryTarget::Containers => is_container_tag(&node.tag),
            QueryTarget::Anchors => node.tag == "a",
            QueryTarget::ArticleBodyMarkers => node.article_body,
            QueryTarget::SemanticSeeds => {
                node.article_body
                    || node.tag == "article"
                    || node.tag == "main"
                    || matches!(role, Some("article" | "main"))
            }
        }
    }
}

impl Default for FixtureDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentAccessor for FixtureDocument {
    type Node = usize;

    fn root(&self) -> Option<usize> {
        Some(0)
    }

    fn query(&self, scope: &usize, target: QueryTarget) -> Vec<usize> {
        (0..self.nodes.len())
            .filter(|&idx| self.is_descendant(idx, *scope) && self.matches(idx, target))
            .collect()
    }

    fn in_excluded_subtree(&self, node: &usize) -> bool {
        let mut current = Some(*node);
        while let Some(idx) = current {
            let record = &self.nodes[idx];
            if EXCLUDED_TAGS.contains(&record.tag.as_str())
                || record.role.as_deref() == Some("navigation")
            {
                return true;
            }
            current = record.parent;
        }
        false
    }

    fn text(&self, node: &usize) -> String {
        let mut parts = Vec::new();
        if !self.nodes[*node].own_text.is_empty() {
            parts.push(self.nodes[*node].own_text.as_str());
        }
        for idx in *node + 1..self.nodes.len() {
            if self.is_descendant(idx, *node) && !self.nodes[idx].own_text.is_empty() {
                parts.push(self.nodes[idx].own_text.as_str());
            }
        }
        parts.join(" ")
    }

    fn tag_kind(&self, node: &usize) -> Option<TagKind> {
        TagKind::from_tag(&self.nodes[*node].tag)
    }

    fn container_role(&self, node: &usize) -> ContainerRole {
        let record = &self.nodes[*node];
        let role = record.role.as_deref();
        if record.article_body || record.tag == "article" || role == Some("article") {
            ContainerRole::Article
        } else if record.tag == "main" || role == Some("main") {
            ContainerRole::Main
        } else {
            ContainerRole::Generic
        }
    }

    fn contains(&self, ancestor: &usize, node: &usize) -> bool {
        self.is_descendant(*node, *ancestor)
    }

    fn same_node(&self, a: &usize, b: &usize) -> bool {
        a == b
    }
}
