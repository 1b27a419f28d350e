//! HTML adapter over a `dom_query`-parsed static markup tree.
//!
//! The tree is walked once at parse time into a flat element arena; node
//! handles are arena indices, stable for the accessor's lifetime. Embedded
//! linked-data scripts are collected during the same pass, with malformed
//! JSON skipped silently.

use std::collections::HashMap;

use dom_query::{Document, Selection};
use serde_json::Value;

use crate::accessor::{is_container_tag, ContainerRole, DocumentAccessor, QueryTarget};
use crate::block::TagKind;
use crate::patterns::{EXCLUDED_TAGS, JSON_LD_SELECTOR};

#[derive(Debug)]
struct ElementRecord {
    tag: String,
    parent: Option<usize>,
    text: String,
    role: Option<String>,
    article_body: bool,
}

/// A parsed HTML document exposed through the accessor capability.
#[derive(Debug)]
pub struct HtmlDocument {
    nodes: Vec<ElementRecord>,
    linked_data: Vec<Value>,
}

impl HtmlDocument {
    /// Parse an HTML string into an accessor-backed document.
    ///
    /// Parsing never fails; malformed markup simply yields fewer elements.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        let doc = Document::from(html);

        let linked_data = doc
            .select(JSON_LD_SELECTOR)
            .iter()
            .filter_map(|script| {
                let text = script.text().trim().to_string();
                if text.is_empty() {
                    None
                } else {
                    serde_json::from_str(&text).ok()
                }
            })
            .collect();

        let mut nodes: Vec<ElementRecord> = Vec::new();
        let mut index_of: HashMap<dom_query::NodeId, usize> = HashMap::new();

        let root_sel = doc.select("html");
        let Some(root) = root_sel.nodes().first().copied() else {
            return Self {
                nodes,
                linked_data,
            };
        };

        index_of.insert(root.id, nodes.len());
        nodes.push(record_for(&Selection::from(root), None));

        for node in root.descendants() {
            if !node.is_element() {
                continue;
            }

            // Nearest element ancestor already in the arena.
            let mut parent_idx = None;
            let mut current = node.parent();
            while let Some(parent) = current {
                if let Some(&idx) = index_of.get(&parent.id) {
                    parent_idx = Some(idx);
                    break;
                }
                current = parent.parent();
            }

            index_of.insert(node.id, nodes.len());
            nodes.push(record_for(&Selection::from(node), parent_idx));
        }

        Self {
            nodes,
            linked_data,
        }
    }

    /// Pre-decoded linked-data records found in the document.
    #[must_use]
    pub fn linked_data(&self) -> &[Value] {
        &self.linked_data
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

fn record_for(sel: &Selection, parent: Option<usize>) -> ElementRecord {
    let tag = sel
        .nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
        .unwrap_or_default();
    let role = sel.attr("role").map(|r| r.to_ascii_lowercase());
    let article_body = sel
        .attr("itemprop")
        .is_some_and(|v| v.eq_ignore_ascii_case("articleBody"));

    ElementRecord {
        tag,
        parent,
        text: sel.text().to_string(),
        role,
        article_body,
    }
}

impl DocumentAccessor for HtmlDocument {
    type Node = usize;

    fn root(&self) -> Option<usize> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(0)
        }
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
        self.nodes[*node].text.clone()
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
