//! Flattened index of navigable pages for the command palette.

use serde::Serialize;

use crate::sitemap::{RouteTree, SiteMap};

/// A navigable page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry {
    /// Page label.
    pub label: String,
    /// Labels of the enclosing pages, outermost first.
    pub parents: Vec<String>,
    /// Hash to navigate to.
    pub hash: String,
}

/// Every page reachable through the route tree of a valid section.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    /// Builds the index in route-tree order. Sections outside the
    /// allow-list are skipped.
    pub fn build(site: &SiteMap) -> Self {
        let mut entries = Vec::new();
        for (section, node) in &site.routes {
            if !site.is_valid_section(section) {
                continue;
            }
            entries.push(SearchEntry {
                label: node.label.clone(),
                parents: Vec::new(),
                hash: format!("#{section}"),
            });
            collect(
                &node.children,
                &format!("#{section}"),
                &[node.label.clone()],
                &mut entries,
            );
        }
        Self { entries }
    }

    /// All entries in tree order.
    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    /// Case-insensitive substring search over labels and hashes.
    ///
    /// Label prefix matches come first; order is otherwise stable.
    /// An empty query returns everything.
    pub fn search(&self, query: &str) -> Vec<&SearchEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.entries.iter().collect();
        }

        let mut prefix = Vec::new();
        let mut rest = Vec::new();
        for entry in &self.entries {
            let label = entry.label.to_lowercase();
            if label.starts_with(&needle) {
                prefix.push(entry);
            } else if label.contains(&needle) || entry.hash.contains(&needle) {
                rest.push(entry);
            }
        }
        prefix.extend(rest);
        prefix
    }
}

fn collect(tree: &RouteTree, base: &str, parents: &[String], out: &mut Vec<SearchEntry>) {
    for (segment, node) in tree {
        let hash = format!("{base}/{segment}");
        out.push(SearchEntry {
            label: node.label.clone(),
            parents: parents.to_vec(),
            hash: hash.clone(),
        });
        if !node.children.is_empty() {
            let mut nested = parents.to_vec();
            nested.push(node.label.clone());
            collect(&node.children, &hash, &nested, out);
        }
    }
}
