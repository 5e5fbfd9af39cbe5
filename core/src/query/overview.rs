#![deny(missing_docs)]

//! # Overview Aggregation
//!
//! Whole-snapshot statistics: endpoint totals, per-method counts, and the
//! most common resource tags.

use std::collections::HashMap;

use indexmap::IndexMap;

use super::{QueryEngine, TagCount};
use crate::index::HttpMethod;

/// How many top tags the overview reports.
const TOP_TAG_LIMIT: usize = 10;

/// Aggregated snapshot statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiOverview {
    /// API title from the document metadata.
    pub title: String,

    /// Document version string.
    pub version: String,

    /// Optional API description.
    pub description: Option<String>,

    /// Total number of indexed endpoints.
    pub total_endpoints: usize,

    /// Endpoint count per method, canonical method order, methods with no
    /// endpoints omitted.
    pub method_counts: Vec<(HttpMethod, usize)>,

    /// The highest-count tags, at most ten, ties broken by the order tags
    /// were first seen.
    pub top_tags: Vec<TagCount>,
}

impl<'a> QueryEngine<'a> {
    /// Aggregates endpoint counts per method and the highest-count tags.
    ///
    /// An endpoint with N tags contributes to N tag counts. The top-tag
    /// sort is stable over first-seen order while scanning endpoints in
    /// index order, which fixes how ties break. Always succeeds.
    pub fn overview(&self) -> ApiOverview {
        let mut method_totals: HashMap<HttpMethod, usize> = HashMap::new();
        let mut tag_totals: IndexMap<String, usize> = IndexMap::new();

        for endpoint in self.index.all() {
            *method_totals.entry(endpoint.method).or_insert(0) += 1;
            for tag in &endpoint.tags {
                *tag_totals.entry(tag.clone()).or_insert(0) += 1;
            }
        }

        let method_counts = HttpMethod::ORDER
            .iter()
            .filter_map(|method| method_totals.get(method).map(|&count| (*method, count)))
            .collect();

        let mut top_tags: Vec<TagCount> = tag_totals
            .into_iter()
            .map(|(name, count)| TagCount { name, count })
            .collect();
        top_tags.sort_by(|a, b| b.count.cmp(&a.count));
        top_tags.truncate(TOP_TAG_LIMIT);

        let info = &self.document.info;
        ApiOverview {
            title: info.title.clone(),
            version: info.version.clone(),
            description: info.description.clone(),
            total_endpoints: self.index.len(),
            method_counts,
            top_tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::EndpointIndex;
    use crate::spec::loader::load_str;

    #[test]
    fn test_overview_counts_methods_and_tags() {
        let yaml = r#"
info:
  title: Fortnox API
  version: "1.0"
  description: ERP endpoints
paths:
  /3/customers:
    get: {tags: [fortnox_Customers]}
    post: {tags: [fortnox_Customers]}
  /3/invoices:
    get: {tags: [fortnox_Invoices]}
    post: {tags: [fortnox_Invoices]}
    put: {tags: [fortnox_Invoices, fortnox_Payments]}
components: {schemas: {}}
"#;
        let doc = load_str(yaml).unwrap();
        let index = EndpointIndex::build(&doc);
        let overview = QueryEngine::new(&doc, &index).overview();

        assert_eq!(overview.title, "Fortnox API");
        assert_eq!(overview.description.as_deref(), Some("ERP endpoints"));
        assert_eq!(overview.total_endpoints, 5);
        assert_eq!(
            overview.method_counts,
            [
                (HttpMethod::Get, 2),
                (HttpMethod::Post, 2),
                (HttpMethod::Put, 1),
            ]
        );

        // The PUT endpoint carries two tags and contributes to both counts.
        assert_eq!(overview.top_tags.len(), 3);
        assert_eq!(overview.top_tags[0].name, "fortnox_Invoices");
        assert_eq!(overview.top_tags[0].count, 3);
    }

    #[test]
    fn test_overview_breaks_count_ties_by_first_seen_order() {
        let yaml = r#"
info: {title: T, version: "1"}
paths:
  /3/b:
    get: {tags: [fortnox_Beta]}
  /3/a:
    get: {tags: [fortnox_Alpha]}
  /3/c:
    get: {tags: [fortnox_Beta, fortnox_Alpha, fortnox_Gamma]}
components: {schemas: {}}
"#;
        let doc = load_str(yaml).unwrap();
        let index = EndpointIndex::build(&doc);
        let overview = QueryEngine::new(&doc, &index).overview();

        // Beta and Alpha both count 2; Beta was seen first.
        let names: Vec<&str> = overview.top_tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["fortnox_Beta", "fortnox_Alpha", "fortnox_Gamma"]);
    }

    #[test]
    fn test_overview_caps_top_tags_at_ten() {
        let mut paths = String::new();
        for i in 0..12 {
            paths.push_str(&format!("  /3/r{}:\n    get: {{tags: [T{}]}}\n", i, i));
        }
        let yaml = format!(
            "info: {{title: T, version: \"1\"}}\npaths:\n{}components: {{schemas: {{}}}}\n",
            paths
        );
        let doc = load_str(&yaml).unwrap();
        let index = EndpointIndex::build(&doc);
        let overview = QueryEngine::new(&doc, &index).overview();

        assert_eq!(overview.total_endpoints, 12);
        assert_eq!(overview.top_tags.len(), 10);
        // All counts tie at one, so the first ten seen survive.
        assert_eq!(overview.top_tags[0].name, "T0");
        assert_eq!(overview.top_tags[9].name, "T9");
    }

    #[test]
    fn test_overview_of_empty_index() {
        let doc = load_str(
            "info: {title: T, version: '1'}\npaths: {}\ncomponents: {schemas: {}}\n",
        )
        .unwrap();
        let index = EndpointIndex::build(&doc);
        let overview = QueryEngine::new(&doc, &index).overview();

        assert_eq!(overview.total_endpoints, 0);
        assert!(overview.method_counts.is_empty());
        assert!(overview.top_tags.is_empty());
    }
}
