#![deny(missing_docs)]

//! # Resource View
//!
//! Fuzzy resource lookup. Matching compares the requested name against
//! tag names case-insensitively in both directions, so `customers`
//! finds `fortnox_Customers` and `salesorders` finds `fortnox_Orders`.
//! Matches are then bucketed by conventional CRUD action.

use super::{strip_tag_prefix, QueryEngine};
use crate::error::{QueryError, QueryResult};
use crate::index::{Endpoint, HttpMethod};

/// Conventional CRUD action shape of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceAction {
    /// Collection read: GET without a path placeholder.
    List,
    /// Single-item read: GET with a path placeholder.
    Get,
    /// POST.
    Create,
    /// PUT or PATCH.
    Update,
    /// DELETE.
    Delete,
}

/// Classification rules, evaluated top-down; first match wins.
const ACTION_RULES: [(ResourceAction, fn(&Endpoint) -> bool); 5] = [
    (ResourceAction::List, |ep| {
        ep.method == HttpMethod::Get && !ep.has_path_placeholder()
    }),
    (ResourceAction::Get, |ep| {
        ep.method == HttpMethod::Get && ep.has_path_placeholder()
    }),
    (ResourceAction::Create, |ep| ep.method == HttpMethod::Post),
    (ResourceAction::Update, |ep| {
        ep.method == HttpMethod::Put || ep.method == HttpMethod::Patch
    }),
    (ResourceAction::Delete, |ep| ep.method == HttpMethod::Delete),
];

/// Matched endpoints bucketed by action, index order inside each bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceBuckets<'a> {
    /// Collection reads.
    pub list: Vec<&'a Endpoint>,
    /// Single-item reads.
    pub get: Vec<&'a Endpoint>,
    /// Creations.
    pub create: Vec<&'a Endpoint>,
    /// Updates.
    pub update: Vec<&'a Endpoint>,
    /// Deletions.
    pub delete: Vec<&'a Endpoint>,
}

impl ResourceBuckets<'_> {
    /// Endpoints across all buckets.
    pub fn total(&self) -> usize {
        self.list.len()
            + self.get.len()
            + self.create.len()
            + self.update.len()
            + self.delete.len()
    }
}

/// Action-bucketed view of every endpoint matching one resource name.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceView<'a> {
    /// The requested resource name, as given.
    pub resource: String,

    /// Number of matched endpoints.
    pub total: usize,

    /// The matches, bucketed by action.
    pub buckets: ResourceBuckets<'a>,
}

impl<'a> QueryEngine<'a> {
    /// Finds every endpoint whose tags match a resource name.
    ///
    /// Zero matches is a recoverable [`QueryError::NotFound`]; the
    /// message points at `listResourceGroups` for spelling discovery.
    pub fn get_by_resource(&self, resource: &str) -> QueryResult<ResourceView<'a>> {
        if resource.trim().is_empty() {
            return Err(QueryError::InvalidArgument(
                "resource must be a non-empty string".to_string(),
            ));
        }
        let needle = resource.to_lowercase();

        let mut buckets = ResourceBuckets::default();
        let mut total = 0;
        for ep in self.index.all() {
            if !ep.tags.iter().any(|tag| tag_matches(tag, &needle)) {
                continue;
            }
            total += 1;
            match classify(ep) {
                ResourceAction::List => buckets.list.push(ep),
                ResourceAction::Get => buckets.get.push(ep),
                ResourceAction::Create => buckets.create.push(ep),
                ResourceAction::Update => buckets.update.push(ep),
                ResourceAction::Delete => buckets.delete.push(ep),
            }
        }
        if total == 0 {
            return Err(QueryError::resource_not_found(resource));
        }

        Ok(ResourceView {
            resource: resource.to_string(),
            total,
            buckets,
        })
    }
}

/// Case-insensitive substring match in either direction, with the
/// vendor prefix stripped when the tag is the shorter side.
fn tag_matches(tag: &str, needle: &str) -> bool {
    let tag = tag.to_lowercase();
    tag.contains(needle) || needle.contains(strip_tag_prefix(&tag))
}

/// First matching rule wins. The rules cover every method, so the
/// fallback never fires.
fn classify(ep: &Endpoint) -> ResourceAction {
    ACTION_RULES
        .iter()
        .find(|(_, rule)| rule(ep))
        .map(|(action, _)| *action)
        .unwrap_or(ResourceAction::List)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::EndpointIndex;
    use crate::spec::loader::load_str;
    use crate::spec::model::ApiDocument;

    fn sample_document() -> ApiDocument {
        let yaml = r#"
info: {title: T, version: "1"}
paths:
  /3/invoices:
    get: {operationId: list_invoices, tags: [fortnox_Invoices]}
    post: {operationId: create_invoice, tags: [fortnox_Invoices]}
  /3/invoices/{DocumentNumber}:
    get: {operationId: get_invoice, tags: [fortnox_Invoices]}
    put: {operationId: update_invoice, tags: [fortnox_Invoices]}
    delete: {operationId: remove_invoice, tags: [fortnox_Invoices]}
  /3/invoicepayments/{Number}:
    patch: {operationId: patch_payment, tags: [fortnox_InvoicePayments]}
  /3/orders:
    get: {operationId: list_orders, tags: [fortnox_Orders]}
components: {schemas: {}}
"#;
        load_str(yaml).unwrap()
    }

    #[test]
    fn test_buckets_partition_every_match_exactly_once() {
        let doc = sample_document();
        let index = EndpointIndex::build(&doc);
        let engine = QueryEngine::new(&doc, &index);

        let view = engine.get_by_resource("invoice").unwrap();
        // fortnox_Invoices and fortnox_InvoicePayments both contain it.
        assert_eq!(view.total, 6);
        assert_eq!(view.buckets.total(), view.total);

        let ids = |bucket: &[&Endpoint]| -> Vec<String> {
            bucket.iter().map(|ep| ep.operation_id.clone()).collect()
        };
        assert_eq!(ids(&view.buckets.list), ["list_invoices"]);
        assert_eq!(ids(&view.buckets.get), ["get_invoice"]);
        assert_eq!(ids(&view.buckets.create), ["create_invoice"]);
        assert_eq!(ids(&view.buckets.update), ["update_invoice", "patch_payment"]);
        assert_eq!(ids(&view.buckets.delete), ["remove_invoice"]);
    }

    #[test]
    fn test_placeholder_splits_get_into_list_and_get() {
        let doc = sample_document();
        let index = EndpointIndex::build(&doc);
        let engine = QueryEngine::new(&doc, &index);

        let view = engine.get_by_resource("invoices").unwrap();
        assert_eq!(view.buckets.list[0].path, "/3/invoices");
        assert_eq!(view.buckets.get[0].path, "/3/invoices/{DocumentNumber}");
    }

    #[test]
    fn test_matching_is_case_insensitive_and_prefix_blind() {
        let doc = sample_document();
        let index = EndpointIndex::build(&doc);
        let engine = QueryEngine::new(&doc, &index);

        assert_eq!(engine.get_by_resource("INVOICE").unwrap().total, 6);
        // The full tag name matches that tag's endpoints exactly.
        assert_eq!(engine.get_by_resource("fortnox_Invoices").unwrap().total, 5);
    }

    #[test]
    fn test_matching_works_in_both_directions() {
        let doc = sample_document();
        let index = EndpointIndex::build(&doc);
        let engine = QueryEngine::new(&doc, &index);

        // Tag contains the request: "orders" is inside "fortnox_Orders".
        assert_eq!(engine.get_by_resource("orders").unwrap().total, 1);
        // Request contains the stripped tag: "salesorders" covers "orders".
        assert_eq!(engine.get_by_resource("salesorders").unwrap().total, 1);
    }

    #[test]
    fn test_zero_matches_is_not_found_with_group_hint() {
        let doc = sample_document();
        let index = EndpointIndex::build(&doc);
        let engine = QueryEngine::new(&doc, &index);

        let err = engine.get_by_resource("warehouse").unwrap_err();
        assert!(matches!(err, QueryError::NotFound(_)));
        assert!(format!("{}", err).contains("listResourceGroups"));
    }

    #[test]
    fn test_blank_resource_is_an_invalid_argument() {
        let doc = sample_document();
        let index = EndpointIndex::build(&doc);
        let engine = QueryEngine::new(&doc, &index);

        let err = engine.get_by_resource("  ").unwrap_err();
        assert!(matches!(err, QueryError::InvalidArgument(_)));
    }
}
