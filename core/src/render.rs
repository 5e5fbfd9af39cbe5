#![deny(missing_docs)]

//! # Rendering
//!
//! Markdown rendering of query results, one function per result type.
//!
//! The textual layout is advisory; counts, endpoint identities, and the
//! schema JSON blocks are the exact part. Schemas serialize verbatim so
//! nothing the document declared is lost in display.

use crate::index::Endpoint;
use crate::query::{
    strip_tag_prefix, ApiOverview, EndpointDetails, EndpointPage, ResourceGroups, ResourceView,
    SearchResults,
};
use crate::resolver::SchemaResolver;
use crate::spec::model::{ParameterSpec, SchemaObject};

/// Renders the whole-document overview.
pub fn render_overview(overview: &ApiOverview) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {} (v{})\n\n", overview.title, overview.version));
    if let Some(description) = &overview.description {
        out.push_str(&format!("{}\n\n", description));
    }
    out.push_str(&format!("Total endpoints: {}\n\n", overview.total_endpoints));
    out.push_str("## Endpoints per method\n\n");
    for (method, count) in &overview.method_counts {
        out.push_str(&format!("- {}: {}\n", method, count));
    }
    out.push_str("\n## Top tags\n\n");
    for tag in &overview.top_tags {
        out.push_str(&format!(
            "- {}: {} endpoint(s)\n",
            strip_tag_prefix(&tag.name),
            tag.count
        ));
    }
    out
}

/// Renders a filtered endpoint listing.
pub fn render_endpoint_page(page: &EndpointPage<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} endpoint(s)\n\n", page.total));
    for endpoint in &page.endpoints {
        push_endpoint_line(&mut out, endpoint);
    }
    if page.truncated() {
        out.push_str(&format!(
            "\nShowing {} of {} endpoint(s).\n",
            page.endpoints.len(),
            page.total
        ));
    }
    out
}

/// Renders one endpoint in full, schemas embedded as JSON blocks.
pub fn render_details(details: &EndpointDetails<'_>, resolver: &SchemaResolver<'_>) -> String {
    let mut out = String::new();
    let endpoint = details.endpoint;
    out.push_str(&format!("# {} {}\n\n", endpoint.method, endpoint.path));
    if let Some(summary) = &endpoint.summary {
        out.push_str(&format!("{}\n\n", summary));
    }
    if let Some(description) = &endpoint.description {
        out.push_str(&format!("{}\n\n", description));
    }
    if !endpoint.tags.is_empty() {
        out.push_str(&format!("Tags: {}\n\n", endpoint.tags.join(", ")));
    }

    push_param_section(&mut out, "Path parameters", &details.path_params, resolver);
    push_param_section(&mut out, "Query parameters", &details.query_params, resolver);
    push_name_list(&mut out, "Required", &details.required_params);
    push_name_list(&mut out, "Optional", &details.optional_params);

    if let Some(schema) = details.request_schema {
        out.push_str("## Request body\n\n");
        out.push_str(&format!("{}\n\n", resolver.describe(schema)));
        push_schema_block(&mut out, schema);
    }
    if let Some(schema) = details.response_schema {
        out.push_str("## Response\n\n");
        out.push_str(&format!("{}\n\n", resolver.describe(schema)));
        push_schema_block(&mut out, schema);
    }
    out
}

/// Renders a resource view, one section per non-empty action bucket.
pub fn render_resource_view(view: &ResourceView<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "# Resource '{}': {} endpoint(s)\n\n",
        view.resource, view.total
    ));
    push_bucket(&mut out, "List", &view.buckets.list);
    push_bucket(&mut out, "Get", &view.buckets.get);
    push_bucket(&mut out, "Create", &view.buckets.create);
    push_bucket(&mut out, "Update", &view.buckets.update);
    push_bucket(&mut out, "Delete", &view.buckets.delete);
    out
}

/// Renders search hits with the pre-truncation total.
pub fn render_search(results: &SearchResults<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} hit(s) for '{}'\n\n",
        results.total, results.keyword
    ));
    for endpoint in &results.hits {
        push_endpoint_line(&mut out, endpoint);
    }
    if results.truncated() {
        out.push_str(&format!(
            "\nShowing {} of {} hit(s).\n",
            results.hits.len(),
            results.total
        ));
    }
    out
}

/// Renders the category breakdown and the full tag census.
pub fn render_resource_groups(groups: &ResourceGroups) -> String {
    let mut out = String::new();
    for category in &groups.categories {
        out.push_str(&format!("## {}\n\n", category.name));
        for tag in &category.tags {
            out.push_str(&format!(
                "- {}: {} endpoint(s)\n",
                strip_tag_prefix(&tag.name),
                tag.count
            ));
        }
        out.push('\n');
    }
    out.push_str(&format!("{} tag(s) total.\n", groups.tags.len()));
    out
}

/// Renders one named schema with its verbatim JSON definition.
pub fn render_schema(name: &str, schema: &SchemaObject, resolver: &SchemaResolver<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Schema {}\n\n", name));
    out.push_str(&format!("{}\n\n", resolver.describe(schema)));
    push_schema_block(&mut out, schema);
    out
}

/// One listing line: method, path, summary, tags.
fn push_endpoint_line(out: &mut String, endpoint: &Endpoint) {
    out.push_str(&format!("- `{} {}`", endpoint.method, endpoint.path));
    if let Some(summary) = &endpoint.summary {
        out.push_str(&format!(" - {}", summary));
    }
    if !endpoint.tags.is_empty() {
        out.push_str(&format!(" [{}]", endpoint.tags.join(", ")));
    }
    out.push('\n');
}

fn push_param_section(
    out: &mut String,
    heading: &str,
    params: &[&ParameterSpec],
    resolver: &SchemaResolver<'_>,
) {
    if params.is_empty() {
        return;
    }
    out.push_str(&format!("## {}\n\n", heading));
    for param in params {
        let label = param
            .schema
            .as_ref()
            .map(|schema| resolver.describe(schema))
            .unwrap_or_else(|| "unspecified".to_string());
        let marker = if param.required { " (required)" } else { "" };
        out.push_str(&format!("- `{}` ({}){}", param.name, label, marker));
        if let Some(description) = &param.description {
            out.push_str(&format!(" - {}", description));
        }
        out.push('\n');
    }
    out.push('\n');
}

fn push_name_list(out: &mut String, label: &str, params: &[&ParameterSpec]) {
    if params.is_empty() {
        return;
    }
    let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
    out.push_str(&format!("{}: {}\n\n", label, names.join(", ")));
}

fn push_bucket(out: &mut String, name: &str, endpoints: &[&Endpoint]) {
    if endpoints.is_empty() {
        return;
    }
    out.push_str(&format!("## {}\n\n", name));
    for endpoint in endpoints {
        push_endpoint_line(out, endpoint);
    }
    out.push('\n');
}

/// Pretty JSON inside a fenced block, exactly as stored.
fn push_schema_block(out: &mut String, schema: &SchemaObject) {
    let json = serde_json::to_string_pretty(schema).unwrap_or_else(|_| "{}".to_string());
    out.push_str(&format!("```json\n{}\n```\n\n", json));
}
