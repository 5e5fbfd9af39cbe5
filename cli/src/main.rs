#![deny(missing_docs)]

//! # Apidex CLI
//!
//! Command line interface over the API description index.
//!
//! Loads the document once at startup, builds the endpoint index, and
//! runs one query per invocation. Named subcommands cover the common
//! queries; `call` accepts any operation name with JSON arguments.

use std::path::PathBuf;

use apidex_core::{base_url, load_file, EndpointIndex, QueryEngine};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing::info;

use crate::error::{CliError, CliResult};

mod dispatch;
mod error;

#[derive(Parser, Debug)]
#[clap(author, version, about = "API description index and query CLI")]
struct Cli {
    /// Path to the API description document (JSON or YAML).
    #[clap(
        long,
        env = "APIDEX_SPEC",
        default_value = "openapi.json",
        global = true
    )]
    spec: PathBuf,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show document totals, method counts, and top tags.
    Overview,
    /// List endpoints with optional filters.
    List(ListArgs),
    /// Show one endpoint in full.
    Details(DetailsArgs),
    /// Show every endpoint of one resource, bucketed by action.
    Resource(ResourceArgs),
    /// Search endpoints by keyword.
    Search(SearchArgs),
    /// Show tag counts grouped by category.
    Groups,
    /// Show one named component schema.
    Schema(SchemaArgs),
    /// Run one operation by name with JSON arguments.
    Call(CallArgs),
}

/// Arguments for the list command.
#[derive(clap::Args, Debug, Clone)]
struct ListArgs {
    /// Keep only endpoints with this HTTP method.
    #[clap(long)]
    method: Option<String>,

    /// Keep only endpoints carrying this exact tag.
    #[clap(long)]
    tag: Option<String>,

    /// Show at most this many endpoints.
    #[clap(long)]
    limit: Option<usize>,
}

/// Arguments for the details command.
#[derive(clap::Args, Debug, Clone)]
struct DetailsArgs {
    /// Exact path template, e.g. `/3/customers/{CustomerNumber}`.
    path: String,

    /// HTTP method, any casing.
    method: String,
}

/// Arguments for the resource command.
#[derive(clap::Args, Debug, Clone)]
struct ResourceArgs {
    /// Resource name, matched fuzzily against tags.
    name: String,
}

/// Arguments for the search command.
#[derive(clap::Args, Debug, Clone)]
struct SearchArgs {
    /// Keyword matched against path, summary, description, id, and tags.
    keyword: String,

    /// Show at most this many hits.
    #[clap(long)]
    limit: Option<usize>,
}

/// Arguments for the schema command.
#[derive(clap::Args, Debug, Clone)]
struct SchemaArgs {
    /// Component schema name, e.g. `Customer`.
    name: String,
}

/// Arguments for the call command.
#[derive(clap::Args, Debug, Clone)]
struct CallArgs {
    /// Operation name, e.g. `getDetails`.
    operation: String,

    /// Arguments as a JSON object string, e.g. `{"path": "/3/customers"}`.
    args: Option<String>,
}

fn main() -> CliResult<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    run(&cli)
}

/// Loads the document, runs one query, prints the outcome.
fn run(cli: &Cli) -> CliResult<()> {
    let document = load_file(&cli.spec)?;
    let index = EndpointIndex::build(&document);
    info!(
        "Indexed {} endpoints from {}",
        index.len(),
        cli.spec.display()
    );
    if let Ok(base) = base_url(&document) {
        info!("API base URL: {}", base);
    }

    let engine = QueryEngine::new(&document, &index);
    let (operation, args) = request_for(&cli.command)?;
    println!("{}", dispatch::dispatch(&engine, &operation, &args).into_text());
    Ok(())
}

/// Maps a parsed subcommand to an operation name and JSON arguments.
///
/// Only `call` can fail here: its argument string must parse as a JSON
/// object before dispatch sees it.
fn request_for(command: &Commands) -> CliResult<(String, Value)> {
    let request = match command {
        Commands::Overview => ("overview".to_string(), json!({})),
        Commands::List(args) => (
            "listAll".to_string(),
            json!({"method": args.method, "tag": args.tag, "limit": args.limit}),
        ),
        Commands::Details(args) => (
            "getDetails".to_string(),
            json!({"path": args.path, "method": args.method}),
        ),
        Commands::Resource(args) => (
            "getByResource".to_string(),
            json!({"resource": args.name}),
        ),
        Commands::Search(args) => (
            "search".to_string(),
            json!({"keyword": args.keyword, "limit": args.limit}),
        ),
        Commands::Groups => ("listResourceGroups".to_string(), json!({})),
        Commands::Schema(args) => ("getSchema".to_string(), json!({"schemaName": args.name})),
        Commands::Call(args) => {
            let value = match &args.args {
                Some(text) => serde_json::from_str(text).map_err(|e| {
                    CliError::General(format!("arguments must be a JSON object: {}", e))
                })?,
                None => json!({}),
            };
            if !value.is_object() {
                return Err(CliError::General(format!(
                    "arguments must be a JSON object, got: {}",
                    value
                )));
            }
            (args.operation.clone(), value)
        }
    };
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_subcommands_map_to_operation_requests() {
        let (op, args) = request_for(&Commands::Overview).unwrap();
        assert_eq!(op, "overview");
        assert_eq!(args, json!({}));

        let (op, args) = request_for(&Commands::Details(DetailsArgs {
            path: "/3/customers".to_string(),
            method: "GET".to_string(),
        }))
        .unwrap();
        assert_eq!(op, "getDetails");
        assert_eq!(args, json!({"path": "/3/customers", "method": "GET"}));

        let (op, args) = request_for(&Commands::List(ListArgs {
            method: Some("GET".to_string()),
            tag: None,
            limit: Some(5),
        }))
        .unwrap();
        assert_eq!(op, "listAll");
        assert_eq!(args, json!({"method": "GET", "tag": null, "limit": 5}));

        let (op, args) = request_for(&Commands::Schema(SchemaArgs {
            name: "Customer".to_string(),
        }))
        .unwrap();
        assert_eq!(op, "getSchema");
        assert_eq!(args, json!({"schemaName": "Customer"}));
    }

    #[test]
    fn test_call_passes_its_json_arguments_through() {
        let (op, args) = request_for(&Commands::Call(CallArgs {
            operation: "search".to_string(),
            args: Some(r#"{"keyword": "invoice", "limit": 3}"#.to_string()),
        }))
        .unwrap();
        assert_eq!(op, "search");
        assert_eq!(args, json!({"keyword": "invoice", "limit": 3}));

        let (op, args) = request_for(&Commands::Call(CallArgs {
            operation: "overview".to_string(),
            args: None,
        }))
        .unwrap();
        assert_eq!(op, "overview");
        assert_eq!(args, json!({}));
    }

    #[test]
    fn test_call_rejects_unparseable_and_non_object_arguments() {
        let err = request_for(&Commands::Call(CallArgs {
            operation: "search".to_string(),
            args: Some("{ not json".to_string()),
        }))
        .unwrap_err();
        assert!(matches!(err, CliError::General(_)));

        let err = request_for(&Commands::Call(CallArgs {
            operation: "search".to_string(),
            args: Some("5".to_string()),
        }))
        .unwrap_err();
        assert!(format!("{}", err).contains("JSON object"));
    }
}
