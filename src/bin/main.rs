//! GenQuery CLI - translate and run catalog queries
//!
//! Usage:
//!   genquery translate "<query>"
//!   genquery run "<query>" [--all] [--zone <zone>]
//!   genquery fields [pattern]
//!
//! Examples:
//!   genquery translate "SELECT DATA_NAME, SUM(DATA_SIZE) WHERE COLL_NAME = '/tempZone/home'"
//!   genquery run "SELECT COLL_NAME WHERE COLL_NAME like '/tempZone/%'" --all
//!   genquery fields META_

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use genquery::catalog::{CatalogSymbolTable, StaticCatalog};
use genquery::config::Settings;
use genquery::executor::QueryExecutor;
use genquery::query::{QueryTranslator, TranslatedQuery};
use genquery::result::ResultSet;
use genquery::worker::WorkerTransport;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "genquery")]
#[command(about = "GenQuery - translate and page catalog queries")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a query and print it as JSON
    Translate {
        /// The query text, e.g. "SELECT DATA_NAME WHERE COLL_NAME = '/zone/home'"
        query: String,

        /// Compare where-clause values case-insensitively
        #[arg(short = 'i', long)]
        case_insensitive: bool,
    },

    /// Run a query through the configured catalog worker
    Run {
        /// The query text
        query: String,

        /// Fetch every page instead of just the first
        #[arg(short, long)]
        all: bool,

        /// Zone to query
        #[arg(short, long)]
        zone: Option<String>,

        /// Rows per page (overrides query.results_per_page)
        #[arg(short = 'n', long)]
        page_size: Option<u32>,
    },

    /// List builtin catalog columns, optionally filtered by a name substring
    Fields {
        /// Case-insensitive substring to match
        pattern: Option<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("genquery=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Translate {
            query,
            case_insensitive,
        } => cmd_translate(&settings, query, case_insensitive),
        Commands::Run {
            query,
            all,
            zone,
            page_size,
        } => cmd_run(&settings, query, all, zone, page_size),
        Commands::Fields { pattern } => cmd_fields(pattern.as_deref()),
    }
}

fn translate(settings: &Settings, text: genquery::TextQuery) -> Option<TranslatedQuery> {
    let extensible = settings.extensible_metadata_map();
    let translator = QueryTranslator::new(StaticCatalog::builtin())
        .with_extensible_metadata(&extensible);

    match translator.translate(&text) {
        Ok(q) => Some(q),
        Err(e) => {
            eprintln!("Translation error: {}", e);
            None
        }
    }
}

fn cmd_translate(settings: &Settings, query: String, case_insensitive: bool) -> ExitCode {
    let text = settings
        .text_query(query)
        .case_insensitive(case_insensitive || settings.query.case_insensitive);
    let Some(translated) = translate(settings, text) else {
        return ExitCode::FAILURE;
    };

    match serde_json::to_string_pretty(&translated) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing query: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_run(
    settings: &Settings,
    query: String,
    all: bool,
    zone: Option<String>,
    page_size: Option<u32>,
) -> ExitCode {
    let mut text = settings.text_query(query);
    if let Some(n) = page_size {
        text = genquery::TextQuery::new(text.query(), n)
            .case_insensitive(settings.query.case_insensitive)
            .compute_total_row_count(settings.query.compute_total_row_count);
    }
    let Some(translated) = translate(settings, text) else {
        return ExitCode::FAILURE;
    };
    let translated = Arc::new(translated);

    let transport = match WorkerTransport::spawn(settings) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Failed to start catalog worker: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut executor = QueryExecutor::new(transport);

    let mut request = settings.page_request();
    if let Some(zone) = zone {
        request = request.zone(zone);
    }

    let mut header = false;
    let result = executor.for_each_page(&translated, request, all, |page| {
        if !header {
            println!("{}", page.column_names().join("\t"));
            header = true;
        }
        print_page(page);
    });
    let page = match result {
        Ok(p) => p,
        Err(e) => {
            error!(error = %e, "query failed");
            eprintln!("Query error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(total) = page.total_records() {
        eprintln!("{} total records", total);
    }

    ExitCode::SUCCESS
}

fn print_page(page: &ResultSet) {
    for row in page {
        println!("{}", row.columns().join("\t"));
    }
}

fn cmd_fields(pattern: Option<&str>) -> ExitCode {
    let catalog = StaticCatalog::builtin();
    let pattern = pattern.map(str::to_ascii_uppercase);

    for field in catalog.fields() {
        if let Some(p) = &pattern {
            if !field.name().contains(p.as_str()) {
                continue;
            }
        }
        println!("{:>6}  {}", catalog.numeric_code(field).value(), field.name());
    }

    ExitCode::SUCCESS
}
