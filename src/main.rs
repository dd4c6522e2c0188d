// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use doc_search::render::results::NO_INFORMATION;
use doc_search::utils::logging::{format_alert, format_success};
use doc_search::{
    Config, Department, ResultRenderer, SearchClient, SearchRequest, SearchSpinner, Validator,
    format_answer,
};
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "doc_search")]
#[command(version = "0.1.0")]
#[command(about = "Departmental document search with AI-generated answers", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the document index and show the generated answer
    Search {
        /// Search query text
        query: String,

        /// Department filter (defaults to the configured department)
        #[arg(short, long, value_enum)]
        department: Option<Department>,

        /// Print the raw response as pretty JSON instead of result cards
        #[arg(long)]
        json: bool,
    },

    /// Download a result document to disk
    Download {
        /// Document download URL from a search result
        url: String,

        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    doc_search::utils::logging::init_logger(cli.color, cli.verbose);
    if !cli.color {
        colored::control::set_override(false);
    }

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Search {
            query,
            department,
            json,
        } => {
            cmd_search(&config, &query, department, json, cli.color).await?;
        }
        Commands::Download { url, output } => {
            cmd_download(&config, &url, output, cli.color).await?;
        }
    }

    Ok(())
}

async fn cmd_search(
    config: &Config,
    query: &str,
    department: Option<Department>,
    json: bool,
    colored: bool,
) -> Result<()> {
    // An empty query never issues a network request.
    if let Err(e) = Validator::validate_query(query) {
        eprintln!("{}", format_alert(e.user_message()));
        return Ok(());
    }

    let department = department.unwrap_or(config.search.department);
    info!("Searching for: {} (department: {})", query, department);

    let client = SearchClient::new(&config.endpoint);
    let request = SearchRequest::new(query, department);

    let spinner = SearchSpinner::new(colored);
    let result = client.search(&request).await;
    spinner.finish_and_clear();

    // Status and endpoint detail stay in the log; the user sees the alert
    // line only.
    let response = match result {
        Ok(response) => response,
        Err(e) => {
            error!("Search request failed: {}", e);
            eprintln!("{}", format_alert(e.user_message()));
            return Ok(());
        }
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&response).context("Failed to serialize response")?
        );
        return Ok(());
    }

    match &response.documents {
        Some(documents) => {
            let renderer = ResultRenderer::new(&config.display);
            println!("{}", renderer.format_documents(query, documents));
        }
        None => {
            if let Some(service_error) = &response.error {
                warn!("Endpoint reported: {}", service_error);
            }
            eprintln!("{}", format_alert(NO_INFORMATION));
        }
    }

    println!("{}", format_answer(response.answer()));

    info!("Search complete");
    Ok(())
}

async fn cmd_download(
    config: &Config,
    url: &str,
    output: Option<PathBuf>,
    colored: bool,
) -> Result<()> {
    let output_dir = output.unwrap_or_else(|| config.download.output_dir.clone());
    info!("Downloading {} to {}", url, output_dir.display());

    let client = SearchClient::new(&config.endpoint);

    let spinner = SearchSpinner::with_message(colored, "Downloading...");
    let result = client.download(url, &output_dir).await;
    spinner.finish_and_clear();

    match result {
        Ok(path) => {
            println!("{}", format_success(&format!("Saved to {}", path.display())));
        }
        Err(e) => {
            error!("Download failed: {}", e);
            eprintln!("{}", format_alert(e.user_message()));
        }
    }

    Ok(())
}
