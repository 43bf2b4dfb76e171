//! bookdb — answer catalog questions through model-selected tool calls.
//!
//! Usage:
//!   bookdb query <QUERY> --response <FILE>   Replay a recorded model response
//!   bookdb call <NAME> <ARGUMENTS>           Execute a raw tool call
//!   bookdb tools                             Print the declared tool schemas
//!   bookdb init                              Write a default config file

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::info;

use bookdb::config::{self, BookdbConfig};
use bookdb::executor::CallExecutor;
use bookdb::invoker::{ReplayInvoker, StaticInvoker};
use bookdb::query::{run_query, QueryOutcome};
use bookdb::report;
use bookdb::tools;
use bookdb::types::{MultiCallPolicy, ToolCall};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "bookdb")]
#[command(version = "0.1.0")]
#[command(about = "Function-calling dispatch over an in-memory book catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the config file [default: ~/.bookdb/bookdb.toml].
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (debug, info, warn, error). Overrides the config file.
    #[arg(long)]
    log_level: Option<String>,

    /// Multi-call policy (first, fail). Overrides the config file.
    #[arg(long)]
    policy: Option<MultiCallPolicy>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer a query by replaying a recorded model response.
    Query {
        /// The user's question.
        query: String,

        /// Recorded chat-completion response (JSON).
        #[arg(long)]
        response: PathBuf,
    },

    /// Execute a tool call directly.
    Call {
        /// Operation name (list, search, get).
        name: String,

        /// JSON object with the operation's arguments.
        arguments: String,
    },

    /// Print the tool definitions advertised to the model.
    Tools,

    /// Write a default config file.
    Init,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned()),
        None => config::default_config_path(),
    };
    let mut cfg = config::load_config(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    if let Some(policy) = cli.policy {
        cfg.multi_call_policy = policy;
    }

    // Initialize logging
    let level = cli.log_level.as_deref().unwrap_or(&cfg.log_level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Query { query, response } => cmd_query(&cfg, &query, &response).await,
        Commands::Call { name, arguments } => cmd_call(&cfg, name, arguments).await,
        Commands::Tools => cmd_tools(),
        Commands::Init => cmd_init(&config_path),
    }
}

// ---------------------------------------------------------------------------
// Command implementations
// ---------------------------------------------------------------------------

async fn cmd_query(cfg: &BookdbConfig, query: &str, response: &Path) -> Result<()> {
    let executor = CallExecutor::new(config::open_catalog(cfg)?);
    let invoker = ReplayInvoker::from_file(response).await?;

    let outcome = run_query(&invoker, &executor, query, cfg.multi_call_policy).await?;
    print_outcome(&outcome)?;

    println!("{}", "Answer prompt input:".bold());
    println!("{}", report::answer_input(query, &outcome.output)?);
    Ok(())
}

async fn cmd_call(cfg: &BookdbConfig, name: String, arguments: String) -> Result<()> {
    let executor = CallExecutor::new(config::open_catalog(cfg)?);
    let invoker = StaticInvoker::single(ToolCall::new(name, arguments));

    let outcome = run_query(&invoker, &executor, "", MultiCallPolicy::Fail).await?;
    print_outcome(&outcome)
}

fn cmd_tools() -> Result<()> {
    let defs = tools::tool_definitions();
    let json = serde_json::to_string_pretty(&defs).context("Failed to serialize tool definitions")?;
    println!("{}", json);
    Ok(())
}

fn cmd_init(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!(
            "{} Config already exists at {}",
            "!!!".yellow().bold(),
            config_path.display()
        );
        return Ok(());
    }

    config::save_config(&BookdbConfig::default(), config_path)?;
    info!("Wrote default config to {}", config_path.display());
    println!("{} Wrote {}", ">>>".green().bold(), config_path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn print_outcome(outcome: &QueryOutcome) -> Result<()> {
    println!("{} {}", "Tool call:".bold(), outcome.call);

    if outcome.output.is_empty() {
        println!("{}", "(no matching books)".dimmed());
        return Ok(());
    }

    for book in outcome.output.books() {
        println!(
            "  {} {} {}",
            book.id.cyan(),
            book.name.bold(),
            format!("[{}]", book.genre).dimmed()
        );
    }
    println!();
    println!("{}", report::render_output(&outcome.output)?);
    Ok(())
}
