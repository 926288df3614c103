//! CLI Adapter.

mod ask;

use std::io::{ErrorKind, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::{Error as DialoguerError, Input};
use tracing_subscriber::EnvFilter;

use crate::app::api;
use crate::domain::{AppError, CampaignBrief, GenieConfig, load_config};

#[derive(Parser)]
#[command(name = "campaign-genie")]
#[command(version)]
#[command(
    about = "Turn a brand brief into a campaign, social posts, and event partnerships",
    long_about = None
)]
struct Cli {
    /// Configuration file (defaults to genie.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the genie for a brand platform, posts, and event recommendations
    #[clap(visible_alias = "a")]
    Ask {
        /// Brand name (prompted for when omitted)
        #[arg(short, long)]
        brand: Option<String>,
        /// Taglines, broader ideas, references
        #[arg(short, long)]
        tags: Option<String>,
        /// Campaign city, enables event recommendations
        #[arg(short, long)]
        location: Option<String>,
        /// Skip the social posts
        #[arg(long)]
        no_posts: bool,
        /// Skip image generation for posts
        #[arg(long)]
        no_images: bool,
        /// Directory receiving generated images
        #[arg(short, long, default_value = "genie-output")]
        out_dir: PathBuf,
    },
    /// Print the campaign conversation as JSON without calling any API
    #[clap(visible_alias = "p")]
    Prompt {
        /// Brand name
        #[arg(short, long)]
        brand: String,
        /// Taglines, broader ideas, references
        #[arg(short, long)]
        tags: Option<String>,
        /// Campaign city
        #[arg(short, long)]
        location: Option<String>,
    },
    /// Parse a saved chat response into posts (reads stdin without FILE)
    Parse {
        /// File holding the chat response
        file: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Ask { brand, tags, location, no_posts, no_images, out_dir } => {
            load_config(cli.config.as_deref()).and_then(|config| {
                let Some(brand) = resolve_brand(brand)? else {
                    return Ok(());
                };
                let brief = CampaignBrief::new(brand, tags, location)?;
                ask::run_ask(config, brief, !no_posts, !no_images, &out_dir)
            })
        }
        Commands::Prompt { brand, tags, location } => {
            load_config(cli.config.as_deref()).and_then(|config| {
                run_prompt(&config, CampaignBrief::new(brand, tags, location)?)
            })
        }
        Commands::Parse { file } => run_parse(file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run_prompt(config: &GenieConfig, brief: CampaignBrief) -> Result<(), AppError> {
    let conversation = api::campaign_prompt(config, &brief)?;
    println!("{}", to_json(&conversation)?);
    Ok(())
}

fn run_parse(file: Option<PathBuf>) -> Result<(), AppError> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let posts = api::parse_post_text(&raw)?;
    println!("{}", to_json(&posts)?);
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|err| AppError::Configuration(format!("Failed to encode JSON: {}", err)))
}

fn resolve_brand(brand: Option<String>) -> Result<Option<String>, AppError> {
    match brand {
        Some(value) => Ok(Some(value)),
        None => prompt_brand(),
    }
}

fn prompt_brand() -> Result<Option<String>, AppError> {
    match Input::new().with_prompt("Brand").interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Configuration(format!("Failed to read brand: {}", err))),
    }
}
