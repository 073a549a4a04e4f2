// Flashboard CLI
//
// Design Decision: Use clap derive for ergonomic argument parsing.
// Design Decision: Support text/json/yaml output formats for scripting.
// Design Decision: All filters and aggregations run locally on fetched
// data; the API is only hit once per endpoint per invocation.

mod client;
mod commands;
mod output;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "flashboard")]
#[command(about = "Flashboard CLI - Event sales analytics at the terminal")]
#[command(version)]
pub struct Cli {
    /// API base URL
    #[arg(
        long,
        env = "FLASHBOARD_API_URL",
        default_value = "http://localhost:8080"
    )]
    pub api_url: String,

    /// Output format
    #[arg(long, short, default_value = "text", value_parser = ["text", "json", "yaml"])]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summary panel, charts, and the filtered event table in one view
    Dashboard {
        /// Keep only events whose venue contains this text (case-insensitive)
        #[arg(long)]
        venue: Option<String>,

        /// Keep only events whose date contains this text
        #[arg(long)]
        date: Option<String>,
    },

    /// List events
    Events {
        /// Keep only events whose venue contains this text (case-insensitive)
        #[arg(long)]
        venue: Option<String>,

        /// Keep only events whose date contains this text
        #[arg(long)]
        date: Option<String>,
    },

    /// Show aggregate totals and distinct venues
    Summary,

    /// Show per-venue totals
    Venues,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = client::Client::new(&cli.api_url);
    let output_format = output::OutputFormat::from_str(&cli.output);

    match cli.command {
        Commands::Dashboard { venue, date } => {
            commands::dashboard::run(&client, output_format, venue, date).await
        }
        Commands::Events { venue, date } => {
            commands::events::run(&client, output_format, venue, date).await
        }
        Commands::Summary => commands::summary::run(&client, output_format).await,
        Commands::Venues => commands::venues::run(&client, output_format).await,
    }
}
