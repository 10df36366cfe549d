use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use triage_cli::commands;
use triage_cli::config::Config;
use triage_cli::orchestration::Orchestrator;
use triage_cli::shell;

#[derive(Parser)]
#[command(name = "triage")]
#[command(author, version, about = "Triage - multi-agent medical imaging demo", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Run without simulated agent latency
    #[arg(long, global = true)]
    instant: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted stakeholder demo, then offer the interactive shell
    Demo,

    /// Start the interactive menu shell
    Interactive,

    /// Analyze a single image reference and print the report
    Analyze {
        /// Image reference to analyze
        #[arg(short, long)]
        image: String,

        /// Free-text request accompanying the image
        #[arg(short, long, default_value = "Can you check this MRI for any anomalies?")]
        query: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show the knowledge-base reference table
    Knowledge {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "triage_cli=debug"
    } else {
        "triage_cli=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::load()?;
    if cli.instant {
        config = config.without_latency();
    }

    match cli.command {
        Commands::Demo => {
            commands::run_demo(&config).await?;
        }
        Commands::Interactive => {
            let mut orchestrator = Orchestrator::from_config(&config)?;
            shell::run_interactive(&mut orchestrator).await?;
        }
        Commands::Analyze {
            image,
            query,
            format,
        } => {
            commands::run_analyze(&config, &image, &query, &format).await?;
        }
        Commands::Knowledge { format } => {
            commands::run_knowledge(&format)?;
        }
    }

    Ok(())
}
