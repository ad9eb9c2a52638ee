//! VoxCmd - Voice Command Normalizer
//!
//! Command-line front end over the normalization pipeline.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::EnvFilter;
use voxcmd::audit::AuditLog;
use voxcmd::config::{self, Config};
use voxcmd::CommandPipeline;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Append processed commands to the audit log
    #[arg(long, global = true)]
    audit: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply domain and word corrections only
    Correct { text: String },
    /// Print the intent of a command
    Classify { text: String },
    /// Print the command type label
    Type { text: String },
    /// Correct and normalize a command
    Process {
        text: String,
        /// Print full analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print everything the pipeline decided
    Analyze { text: String },
    /// Process one utterance per stdin line
    Listen {
        /// Print one JSON analysis per line
        #[arg(long)]
        json: bool,
    },
}

struct App {
    pipeline: CommandPipeline,
    audit: Option<AuditLog>,
}

impl App {
    /// Run one utterance through the full pipeline and format the result
    fn process_line(&self, text: &str, json: bool) -> Result<String> {
        let analysis = self.pipeline.analyze(text);
        if analysis.normalized != analysis.original {
            info!(
                "🔄 Command processed: '{}' -> '{}'",
                analysis.original, analysis.normalized
            );
        }

        if let Some(ref audit) = self.audit {
            if let Err(e) =
                audit.append(&analysis.original, &analysis.normalized, analysis.command_type)
            {
                warn!("⚠️ Could not write audit log: {}", e);
            }
        }

        if json {
            Ok(serde_json::to_string(&analysis)?)
        } else {
            Ok(analysis.normalized)
        }
    }

    async fn listen(&self, json: bool) -> Result<()> {
        info!("🎙️ Reading utterances from stdin");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while let Some(line) = lines.next_line().await? {
            let text = line.trim();
            if text.is_empty() {
                debug!("Skipping blank line");
                continue;
            }
            println!("{}", self.process_line(text, json)?);
        }

        info!("Input closed");
        Ok(())
    }
}

fn init_logging(verbose: bool, config_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config problems are reported before the configured log level is known
    let config_file = args.config.clone().unwrap_or_else(config::config_path);
    let bootstrap = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, || Config::load_from(&config_file))
        .with_context(|| format!("Failed to load config from {}", config_file.display()))?;

    init_logging(args.verbose, &config.log_level);
    debug!("VoxCmd v{} using {}", env!("CARGO_PKG_VERSION"), config_file.display());

    let pipeline = CommandPipeline::from_config(&config)?;
    let app = App {
        pipeline,
        audit: args.audit.then(|| AuditLog::new(config.audit_path())),
    };

    match args.command {
        Command::Correct { text } => println!("{}", app.pipeline.correct_text(&text)),
        Command::Classify { text } => println!("{}", app.pipeline.classify_intent(&text)),
        Command::Type { text } => println!("{}", app.pipeline.resolve_command_type(&text)),
        Command::Process { text, json } => println!("{}", app.process_line(&text, json)?),
        Command::Analyze { text } => {
            let analysis = app.pipeline.analyze(&text);
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        Command::Listen { json } => app.listen(json).await?,
    }

    Ok(())
}
