use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use retrace_cli::{LanguageArg, OutputFormat, commands};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "retrace")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Reconstruct and analyze user sessions from HTTP Archive (HAR) captures",
    long_about = "Retrace reduces a HAR capture to the requests that represent user activity, \
                  groups them by host, derives session statistics, and can explain a single \
                  exchange with an AI-generated summary plus reproduction scripts."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (pretty, json, table)
    #[arg(short, long, global = true, value_enum, default_value = "pretty")]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Display session statistics derived from a HAR capture
    Stats {
        /// Path to the HAR file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Show per-host request counts
        #[arg(long)]
        hosts: bool,
    },

    /// List session entries grouped by host
    List {
        /// Path to the HAR file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Keep only entries whose URL contains this text (case-insensitive)
        #[arg(long)]
        url_contains: Option<String>,

        /// Keep only entries with this exact method
        #[arg(long)]
        method: Option<String>,
    },

    /// Show one session entry in detail
    Show {
        /// Path to the HAR file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Index of the entry in the session (as printed by `list`)
        #[arg(value_name = "INDEX")]
        index: usize,
    },

    /// Print a curl command reproducing one session entry
    Curl {
        /// Path to the HAR file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Index of the entry in the session (as printed by `list`)
        #[arg(value_name = "INDEX")]
        index: usize,
    },

    /// Explain one session entry: intent, error diagnosis, reproduction scripts
    Analyze {
        /// Path to the HAR file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Index of the entry in the session (as printed by `list`)
        #[arg(value_name = "INDEX")]
        index: usize,

        /// API key for the generation service
        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        api_key: String,

        /// Generation model to use
        #[arg(long, default_value = retrace_analyzer::DEFAULT_MODEL)]
        model: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 60)]
        timeout: u64,

        /// Print only the reproduction script for one language
        #[arg(long, value_enum)]
        language: Option<LanguageArg>,
    },

    /// Write the reconstructed session back out as a HAR document
    Export {
        /// Path to the HAR file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Keep only entries whose URL contains this text (case-insensitive)
        #[arg(long)]
        url_contains: Option<String>,

        /// Keep only entries with this exact method
        #[arg(long)]
        method: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Execute the command
    match cli.command {
        Commands::Stats { file, hosts } => commands::stats::execute(&file, hosts, cli.format),
        Commands::List {
            file,
            url_contains,
            method,
        } => commands::list::execute(&file, url_contains, method, cli.format),
        Commands::Show { file, index } => commands::show::execute(&file, index, cli.format),
        Commands::Curl { file, index } => commands::curl::execute(&file, index),
        Commands::Analyze {
            file,
            index,
            api_key,
            model,
            timeout,
            language,
        } => {
            commands::analyze::execute(
                &file,
                index,
                &api_key,
                &model,
                timeout,
                language.map(|l| l.target()),
                cli.format,
            )
            .await
        }
        Commands::Export {
            file,
            url_contains,
            method,
            output,
        } => commands::export::execute(&file, url_contains, method, output),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            commands::completion::execute(shell, &mut cmd)
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("retrace=debug,retrace_core=debug,retrace_analyzer=debug")
    } else {
        EnvFilter::new("retrace=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
