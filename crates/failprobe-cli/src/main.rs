mod cmd;
mod output;

use clap::{Parser, Subcommand};
use failprobe_core::ProbeConfig;

#[derive(Parser)]
#[command(
    name = "failprobe",
    about = "Exercise HTTP failure scenarios and inspect what the client stack reports",
    version,
    propagate_version = true
)]
struct Cli {
    /// Base URL of the demo server backing the local scenarios
    #[arg(
        long,
        global = true,
        env = "FAILPROBE_BASE_URL",
        default_value = "http://localhost:4747"
    )]
    base_url: String,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the demo server and its web page
    Serve {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "4747")]
        port: u16,

        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,

        /// Request timeout for probes, in seconds
        #[arg(long, default_value = "5")]
        timeout_secs: u64,

        /// Lines kept in the event log
        #[arg(long, default_value = "20")]
        log_capacity: usize,
    },

    /// List the demo scenarios
    List,

    /// Run one scenario (by label) or probe a URL directly
    Probe {
        /// Scenario label, absolute URL, or /path resolved against --base-url
        target: String,

        /// Request timeout, in seconds
        #[arg(long, default_value = "5")]
        timeout_secs: u64,

        /// Lines kept in the event log
        #[arg(long, default_value = "20")]
        log_capacity: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Serve {
            port,
            no_open,
            timeout_secs,
            log_capacity,
        } => cmd::serve::run(
            port,
            no_open,
            ProbeConfig {
                timeout_secs,
                log_capacity,
            },
        ),
        Commands::List => cmd::list::run(&cli.base_url, cli.json),
        Commands::Probe {
            target,
            timeout_secs,
            log_capacity,
        } => cmd::probe::run(
            &target,
            &cli.base_url,
            ProbeConfig {
                timeout_secs,
                log_capacity,
            },
            cli.json,
        ),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
