mod display;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use miras_core::Session;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "miras",
    version,
    about = "Islamic inheritance shares and Illinois estate-plan checks"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the distribution for a saved session.
    Compute {
        /// Session JSON file exported by the wizard.
        #[arg(env = "MIRAS_SESSION")]
        session: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Text, env = "MIRAS_FORMAT")]
        format: Format,
    },
    /// Compute the distribution for the demonstration household.
    Demo {
        #[arg(long, value_enum, default_value_t = Format::Text, env = "MIRAS_FORMAT")]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Human-readable report.
    Text,
    /// The session with a fresh `computed` block.
    Json,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    info!("miras v{}", env!("CARGO_PKG_VERSION"));

    let (session, format) = match cli.command {
        Command::Compute { session, format } => {
            let loaded = Session::load(&session)
                .with_context(|| format!("loading session {}", session.display()))?;
            (loaded, format)
        }
        Command::Demo { format } => (Session::demo(chrono::Local::now().date_naive()), format),
    };

    if !session.has_legal_checklist() {
        warn!(
            state = %session.state,
            "legal checklist covers Illinois only; shares are still computed"
        );
    }

    let session = session.with_computed();
    match format {
        Format::Text => display::print_report(&session),
        Format::Json => {
            let json = session.to_json_pretty().context("serialising session")?;
            println!("{json}");
        }
    }
    Ok(())
}
