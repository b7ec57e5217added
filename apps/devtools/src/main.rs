use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "devtools")]
#[command(about = "Per-repository helper launcher with a global workspace")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase logging verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the global workspace directory
    Init,

    /// Link the current repository into the workspace via .devtools
    Link {
        /// Take over the workspace name even if another repository owns it
        #[arg(short, long)]
        force: bool,
    },

    /// List helpers visible from the current directory
    Ls {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Scaffold a new helper in the current repository
    New {
        /// Helper name (becomes the command name)
        name: String,
    },

    /// Health-check helper directories and the workspace
    Doctor,

    /// Print the recomputed search path for the current directory
    Path,

    /// Shell hook management
    Hook {
        #[command(subcommand)]
        command: HookCommands,
    },
}

#[derive(Subcommand)]
enum HookCommands {
    /// Print the bash hook snippet
    Print,

    /// Write the hook to the config directory and source it from rc files
    Install,

    /// Remove the hook file and rc entries
    Uninstall,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_writer(std::io::stderr),
        )
        .init();

    info!("Starting devtools v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Init => commands::init::execute().await,
        Commands::Link { force } => commands::link::execute(force).await,
        Commands::Ls { json } => commands::ls::execute(json).await,
        Commands::New { name } => commands::new::execute(&name).await,
        Commands::Doctor => commands::doctor::execute().await,
        Commands::Path => commands::path::execute().await,
        Commands::Hook { command } => match command {
            HookCommands::Print => commands::hook::print::execute().await,
            HookCommands::Install => commands::hook::install::execute().await,
            HookCommands::Uninstall => commands::hook::uninstall::execute().await,
        },
    }
}
