use clap::{Parser, Subcommand};

mod catalog;
mod commands;
mod common;

#[derive(Parser)]
#[command(name = "sixwell-cli", version, about = "Sixwell daily wellness tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record today's check-in for a dimension
    Checkin {
        /// Dimension key (e.g. "movement") or index (0-5)
        dimension: String,
    },
    /// Show one or all dimension statuses
    Status {
        /// Dimension key or index; omit for all six
        dimension: Option<String>,
    },
    /// Today's aggregate summary
    Summary,
    /// Recent check-in journal entries
    Log {
        /// Maximum number of entries
        #[arg(long, default_value = "20")]
        limit: u32,
    },
    /// List the six tracked dimensions
    Dimensions,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Discard all tracked state
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Checkin { dimension } => commands::checkin::run(&dimension),
        Commands::Status { dimension } => commands::status::run(dimension.as_deref()),
        Commands::Summary => commands::summary::run(),
        Commands::Log { limit } => commands::log::run(limit),
        Commands::Dimensions => commands::dimensions::run(),
        Commands::Config { action } => commands::config::run(action),
        Commands::Reset { yes } => commands::reset::run(yes),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
