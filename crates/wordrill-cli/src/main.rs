//! wordrill CLI — the learner-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use wordrill_core::config::{load_config, load_config_from};

mod commands;

#[derive(Parser)]
#[command(name = "wordrill", version, about = "Terminal vocabulary drill")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu: practice, work on mistakes, or exit (default)
    Menu,

    /// Run one practice session over the vocabulary
    Practice {
        /// Only present the first N words
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Re-practice the words recorded in the mistake logs
    Review,

    /// Show the recorded mistakes
    Mistakes {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List the vocabulary and check it for unanswerable entries
    Words,

    /// Create a starter config and vocabulary file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordrill_core=warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Menu);

    let config = || match cli.config.as_deref() {
        Some(path) => load_config_from(Some(path)),
        None => load_config(),
    };

    let result = match command {
        Commands::Menu => config().and_then(|c| commands::menu::execute(&c)),
        Commands::Practice { limit } => {
            config().and_then(|c| commands::practice::execute(&c, limit))
        }
        Commands::Review => config().and_then(|c| commands::review::execute(&c)),
        Commands::Mistakes { format } => {
            config().and_then(|c| commands::mistakes::execute(&c, &format))
        }
        Commands::Words => config().and_then(|c| commands::words::execute(&c)),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
