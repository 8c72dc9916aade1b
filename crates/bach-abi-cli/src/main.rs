//! # bach-abi-cli
//!
//! Command-line call-data encoder for BachLedger contracts.
//!
//! ## Usage
//!
//! ```bash
//! # Inspect a call description
//! bach-abi signature --call transfer.json
//! bach-abi selector --call transfer.json
//!
//! # Encode call data
//! bach-abi encode --call transfer.json
//! bach-abi encode --call args.json --no-selector
//! cat transfer.json | bach-abi --json encode --call -
//!
//! # Configuration
//! bach-abi config --show
//! bach-abi config --set-hex-prefix false
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;
mod input;
mod output;

pub use config::Config;
pub use error::CliError;
pub use output::Output;

use commands::CallArgs;

/// BachLedger ABI encoder
#[derive(Parser, Debug)]
#[command(name = "bach-abi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// CLI commands
#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the canonical function signature
    Signature(CallArgs),
    /// Print the 4-byte function selector
    Selector(CallArgs),
    /// Encode call data
    Encode {
        #[command(flatten)]
        call: CallArgs,
        /// Encode the arguments only, without a selector
        #[arg(long)]
        no_selector: bool,
    },
    /// Show or edit configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Set the default log level
        #[arg(long)]
        set_log_level: Option<String>,
        /// Set whether hex output starts with 0x
        #[arg(long)]
        set_hex_prefix: Option<bool>,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut config = Config::load();
    init_tracing(cli.log_level.as_deref().unwrap_or(&config.log_level));

    let result = match cli.command {
        Commands::Signature(args) => commands::inspect::signature(&args, cli.json),
        Commands::Selector(args) => commands::inspect::selector(&args, &config, cli.json),
        Commands::Encode { call, no_selector } => {
            commands::encode::encode(&call, no_selector, &config, cli.json)
        }
        Commands::Config {
            show,
            set_log_level,
            set_hex_prefix,
        } => handle_config(&mut config, show, set_log_level, set_hex_prefix, cli.json),
    };

    if let Err(e) = result {
        if cli.json {
            println!(
                "{}",
                serde_json::json!({
                    "error": e.to_string(),
                    "success": false
                })
            );
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

/// Log to stderr; RUST_LOG takes precedence over `level`
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn handle_config(
    config: &mut Config,
    show: bool,
    set_log_level: Option<String>,
    set_hex_prefix: Option<bool>,
    json: bool,
) -> Result<(), CliError> {
    let mut modified = false;

    if let Some(level) = set_log_level {
        level
            .parse::<tracing::Level>()
            .map_err(|_| CliError::Config(format!("invalid log level: {}", level)))?;
        config.log_level = level;
        modified = true;
    }

    if let Some(prefix) = set_hex_prefix {
        config.hex_prefix = prefix;
        modified = true;
    }

    if modified {
        config.save()?;
        tracing::info!(?config, "configuration saved");
        Output::new(json)
            .field("status", "saved")
            .message("Configuration saved")
            .print();
    } else if show {
        Output::new(json)
            .field("log_level", &config.log_level)
            .field_bool("hex_prefix", config.hex_prefix)
            .message(&format!(
                "Log level: {}\nHex prefix: {}",
                config.log_level, config.hex_prefix
            ))
            .print();
    } else {
        Output::new(json)
            .message("Use --show to display config, or --set-log-level/--set-hex-prefix to modify")
            .print();
    }

    Ok(())
}
