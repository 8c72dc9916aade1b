//! Subcommand implementations

pub mod encode;
pub mod inspect;

use std::path::PathBuf;

use clap::Args;

use crate::input::CallFile;
use crate::CliError;

/// Where to read the call description from
#[derive(Debug, Args)]
pub struct CallArgs {
    /// JSON call description file ("-" reads stdin)
    #[arg(short, long, value_name = "FILE")]
    pub call: PathBuf,
}

impl CallArgs {
    /// Load and parse the call description
    pub fn load(&self) -> Result<CallFile, CliError> {
        tracing::debug!(path = %self.call.display(), "loading call description");
        CallFile::load(&self.call)
    }
}
