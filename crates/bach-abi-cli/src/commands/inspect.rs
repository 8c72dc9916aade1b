//! Signature and selector commands

use bach_abi::Encoder;

use super::CallArgs;
use crate::{config::Config, output::format_hex, output::Output, CliError};

/// Print the canonical signature of the described function
pub fn signature(args: &CallArgs, json: bool) -> Result<(), CliError> {
    let file = args.load()?;
    let signature = file.call.signature().ok_or_else(|| {
        CliError::InvalidInput("call description has no function name".to_string())
    })?;

    Output::new(json)
        .field("signature", &signature)
        .message(&signature)
        .print();
    Ok(())
}

/// Print the 4-byte selector of the described function
pub fn selector(args: &CallArgs, config: &Config, json: bool) -> Result<(), CliError> {
    let file = args.load()?;
    let signature = file.call.signature().ok_or_else(|| {
        CliError::InvalidInput("call description has no function name".to_string())
    })?;
    let selector = format_hex(&Encoder::new().selector(&file.call)?, config.hex_prefix);

    Output::new(json)
        .field("signature", &signature)
        .field("selector", &selector)
        .message(&selector)
        .print();
    Ok(())
}
