//! Call-data encoding command

use bach_abi::{Encoder, SELECTOR_LEN};

use super::CallArgs;
use crate::{config::Config, output::format_hex, output::Output, CliError};

/// Encode the described call and print it as hex
pub fn encode(
    args: &CallArgs,
    no_selector: bool,
    config: &Config,
    json: bool,
) -> Result<(), CliError> {
    let file = args.load()?;
    let call = if no_selector {
        file.call.without_name()
    } else {
        file.call.clone()
    };
    let values = file.values()?;

    let data = Encoder::new().encode(&values, &call)?;
    let has_selector = call.name().is_some();
    tracing::info!(bytes = data.len(), has_selector, "encoded call");

    let hex = format_hex(&data, config.hex_prefix);
    let mut output = Output::new(json)
        .field("data", &hex)
        .field_u64("length", data.len() as u64)
        .field_bool("has_selector", has_selector);
    if let Some(signature) = call.signature() {
        output = output
            .field("signature", &signature)
            .field("selector", &format_hex(&data[..SELECTOR_LEN], config.hex_prefix));
    }
    output.message(&hex).print();
    Ok(())
}
