use clap::Args;
use tracing::debug;

use crate::error::Result;
use crate::input::Input;

#[derive(Args)]
pub(crate) struct Config {
    #[command(flatten)]
    input: Input,

    /// Print why an invalid value was rejected
    #[arg(long)]
    explain: bool,
}

/// Prints `valid` or `invalid` and returns the verdict.
pub(crate) fn execute(config: Config) -> Result<bool> {
    let value = config.input.read()?;
    let kind = config.input.kind();

    let valid = kind.is_valid(&value);
    debug!(%value, ?kind, valid, "validated");

    if valid {
        println!("valid");
    } else {
        println!("invalid");
        if config.explain {
            if let Err(e) = kind.parse(&value) {
                println!("reason: {e}");
            }
        }
    }

    Ok(valid)
}
