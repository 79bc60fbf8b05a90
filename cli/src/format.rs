use clap::Args;

use crate::error::Result;
use crate::input::Input;

#[derive(Args)]
pub(crate) struct Config {
    #[command(flatten)]
    input: Input,
}

/// Prints the value with punctuation added, or unchanged if it is not raw.
pub(crate) fn execute(config: Config) -> Result<()> {
    let value = config.input.read()?;
    println!("{}", config.input.kind().format(&value));
    Ok(())
}
