use clap::Args;

use crate::error::Result;
use crate::input::Input;

#[derive(Args)]
pub(crate) struct Config {
    #[command(flatten)]
    input: Input,
}

/// Prints the value with punctuation removed, or unchanged if it is not
/// formatted.
pub(crate) fn execute(config: Config) -> Result<()> {
    let value = config.input.read()?;
    println!("{}", config.input.kind().filter(&value));
    Ok(())
}
