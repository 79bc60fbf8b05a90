use std::fmt::Write;

use clap::Args;
use cpfcnpj::{Kind, Shape};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::input::Input;
use crate::output::OutputFormat;

#[derive(Args)]
pub(crate) struct Config {
    #[command(flatten)]
    input: Input,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
enum Form {
    Raw,
    Formatted,
}

#[derive(Debug, Serialize)]
struct Report {
    kind: Kind,
    raw: String,
    formatted: String,
    check_digits: String,
    input_form: Form,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let value = config.input.read()?;
    let document = config.input.kind().parse(&value)?;
    debug!(kind = %document.kind(), "parsed document");

    let input_form = match Shape::detect(&value) {
        Some(shape) if shape.is_formatted() => Form::Formatted,
        _ => Form::Raw,
    };
    let report = Report {
        kind: document.kind(),
        raw: document.as_str().to_string(),
        formatted: document.formatted(),
        check_digits: document.check_digits().to_string(),
        input_form,
    };

    match config.output {
        OutputFormat::Text => print!("{}", format_text(&report)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Yaml => {
            let json_value = serde_json::to_value(&report)?;
            print!("{}", serde_yml::to_string(&json_value)?);
        }
    }
    Ok(())
}

fn format_text(report: &Report) -> Result<String> {
    let form = match report.input_form {
        Form::Raw => "raw",
        Form::Formatted => "formatted",
    };

    let mut output = String::new();
    writeln!(output, "Kind:         {}", report.kind)?;
    writeln!(output, "Raw:          {}", report.raw)?;
    writeln!(output, "Formatted:    {}", report.formatted)?;
    writeln!(output, "Check digits: {}", report.check_digits)?;
    writeln!(output, "Input form:   {}", form)?;
    Ok(output)
}
