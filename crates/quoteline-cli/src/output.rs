use std::io::Write;

use quoteline_core::QuoteBatch;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    out: &mut impl Write,
    batch: &QuoteBatch,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            for quote in batch {
                writeln!(out, "{quote}")?;
            }
        }
        OutputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut *out, batch)?;
            } else {
                serde_json::to_writer(&mut *out, batch)?;
            }
            writeln!(out)?;
        }
        OutputFormat::Ndjson => {
            for quote in batch {
                serde_json::to_writer(&mut *out, quote)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
