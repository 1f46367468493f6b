use rtscope_api::QueryItem;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Write one result line.
pub fn write_item<W: Write>(
    out: &mut W,
    format: OutputFormat,
    item: &QueryItem<'_>,
) -> rtscope_core::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", item)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, item).map_err(std::io::Error::from)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
