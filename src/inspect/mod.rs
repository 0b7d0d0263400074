//! The `callable-inspect` report: pick catalogue entries and render them.

pub mod catalogue;
pub mod render;

pub use catalogue::{catalogue, entry_names, select, CatalogueEntry};
pub use render::{render_json, render_terminal};

use crate::cli::{Cli, OutputFormat};
use crate::config::InspectConfig;
use crate::errors::InspectError;

/// Produce the report text for the given command line and config.
///
/// Command-line values take precedence over the config file.
pub fn run(cli: &Cli, config: &InspectConfig) -> Result<String, InspectError> {
    let entries = catalogue();

    if cli.list {
        let mut names = entry_names(&entries).join("\n");
        names.push('\n');
        return Ok(names);
    }

    let requested = cli.only.as_deref().unwrap_or(config.entries.as_slice());
    let selected = select(entries, requested)?;
    log::debug!(
        "Selected {} catalogue entries: {}",
        selected.len(),
        entry_names(&selected).join(", ")
    );

    match cli.format.or(config.format).unwrap_or_default() {
        OutputFormat::Terminal => render_terminal(&selected),
        OutputFormat::Json => render_json(&selected),
    }
}
