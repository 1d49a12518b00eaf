//! One-shot search command.

use std::io::Write;

use tokio::runtime::Runtime;

use crate::error::{Result, ResultExt};
use crate::search::normalize;

use super::{ProviderArgs, build_service, resolve_config};

/// Run one search and print the envelope as pretty JSON
pub fn cmd_search(
    rt: &Runtime,
    term: &str,
    types: Option<&str>,
    limit: Option<&str>,
    offset: Option<&str>,
    provider: &ProviderArgs,
) -> Result<()> {
    // Validate before touching config so bad input fails fast
    let query = normalize(Some(term), limit, offset, types)?;

    let config = resolve_config(provider, None)?;
    let service = build_service(&config).with_context("preparing search")?;

    let envelope = rt.block_on(service.search(&query))?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &envelope)?;
    writeln!(stdout)?;
    Ok(())
}
