//! HTTP server command.

use tokio::runtime::Runtime;

use crate::api;
use crate::error::{Result, ResultExt};

use super::{ServeArgs, build_service, resolve_config};

/// Run the search API until Ctrl+C
pub fn cmd_serve(rt: &Runtime, args: &ServeArgs) -> Result<()> {
    let config = resolve_config(&args.provider, args.bind.as_deref())?;

    // Credentials are checked before binding anything
    let service = build_service(&config).with_context("starting server")?;
    let addr = config.bind_addr().with_context("starting server")?;

    tracing::info!(
        "Starting catalog search on {} (provider: {}, timeout: {:?})",
        addr,
        service.provider_name(),
        config.provider_timeout()
    );

    rt.block_on(api::serve(addr, service))
        .with_context(format!("serving on {}", addr))
}
