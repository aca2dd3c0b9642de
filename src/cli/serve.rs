//! Serve command implementation

use starscan::config::Overrides;
use starscan::error::Result;
use starscan::server;

use crate::cli::{CommandContext, GlobalOptions};

/// Run the HTTP service until interrupted
pub async fn run(host: Option<String>, port: Option<u16>, opts: &GlobalOptions) -> Result<()> {
    let overrides = Overrides {
        host,
        port,
        ..opts.overrides()
    };
    let ctx = CommandContext::with_overrides(opts, &overrides)?;

    server::run(&ctx.config).await
}
