//! Command execution context
//!
//! Resolves configuration once per command: file, then CLI/env overrides,
//! then validation.

use starscan::config::{Config, Overrides};
use starscan::error::Result;
use starscan::scan::Scanner;

use crate::cli::{GlobalOptions, OutputFormat};

/// Context for command execution containing resolved config and runtime options.
pub struct CommandContext {
    /// Loaded, overridden and validated configuration
    pub config: Config,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config from `--config` (or the default location), apply the
    /// global overrides and validate.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        Self::with_overrides(opts, &opts.overrides())
    }

    /// Like [`CommandContext::new`] with explicit overrides
    pub fn with_overrides(opts: &GlobalOptions, overrides: &Overrides) -> Result<Self> {
        let mut config = Config::load_at(opts.config_ref())?;
        config.apply_overrides(overrides);
        config.validate()?;

        Ok(Self {
            config,
            format: opts.format,
        })
    }

    /// Scanner over the configured upstream
    pub fn scanner(&self) -> Result<Scanner> {
        Ok(Scanner::from_config(&self.config)?)
    }
}
