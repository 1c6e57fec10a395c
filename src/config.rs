//! Configuration for hydration and serialization

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{DtoError, DtoResult};

static DEFAULT_CONFIG: Lazy<Config> = Lazy::new(Config::default);

/// Configuration for hydration and serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Maximum nesting depth for nested DTOs during hydration
    pub max_depth: usize,

    /// Pretty-print JSON produced by `to_json_with`
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 64,
            pretty_json: false,
        }
    }
}

impl Config {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Shared default configuration
    pub fn global_default() -> &'static Config {
        &DEFAULT_CONFIG
    }
}

/// Builder for Config
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the maximum nesting depth (at least 1)
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth.max(1);
        self
    }

    /// Enable or disable pretty JSON output
    pub fn pretty_json(mut self, pretty: bool) -> Self {
        self.config.pretty_json = pretty;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        self.config
    }
}

/// Per-call hydration state threaded through handlers and casters.
///
/// Each `from_input` call starts a fresh context at depth 0; nested DTOs
/// descend one level.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    config: &'a Config,
    depth: usize,
}

impl<'a> Context<'a> {
    /// Start a context at the root level
    pub fn new(config: &'a Config) -> Self {
        Self { config, depth: 0 }
    }

    pub fn config(&self) -> &'a Config {
        self.config
    }

    /// Current nesting depth (0 for the root DTO)
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Context for a nested DTO one level down
    pub fn descend(&self) -> DtoResult<Context<'a>> {
        let depth = self.depth + 1;
        if depth > self.config.max_depth {
            return Err(DtoError::MaxDepthExceeded {
                depth,
                max: self.config.max_depth,
            });
        }
        Ok(Context {
            config: self.config,
            depth,
        })
    }
}

impl Default for Context<'static> {
    fn default() -> Self {
        Context::new(Config::global_default())
    }
}
