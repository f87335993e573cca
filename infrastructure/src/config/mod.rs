//! Configuration file loading for presscost
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./presscost.toml` or `./.presscost.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/presscost/config.toml`
//! 4. Built-in defaults (the published rate tables)

pub mod file_config;
pub mod loader;
