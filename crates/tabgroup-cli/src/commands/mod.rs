pub mod classify;
pub mod config;
pub mod evaluate;
pub mod rules;

use std::path::Path;

use tabgroup_core::{Config, GroupingEngine};

/// Config from `path` if given, else the default location.
///
/// An explicit path must load cleanly; the default location falls back to
/// defaults so a broken file never blocks read-only commands.
pub fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Config::load_from(path)?),
        None => Ok(Config::load_or_default()),
    }
}

pub fn load_engine(config: &Config) -> Result<GroupingEngine, Box<dyn std::error::Error>> {
    Ok(GroupingEngine::from_config(config)?)
}
