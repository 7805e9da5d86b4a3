use crate::GridConfig;
use std::{fmt::Display, str::FromStr, time::Duration};

/// Runtime settings of the simulation window.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub grid: GridConfig,
    /// Seed of the initial field and of the sparks; entropy if `None`.
    pub seed: Option<u64>,
    pub tick_interval: Duration,
    pub sparks: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            seed: None,
            tick_interval: Self::DEFAULT_TICK_INTERVAL,
            sparks: true,
        }
    }
}

impl Settings {
    pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

    pub const WIDTH_VAR: &'static str = "SPARKLIFE_WIDTH";
    pub const HEIGHT_VAR: &'static str = "SPARKLIFE_HEIGHT";
    pub const SEED_VAR: &'static str = "SPARKLIFE_SEED";
    pub const TICK_MS_VAR: &'static str = "SPARKLIFE_TICK_MS";
    pub const SPARKS_VAR: &'static str = "SPARKLIFE_SPARKS";

    /// Defaults overridden by `SPARKLIFE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unparsable values are logged and left at their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        if let Some(width) = parse_var(&lookup, Self::WIDTH_VAR) {
            settings.grid.width = width;
        }
        if let Some(height) = parse_var(&lookup, Self::HEIGHT_VAR) {
            settings.grid.height = height;
        }
        if let Some(seed) = parse_var(&lookup, Self::SEED_VAR) {
            settings.seed = Some(seed);
        }
        if let Some(ms) = parse_var(&lookup, Self::TICK_MS_VAR) {
            settings.tick_interval = Duration::from_millis(ms);
        }
        if let Some(raw) = lookup(Self::SPARKS_VAR) {
            match parse_flag(&raw) {
                Some(sparks) => settings.sparks = sparks,
                None => log::warn!("ignoring {}={:?}: expected a boolean", Self::SPARKS_VAR, raw),
            }
        }
        settings
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("ignoring {}={:?}: {}", key, raw, err);
            None
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
