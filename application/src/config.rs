//! [`Config`]-related definitions.

use std::{path::PathBuf, time};

use common::Reveal;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog source configuration.
    pub source: Source,

    /// Catalog browsing configuration.
    pub catalog: Catalog,

    /// Criteria cache configuration.
    pub cache: Cache,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

impl From<&Config> for service::Config {
    fn from(value: &Config) -> Self {
        let Config {
            catalog:
                Catalog {
                    initial_page_size,
                    page_size,
                    pacing,
                },
            cache: Cache { enabled, .. },
            ..
        } = value;

        Self {
            reveal: Reveal::new(*initial_page_size, *page_size),
            pacing: (*pacing).into(),
            persistence: *enabled,
        }
    }
}

/// Catalog source configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Source {
    /// URL (or file path) to load apartments from.
    #[default("http://127.0.0.1:3000/data/apartments.json".to_owned())]
    pub url: String,
}

/// Catalog browsing configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Catalog {
    /// Number of apartments shown on the first page.
    #[default(5)]
    pub initial_page_size: usize,

    /// Number of apartments revealed by every next page.
    #[default(20)]
    pub page_size: usize,

    /// Delays of the paced operations.
    pub pacing: Pacing,
}

/// Delays of the paced catalog operations.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Pacing {
    /// Minimal duration of `LoadMore`.
    #[default(time::Duration::from_millis(500))]
    #[serde(with = "humantime_serde")]
    pub load_more: time::Duration,

    /// Minimal duration of `ResetFilters`.
    #[default(time::Duration::from_millis(300))]
    #[serde(with = "humantime_serde")]
    pub reset_filters: time::Duration,

    /// Minimal duration of `SetSorting`.
    #[default(time::Duration::from_millis(200))]
    #[serde(with = "humantime_serde")]
    pub set_sorting: time::Duration,
}

impl From<Pacing> for service::Pacing {
    fn from(value: Pacing) -> Self {
        let Pacing {
            load_more,
            reset_filters,
            set_sorting,
        } = value;
        Self {
            load_more,
            reset_filters,
            set_sorting,
        }
    }
}

/// Criteria cache configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Cache {
    /// Indicator whether filter and sort criteria are persisted between
    /// runs.
    pub enabled: bool,

    /// Directory to persist criteria in.
    #[default(PathBuf::from(".catalog-cache"))]
    pub dir: PathBuf,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
