//! Command-line and environment configuration

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use dining_menu::{
    catalog::visible::EmptyCategories,
    page::{LOCATION_PARAM, MEAL_PARAM, PageError, PageParams},
};

/// Server used when neither `--server` nor `MENU_SERVER_URL` is given.
pub(crate) const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogFormat {
    /// Human readable single-line logs.
    Compact,

    /// One JSON object per line.
    Json,
}

/// Dining hall menu with dietary filters
#[derive(Debug, Parser)]
#[command(name = "dining-menu", about = "Dining hall menu with dietary filters", long_about = None)]
#[expect(clippy::struct_excessive_bools, reason = "independent CLI switches")]
pub(crate) struct MenuConfig {
    /// Menu server base URL
    #[arg(short, long, env = "MENU_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub(crate) server: String,

    /// Page URL carrying `meal` and `loc` query parameters
    #[arg(short, long, conflicts_with_all = ["meal", "loc"])]
    pub(crate) url: Option<String>,

    /// Meal name, used when no page URL is given
    #[arg(short, long)]
    pub(crate) meal: Option<String>,

    /// Location name, used when no page URL is given
    #[arg(long)]
    pub(crate) loc: Option<String>,

    /// Load the menu from `<fixtures-dir>/menus/<NAME>.yml` instead of the server
    #[arg(short = 'F', long, value_name = "NAME")]
    pub(crate) fixture: Option<String>,

    /// Fixture base directory
    #[arg(long, env = "MENU_FIXTURES_DIR", default_value = "./fixtures")]
    pub(crate) fixtures_dir: PathBuf,

    /// Filter keys to toggle before rendering, in order (repeatable)
    #[arg(short, long = "filter", value_name = "KEY")]
    pub(crate) filters: Vec<String>,

    /// Drop categories left without items
    #[arg(long)]
    pub(crate) omit_empty: bool,

    /// Show nutrition facts for the visible items
    #[arg(long)]
    pub(crate) nutrition: bool,

    /// Print the visible menu as JSON
    #[arg(long)]
    pub(crate) json: bool,

    /// List the meals on offer (or the locations serving `--meal`) and exit
    #[arg(long)]
    pub(crate) list: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub(crate) log_level: String,

    /// Log format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub(crate) log_format: LogFormat,
}

impl MenuConfig {
    /// Load configuration from `.env`, the environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Meal and location from `--url`, or from `--meal` and `--loc`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or a parameter is missing.
    pub(crate) fn page_params(&self) -> Result<PageParams, PageError> {
        if let Some(url) = &self.url {
            return PageParams::from_url(url);
        }

        let meal = self
            .meal
            .as_deref()
            .ok_or(PageError::MissingParam(MEAL_PARAM))?;
        let location = self
            .loc
            .as_deref()
            .ok_or(PageError::MissingParam(LOCATION_PARAM))?;

        Ok(PageParams::new(meal, location))
    }

    /// Policy for categories without visible items.
    pub(crate) fn empty_categories(&self) -> EmptyCategories {
        if self.omit_empty {
            EmptyCategories::Omit
        } else {
            EmptyCategories::Keep
        }
    }
}
