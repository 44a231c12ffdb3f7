// src/lib.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

// --- Declare modules ---
mod config;
pub mod record;
pub mod state;
pub mod store;
pub mod summary;
pub mod validation;

// --- Expose public types ---
pub use config::{
    get_config_dir as get_config_dir_util, get_config_path as get_config_path_util,
    load as load_config_util, parse_color, save as save_config_util, validate_date_format,
    Config,
    Error as ConfigError, // Renamed from Error
    StandardColor, Theme,
};
pub use record::{format_date, format_number, sample_records, Metric, Record, RecordFields};
pub use state::{DiaryState, EditSession, Intent, Outcome};
pub use store::{Error as StoreError, RecordStore, SortMode};
pub use summary::{chart_series, ChartPoint, MetricSummary, Summary};
pub use validation::{parse_number, Error as ValidationError, FormField, RecordForm};

/// Owns the configuration and the in-memory diary for one session.
pub struct AppService {
    pub config: Config,
    pub config_path: PathBuf,
    pub state: DiaryState,
}

impl AppService {
    /// Initializes the application service.
    /// # Errors
    /// Returns `anyhow::Error` if the config path cannot be determined or the
    /// config file cannot be loaded.
    pub fn initialize() -> Result<Self> {
        let config_path =
            config::get_config_path().context("Failed to determine configuration file path")?;
        let config = config::load(&config_path)
            .with_context(|| format!("Failed to load config from {config_path:?}"))?;
        tracing::info!(path = %config_path.display(), "configuration loaded");
        Ok(Self::with_config(config, config_path))
    }

    /// Builds a service from an already loaded config, seeding the diary.
    #[must_use]
    pub fn with_config(config: Config, config_path: PathBuf) -> Self {
        let records = if config.seed_sample_records {
            sample_records()
        } else {
            Vec::new()
        };
        let state = DiaryState::new(records, config.default_sort);
        Self {
            config,
            config_path,
            state,
        }
    }

    pub fn get_config_path(&self) -> &Path {
        &self.config_path
    }

    /// Saves the current configuration state.
    /// # Errors
    /// Returns `ConfigError` if saving fails.
    pub fn save_config(&self) -> Result<(), ConfigError> {
        config::save(&self.config_path, &self.config)
    }

    /// Sets the sort mode new sessions start with.
    /// # Errors
    /// Returns `ConfigError` if saving fails.
    pub fn set_default_sort(&mut self, mode: SortMode) -> Result<(), ConfigError> {
        self.config.default_sort = mode;
        self.save_config()
    }

    /// Sets the chrono format used to display record dates.
    /// # Errors
    /// - `ConfigError::InvalidDateFormat` if the format has bad specifiers.
    /// - `ConfigError` variants if saving fails.
    pub fn set_date_format(&mut self, format: &str) -> Result<(), ConfigError> {
        validate_date_format(format)?;
        self.config.date_format = format.to_string();
        self.save_config()
    }

    /// Enables or disables the sample records at startup.
    /// # Errors
    /// Returns `ConfigError` if saving fails.
    pub fn set_seed_sample_records(&mut self, enabled: bool) -> Result<(), ConfigError> {
        self.config.seed_sample_records = enabled;
        self.save_config()
    }

    /// Sets the metric the chart starts on.
    /// # Errors
    /// Returns `ConfigError` if saving fails.
    pub fn set_chart_metric(&mut self, metric: Metric) -> Result<(), ConfigError> {
        self.config.chart_metric = metric;
        self.save_config()
    }

    /// Sets the table header colour.
    /// # Errors
    /// - `ConfigError::InvalidColor` for an unknown colour name.
    /// - `ConfigError` variants if saving fails.
    pub fn set_header_color(&mut self, color: &str) -> Result<(), ConfigError> {
        let parsed = parse_color(color)?;
        self.config.theme.header_color = format!("{parsed:?}");
        self.save_config()
    }

    // --- Diary passthroughs ---

    pub fn dispatch(&mut self, intent: Intent) -> Outcome {
        self.state.dispatch(intent)
    }

    /// # Errors
    /// Returns `ValidationError` if the form does not hold three positive numbers.
    pub fn submit_form(&mut self) -> Result<Outcome, ValidationError> {
        self.state.submit_form()
    }

    #[must_use]
    pub fn displayed_records(&self) -> Vec<Record> {
        self.state.displayed()
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::from_records(&self.state.displayed())
    }

    #[must_use]
    pub fn chart(&self, metric: Metric) -> Vec<ChartPoint> {
        chart_series(&self.state.displayed(), metric, &self.config.date_format)
    }

    #[must_use]
    pub fn format_date(&self, record: &Record) -> String {
        record.date_display(&self.config.date_format)
    }
}
