use crate::mode::Mode;
use crate::sketch_errors::{SketchError, SketchResult};
use crate::GridConfig;
use serde::{Deserialize, Serialize};

/// Comprehensive configuration for a sketch session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub grid: GridConfig,
    pub display: DisplayConfig,
    pub input: InputConfig,
    pub logging: LoggingConfig,
}

/// Display and output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Side length of the drawing area in pixels; cells get an equal share
    pub container_size_px: f32,
    /// Open the help overlay on startup
    pub show_help_on_start: bool,
    /// Show the key binding line under the grid
    pub show_status_bar: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            container_size_px: crate::CONTAINER_SIZE_PX,
            show_help_on_start: false,
            show_status_bar: true,
        }
    }
}

/// Drawing behaviour configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Mode selected at startup
    pub initial_mode: Mode,
    /// Fixed seed for rainbow colors; random when unset
    pub rng_seed: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is not set
    pub level: String,
    /// Write logs here while the terminal UI is running
    pub log_file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_file: None,
        }
    }
}

impl SketchConfig {
    /// Load configuration from file
    pub fn load_from_file(path: &str) -> SketchResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SketchError::ConfigError(format!("cannot read {}: {}", path, e)))?;
        let config: SketchConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &str) -> SketchResult<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .map_err(|e| SketchError::ConfigError(format!("cannot write {}: {}", path, e)))?;
        Ok(())
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Overlay environment variables on top of the current values
    pub fn apply_env(&mut self) {
        self.apply_vars(|name| std::env::var(name).ok());
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(size) = var("SKETCH_GRID_SIZE") {
            if let Ok(size) = size.trim().parse::<usize>() {
                self.grid.size = size;
            }
        }
        if let Some(mode) = var("SKETCH_INITIAL_MODE") {
            self.input.initial_mode = Mode::from_key_or_default(&mode);
        }
        if let Some(seed) = var("SKETCH_SEED") {
            if let Ok(seed) = seed.trim().parse::<u64>() {
                self.input.rng_seed = Some(seed);
            }
        }
        if let Some(container) = var("SKETCH_CONTAINER_SIZE") {
            if let Ok(container) = container.trim().parse::<f32>() {
                self.display.container_size_px = container;
            }
        }
        if let Some(path) = var("SKETCH_LOG_FILE") {
            if !path.is_empty() {
                self.logging.log_file = Some(path);
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> SketchResult<()> {
        self.grid
            .validate()
            .map_err(|e| SketchError::ConfigError(format!("grid.size: {}", e)))?;

        if !(self.display.container_size_px.is_finite() && self.display.container_size_px > 0.0) {
            return Err(SketchError::ConfigError(
                "display.container_size_px must be positive".to_string(),
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(SketchError::ConfigError(
                "logging.level must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
