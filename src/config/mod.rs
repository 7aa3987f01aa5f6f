pub mod cli;
pub mod toml_config;

use crate::domain::model::{DEFAULT_MARKER, DEFAULT_MIN_WIDTH};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::Path;
use toml_config::GrocerConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_INPUT_FILE: &str = "CS210_Project_Three_Input_File.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "frequency.dat";
pub const DEFAULT_BASE_DIR: &str = ".";
pub const MAX_MIN_WIDTH: usize = 80;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "corner-grocer")]
#[command(about = "Track and analyze how often grocery items were purchased today")]
pub struct CliConfig {
    /// Daily input file, one item per line
    #[arg(long)]
    pub input: Option<String>,

    /// Backup file for the frequency table
    #[arg(long)]
    pub output: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Histogram bar character
    #[arg(long)]
    pub marker: Option<String>,

    /// Minimum width of the item column
    #[arg(long)]
    pub width: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// 合併後的設定：預設值 < TOML 檔 < 命令列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input_path: String,
    pub output_path: String,
    pub marker: char,
    pub min_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_FILE.to_string(),
            output_path: DEFAULT_OUTPUT_FILE.to_string(),
            marker: DEFAULT_MARKER,
            min_width: DEFAULT_MIN_WIDTH,
        }
    }
}

impl Settings {
    pub fn apply_file(&mut self, file: &GrocerConfig) -> Result<()> {
        if let Some(input) = file.input_path() {
            self.input_path = input.to_string();
        }
        if let Some(output) = file.output_path() {
            self.output_path = output.to_string();
        }
        if let Some(marker) = file.marker() {
            self.marker = validation::parse_marker("display.marker", marker)?;
        }
        if let Some(min_width) = file.min_width() {
            self.min_width = min_width;
        }
        Ok(())
    }

    #[cfg(feature = "cli")]
    pub fn apply_cli(&mut self, cli: &CliConfig) -> Result<()> {
        if let Some(input) = &cli.input {
            self.input_path = input.clone();
        }
        if let Some(output) = &cli.output {
            self.output_path = output.clone();
        }
        if let Some(marker) = &cli.marker {
            self.marker = validation::parse_marker("--marker", marker)?;
        }
        if let Some(width) = cli.width {
            self.min_width = width;
        }
        Ok(())
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(path) = &cli.config {
            tracing::debug!("Loading configuration from: {}", path);
            let file = GrocerConfig::from_file(path)?;
            settings.apply_file(&file)?;
        }

        settings.apply_cli(cli)?;
        settings.validate()?;
        Ok(settings)
    }
}

impl Settings {
    /// 路徑相對於 `base` 解析，與 `LocalStorage` 的基準目錄一致
    pub fn validate_in(&self, base: &Path) -> Result<()> {
        validation::validate_path("input", &self.input_path)?;
        validation::validate_path("output", &self.output_path)?;
        validation::validate_distinct_paths(
            base,
            ("input", self.input_path.as_str()),
            ("output", self.output_path.as_str()),
        )?;
        validation::validate_marker("marker", self.marker)?;
        validation::validate_range("min_width", self.min_width, 1, MAX_MIN_WIDTH)?;
        Ok(())
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.validate_in(Path::new(DEFAULT_BASE_DIR))
    }
}

impl ConfigProvider for Settings {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn marker(&self) -> char {
        self.marker
    }

    fn min_width(&self) -> usize {
        self.min_width
    }
}
