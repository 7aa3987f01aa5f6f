pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, Settings};

pub use crate::core::{
    menu::{run_menu, MenuChoice, SessionSummary},
    tracker::ItemTracker,
};
pub use domain::model::{DisplayOptions, FrequencyTable, Lookup};
pub use utils::error::{GrocerError, Result};
