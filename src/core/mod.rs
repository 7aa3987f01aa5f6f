pub mod menu;
pub mod tracker;

pub use crate::domain::model::{DisplayOptions, FrequencyTable, Lookup};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
