use crate::domain::model::{DisplayOptions, FrequencyTable, Lookup};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{GrocerError, Result};

/// Frequency table for one session plus what happened while loading it.
#[derive(Debug)]
pub struct ItemTracker {
    table: FrequencyTable,
    options: DisplayOptions,
    input_error: Option<GrocerError>,
    backup_error: Option<GrocerError>,
}

impl ItemTracker {
    pub fn new(table: FrequencyTable, options: DisplayOptions) -> Self {
        Self {
            table,
            options,
            input_error: None,
            backup_error: None,
        }
    }

    /// 讀取輸入檔並寫出備份檔。兩者失敗都不會中斷，只會記錄下來。
    pub fn load<S: Storage, C: ConfigProvider>(storage: &S, config: &C) -> Self {
        let options = DisplayOptions {
            marker: config.marker(),
            min_width: config.min_width(),
        };

        let (table, input_error) = match read_table(storage, config.input_path()) {
            Ok(table) => {
                tracing::info!(
                    "📥 Loaded {} purchases of {} distinct items from {}",
                    table.total(),
                    table.len(),
                    config.input_path()
                );
                (table, None)
            }
            Err(e) => {
                tracing::warn!("⚠️ {} - continuing with an empty table", e);
                (FrequencyTable::default(), Some(e))
            }
        };

        let mut tracker = Self::new(table, options);
        tracker.input_error = input_error;

        if let Err(e) = tracker.persist(storage, config.output_path()) {
            tracing::error!("❌ Failed to write backup file {}: {}", config.output_path(), e);
            tracker.backup_error = Some(e);
        }

        tracker
    }

    pub fn persist<S: Storage>(&self, storage: &S, path: &str) -> Result<()> {
        storage.write_file(path, self.table.to_persisted().as_bytes())?;
        tracing::info!("💾 Wrote {} entries to {}", self.table.len(), path);
        Ok(())
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    pub fn input_error(&self) -> Option<&GrocerError> {
        self.input_error.as_ref()
    }

    pub fn backup_error(&self) -> Option<&GrocerError> {
        self.backup_error.as_ref()
    }

    pub fn lookup(&self, item: &str) -> Lookup {
        self.table.lookup(item)
    }

    pub fn search(&self, item: &str) -> String {
        let result = self.lookup(item);
        tracing::debug!("Search for {:?}: {:?}", item, result);
        if result.found {
            format!("{} was purchased {} times.", item, result.count)
        } else {
            format!("{} was not found in today's purchases.", item)
        }
    }

    pub fn frequencies(&self) -> String {
        format!(
            "\nItem Frequency List:\n{}",
            self.table.render_listing(&self.options)
        )
    }

    pub fn histogram(&self) -> String {
        format!(
            "\nItem Frequency Histogram:\n{}",
            self.table.render_histogram(&self.options)
        )
    }
}

/// Any read failure means the input could not be opened.
fn read_table<S: Storage>(storage: &S, path: &str) -> Result<FrequencyTable> {
    let bytes = storage.read_file(path).map_err(|e| match e {
        GrocerError::IoError(source) => GrocerError::InputUnavailable {
            path: path.to_string(),
            source,
        },
        other => other,
    })?;
    Ok(FrequencyTable::from_text(&String::from_utf8_lossy(&bytes)))
}
