use crate::utils::error::{GrocerError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const QUIET_DIRECTIVES: &str = "corner_grocer=warn";
const VERBOSE_DIRECTIVES: &str = "corner_grocer=debug,info";

pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_DIRECTIVES
    } else {
        QUIET_DIRECTIVES
    }
}

/// `RUST_LOG` 優先，否則使用預設指令
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// 互動模式下日誌只寫到 stderr，不帶時間戳，避免和選單輸出交錯
pub fn init_cli_logger(verbose: bool) -> Result<()> {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(verbose)
        .compact();

    tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(layer)
        .try_init()
        .map_err(|e| GrocerError::ConfigError {
            message: format!("logger already initialised: {}", e),
        })
}
