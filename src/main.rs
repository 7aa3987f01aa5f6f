use clap::Parser;
use corner_grocer::utils::logger;
use corner_grocer::{run_menu, CliConfig, GrocerError, ItemTracker, LocalStorage, Settings};
use std::io;

fn report(e: &GrocerError) {
    tracing::error!(
        "❌ {} (Severity: {:?}, Suggestion: {})",
        e,
        e.severity(),
        e.recovery_suggestion()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}

fn main() {
    let config = CliConfig::parse();

    if let Err(e) = logger::init_cli_logger(config.verbose) {
        eprintln!("⚠️ {}", e);
    }

    tracing::info!("Starting corner-grocer");
    tracing::debug!("CLI config: {:?}", config);

    // 合併並驗證配置，失敗時不碰任何檔案
    let settings = match Settings::resolve(&config) {
        Ok(settings) => settings,
        Err(e) => {
            report(&e);
            std::process::exit(e.exit_code().max(1));
        }
    };
    tracing::debug!("Resolved settings: {:?}", settings);

    let storage = LocalStorage::default();
    let tracker = ItemTracker::load(&storage, &settings);

    // 找不到輸入檔或備份失敗都不是致命錯誤
    for e in [tracker.input_error(), tracker.backup_error()].into_iter().flatten() {
        report(e);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_menu(&tracker, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(summary) => {
            tracing::info!(
                "✅ Session finished: {} actions, {} invalid inputs{}",
                summary.actions.len(),
                summary.invalid_inputs,
                if summary.ended_by_eof { " (input closed)" } else { "" }
            );
        }
        Err(e) => {
            report(&e);
            let code = e.exit_code();
            if code > 0 {
                std::process::exit(code);
            }
        }
    }
}
