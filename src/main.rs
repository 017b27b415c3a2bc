//! Entry point for the localization generator.
//!
//! Reads `.localizable-sheets.json` from the current directory, generates
//! every file and exits non-zero on the first fatal error.

use std::process::ExitCode;

use localizable_sheets::config::{
    ConfigManager,
    LoggingConfig,
};
use localizable_sheets::output::Templates;
use localizable_sheets::{
    generate,
    logging,
};

fn main() -> ExitCode {
    let project_root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            let _guard = logging::init(&LoggingConfig::default());
            tracing::error!("Cannot determine the current directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut config_manager = ConfigManager::new();
    if let Err(e) = config_manager.load_settings(Some(project_root)) {
        let _guard = logging::init(&LoggingConfig::default());
        tracing::error!("{e}");
        return ExitCode::FAILURE;
    }

    let settings = config_manager.get_settings();
    let logging_config = LoggingConfig {
        file: settings.logging.file.as_deref().map(|file| config_manager.resolve(file)),
        ..settings.logging.clone()
    };
    let _guard = match logging::init(&logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            let _guard = logging::init(&LoggingConfig::default());
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match generate(&config_manager, Templates::today()) {
        Ok(written) => {
            for path in &written {
                tracing::info!("Wrote {}", path.display());
            }
            tracing::info!("Generated {} files for {}", written.len(), settings.project_name);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Generation failed: {e}");
            ExitCode::FAILURE
        }
    }
}
