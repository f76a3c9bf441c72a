//! Application run modes: logger init, catalog listing, TUI launch.

use std::io;
use std::sync::Arc;

use crate::cli::Args;
use crate::core;
use crate::core::catalog::{fetch_catalog, model_display_name, provider_display_name};
use crate::core::config::Config;

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.command.is_none() {
        let log_path = core::paths::cache_dir().map(|d| d.join(format!("{}.log", core::app::NAME)));
        if let Some(path) = log_path
            && let Some(parent) = path.parent()
            && std::fs::create_dir_all(parent).is_ok()
            && let Ok(file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Run the `models` subcommand: fetch the catalog once and print it grouped
/// by provider, marking the backend default.
pub async fn run_models(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = fetch_catalog(&config.backend_url).await?;

    if catalog.is_empty() {
        println!("No models available at {}", config.backend_url);
        return Ok(());
    }

    for group in &catalog.providers {
        println!("{}:", provider_display_name(&group.provider));
        for model in &group.models {
            let default_marker = if catalog.default_model.as_deref() == Some(model.id.as_str()) {
                "  [default]"
            } else {
                ""
            };
            println!(
                "  {:<40} {}{}",
                model.id,
                model_display_name(model),
                default_marker
            );
        }
    }
    Ok(())
}

/// Run the `config` subcommand: show resolved settings and paths.
pub fn run_config(config: &Config) {
    println!("{} v{}", core::app::NAME, core::app::VERSION);
    println!("Backend URL:  {}", config.backend_url);
    println!(
        "Config dir:   {}",
        core::paths::config_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(unavailable)".to_string())
    );
    println!(
        "Last model:   {}",
        core::persistence::load_last_model().unwrap_or_else(|| "(none)".to_string())
    );
}

/// Launch the TUI in a blocking thread. Prints the final selection on exit.
pub async fn launch_tui(
    config: Config,
    initial_model: Option<String>,
    disabled: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(config);
    let join_result: Result<io::Result<Option<String>>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(config, initial_model, disabled)).await;

    match join_result {
        Ok(io_result) => {
            if let Some(model_id) = io_result? {
                println!("{}", model_id);
            }
        }
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(
                Box::new(io::Error::other("TUI thread panicked")) as Box<dyn std::error::Error>
            );
        }
    }
    Ok(())
}
