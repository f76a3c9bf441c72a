//! # modelpick
//!
//! Terminal UI for picking an AI model from a deep-research backend.
//! Fetches the catalog from `GET {backend}/api/models`, shows it grouped by
//! provider, applies the backend default when nothing is selected yet, and
//! remembers the choice across runs.

mod cli;
mod core;
mod run;
mod tui;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);

    // Resolve backend URL (print user-friendly message; exit uses Display not Debug)
    let config = core::config::load(args.backend_url.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match args.command {
        Some(cli::Commands::Models) => {
            if let Err(e) = run::run_models(&config).await {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            Ok(())
        }
        Some(cli::Commands::Config) => {
            run::run_config(&config);
            Ok(())
        }
        Some(cli::Commands::Completions { shell }) => {
            let mut cmd = cli::Args::command();
            let name = cmd.get_name().to_string();
            cli::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
        None => {
            // Initial selection: explicit flag wins, then the persisted last
            // choice; otherwise empty so the backend default can apply.
            let initial_model = args.model.clone().or_else(core::persistence::load_last_model);
            run::launch_tui(config, initial_model, args.disabled).await
        }
    }
}
