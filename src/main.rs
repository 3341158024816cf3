//! Mixdeck CLI entry point

use std::process::ExitCode;

use clap::Parser;

use mixdeck::cli::{
    handle_config_command, load_merged_config, run_delete, run_export, run_list, run_play,
    run_shell_session, Cli, Commands, ConfigAction, ExportOptions, Presenter, EXIT_ERROR,
    EXIT_USAGE_ERROR,
};
use mixdeck::domain::config::{AppConfig, SimulationConfig};
use mixdeck::domain::error::ConfigError;
use mixdeck::infrastructure::logging::init_logging;
use mixdeck::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    let command = cli.command.unwrap_or(Commands::List { json: false });

    // Config commands operate on the file itself, not the merged view
    let command = match command {
        Commands::Config { action } => return run_config(action, &presenter).await,
        command => command,
    };

    let cli_config = AppConfig {
        notify: if cli.notify { Some(true) } else { None },
        log_level: None,
        simulation: Some(SimulationConfig {
            tick_ms: cli.tick_ms,
            step: None,
            download_delay_ms: cli.download_delay_ms,
        }),
    };
    let config = load_merged_config(cli_config).await;

    init_logging(config.log_level_or_default());

    match command {
        Commands::List { json } => run_list(&config, json),
        Commands::Export {
            id,
            format,
            quality,
            no_normalize,
            no_auto_levels,
            download,
        } => {
            let options = ExportOptions {
                id,
                format: format.map(Into::into),
                quality: quality.map(Into::into),
                normalize_audio: !no_normalize,
                auto_levels: !no_auto_levels,
                download,
            };
            run_export(&config, options).await
        }
        Commands::Play { id } => run_play(&config, id).await,
        Commands::Delete { id } => run_delete(&config, id).await,
        Commands::Shell => run_shell_session(&config).await,
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

async fn run_config(action: ConfigAction, presenter: &Presenter) -> ExitCode {
    let store = XdgConfigStore::new();
    match handle_config_command(action, &store, presenter).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ ConfigError::ValidationError { .. }) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_USAGE_ERROR)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
