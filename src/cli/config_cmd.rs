//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::SimulationConfig;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let mut config = store.load().await?;

    match key {
        "notify" => config.notify = Some(parse_bool(key, value)?),
        "log_level" => {
            tracing_subscriber::EnvFilter::try_new(value).map_err(|e| {
                ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                }
            })?;
            config.log_level = Some(value.to_string());
        }
        "simulation.tick_ms" => {
            let ms = parse_number::<u64>(key, value, 1..=60_000)?;
            config.simulation.get_or_insert_with(SimulationConfig::default).tick_ms = Some(ms);
        }
        "simulation.step" => {
            let step = parse_number::<u8>(key, value, 1..=100)?;
            config.simulation.get_or_insert_with(SimulationConfig::default).step = Some(step);
        }
        "simulation.download_delay_ms" => {
            let ms = parse_number::<u64>(key, value, 0..=600_000)?;
            config
                .simulation
                .get_or_insert_with(SimulationConfig::default)
                .download_delay_ms = Some(ms);
        }
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let config = store.load().await?;
    let simulation = config.simulation.as_ref();

    let value = match key {
        "notify" => config.notify.map(|b| b.to_string()),
        "log_level" => config.log_level.clone(),
        "simulation.tick_ms" => simulation.and_then(|s| s.tick_ms).map(|v| v.to_string()),
        "simulation.step" => simulation.and_then(|s| s.step).map(|v| v.to_string()),
        "simulation.download_delay_ms" => simulation
            .and_then(|s| s.download_delay_ms)
            .map(|v| v.to_string()),
        _ => unreachable!(),
    };

    presenter.output(value.as_deref().unwrap_or(NOT_SET));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;
    let simulation = config.simulation.as_ref();

    let show = |value: Option<String>| value.unwrap_or_else(|| NOT_SET.to_string());

    presenter.key_value("notify", &show(config.notify.map(|b| b.to_string())));
    presenter.key_value("log_level", &show(config.log_level.clone()));
    presenter.key_value(
        "simulation.tick_ms",
        &show(simulation.and_then(|s| s.tick_ms).map(|v| v.to_string())),
    );
    presenter.key_value(
        "simulation.step",
        &show(simulation.and_then(|s| s.step).map(|v| v.to_string())),
    );
    presenter.key_value(
        "simulation.download_delay_ms",
        &show(simulation.and_then(|s| s.download_delay_ms).map(|v| v.to_string())),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_valid_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "Value must be 'true' or 'false'".to_string(),
        }),
    }
}

fn parse_number<N>(
    key: &str,
    value: &str,
    range: std::ops::RangeInclusive<N>,
) -> Result<N, ConfigError>
where
    N: std::str::FromStr + PartialOrd + std::fmt::Display,
{
    let invalid = || ConfigError::ValidationError {
        key: key.to_string(),
        message: format!(
            "Value must be a number between {} and {}",
            range.start(),
            range.end()
        ),
    };
    let number = value.trim().parse::<N>().map_err(|_| invalid())?;
    if !range.contains(&number) {
        return Err(invalid());
    }
    Ok(number)
}
