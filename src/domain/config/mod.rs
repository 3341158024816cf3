//! Configuration domain module

mod app_config;

pub use app_config::{
    AppConfig, SimulationConfig, DEFAULT_DOWNLOAD_DELAY_MS, DEFAULT_LOG_LEVEL, DEFAULT_STEP,
    DEFAULT_TICK_MS,
};
