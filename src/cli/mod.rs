//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, the interactive shell
//! and the command runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;
pub mod shell;

// Re-export commonly used types
pub use app::{
    build_panel, load_merged_config, run_delete, run_export, run_list, run_play,
    run_shell_session, CliPanel, ExportOptions, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR,
};
pub use args::{Cli, Commands, ConfigAction, FormatArg, QualityArg};
pub use config_cmd::handle_config_command;
pub use presenter::Presenter;
pub use shell::{run_shell, ShellCommand, ShellParseError};
