// modpacker: BepInEx mod deployment and Thunderstore packaging
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> locate project --> Config --> ModContext
//!   --> run_actions (local, thunderstore)
//! ```

use std::process::ExitCode;

use anyhow::Context;
use tracing::debug;

use modpacker::cli::{self, Cli};
use modpacker::cli::global::GlobalOptions;
use modpacker::cmd::{ModContext, run_actions};
use modpacker::config::loader::ConfigLoader;
use modpacker::config::{Config, ENV_PREFIX, PROJECT_CONFIG_FILE};
use modpacker::error::{ConfigError, Result};
use modpacker::logging::{LogConfig, LogLevel, init_logging};
use modpacker::project::{Project, locate, locate_from};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = match build_log_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_log_config(global: &GlobalOptions) -> std::result::Result<LogConfig, ConfigError> {
    let console_level = global
        .log_level
        .map(LogLevel::try_from)
        .transpose()?
        .unwrap_or_default();

    let file_level = global
        .file_log_level
        .map(LogLevel::try_from)
        .transpose()?
        .unwrap_or(console_level);

    Ok(LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.clone())
        .build())
}

fn run(cli: &Cli) -> Result<()> {
    let project = find_project(&cli.global)?;
    let config = load_config(&cli.global, &project)?;
    let ctx = ModContext::load(project, config)?;

    run_actions(cli.requested_actions(), &ctx)
}

fn find_project(global: &GlobalOptions) -> Result<Project> {
    let project = match &global.project_dir {
        Some(dir) => {
            let start = std::path::absolute(dir)
                .with_context(|| format!("invalid project directory {}", dir.display()))?;
            locate_from(&start)?
        }
        None => locate()?,
    };

    debug!(root = %project.root().display(), "Using mod project");
    Ok(project)
}

fn build_config_loader(global: &GlobalOptions, project: &Project) -> Result<ConfigLoader> {
    let loader = global.configs.iter().fold(
        Config::builder().add_toml_file_optional(project.root().join(PROJECT_CONFIG_FILE)),
        |loader, path| loader.add_toml_file(path),
    );

    loader
        .with_env_prefix(ENV_PREFIX)
        .with_overrides(global.to_config_overrides())
}

fn load_config(global: &GlobalOptions, project: &Project) -> Result<Config> {
    let loader = build_config_loader(global, project)?;
    for line in loader.format_sources() {
        debug!("config source {line}");
    }

    let config = loader.build().context("failed to load configuration")?;
    for line in config.format_options() {
        debug!("{line}");
    }
    Ok(config)
}
