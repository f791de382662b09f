//! External deploy runner.
//!
//! The deploy command itself is an external collaborator: hexokit only
//! launches the configured shell command with `HEXO_ROOT` in the environment,
//! lets its output stream to the terminal, and maps the exit status.

use std::process::Command;

use thiserror::Error;

use crate::config::ResolvedConfig;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("deploy command is empty")]
    EmptyCommand,

    #[error("failed to launch '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("deploy command exited with {0}")]
    Failed(std::process::ExitStatus),
}

/// Run the configured deploy command in the Hexo root.
///
/// The command string is split on whitespace; no shell is involved. Succeeds
/// only on a zero exit status.
pub fn run_deploy(cfg: &ResolvedConfig) -> Result<(), DeployError> {
    let mut parts = cfg.deploy_command.split_whitespace();
    let program = parts.next().ok_or(DeployError::EmptyCommand)?;

    tracing::info!(
        "deploying with '{}' in {}",
        cfg.deploy_command,
        cfg.hexo_root.display()
    );

    let status = Command::new(program)
        .args(parts)
        .current_dir(&cfg.hexo_root)
        .env("HEXO_ROOT", &cfg.hexo_root)
        .status()
        .map_err(|e| DeployError::Spawn {
            command: cfg.deploy_command.clone(),
            source: e,
        })?;

    if status.success() {
        tracing::info!("deploy completed successfully");
        Ok(())
    } else {
        Err(DeployError::Failed(status))
    }
}
