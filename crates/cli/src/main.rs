//! Redditor CLI - command-line access to Reddit user accounts.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build the client from layered configuration.
//! - Run one `Redditor` operation and print its result on stdout.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - OAuth token acquisition (pass a ready token via `--access-token`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr so stdout stays machine-readable.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use clap::error::ErrorKind;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use reddit_client::RedditClient;
use reddit_config::{Config, ConfigError, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(usage_exit_code(&e).as_i32());
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let exit_code = tokio::select! {
        result = execute(cli, &config) => match result {
            Ok(()) => ExitCode::Success,
            Err(e) => {
                eprintln!("{:#}", e);
                let code = e.exit_code();
                if code.is_retryable() {
                    eprintln!("This failure may be temporary; retry later.");
                }
                code
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Interrupted.");
            ExitCode::Interrupted
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Bad values are validation errors; any other usage error is a general
/// error. Exit code 2 stays reserved for auth failures.
fn usage_exit_code(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::InvalidValue | ErrorKind::ValueValidation => ExitCode::ValidationError,
        _ => ExitCode::GeneralError,
    }
}

/// Layer sources in precedence order: file, then environment, then flags.
fn build_config(cli: &Cli) -> Result<Config> {
    let timeout = cli
        .timeout
        .as_deref()
        .map(|secs| {
            secs.trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidValue {
                    var: "--timeout".to_string(),
                    message: "must be a number of seconds".to_string(),
                })
        })
        .transpose()?;

    let mut loader = ConfigLoader::new();

    // Blank values are ignored so REDDIT_CONFIG_PATH can still apply
    if let Some(path) = cli
        .config_path
        .as_ref()
        .filter(|p| !p.to_string_lossy().trim().is_empty())
    {
        loader = loader.with_config_path(path.clone());
    }

    loader = loader.from_file()?.from_env()?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref token) = cli.access_token {
        loader = loader.with_access_token(token.clone());
    }
    if let Some(ref user_agent) = cli.user_agent {
        loader = loader.with_user_agent(user_agent.clone());
    }
    if let Some(timeout) = timeout {
        loader = loader.with_timeout(timeout);
    }

    Ok(loader.build()?)
}

async fn execute(cli: Cli, config: &Config) -> Result<()> {
    let client = RedditClient::builder()
        .from_config(config)
        .build()
        .context("Failed to create client")?;
    let client = Arc::new(client);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_command(cli.command, &client, cli.output, &mut out).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error(args: &[&str]) -> clap::Error {
        Cli::try_parse_from(args).unwrap_err()
    }

    #[test]
    fn test_usage_errors_avoid_auth_exit_code() {
        let bad_value = parse_error(&["redditor", "gild", "spez", "--months", "abc"]);
        assert_eq!(usage_exit_code(&bad_value), ExitCode::ValidationError);

        let unknown = parse_error(&["redditor", "about", "spez", "--bogus"]);
        assert_eq!(usage_exit_code(&unknown), ExitCode::GeneralError);

        let missing = parse_error(&["redditor"]);
        assert_eq!(usage_exit_code(&missing), ExitCode::GeneralError);
    }

    #[test]
    fn test_non_numeric_timeout_is_config_error() {
        let cli = Cli::try_parse_from(["redditor", "--timeout", "abc", "about", "spez"]).unwrap();
        let err = build_config(&cli).unwrap_err();
        assert!(err.to_string().contains("--timeout"));
    }
}
