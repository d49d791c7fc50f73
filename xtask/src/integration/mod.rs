//! Integration test runner.
//!
//! Runs the `todolist` test suite once per storage backend, since the
//! backends are mutually exclusive cargo features.
//!
//! # Usage
//!
//! ```bash
//! # Run against every backend
//! cargo xtask integration
//!
//! # Run only the SQLite backend
//! cargo xtask integration --sqlite
//!
//! # Run only the in-memory backend
//! cargo xtask integration --inmemory
//! ```

pub mod error;

pub use error::{IntegrationError, Result};

use crate::prelude::*;

/// Integration test command.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Run the server test suite against each storage backend.

By default, the suite runs twice: once with the SQLite backend and once
with the in-memory backend. SQLite tests use an in-memory database, so no
external services are needed.")]
pub struct IntegrationCommand {
    /// Run only SQLite integration tests.
    #[arg(long, conflicts_with = "inmemory")]
    pub sqlite: bool,

    /// Run only in-memory integration tests.
    #[arg(long, conflicts_with = "sqlite")]
    pub inmemory: bool,
}

impl IntegrationCommand {
    fn backends(&self) -> Vec<&'static str> {
        match (self.sqlite, self.inmemory) {
            (true, _) => vec!["sqlite"],
            (_, true) => vec!["inmemory"],
            _ => vec!["sqlite", "inmemory"],
        }
    }
}

pub async fn run(command: IntegrationCommand, global: crate::Global) -> Result<()> {
    let mut failed = Vec::new();

    for backend in command.backends() {
        if !global.is_silent() {
            aprintln!(
                "{} {}",
                p_b("🔧"),
                p_b(&format!("Running {backend} integration tests..."))
            );
        }

        if !run_tests_with_features(backend, &global).await? {
            failed.push(backend);
        }
    }

    aprintln!();
    if failed.is_empty() {
        aprintln!("{} {}", p_g("✅"), p_g("All integration tests passed!"));
        Ok(())
    } else {
        aprintln!("{} {}", p_r("❌"), p_r("Some integration tests failed"));
        Err(IntegrationError::TestFailed(failed.join(", ")))
    }
}

/// Run the `todolist` tests with a single storage feature enabled.
async fn run_tests_with_features(storage: &str, global: &crate::Global) -> Result<bool> {
    if !global.is_silent() {
        aprintln!("{} Running with features: {}", p_b("  →"), p_y(storage));
    }

    let mut cmd = tokio::process::Command::new("cargo");
    cmd.args([
        "test",
        "-p",
        "todolist",
        "--features",
        storage,
        "--no-default-features",
    ]);

    if !global.is_verbose() {
        cmd.arg("--quiet");
    }

    let status = cmd.status().await?;

    if status.success() {
        if !global.is_silent() {
            aprintln!("{} {} tests passed", p_g("✅"), storage);
        }
        Ok(true)
    } else {
        aprintln!("{} {} tests failed", p_r("❌"), storage);
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(sqlite: bool, inmemory: bool) -> IntegrationCommand {
        IntegrationCommand { sqlite, inmemory }
    }

    #[test]
    fn test_backends_default_to_all() {
        assert_eq!(command(false, false).backends(), vec!["sqlite", "inmemory"]);
    }

    #[test]
    fn test_backends_single_flag() {
        assert_eq!(command(true, false).backends(), vec!["sqlite"]);
        assert_eq!(command(false, true).backends(), vec!["inmemory"]);
    }
}
