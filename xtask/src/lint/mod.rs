use crate::prelude::*;
use error::Result;

pub mod error;

/// Code quality checks
#[derive(Debug, clap::Parser)]
#[command(
    long_about = "Run code quality checks including formatting, compilation, linting, and dependency audits.

This command runs the following checks in order:

1. cargo fmt - Code formatting (auto-fix with --fix)
2. cargo check - Compilation check
3. cargo clippy - Linting with all warnings treated as errors
4. cargo test - Run all tests including doctests
5. cargo machete - Unused dependencies detection"
)]
pub struct LintCommand {
    /// Auto-fix formatting issues
    #[arg(long)]
    pub fix: bool,
}

pub async fn run(command: LintCommand, global: crate::Global) -> Result<()> {
    use error::require_command;

    require_command("cargo", "Required for Rust development: https://rustup.rs/")?;
    require_command(
        "cargo-machete",
        "Required for unused dependency checks: cargo install cargo-machete",
    )?;

    if !global.is_silent() {
        aprintln!("{}", p_b("Running code quality checks..."));
        aprintln!();
    }

    let mut all_passed = true;

    if !run_cargo_fmt(&command, &global).await? {
        all_passed = false;
    }

    if !run_cargo_check(&global).await? {
        all_passed = false;
    }

    if !run_cargo_clippy(&global).await? {
        all_passed = false;
    }

    if !run_cargo_test(&global).await? {
        all_passed = false;
    }

    if !run_cargo_machete(&global).await? {
        all_passed = false;
    }

    aprintln!();
    if all_passed {
        aprintln!("{} {}", p_g("✅"), p_g("All checks passed!"));
        Ok(())
    } else {
        aprintln!("{} {}", p_r("❌"), p_r("Some checks failed"));
        aprintln!();
        if !global.is_silent() {
            aprintln!("{}", p_b("Quick fixes:"));
            aprintln!("  • {} - Format code", p_c("cargo xtask lint --fix"));
            aprintln!("  • {} - Auto-fix clippy issues", p_c("cargo clippy --fix"));
            aprintln!("  • {} - Check compilation", p_c("cargo check"));
        }
        Err(error::LintError::ChecksFailed)
    }
}

async fn run_cargo_fmt(command: &LintCommand, global: &crate::Global) -> Result<bool> {
    if !global.is_silent() {
        aprintln!("{} {}", p_b("🔧"), p_b("Running cargo fmt..."));
    }

    let check_output = tokio::process::Command::new("cargo")
        .args(["fmt", "--check"])
        .output()
        .await?;

    if check_output.status.success() {
        if !global.is_silent() {
            aprintln!("{} {}", p_g("✅"), "Code formatting is correct");
        }
        return Ok(true);
    }

    if !command.fix {
        aprintln!(
            "{} {}",
            p_r("❌"),
            "Code formatting check failed. Run with --fix to auto-format"
        );
        return Ok(false);
    }

    if global.is_verbose() {
        aprintln!(
            "{} {}",
            p_y("⚠️"),
            "Code formatting issues found. Auto-fixing..."
        );
    }

    let fmt_status = tokio::process::Command::new("cargo")
        .arg("fmt")
        .status()
        .await?;

    if fmt_status.success() {
        if !global.is_silent() {
            aprintln!("{} {}", p_g("✅"), "Code formatted");
        }
        Ok(true)
    } else {
        aprintln!("{} {}", p_r("❌"), "cargo fmt failed");
        Ok(false)
    }
}

/// Runs `cargo <args> [--quiet]` and reports the outcome.
async fn run_cargo_step(
    global: &crate::Global,
    args: &[&str],
    trailing: &[&str],
    passed: &str,
    failed: &str,
    hint: &str,
) -> Result<bool> {
    let mut cmd = tokio::process::Command::new("cargo");
    cmd.args(args);

    if !global.is_verbose() {
        cmd.arg("--quiet");
    }

    cmd.args(trailing);

    let status = cmd.status().await?;

    if status.success() {
        if !global.is_silent() {
            aprintln!("{} {}", p_g("✅"), passed);
        }
        Ok(true)
    } else {
        aprintln!("{} {}", p_r("❌"), failed);
        aprintln!("{}", p_r(hint));
        Ok(false)
    }
}

async fn run_cargo_check(global: &crate::Global) -> Result<bool> {
    if !global.is_silent() {
        aprintln!("{} {}", p_b("🔧"), p_b("Running cargo check..."));
    }

    run_cargo_step(
        global,
        &["check", "--all-targets"],
        &[],
        "Cargo check passed",
        "Cargo check failed",
        "Please fix compilation errors before proceeding",
    )
    .await
}

async fn run_cargo_clippy(global: &crate::Global) -> Result<bool> {
    if !global.is_silent() {
        aprintln!("{} {}", p_b("🔧"), p_b("Running cargo clippy..."));
    }

    let passed = run_cargo_step(
        global,
        &["clippy", "--all-targets"],
        &["--", "-D", "warnings"],
        "Clippy checks passed",
        "Clippy checks failed",
        "Please fix clippy warnings before proceeding",
    )
    .await?;

    if !passed && !global.is_silent() {
        aprintln!(
            "{} Run {} to auto-fix some issues",
            p_b("Tip:"),
            p_c("cargo clippy --fix")
        );
    }

    Ok(passed)
}

async fn run_cargo_test(global: &crate::Global) -> Result<bool> {
    if !global.is_silent() {
        aprintln!("{} {}", p_b("🔧"), p_b("Running cargo test..."));
    }

    run_cargo_step(
        global,
        &["test", "--all-targets"],
        &[],
        "All tests passed",
        "Tests failed",
        "Please fix failing tests before proceeding",
    )
    .await
}

async fn run_cargo_machete(global: &crate::Global) -> Result<bool> {
    if !global.is_silent() {
        aprintln!("{} {}", p_b("🔧"), p_b("Running cargo machete..."));
    }

    let output = tokio::process::Command::new("cargo")
        .arg("machete")
        .output()
        .await?;

    if output.status.success() {
        if !global.is_silent() {
            aprintln!("{} {}", p_g("✅"), "No unused dependencies found");
        }
        Ok(true)
    } else {
        aprintln!("{} {}", p_r("❌"), "Unused dependencies found");
        aprintln!("{}", String::from_utf8_lossy(&output.stdout));
        Ok(false)
    }
}
