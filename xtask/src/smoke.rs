//! End-to-end smoke check against a running server.
//!
//! Replays create, list, update, delete and a final lookup, checking
//! status codes and bodies at each step.

use reqwest::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;

use crate::prelude::*;

pub type Result<T> = std::result::Result<T, SmokeError>;

#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{step}: expected status {expected}, got {actual}")]
    UnexpectedStatus {
        step: &'static str,
        expected: StatusCode,
        actual: StatusCode,
    },

    #[error("{step}: unexpected body {body}")]
    UnexpectedBody { step: &'static str, body: Value },
}

/// Smoke test command.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Exercise every todo route against a running server.

The server should start from an empty database so the created todo
receives the id given by --id.")]
pub struct SmokeCommand {
    /// Base URL of the running server
    #[arg(long, default_value = "http://localhost:4444", env = "TODOLIST_URL")]
    pub base_url: String,

    /// Id the created todo is expected to receive
    #[arg(long, default_value_t = 1)]
    pub id: i64,
}

pub async fn run(command: SmokeCommand, global: crate::Global) -> Result<()> {
    let client = reqwest::Client::new();
    let base = command.base_url.trim_end_matches('/');
    let item_url = format!("{base}/api/todos/{}", command.id);

    let created = json!({"title": "Buy milk", "description": "2%", "completed": false});
    let updated = json!({"title": "Buy milk", "description": "skim", "completed": true});

    step(&global, "create");
    let response = client
        .post(format!("{base}/api/todos/create"))
        .json(&created)
        .send()
        .await?;
    let body = expect_json(response, "create", StatusCode::OK).await?;
    expect_body("create", body, |b| *b == created)?;

    step(&global, "list");
    let response = client.get(format!("{base}/api/todos/getAll")).send().await?;
    let body = expect_json(response, "list", StatusCode::OK).await?;
    expect_body("list", body, |b| {
        b.as_array().is_some_and(|todos| todos.contains(&created))
    })?;

    step(&global, "update");
    let response = client.put(&item_url).json(&updated).send().await?;
    let body = expect_json(response, "update", StatusCode::OK).await?;
    expect_body("update", body, |b| *b == updated)?;

    step(&global, "delete");
    let response = client.delete(&item_url).send().await?;
    expect_status("delete", response.status(), StatusCode::NO_CONTENT)?;

    step(&global, "get deleted");
    let response = client.get(&item_url).send().await?;
    expect_status("get deleted", response.status(), StatusCode::NOT_FOUND)?;

    aprintln!("{} {}", p_g("✅"), p_g("Smoke test passed!"));
    Ok(())
}

fn step(global: &crate::Global, name: &str) {
    if !global.is_silent() {
        aprintln!("{} {}", p_b("  →"), p_c(name));
    }
}

fn expect_status(step: &'static str, actual: StatusCode, expected: StatusCode) -> Result<()> {
    if actual != expected {
        return Err(SmokeError::UnexpectedStatus {
            step,
            expected,
            actual,
        });
    }
    Ok(())
}

async fn expect_json(
    response: reqwest::Response,
    step: &'static str,
    expected: StatusCode,
) -> Result<Value> {
    expect_status(step, response.status(), expected)?;
    Ok(response.json().await?)
}

fn expect_body(step: &'static str, body: Value, check: impl Fn(&Value) -> bool) -> Result<()> {
    if !check(&body) {
        return Err(SmokeError::UnexpectedBody { step, body });
    }
    Ok(())
}
