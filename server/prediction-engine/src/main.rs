//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is a PredictionRequest (`{"product": {...}, "recommendations": [...]}`).
//! Each non-blank input line produces exactly one output line, either:
//! - A PredictionReport
//! - An ErrorOutput (when input parsing or validation fails)
//!
//! Logs go to stderr; filter with RUST_LOG.

use prediction_engine::types::ErrorOutput;
use prediction_engine::{Engine, EngineError, PredictionRequest};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("prediction_engine=info")),
    )
    .with_writer(io::stderr)
    .init();

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  let engine = Engine::with_defaults();

  for (idx, line) in stdin.lock().lines().enumerate() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        tracing::error!("read error: {}", e);
        std::process::exit(1);
      }
    };

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let result = serde_json::from_str::<PredictionRequest>(trimmed)
      .map_err(EngineError::from)
      .and_then(|raw| engine.process(&raw));

    let written = match result {
      Ok(report) => serde_json::to_writer(&mut out, &report),
      Err(e) => {
        tracing::warn!(line = idx + 1, "rejected input: {}", e);
        let err = match &e {
          EngineError::Validation { field, reason } => {
            ErrorOutput::new(reason.clone()).with_field(field.clone())
          }
          EngineError::Json(_) => ErrorOutput::new(e.to_string()),
        };
        serde_json::to_writer(&mut out, &err)
      }
    };

    if let Err(e) = written.map_err(io::Error::from).and_then(|_| writeln!(out)) {
      tracing::error!("write error: {}", e);
      std::process::exit(1);
    }
  }

  if let Err(e) = out.flush() {
    tracing::error!("write error: {}", e);
    std::process::exit(1);
  }
}
