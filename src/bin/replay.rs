// Headless replay: run a JSON intent script and print the final snapshot
//
// Usage: replay [script.json | -]
// Reads stdin when no path (or "-") is given.

use polysketch::config::SketchConfig;
use polysketch::sketch::{Intent, SketchSession};
use std::io::Read;
use std::process::ExitCode;

#[derive(Debug, thiserror::Error)]
enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "polysketch=warn".into()),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ReplayError> {
    let script = match std::env::args().nth(1) {
        Some(path) if path != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let intents: Vec<Intent> = serde_json::from_str(&script)?;
    let config = SketchConfig::load_or_default();
    let mut session = SketchSession::with_config(&config);

    let changes = session.replay(intents.iter().copied());
    tracing::info!(intents = intents.len(), changes, "replay finished");

    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    Ok(())
}
