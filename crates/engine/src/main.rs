//! Tomebound preview - resolves one content entry and prints the response.
//!
//! Usage: `tomebound-preview [FILE]`. Reads a `ContentEntry` JSON document
//! from FILE, or from stdin when no file is given.

use std::io::Read;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tomebound_engine::config::log_filter_from_env;
use tomebound_engine::{load_dotenv_from_repo_root, EngineConfig, NormalizerRegistry};
use tomebound_shared::ContentEntry;

fn main() -> anyhow::Result<()> {
    // Load environment from repo root.
    load_dotenv_from_repo_root();

    // Initialize logging (stderr, so stdout stays pure JSON)
    tracing_subscriber::registry()
        .with(log_filter_from_env()?)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = EngineConfig::from_env();

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read content entry from {}", path))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read content entry from stdin")?;
            buffer
        }
    };

    let entry = ContentEntry::from_json(&input)?;
    let registry = NormalizerRegistry::from_config(&config);
    let response = registry.resolve_entry(&entry);

    tracing::info!(
        category = %response.category,
        normalizer = response.normalizer,
        no_data = response.is_no_data(),
        "Resolved content entry"
    );

    let output = if config.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);

    Ok(())
}
