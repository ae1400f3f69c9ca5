//! Create command implementation.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use crate::commands::{require_session, surface};
use crate::output;
use crate::resources;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Collection name or full path
    pub collection: String,

    /// JSON file with item data (use - for stdin)
    #[arg(long)]
    pub json: String,
}

pub async fn run(args: CreateArgs) -> Result<()> {
    let session = require_session().await?;
    let path = resources::resolve(&args.collection)?;

    let body = read_json(&args.json)?;

    let client = session.resource::<Value>(path);
    let created = match client.create(&body).await {
        Ok(created) => created,
        Err(err) => return Err(surface(err).await),
    };

    output::json_pretty(&created)?;
    output::success("Item created");

    Ok(())
}

/// Read a JSON value from a file path, or stdin for `-`.
pub(crate) fn read_json(source: &str) -> Result<Value> {
    if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        serde_json::from_str(&buf).context("Invalid JSON from stdin")
    } else {
        let content = std::fs::read_to_string(source).context("Failed to read JSON file")?;
        serde_json::from_str(&content).context("Invalid JSON in file")
    }
}
