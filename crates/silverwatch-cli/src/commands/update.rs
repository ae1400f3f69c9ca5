//! Update command implementation.

use anyhow::Result;
use clap::Args;
use serde_json::Value;

use crate::commands::create::read_json;
use crate::commands::{require_session, surface};
use crate::output;
use crate::resources;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Collection name or full path
    pub collection: String,

    /// Item id
    pub id: String,

    /// JSON file with the fields to change (use - for stdin)
    #[arg(long)]
    pub json: String,
}

pub async fn run(args: UpdateArgs) -> Result<()> {
    let session = require_session().await?;
    let path = resources::resolve(&args.collection)?;

    let patch = read_json(&args.json)?;

    let client = session.resource::<Value>(path);
    let updated = match client.update(&args.id, &patch).await {
        Ok(updated) => updated,
        Err(err) => return Err(surface(err).await),
    };

    output::json_pretty(&updated)?;
    output::success("Item updated");

    Ok(())
}
