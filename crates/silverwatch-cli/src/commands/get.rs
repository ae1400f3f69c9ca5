//! Get command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::commands::{require_session, surface};
use crate::output;
use crate::resources;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Collection name or full path
    pub collection: String,

    /// Item id
    pub id: String,
}

pub async fn run(args: GetArgs) -> Result<()> {
    let session = require_session().await?;
    let path = resources::resolve(&args.collection)?;

    let client = session.resource::<serde_json::Value>(path);

    let item = match client.get(&args.id, &[]).await {
        Ok(item) => item,
        Err(err) => return Err(surface(err).await),
    };

    let item = item.context("No item id given")?;
    output::json_pretty(&item)?;

    Ok(())
}
