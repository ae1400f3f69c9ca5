//! Delete command implementation.

use anyhow::Result;
use clap::Args;
use serde_json::Value;

use crate::commands::{require_session, surface};
use crate::output;
use crate::resources;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Collection name or full path
    pub collection: String,

    /// Item id
    pub id: String,
}

pub async fn run(args: DeleteArgs) -> Result<()> {
    let session = require_session().await?;
    let path = resources::resolve(&args.collection)?;

    let client = session.resource::<Value>(path);
    if let Err(err) = client.delete(&args.id).await {
        return Err(surface(err).await);
    }

    output::success(&format!("Deleted {}", args.id));

    Ok(())
}
