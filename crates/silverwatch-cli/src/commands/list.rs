//! List command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::commands::{parse_filters, require_session, surface};
use crate::output;
use crate::resources;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Collection name (e.g. devices) or full path (e.g. /devices/devices/)
    pub collection: String,

    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Items per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Filter as KEY=VALUE (repeatable)
    #[arg(long = "filter", value_name = "KEY=VALUE")]
    pub filters: Vec<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let session = require_session().await?;
    let path = resources::resolve(&args.collection)?;

    let mut client = session.resource::<serde_json::Value>(path);
    if let Some(page_size) = args.page_size {
        client = client.with_page_size(page_size);
    }

    let filters = parse_filters(&args.filters)?;
    let filter_refs: Vec<(&str, &str)> = filters
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    let page = match client.page(args.page, &filter_refs).await {
        Ok(page) => page,
        Err(err) => return Err(surface(err).await),
    };

    if page.results.is_empty() {
        eprintln!("{}", "No items found.".dimmed());
        return Ok(());
    }

    output::page(&page, args.page, args.pretty)?;

    Ok(())
}
