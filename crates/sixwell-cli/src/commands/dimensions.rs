use serde::Serialize;
use sixwell_core::Dimension;

use crate::catalog::CATALOG;

#[derive(Serialize)]
struct DimensionListing {
    index: usize,
    key: &'static str,
    dimension: Dimension,
    label: &'static str,
    prompt: &'static str,
    action: &'static str,
    color: &'static str,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let listing: Vec<DimensionListing> = CATALOG
        .iter()
        .map(|info| DimensionListing {
            index: info.dimension.index(),
            key: info.dimension.key(),
            dimension: info.dimension,
            label: info.label,
            prompt: info.prompt,
            action: info.action,
            color: info.color,
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}
