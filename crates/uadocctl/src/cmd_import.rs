use anyhow::Result;
use nodeset_xml::ImportSource;

use crate::common;

pub fn run(source: &ImportSource, json: bool) -> Result<()> {
    let registry = common::open_registry(source)?;
    let summary = registry.summary();

    if json {
        common::print_json(&summary)?;
        return Ok(());
    }

    println!("{} nodes, {} aliases", summary.nodes, summary.aliases);
    for (idx, uri) in summary.namespaces.iter().enumerate() {
        println!("ns={:<4} {uri}", idx + 1);
    }
    println!("{:<18} {}", "TYPE", "COUNT");
    for (kind, count) in &summary.by_type {
        println!("{:<18} {count}", kind.tag());
    }
    Ok(())
}
