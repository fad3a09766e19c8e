use anyhow::{Context, Result};
use nodeset_xml::ImportSource;
use serde::Serialize;

use crate::common;

#[derive(Serialize)]
struct ChildEntry<'a> {
    node_id: &'a str,
    node_class: &'static str,
    browse_name: &'a str,
    parent_link: Option<&'a str>,
}

pub fn run(source: &ImportSource, parent_id: &str, json: bool) -> Result<()> {
    let registry = common::open_registry(source)?;
    registry
        .require_by_id(parent_id)
        .with_context(|| format!("look up parent {parent_id}"))?;
    let children = registry.find_children(parent_id);

    if json {
        let entries: Vec<ChildEntry> = children
            .iter()
            .map(|node| ChildEntry {
                node_id: &node.node_id,
                node_class: node.node_class(),
                browse_name: &node.browse_name,
                parent_link: node.parent_link.as_ref().map(|link| link.as_str()),
            })
            .collect();
        common::print_json(&entries)?;
        return Ok(());
    }

    if children.is_empty() {
        println!("No children.");
        return Ok(());
    }

    println!("{:<20} {:<14} {:<20} {}", "NODEID", "CLASS", "REFERENCE", "BROWSENAME");
    for node in children {
        println!(
            "{:<20} {:<14} {:<20} {}",
            node.node_id,
            node.node_class(),
            node.parent_link.as_ref().map(|link| link.as_str()).unwrap_or("-"),
            node.browse_name,
        );
    }
    Ok(())
}
