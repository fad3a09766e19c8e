use std::env;
use std::path::Path;

use nodeset_core::NodeRegistry;
use nodeset_xml::load_nodeset;

fn print_tree(registry: &NodeRegistry, parent: &str, depth: usize) {
    for child in registry.find_children(parent) {
        let link = child
            .parent_link
            .as_ref()
            .map(|link| link.as_str())
            .unwrap_or("?");
        println!(
            "{:indent$}{} {} [{}] ({})",
            "",
            link,
            child.browse_name,
            child.node_class(),
            child.node_id,
            indent = depth * 2
        );
        print_tree(registry, &child.node_id, depth + 1);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let mut args = env::args().skip(1);
    let path = args
        .next()
        .unwrap_or_else(|| "demos/data/Pumps.NodeSet2.xml".to_string());
    let root = args
        .next()
        .unwrap_or_else(|| format!("i={}", opcua_ids::OBJECTS_FOLDER));

    let registry = NodeRegistry::new(load_nodeset(Path::new(&path))?)?;
    println!("{}", registry.resolve_target_name(&root));
    print_tree(&registry, &root, 1);

    for node in registry.nodes().iter().filter(|n| n.node_type.node_class().ends_with("Type")) {
        let tables = registry.classify_references(node);
        println!("\n{} ({} hierarchical rows)", node.display_name, tables.hierarchical.len());
        for row in &tables.hierarchical {
            println!(
                "  {:<14} forward={:<5} {:<20} rule={}",
                row.reference_type,
                row.forward,
                row.browse_name.as_deref().unwrap_or(&row.target_name),
                row.modelling_rule.as_deref().unwrap_or("-"),
            );
        }
    }
    Ok(())
}
