use std::env;
use std::path::Path;

use nodeset_core::NodeRegistry;
use nodeset_xml::load_nodeset;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let mut args = env::args().skip(1);
    let path = args
        .next()
        .unwrap_or_else(|| "demos/data/Pumps.NodeSet2.xml".to_string());
    let model = load_nodeset(Path::new(&path))?;
    let registry = NodeRegistry::new(model)?;

    let mut tokens: Vec<String> = args.collect();
    if tokens.is_empty() {
        tokens = ["i=2253", "i=78", "ns=1;i=3000", "ns=1;i=5001", "i=424242", "ns=9;s=Missing"]
            .iter()
            .map(|t| t.to_string())
            .collect();
    }

    println!("{:<20} {}", "TOKEN", "NAME");
    for token in &tokens {
        let well_known = opcua_ids::lookup_token(token).is_some();
        println!(
            "{:<20} {}{}",
            token,
            registry.resolve_target_name(token),
            if well_known { "  (well-known)" } else { "" }
        );
    }
    Ok(())
}
