use std::env;
use std::path::PathBuf;

use opcua_doc::xml::{ImportSource, NodeType};
use opcua_doc::{DocBuilder, Domain, RenderOptions};
use tracing::info;

fn parse_args() -> (String, Option<PathBuf>) {
    let mut args = env::args().skip(1);
    let mut source = "demos/data/Pumps.NodeSet2.xml".to_string();
    let mut out: Option<PathBuf> = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => {
                out = args.next().map(PathBuf::from);
            }
            other => source = other.to_string(),
        }
    }
    (source, out)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let (source, out) = parse_args();
    info!(%source, "rendering nodeset");

    let mut builder = DocBuilder::import(&ImportSource::parse(&source), Domain::new())?;
    let stats = builder.build(&NodeType::ALL, &RenderOptions::default())?;
    builder.emit_indices();
    let domain = builder.into_host();

    for docname in domain.docnames() {
        let text = domain.document(docname).unwrap_or_default();
        match &out {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                std::fs::write(dir.join(format!("{docname}.rst")), text)?;
            }
            None => println!("--- {docname}.rst ---\n{text}"),
        }
    }
    println!("{} entries, {} documents", stats.entries, stats.documents);
    Ok(())
}
