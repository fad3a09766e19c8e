use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use nodeset_xml::{ImportSource, NodeType};
use opcua_doc::{DocBuilder, Domain, RenderOptions};
use serde::Serialize;
use tracing::info;

use crate::common;

pub struct BuildArgs {
    pub source: ImportSource,
    pub out: PathBuf,
    pub types: Vec<NodeType>,
    pub options: RenderOptions,
    pub indices: bool,
}

#[derive(Serialize)]
struct BuildReport {
    entries: usize,
    documents: usize,
    files: Vec<String>,
}

pub fn run(args: BuildArgs, json: bool) -> Result<()> {
    let registry = common::open_registry(&args.source)?;
    let mut builder = DocBuilder::new(registry, Domain::new());
    let stats = builder
        .build(&args.types, &args.options)
        .context("build documentation")?;
    if args.indices {
        builder.emit_indices();
    }
    let domain = builder.into_host();

    fs::create_dir_all(&args.out)
        .with_context(|| format!("create {}", args.out.display()))?;
    let mut files = Vec::new();
    for docname in domain.docnames() {
        let text = domain.document(docname).unwrap_or_default();
        common::write_document(&args.out, docname, &text)?;
        files.push(format!("{docname}.rst"));
    }
    info!(out = %args.out.display(), files = files.len(), "wrote documents");

    if json {
        let report = BuildReport {
            entries: stats.entries,
            documents: stats.documents,
            files,
        };
        common::print_json(&report)?;
    } else {
        println!(
            "{} entries in {} documents written to {}",
            stats.entries,
            stats.documents,
            args.out.display()
        );
        for file in files {
            println!("  {file}");
        }
    }
    Ok(())
}
