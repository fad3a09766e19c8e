use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use nodeset_core::NodeRegistry;
use nodeset_xml::{ImportSource, NodeType};
use opcua_doc::{Layout, RenderOptions};
use serde::Serialize;
use tracing::info;

/// Classify a nodeset argument. With a documentation source directory,
/// relative paths are taken from the directory of `docname` and `/`-rooted
/// paths from the source directory.
pub fn import_source(src_dir: Option<&Path>, docname: &str, arg: &str) -> ImportSource {
    match src_dir {
        Some(dir) => ImportSource::from_document(dir, docname, arg),
        None => ImportSource::parse(arg),
    }
}

/// Load a nodeset into a registry.
pub fn open_registry(source: &ImportSource) -> Result<NodeRegistry> {
    let model = nodeset_xml::load(source).context("load nodeset")?;
    let registry = NodeRegistry::new(model).context("build node registry")?;
    info!(nodes = registry.len(), "registry ready");
    Ok(registry)
}

/// Parse a comma separated list of node types; empty selects all of them.
pub fn parse_types(list: Option<&str>) -> Result<Vec<NodeType>> {
    let Some(list) = list else {
        return Ok(NodeType::ALL.to_vec());
    };
    let mut types = Vec::new();
    for item in list.split(',').map(str::trim).filter(|item| !item.is_empty()) {
        let kind: NodeType = item
            .parse()
            .with_context(|| format!("parse node type '{item}'"))?;
        if !types.contains(&kind) {
            types.push(kind);
        }
    }
    if types.is_empty() {
        bail!("no node types selected in '{list}'");
    }
    Ok(types)
}

pub fn render_options(layout: &str, style: Option<String>, hide: bool) -> Result<RenderOptions> {
    let layout: Layout = layout
        .parse()
        .with_context(|| format!("select layout '{layout}'"))?;
    Ok(RenderOptions {
        hide,
        style,
        layout,
        external: false,
    })
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialise JSON output")?;
    println!("{text}");
    Ok(())
}

pub fn write_document(dir: &Path, docname: &str, text: &str) -> Result<()> {
    let path = dir.join(format!("{docname}.rst"));
    fs::write(&path, text).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
