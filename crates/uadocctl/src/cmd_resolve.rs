use anyhow::Result;
use nodeset_xml::ImportSource;
use serde::Serialize;

use crate::common;

#[derive(Serialize)]
struct Resolved<'a> {
    token: &'a str,
    name: &'a str,
}

pub fn run(source: &ImportSource, token: &str, json: bool) -> Result<()> {
    let registry = common::open_registry(source)?;
    let name = registry.resolve_target_name(token);

    if json {
        common::print_json(&Resolved { token, name })?;
    } else {
        println!("{name}");
    }
    Ok(())
}
