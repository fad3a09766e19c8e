use anyhow::Result;
use nodeset_xml::{ImportSource, NodeType};
use opcua_doc::index::{self, IndexGroup};
use opcua_doc::{DocBuilder, Domain, IndexSpec, REFERENCE_INDEX, VARIABLE_INDEX};

use crate::common;

pub fn run(source: &ImportSource, references: bool, types: &[NodeType], json: bool) -> Result<()> {
    let registry = common::open_registry(source)?;
    let mut builder = DocBuilder::new(registry, Domain::new());
    builder.register_all(types);
    let objects = builder.host().objects();

    let (spec, groups): (IndexSpec, Vec<IndexGroup>) = if references {
        (REFERENCE_INDEX, index::reference_index(objects))
    } else {
        (VARIABLE_INDEX, index::variable_index(objects))
    };

    if json {
        common::print_json(&groups)?;
    } else {
        print!("{}", index::render_index(spec, &groups));
    }
    Ok(())
}
