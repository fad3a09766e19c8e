use anyhow::{bail, Context, Result};
use nodeset_xml::{ImportSource, NodeType};
use opcua_doc::{node_entry, DocBuilder, Domain, RenderOptions};
use tracing::info;

use crate::common;

/// How the node to show is selected.
#[derive(Debug, Clone)]
pub enum Selector {
    Id(String),
    Name { name: String, node_type: NodeType },
}

impl Selector {
    pub fn from_args(
        id: Option<String>,
        name: Option<String>,
        node_type: Option<String>,
    ) -> Result<Self> {
        match (id, name) {
            (Some(id), None) => Ok(Selector::Id(id)),
            (None, Some(name)) => {
                let node_type = node_type
                    .as_deref()
                    .unwrap_or("UAObject")
                    .parse::<NodeType>()
                    .context("parse --type")?;
                Ok(Selector::Name { name, node_type })
            }
            (Some(id), Some(_)) => bail!("specify either --id or --name, not both (using {id})"),
            (None, None) => bail!("a node must be selected via --id or --name"),
        }
    }
}

pub fn run(
    source: &ImportSource,
    selector: Selector,
    options: RenderOptions,
    json: bool,
) -> Result<()> {
    let registry = common::open_registry(source)?;
    let node_id = match &selector {
        Selector::Id(id) => registry
            .require_by_id(id)
            .with_context(|| format!("could not find node {id}"))?
            .node_id
            .clone(),
        Selector::Name { name, node_type } => registry
            .require_by_browse_name(name, *node_type)
            .with_context(|| format!("could not find {node_type} {name}"))?
            .node_id
            .clone(),
    };
    info!(node = %node_id, "rendering node");

    if json {
        let node = registry.require_by_id(&node_id)?;
        return common::print_json(&node_entry(&registry, node));
    }

    let mut builder = DocBuilder::new(registry, Domain::new());
    builder.register_all(&NodeType::ALL);
    let docname = opcua_doc::docname_for(builder.registry().require_by_id(&node_id)?.node_type);
    let text = builder
        .document_node(docname, &node_id, &options)
        .with_context(|| format!("render node {node_id}"))?;
    print!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_rules() {
        assert!(matches!(
            Selector::from_args(Some("i=85".into()), None, None).unwrap(),
            Selector::Id(id) if id == "i=85"
        ));
        match Selector::from_args(None, Some("Pump".into()), Some("Variable".into())).unwrap() {
            Selector::Name { name, node_type } => {
                assert_eq!(name, "Pump");
                assert_eq!(node_type, NodeType::Variable);
            }
            other => panic!("unexpected selector: {other:?}"),
        }
        match Selector::from_args(None, Some("Pump".into()), None).unwrap() {
            Selector::Name { node_type, .. } => assert_eq!(node_type, NodeType::Object),
            other => panic!("unexpected selector: {other:?}"),
        }
        assert!(Selector::from_args(None, None, None).is_err());
        assert!(Selector::from_args(Some("i=1".into()), Some("x".into()), None).is_err());
        assert!(Selector::from_args(None, Some("x".into()), Some("Gadget".into())).is_err());
    }
}
