//! OPC UA node registry: lookups over a loaded nodeset.

use std::collections::HashSet;

use nodeset_xml::{unqualified, Alias, NodeDecl, NodeType, NodesetModel};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

mod resolve;

pub use resolve::{looks_symbolic, HierarchicalRow, NonHierarchicalRow, ReferenceTables, RowOrigin};

/// Error type produced by registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The requested node does not exist in the registry.
    #[error("node not found: {0}")]
    NodeNotFound(String),
    /// Two nodes in the same nodeset share an id.
    #[error("duplicate node id: {0}")]
    DuplicateNode(String),
}

/// Nodes, aliases and namespaces of one loaded nodeset.
///
/// Built once per documentation build and only read afterwards. Lookups are
/// linear scans in file order.
#[derive(Debug, Clone)]
pub struct NodeRegistry {
    namespaces: Vec<String>,
    aliases: Vec<Alias>,
    nodes: Vec<NodeDecl>,
}

/// Node counts of a registry, per node type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrySummary {
    pub nodes: usize,
    pub aliases: usize,
    pub namespaces: Vec<String>,
    pub by_type: Vec<(NodeType, usize)>,
}

impl NodeRegistry {
    /// Build a registry, rejecting duplicate node ids.
    pub fn new(model: NodesetModel) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(model.nodes.len());
        for node in &model.nodes {
            if !seen.insert(node.node_id.as_str()) {
                return Err(RegistryError::DuplicateNode(node.node_id.clone()));
            }
        }
        Ok(NodeRegistry {
            namespaces: model.namespaces,
            aliases: model.aliases,
            nodes: model.nodes,
        })
    }

    pub fn nodes(&self) -> &[NodeDecl] {
        &self.nodes
    }

    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Find a node by id.
    pub fn find_by_id(&self, node_id: &str) -> Option<&NodeDecl> {
        self.nodes.iter().find(|node| node.node_id == node_id)
    }

    /// Find the first node of `node_type` whose browse name matches `name`,
    /// either qualified (`1:Pump`) or without the namespace prefix (`Pump`).
    pub fn find_by_browse_name(&self, name: &str, node_type: NodeType) -> Option<&NodeDecl> {
        self.nodes.iter().find(|node| {
            node.node_type == node_type
                && (node.browse_name == name || unqualified(&node.browse_name) == name)
        })
    }

    /// All nodes whose parent is `parent_id`, in file order.
    pub fn find_children(&self, parent_id: &str) -> Vec<&NodeDecl> {
        self.nodes
            .iter()
            .filter(|node| node.parent_id.as_deref() == Some(parent_id))
            .collect()
    }

    /// Like [`NodeRegistry::find_by_id`] for references that must exist.
    pub fn require_by_id(&self, node_id: &str) -> Result<&NodeDecl, RegistryError> {
        self.find_by_id(node_id).ok_or_else(|| {
            debug!(node = %node_id, "node id not in registry");
            RegistryError::NodeNotFound(node_id.to_string())
        })
    }

    /// Like [`NodeRegistry::find_by_browse_name`] for references that must exist.
    pub fn require_by_browse_name(
        &self,
        name: &str,
        node_type: NodeType,
    ) -> Result<&NodeDecl, RegistryError> {
        self.find_by_browse_name(name, node_type).ok_or_else(|| {
            debug!(name, %node_type, "browse name not in registry");
            RegistryError::NodeNotFound(format!("{node_type} {name}"))
        })
    }

    pub fn nodes_of_type(&self, node_type: NodeType) -> impl Iterator<Item = &NodeDecl> {
        self.nodes
            .iter()
            .filter(move |node| node.node_type == node_type)
    }

    pub fn summary(&self) -> RegistrySummary {
        let by_type = NodeType::ALL
            .into_iter()
            .map(|kind| (kind, self.nodes_of_type(kind).count()))
            .filter(|(_, count)| *count > 0)
            .collect();
        RegistrySummary {
            nodes: self.nodes.len(),
            aliases: self.aliases.len(),
            namespaces: self.namespaces.clone(),
            by_type,
        }
    }
}

impl TryFrom<NodesetModel> for NodeRegistry {
    type Error = RegistryError;

    fn try_from(model: NodesetModel) -> Result<Self, Self::Error> {
        NodeRegistry::new(model)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const FIXTURE: &str = r#"
        <UANodeSet>
            <NamespaceUris><Uri>http://example.com/pumps/</Uri></NamespaceUris>
            <Aliases>
                <Alias Alias="Double">i=11</Alias>
                <Alias Alias="PumpKind">ns=1;i=1000</Alias>
                <Alias Alias="Station">ns=1;i=1</Alias>
            </Aliases>
            <UAObjectType NodeId="ns=1;i=1000" BrowseName="1:PumpType">
                <References>
                    <Reference ReferenceType="HasSubtype" IsForward="false">i=58</Reference>
                    <Reference ReferenceType="HasComponent">ns=1;i=1001</Reference>
                    <Reference ReferenceType="HasProperty">ns=1;i=1002</Reference>
                    <Reference ReferenceType="HasCause">ns=1;i=1003</Reference>
                    <Reference ReferenceType="GeneratesEvent">i=2041</Reference>
                </References>
            </UAObjectType>
            <UAVariable NodeId="ns=1;i=1001" BrowseName="1:Speed" ParentNodeId="ns=1;i=1000" DataType="i=11">
                <References>
                    <Reference ReferenceType="HasComponent" IsForward="false">ns=1;i=1000</Reference>
                    <Reference ReferenceType="HasTypeDefinition">i=63</Reference>
                    <Reference ReferenceType="HasModellingRule">i=78</Reference>
                </References>
            </UAVariable>
            <UAVariable NodeId="ns=1;i=1002" BrowseName="1:Model" ParentNodeId="ns=1;i=1000" DataType="String">
                <References>
                    <Reference ReferenceType="HasProperty" IsForward="false">ns=1;i=1000</Reference>
                    <Reference ReferenceType="HasModellingRule">i=80</Reference>
                    <Reference ReferenceType="HasTypeDefinition">i=68</Reference>
                </References>
            </UAVariable>
            <UAMethod NodeId="ns=1;i=1003" BrowseName="1:Start" ParentNodeId="ns=1;i=1000">
                <References>
                    <Reference ReferenceType="HasCause" IsForward="false">ns=1;i=1000</Reference>
                </References>
            </UAMethod>
            <UAObject NodeId="ns=1;i=2000" BrowseName="1:Pump1" ParentNodeId="i=85">
                <References>
                    <Reference ReferenceType="Organizes" IsForward="false">i=85</Reference>
                    <Reference ReferenceType="HasTypeDefinition">ns=1;i=1000</Reference>
                    <Reference ReferenceType="HasModellingRule">ns=1;i=9999</Reference>
                    <Reference ReferenceType="Organizes">ns=1;i=2001</Reference>
                </References>
            </UAObject>
            <UAObject NodeId="ns=1;i=2001" BrowseName="1:Pump1" ParentNodeId="ns=1;i=2000">
                <References>
                    <Reference ReferenceType="Organizes" IsForward="false">ns=1;i=2000</Reference>
                    <Reference ReferenceType="HasTypeDefinition">i=61</Reference>
                </References>
            </UAObject>
        </UANodeSet>
    "#;

    pub(crate) fn build_registry() -> NodeRegistry {
        let model = nodeset_xml::parse(FIXTURE).expect("parse fixture");
        NodeRegistry::new(model).expect("build registry")
    }

    #[test]
    fn every_node_found_by_id() {
        let registry = build_registry();
        for node in registry.nodes() {
            let found = registry.find_by_id(&node.node_id).expect("node by id");
            assert_eq!(found, node);
        }
        assert!(registry.find_by_id("ns=1;i=4242").is_none());
    }

    #[test]
    fn browse_name_lookup_respects_type() {
        let registry = build_registry();
        let speed = registry
            .find_by_browse_name("Speed", NodeType::Variable)
            .expect("unqualified");
        assert_eq!(speed.node_id, "ns=1;i=1001");
        let speed = registry
            .find_by_browse_name("1:Speed", NodeType::Variable)
            .expect("qualified");
        assert_eq!(speed.node_id, "ns=1;i=1001");
        assert!(registry.find_by_browse_name("Speed", NodeType::Object).is_none());
        // First match wins when browse names repeat.
        let pump = registry
            .find_by_browse_name("Pump1", NodeType::Object)
            .expect("pump");
        assert_eq!(pump.node_id, "ns=1;i=2000");
    }

    #[test]
    fn children_in_file_order() {
        let registry = build_registry();
        let ids: Vec<_> = registry
            .find_children("ns=1;i=1000")
            .into_iter()
            .map(|node| node.node_id.as_str())
            .collect();
        assert_eq!(ids, ["ns=1;i=1001", "ns=1;i=1002", "ns=1;i=1003"]);
        for parent in registry.nodes() {
            let children = registry.find_children(&parent.node_id);
            let expected = registry
                .nodes()
                .iter()
                .filter(|n| n.parent_id.as_deref() == Some(parent.node_id.as_str()))
                .count();
            assert_eq!(children.len(), expected);
        }
        assert!(registry.find_children("ns=1;i=1001").is_empty());
    }

    #[test]
    fn required_lookups_report_missing_node() {
        let registry = build_registry();
        let err = registry.require_by_id("ns=7;s=Ghost").unwrap_err();
        assert!(matches!(err, RegistryError::NodeNotFound(id) if id == "ns=7;s=Ghost"));
        let err = registry
            .require_by_browse_name("Ghost", NodeType::Object)
            .unwrap_err();
        assert!(matches!(err, RegistryError::NodeNotFound(_)));
        assert!(registry.require_by_id("ns=1;i=2000").is_ok());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let xml = r#"<UANodeSet>
            <UAObject NodeId="ns=1;i=1" BrowseName="1:A"/>
            <UAObject NodeId="ns=1;i=1" BrowseName="1:B"/>
        </UANodeSet>"#;
        let model = nodeset_xml::parse(xml).expect("parse");
        let err = NodeRegistry::try_from(model).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateNode(id) if id == "ns=1;i=1"));
    }

    #[test]
    fn summary_counts_types() {
        let registry = build_registry();
        let summary = registry.summary();
        assert_eq!(summary.nodes, 6);
        assert_eq!(summary.aliases, 3);
        assert_eq!(summary.namespaces.len(), 1);
        assert!(summary.by_type.contains(&(NodeType::Variable, 2)));
        assert!(summary.by_type.contains(&(NodeType::Object, 2)));
        assert!(!summary.by_type.iter().any(|(kind, _)| *kind == NodeType::View));
        assert_eq!(registry.nodes_of_type(NodeType::Method).count(), 1);
    }
}
