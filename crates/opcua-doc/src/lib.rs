#![cfg_attr(docsrs, feature(doc_cfg))]
//! OPC UA documentation facade that re-exports the workspace crates and drives
//! a documentation build.
//!
//! ```rust,no_run
//! use opcua_doc::{xml::ImportSource, DocBuilder, Domain, RenderOptions};
//!
//! # fn run() -> Result<(), opcua_doc::DocError> {
//! let source = ImportSource::parse("models/Pumps.NodeSet2.xml");
//! let mut builder = DocBuilder::import(&source, Domain::new())?;
//! let text = builder.document_node("pumps", "ns=1;i=1000", &RenderOptions::default())?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

pub use nodeset_core as registry;
pub use nodeset_xml as xml;
pub use opcua_ids as ids;

pub mod host;
pub mod index;
pub mod render;

use nodeset_core::{NodeRegistry, RegistryError};
use nodeset_xml::{ImportSource, NodeType, XmlError};
use thiserror::Error;
use tracing::{debug, info};

pub use host::{DocumentHost, Domain, ObjectEntry, XrefTarget};
pub use index::{IndexEntry, IndexGroup, IndexSpec, REFERENCE_INDEX, VARIABLE_INDEX};
pub use render::{anchor_for, docname_for, node_entry, render_entry, Layout, NodeEntry, RenderOptions};

/// Error type produced by the documentation facade.
#[derive(Debug, Error)]
pub enum DocError {
    /// Loading or parsing the nodeset failed.
    #[error(transparent)]
    Xml(#[from] XmlError),
    /// A mandatory node lookup failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// The requested entry layout does not exist.
    #[error("unknown layout: {0}")]
    Layout(String),
}

/// Registry plus documentation host for one build.
#[derive(Debug)]
pub struct DocBuilder<H: DocumentHost> {
    registry: NodeRegistry,
    host: H,
}

/// Counts reported by [`DocBuilder::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub entries: usize,
    pub documents: usize,
}

impl<H: DocumentHost> DocBuilder<H> {
    pub fn new(registry: NodeRegistry, host: H) -> Self {
        Self { registry, host }
    }

    /// Load a nodeset and build the registry.
    pub fn import(source: &ImportSource, host: H) -> Result<Self, DocError> {
        let model = nodeset_xml::load(source)?;
        let registry = NodeRegistry::new(model)?;
        Ok(Self::new(registry, host))
    }

    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Document the node with id `node_id` in `docname`.
    ///
    /// The entry is registered with the host before rendering, so it can be
    /// linked to; the rendered fragment is emitted and also returned.
    pub fn document_node(
        &mut self,
        docname: &str,
        node_id: &str,
        options: &RenderOptions,
    ) -> Result<String, DocError> {
        let node = self.registry.require_by_id(node_id)?;
        self.host.register(ObjectEntry::for_node(node, docname));
        let text = render_entry(&self.registry, &self.host, node, options);
        if !text.is_empty() {
            self.host.emit(docname, text.clone());
        }
        Ok(text)
    }

    /// Like [`DocBuilder::document_node`], looking the node up by browse name.
    pub fn document_by_name(
        &mut self,
        docname: &str,
        browse_name: &str,
        node_type: NodeType,
        options: &RenderOptions,
    ) -> Result<String, DocError> {
        let node_id = self
            .registry
            .require_by_browse_name(browse_name, node_type)?
            .node_id
            .clone();
        self.document_node(docname, &node_id, options)
    }

    /// Register every node of the given types under its per-type document
    /// without rendering anything.
    pub fn register_all(&mut self, node_types: &[NodeType]) -> usize {
        let mut count = 0;
        for node in self
            .registry
            .nodes()
            .iter()
            .filter(|node| node_types.contains(&node.node_type))
        {
            self.host
                .register(ObjectEntry::for_node(node, docname_for(node.node_type)));
            count += 1;
        }
        count
    }

    /// Document every node of the given types, one document per type.
    ///
    /// All nodes are registered before any is rendered so links resolve
    /// regardless of file order.
    pub fn build(
        &mut self,
        node_types: &[NodeType],
        options: &RenderOptions,
    ) -> Result<BuildStats, DocError> {
        self.register_all(node_types);
        let selected: Vec<_> = self
            .registry
            .nodes()
            .iter()
            .filter(|node| node_types.contains(&node.node_type))
            .collect();

        let mut stats = BuildStats::default();
        for node_type in NodeType::ALL {
            if !node_types.contains(&node_type) {
                continue;
            }
            let nodes: Vec<_> = selected
                .iter()
                .filter(|node| node.node_type == node_type)
                .collect();
            if nodes.is_empty() {
                continue;
            }
            let docname = docname_for(node_type);
            let title = format!("{} nodes", node_type.node_class());
            let rule = "#".repeat(title.len());
            self.host.emit(docname, format!("{rule}\n{title}\n{rule}\n"));
            stats.documents += 1;
            for node in nodes {
                let text = render_entry(&self.registry, &self.host, node, options);
                if !text.is_empty() {
                    self.host.emit(docname, text);
                }
                stats.entries += 1;
            }
            debug!(docname, "rendered document");
        }
        info!(
            entries = stats.entries,
            documents = stats.documents,
            "documentation build finished"
        );
        Ok(stats)
    }
}

impl DocBuilder<Domain> {
    /// Render both index pages and emit them into the domain.
    pub fn emit_indices(&mut self) -> usize {
        let pages = [
            (
                VARIABLE_INDEX,
                index::variable_index(self.host.objects()),
            ),
            (
                REFERENCE_INDEX,
                index::reference_index(self.host.objects()),
            ),
        ];
        for (spec, groups) in &pages {
            let text = index::render_index(*spec, groups);
            self.host.emit(&format!("genindex-{}", spec.name), text);
        }
        pages.len()
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
            </Aliases>
            <UAObjectType NodeId="ns=1;i=1000" BrowseName="1:PumpType">
                <References>
                    <Reference ReferenceType="HasSubtype" IsForward="false">i=58</Reference>
                    <Reference ReferenceType="HasComponent">ns=1;i=1001</Reference>
                    <Reference ReferenceType="HasProperty">ns=1;i=1002</Reference>
                    <Reference ReferenceType="HasCause">ns=1;i=1003</Reference>
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

    fn builder() -> DocBuilder<Domain> {
        DocBuilder::new(build_registry(), Domain::new())
    }

    #[test]
    fn document_single_node() {
        let mut builder = builder();
        let text = builder
            .document_node("pumps", "ns=1;i=2000", &RenderOptions::default())
            .expect("document pump");
        assert!(text.starts_with(".. _ns-1-i-2000:"));
        assert_eq!(builder.host().objects().len(), 1);
        assert_eq!(builder.host().document("pumps").as_deref(), Some(text.as_str()));
    }

    #[test]
    fn missing_node_fails_entry() {
        let mut builder = builder();
        let err = builder
            .document_node("pumps", "ns=1;i=4242", &RenderOptions::default())
            .unwrap_err();
        assert!(matches!(err, DocError::Registry(RegistryError::NodeNotFound(id)) if id == "ns=1;i=4242"));
        let err = builder
            .document_by_name("pumps", "Ghost", NodeType::Object, &RenderOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("Ghost"));
        assert!(builder.host().docnames().next().is_none());
    }

    #[test]
    fn document_by_browse_name() {
        let mut builder = builder();
        builder
            .document_by_name("types", "PumpType", NodeType::ObjectType, &RenderOptions::default())
            .expect("document type");
        assert_eq!(builder.host().objects()[0].node_id, "ns=1;i=1000");
    }

    #[test]
    fn external_entries_register_without_output() {
        let mut builder = builder();
        let external = RenderOptions {
            external: true,
            ..RenderOptions::default()
        };
        let text = builder
            .document_node("elsewhere", "ns=1;i=1001", &external)
            .expect("external");
        assert!(text.is_empty());
        assert!(builder.host().document("elsewhere").is_none());
        assert!(builder.host().resolve_xref("ns=1;i=1001").is_some());
    }

    #[test]
    fn full_build_links_forward_references() {
        let mut builder = builder();
        let stats = builder
            .build(&NodeType::ALL, &RenderOptions::default())
            .expect("build");
        assert_eq!(stats.entries, 6);
        assert_eq!(stats.documents, 4);
        assert_eq!(builder.emit_indices(), 2);

        let domain = builder.into_host();
        let names: Vec<_> = domain.docnames().collect();
        assert_eq!(
            names,
            [
                "objects",
                "variables",
                "methods",
                "objecttypes",
                "genindex-uavariable",
                "genindex-uareference"
            ]
        );
        // Pump1 precedes its child folder in the object document but still links to it.
        let objects = domain.document("objects").expect("objects doc");
        assert!(objects.starts_with("############\nObject nodes\n############\n"));
        assert!(objects.contains(":ref:`1:Pump1 <ns-1-i-2001>`"));
        // The type definition target is a documented object type.
        assert!(objects.contains(":ref:`PumpKind <ns-1-i-1000>`"));
    }

    #[test]
    fn import_rejects_servers_and_missing_files() {
        let err = DocBuilder::import(&ImportSource::parse("opc.tcp://plc:4840"), Domain::new())
            .unwrap_err();
        assert!(matches!(err, DocError::Xml(XmlError::Unsupported(_))));
        let err = DocBuilder::import(&ImportSource::parse("/no/such/model.xml"), Domain::new())
            .unwrap_err();
        assert!(err.to_string().contains("/no/such/model.xml"));
    }
}
