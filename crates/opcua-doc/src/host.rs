//! Boundary towards the documentation host.

use nodeset_xml::{NodeDecl, NodeType, ReferenceType};
use serde::Serialize;
use tracing::debug;

use crate::render::anchor_for;

/// Page and anchor a node is documented at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XrefTarget {
    pub docname: String,
    pub anchor: String,
}

/// A documented node as known to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectEntry {
    /// Browse name.
    pub name: String,
    pub display_name: String,
    pub node_type: NodeType,
    pub node_id: String,
    pub docname: String,
    pub anchor: String,
    /// Distinct reference types the node declares, in first-seen order.
    pub references: Vec<ReferenceType>,
}

impl ObjectEntry {
    pub fn for_node(node: &NodeDecl, docname: &str) -> Self {
        let mut references: Vec<ReferenceType> = Vec::new();
        for reference in &node.references {
            if !references.contains(&reference.reference_type) {
                references.push(reference.reference_type.clone());
            }
        }
        ObjectEntry {
            name: node.browse_name.clone(),
            display_name: node.display_name.clone(),
            node_type: node.node_type,
            node_id: node.node_id.clone(),
            docname: docname.to_string(),
            anchor: anchor_for(&node.node_id),
            references,
        }
    }
}

/// Services the documentation host provides to the renderer.
pub trait DocumentHost {
    /// Register a content block for a node.
    fn register(&mut self, entry: ObjectEntry);
    /// Resolve a cross-reference target to where the node is documented.
    fn resolve_xref(&self, target: &str) -> Option<XrefTarget>;
    /// Emit a documentation fragment into a document.
    fn emit(&mut self, docname: &str, fragment: String);
}

/// In-memory host: object registry plus emitted documents.
#[derive(Debug, Default)]
pub struct Domain {
    objects: Vec<ObjectEntry>,
    documents: Vec<(String, Vec<String>)>,
}

impl Domain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered objects in registration order.
    pub fn objects(&self) -> &[ObjectEntry] {
        &self.objects
    }

    /// Names of the documents that received fragments, in first-emit order.
    pub fn docnames(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|(name, _)| name.as_str())
    }

    /// Emitted fragments per document, in first-emit order.
    pub fn documents(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.documents
            .iter()
            .map(|(name, fragments)| (name.as_str(), fragments.as_slice()))
    }

    /// Concatenated content of a document.
    pub fn document(&self, docname: &str) -> Option<String> {
        self.documents
            .iter()
            .find(|(name, _)| name == docname)
            .map(|(_, fragments)| fragments.join("\n"))
    }
}

impl DocumentHost for Domain {
    /// Re-registering a node id replaces the earlier entry.
    fn register(&mut self, entry: ObjectEntry) {
        match self
            .objects
            .iter_mut()
            .find(|existing| existing.node_id == entry.node_id)
        {
            Some(existing) => *existing = entry,
            None => self.objects.push(entry),
        }
    }

    fn resolve_xref(&self, target: &str) -> Option<XrefTarget> {
        let found = self
            .objects
            .iter()
            .find(|object| object.display_name == target)
            .or_else(|| self.objects.iter().find(|object| object.node_id == target));
        match found {
            Some(object) => Some(XrefTarget {
                docname: object.docname.clone(),
                anchor: object.anchor.clone(),
            }),
            None => {
                debug!(target, "no documented node for cross-reference");
                None
            }
        }
    }

    fn emit(&mut self, docname: &str, fragment: String) {
        match self.documents.iter_mut().find(|(name, _)| name == docname) {
            Some((_, fragments)) => fragments.push(fragment),
            None => self.documents.push((docname.to_string(), vec![fragment])),
        }
    }
}
