//! Target name resolution and reference classification.

use nodeset_xml::{NodeDecl, ReferenceType};
use serde::Serialize;

use crate::NodeRegistry;

/// Where a hierarchical row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowOrigin {
    /// A reference declared on the node itself.
    Own,
    /// A reference declared on a child, seen from the parent.
    Child,
}

/// One row of the hierarchical references table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchicalRow {
    pub origin: RowOrigin,
    pub reference_type: ReferenceType,
    pub forward: bool,
    /// Node id the row points at: the reference target for own rows, the
    /// child for child rows.
    pub target_id: String,
    pub target_name: String,
    pub node_class: Option<&'static str>,
    pub browse_name: Option<String>,
    pub type_definition: Option<String>,
    pub modelling_rule: Option<String>,
    pub data_type: Option<String>,
}

/// One row of the non-hierarchical references table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NonHierarchicalRow {
    pub reference_type: ReferenceType,
    pub forward: bool,
    pub target_name: String,
    pub target_id: String,
}

/// Classified references of a single node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceTables {
    pub hierarchical: Vec<HierarchicalRow>,
    pub non_hierarchical: Vec<NonHierarchicalRow>,
}

/// Whether a data type attribute is a node id rather than an alias name.
pub fn looks_symbolic(value: &str) -> bool {
    ["i=", "ns=", "s=", "g=", "b="]
        .iter()
        .any(|prefix| value.starts_with(prefix))
}

fn is_own_hierarchical(kind: &ReferenceType) -> bool {
    matches!(
        kind,
        ReferenceType::HasSubtype | ReferenceType::Organizes | ReferenceType::HasComponent
    )
}

fn is_child_hierarchical(kind: &ReferenceType) -> bool {
    matches!(kind, ReferenceType::HasComponent | ReferenceType::HasProperty)
}

fn is_non_hierarchical(kind: &ReferenceType) -> bool {
    matches!(
        kind,
        ReferenceType::HasModellingRule | ReferenceType::HasTypeDefinition
    )
}

#[derive(Default)]
struct Annotations {
    type_definition: Option<String>,
    modelling_rule: Option<String>,
    data_type: Option<String>,
}

impl NodeRegistry {
    /// Turn a reference target token into a readable name.
    ///
    /// Well-known `i=` ids win over aliases, aliases over node browse names.
    /// Unresolvable tokens come back unchanged.
    pub fn resolve_target_name<'a>(&'a self, token: &'a str) -> &'a str {
        if let Some(name) = opcua_ids::lookup_token(token) {
            return name;
        }
        if let Some(alias) = self.aliases.iter().find(|alias| alias.target == token) {
            return &alias.name;
        }
        if let Some(node) = self.find_by_id(token) {
            return &node.browse_name;
        }
        token
    }

    /// Resolve a data type attribute when it is written as a node id.
    pub fn resolve_data_type(&self, data_type: &str) -> String {
        if looks_symbolic(data_type) {
            self.resolve_target_name(data_type).to_string()
        } else {
            data_type.to_string()
        }
    }

    /// Split the references around `node` into hierarchical and
    /// non-hierarchical tables.
    ///
    /// Child rows carry the inverted forward flag of the child's own
    /// reference. Reference types outside the recognised sets are dropped.
    pub fn classify_references(&self, node: &NodeDecl) -> ReferenceTables {
        let mut tables = ReferenceTables::default();

        for reference in &node.references {
            if is_own_hierarchical(&reference.reference_type) {
                let target = self.find_by_id(&reference.target);
                let notes = target
                    .map(|target| self.annotations(target))
                    .unwrap_or_default();
                tables.hierarchical.push(HierarchicalRow {
                    origin: RowOrigin::Own,
                    reference_type: reference.reference_type.clone(),
                    forward: reference.forward,
                    target_id: reference.target.clone(),
                    target_name: self.resolve_target_name(&reference.target).to_string(),
                    node_class: target.map(NodeDecl::node_class),
                    browse_name: target.map(|target| target.browse_name.clone()),
                    type_definition: notes.type_definition,
                    modelling_rule: notes.modelling_rule,
                    data_type: notes.data_type,
                });
            } else if is_non_hierarchical(&reference.reference_type) {
                tables.non_hierarchical.push(NonHierarchicalRow {
                    reference_type: reference.reference_type.clone(),
                    forward: reference.forward,
                    target_name: self.resolve_target_name(&reference.target).to_string(),
                    target_id: reference.target.clone(),
                });
            }
        }

        for child in self.find_children(&node.node_id) {
            let notes = self.annotations(child);
            for reference in child
                .references
                .iter()
                .filter(|reference| is_child_hierarchical(&reference.reference_type))
            {
                tables.hierarchical.push(HierarchicalRow {
                    origin: RowOrigin::Child,
                    reference_type: reference.reference_type.clone(),
                    forward: !reference.forward,
                    target_id: child.node_id.clone(),
                    target_name: child.browse_name.clone(),
                    node_class: Some(child.node_class()),
                    browse_name: Some(child.browse_name.clone()),
                    type_definition: notes.type_definition.clone(),
                    modelling_rule: notes.modelling_rule.clone(),
                    data_type: notes.data_type.clone(),
                });
            }
        }

        tables
    }

    fn annotations(&self, node: &NodeDecl) -> Annotations {
        let mut notes = Annotations {
            data_type: node
                .data_type
                .as_deref()
                .map(|data_type| self.resolve_data_type(data_type)),
            ..Annotations::default()
        };
        for reference in &node.references {
            match reference.reference_type {
                ReferenceType::HasModellingRule => {
                    let name = self.resolve_target_name(&reference.target);
                    notes.modelling_rule = Some(opcua_ids::strip_modelling_rule(name).to_string());
                }
                ReferenceType::HasTypeDefinition => {
                    let name = self.resolve_target_name(&reference.target);
                    notes.type_definition = Some(name.to_string());
                }
                _ => {}
            }
        }
        notes
    }
}
