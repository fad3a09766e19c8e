//! Index pages over the registered objects.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use nodeset_xml::NodeType;
use serde::Serialize;

use crate::host::ObjectEntry;
use crate::render::escape_ref;

/// Name and title of an index page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSpec {
    pub name: &'static str,
    pub title: &'static str,
}

/// Every registered object, grouped by initial.
pub const VARIABLE_INDEX: IndexSpec = IndexSpec {
    name: "uavariable",
    title: "UAVariable Index",
};

/// Registered objects grouped by the reference types they declare.
pub const REFERENCE_INDEX: IndexSpec = IndexSpec {
    name: "uareference",
    title: "UAReference Index",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub name: String,
    pub node_type: NodeType,
    pub docname: String,
    pub anchor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexGroup {
    pub key: String,
    pub entries: Vec<IndexEntry>,
}

impl From<&ObjectEntry> for IndexEntry {
    fn from(object: &ObjectEntry) -> Self {
        IndexEntry {
            name: object.display_name.clone(),
            node_type: object.node_type,
            docname: object.docname.clone(),
            anchor: object.anchor.clone(),
        }
    }
}

/// Group objects by the lower-cased first character of their display name.
pub fn variable_index(objects: &[ObjectEntry]) -> Vec<IndexGroup> {
    let mut groups: BTreeMap<String, Vec<IndexEntry>> = BTreeMap::new();
    for object in objects {
        let key = object
            .display_name
            .chars()
            .next()
            .map(|c| c.to_lowercase().collect::<String>())
            .unwrap_or_else(|| "_".to_string());
        groups.entry(key).or_default().push(object.into());
    }
    into_groups(groups)
}

/// Group objects under every reference type they declare.
pub fn reference_index(objects: &[ObjectEntry]) -> Vec<IndexGroup> {
    let mut groups: BTreeMap<String, Vec<IndexEntry>> = BTreeMap::new();
    for object in objects {
        for reference in &object.references {
            groups
                .entry(reference.to_string())
                .or_default()
                .push(object.into());
        }
    }
    into_groups(groups)
}

fn into_groups(groups: BTreeMap<String, Vec<IndexEntry>>) -> Vec<IndexGroup> {
    groups
        .into_iter()
        .map(|(key, entries)| IndexGroup { key, entries })
        .collect()
}

/// Render an index page as reStructuredText.
pub fn render_index(spec: IndexSpec, groups: &[IndexGroup]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, ".. _{}:\n", spec.name);
    let _ = writeln!(out, "{}\n{}\n", spec.title, "=".repeat(spec.title.len()));
    for group in groups {
        let _ = writeln!(out, "{}\n{}\n", group.key, "-".repeat(group.key.chars().count()));
        for entry in &group.entries {
            let _ = writeln!(
                out,
                "* :ref:`{} <{}>` ({})",
                escape_ref(&entry.name),
                entry.anchor,
                entry.node_type
            );
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ObjectEntry;
    use crate::tests::build_registry;

    fn objects() -> Vec<ObjectEntry> {
        let registry = build_registry();
        registry
            .nodes()
            .iter()
            .map(|node| ObjectEntry::for_node(node, "all"))
            .collect()
    }

    #[test]
    fn variable_index_groups_by_initial() {
        let groups = variable_index(&objects());
        let keys: Vec<_> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, ["m", "p", "s"]);
        let p: Vec<_> = groups[1].entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(p, ["PumpType", "Pump1", "Pump1"]);
    }

    #[test]
    fn reference_index_groups_by_type() {
        let groups = reference_index(&objects());
        let keys: Vec<_> = groups.iter().map(|g| g.key.as_str()).collect();
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
        let modelling = groups
            .iter()
            .find(|g| g.key == "HasModellingRule")
            .expect("modelling rule group");
        let names: Vec<_> = modelling.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Speed", "Model", "Pump1"]);
        assert!(groups.iter().any(|g| g.key == "HasCause"));
    }

    #[test]
    fn render_index_escapes_names() {
        let groups = vec![IndexGroup {
            key: "f".into(),
            entries: vec![IndexEntry {
                name: "Flow <in> `raw`".into(),
                node_type: NodeType::Variable,
                docname: "variables".into(),
                anchor: "ns-1-i-9".into(),
            }],
        }];
        let text = render_index(VARIABLE_INDEX, &groups);
        assert!(text.contains("* :ref:`Flow \\<in> \\`raw\\` <ns-1-i-9>` (UAVariable)\n"));
    }

    #[test]
    fn render_index_page() {
        let text = render_index(VARIABLE_INDEX, &variable_index(&objects()));
        assert!(text.starts_with(".. _uavariable:\n\nUAVariable Index\n================\n"));
        assert!(text.contains("s\n-\n\n* :ref:`Speed <ns-1-i-1001>` (UAVariable)\n"));
    }
}
