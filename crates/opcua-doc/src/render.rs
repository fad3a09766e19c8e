//! reStructuredText and JSON rendering of documentation entries.

use std::fmt::Write as _;
use std::str::FromStr;

use nodeset_core::{HierarchicalRow, NodeRegistry, NonHierarchicalRow, ReferenceTables};
use nodeset_xml::{DefinitionField, NodeDecl, NodeType};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::host::DocumentHost;
use crate::DocError;

// Data type of variables that declare none.
const BASE_DATA_TYPE: &str = "i=24";

/// Entry layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Layout {
    /// Attributes, definition fields and both reference tables.
    #[default]
    Clean,
    /// Attribute table only.
    Compact,
}

impl FromStr for Layout {
    type Err = DocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "clean" => Ok(Layout::Clean),
            "compact" => Ok(Layout::Compact),
            other => Err(DocError::Layout(other.to_string())),
        }
    }
}

/// Per-entry options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit only the link target, no content.
    pub hide: bool,
    /// Extra class wrapped around the entry tables.
    pub style: Option<String>,
    pub layout: Layout,
    /// Register for cross-references only; nothing is emitted.
    pub external: bool,
}

/// Structured form of an entry, for machine consumption.
#[derive(Debug, Clone, Serialize)]
pub struct NodeEntry<'a> {
    pub node_id: &'a str,
    pub node_type: NodeType,
    pub node_class: &'static str,
    pub browse_name: &'a str,
    pub display_name: &'a str,
    pub description: Option<&'a str>,
    pub data_type: Option<String>,
    pub value_rank: i32,
    pub array_dimensions: Option<&'a str>,
    pub parent_id: Option<&'a str>,
    pub anchor: String,
    pub definition: &'a [DefinitionField],
    pub references: ReferenceTables,
}

/// Link target name for a node id: `ns=1;i=5001` becomes `ns-1-i-5001`.
///
/// Numeric ids map one to one. Any other id is folded to lower-case
/// alphanumerics and gets a `-h<digest>` suffix taken from the raw id, so
/// ids differing only in case or punctuation get distinct anchors.
pub fn anchor_for(node_id: &str) -> String {
    let mut anchor = String::with_capacity(node_id.len() + 10);
    for c in node_id.chars() {
        if c.is_ascii_alphanumeric() {
            anchor.push(c.to_ascii_lowercase());
        } else if !anchor.ends_with('-') {
            anchor.push('-');
        }
    }
    let mut anchor = anchor.trim_matches('-').to_string();
    if !is_numeric_id(node_id) {
        let digest = Sha256::digest(node_id.as_bytes());
        if !anchor.is_empty() {
            anchor.push('-');
        }
        anchor.push('h');
        anchor.push_str(&hex::encode(&digest[..4]));
    }
    anchor
}

// `i=<digits>` with an optional `ns=<digits>;` prefix.
fn is_numeric_id(node_id: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let rest = match node_id.strip_prefix("ns=") {
        Some(qualified) => match qualified.split_once(';') {
            Some((ns, rest)) if all_digits(ns) => rest,
            _ => return false,
        },
        None => node_id,
    };
    rest.strip_prefix("i=").is_some_and(all_digits)
}

/// Document a node type is collected into by a full build.
pub fn docname_for(node_type: NodeType) -> &'static str {
    match node_type {
        NodeType::Object => "objects",
        NodeType::Variable => "variables",
        NodeType::Method => "methods",
        NodeType::ObjectType => "objecttypes",
        NodeType::VariableType => "variabletypes",
        NodeType::ReferenceType => "referencetypes",
        NodeType::DataType => "datatypes",
        NodeType::View => "views",
    }
}

/// Collect the structured entry for `node`.
pub fn node_entry<'a>(registry: &NodeRegistry, node: &'a NodeDecl) -> NodeEntry<'a> {
    NodeEntry {
        node_id: &node.node_id,
        node_type: node.node_type,
        node_class: node.node_class(),
        browse_name: &node.browse_name,
        display_name: &node.display_name,
        description: node.description.as_deref(),
        data_type: node
            .data_type
            .as_deref()
            .map(|data_type| registry.resolve_data_type(data_type)),
        value_rank: node.value_rank,
        array_dimensions: node.array_dimensions.as_deref(),
        parent_id: node.parent_id.as_deref(),
        anchor: anchor_for(&node.node_id),
        definition: &node.definition,
        references: registry.classify_references(node),
    }
}

/// Render `node` as a reStructuredText fragment.
///
/// Names of nodes the host knows about become `:ref:` links; everything else
/// is plain text.
pub fn render_entry(
    registry: &NodeRegistry,
    host: &dyn DocumentHost,
    node: &NodeDecl,
    options: &RenderOptions,
) -> String {
    if options.external {
        return String::new();
    }
    let entry = node_entry(registry, node);
    let mut out = String::new();
    let _ = writeln!(out, ".. _{}:\n", entry.anchor);
    if options.hide {
        return out;
    }

    let title = escape(entry.display_name);
    let _ = writeln!(out, "{title}\n{}\n", "=".repeat(title.chars().count()));

    let indent = match &options.style {
        Some(style) => {
            let _ = writeln!(out, ".. container:: {style}\n");
            "   "
        }
        None => "",
    };

    let mut body = String::new();
    write_attributes(&mut body, registry, host, node, &entry);
    if options.layout == Layout::Clean {
        write_definition(&mut body, registry, host, &node.definition);
        write_hierarchical(&mut body, host, &entry.references.hierarchical);
        write_non_hierarchical(&mut body, host, &entry.references.non_hierarchical);
    }
    for line in body.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            let _ = writeln!(out, "{indent}{line}");
        }
    }
    out
}

fn write_attributes(
    out: &mut String,
    registry: &NodeRegistry,
    host: &dyn DocumentHost,
    node: &NodeDecl,
    entry: &NodeEntry<'_>,
) {
    let mut rows: Vec<[String; 2]> = vec![
        ["NodeId".into(), format!("``{}``", node.node_id)],
        ["NodeClass".into(), entry.node_class.into()],
        ["BrowseName".into(), escape(&node.browse_name)],
        ["DisplayName".into(), escape(&node.display_name)],
        [
            "Description".into(),
            node.description.as_deref().map(escape).unwrap_or_default(),
        ],
    ];
    let has_value = matches!(node.node_type, NodeType::Variable | NodeType::VariableType);
    match node.data_type.as_deref() {
        Some(data_type) => {
            rows.push(["DataType".into(), data_type_cell(registry, host, data_type)]);
            rows.push(["ValueRank".into(), node.value_rank.to_string()]);
        }
        None if has_value => {
            rows.push(["DataType".into(), data_type_cell(registry, host, BASE_DATA_TYPE)]);
            rows.push(["ValueRank".into(), node.value_rank.to_string()]);
        }
        None => {}
    }
    if let Some(dimensions) = node.array_dimensions.as_deref() {
        rows.push(["ArrayDimensions".into(), escape(dimensions)]);
    }
    if let Some(parent) = node.parent_id.as_deref() {
        let name = registry.resolve_target_name(parent);
        rows.push(["Parent".into(), link(host, parent, name)]);
    }
    if matches!(
        node.node_type,
        NodeType::ObjectType | NodeType::VariableType | NodeType::ReferenceType | NodeType::DataType
    ) {
        rows.push(["IsAbstract".into(), node.is_abstract.to_string()]);
    }
    if let Some(inverse) = node.inverse_name.as_deref() {
        rows.push(["InverseName".into(), escape(inverse)]);
    }
    write_table(out, "Attributes", &["Attribute", "Value"], rows);
}

fn write_definition(
    out: &mut String,
    registry: &NodeRegistry,
    host: &dyn DocumentHost,
    fields: &[DefinitionField],
) {
    if fields.is_empty() {
        return;
    }
    let rows = fields
        .iter()
        .map(|field| {
            [
                escape(&field.name),
                field.value.map(|value| value.to_string()).unwrap_or_default(),
                field
                    .data_type
                    .as_deref()
                    .map(|data_type| data_type_cell(registry, host, data_type))
                    .unwrap_or_default(),
                field.description.as_deref().map(escape).unwrap_or_default(),
            ]
        })
        .collect();
    write_table(
        out,
        "Definition",
        &["Name", "Value", "DataType", "Description"],
        rows,
    );
}

fn write_hierarchical(out: &mut String, host: &dyn DocumentHost, rows: &[HierarchicalRow]) {
    if rows.is_empty() {
        return;
    }
    let rows = rows
        .iter()
        .map(|row| {
            let name = row.browse_name.as_deref().unwrap_or(&row.target_name);
            [
                row.reference_type.to_string(),
                row.forward.to_string(),
                row.node_class.unwrap_or_default().to_string(),
                link(host, &row.target_id, name),
                row.data_type.as_deref().map(escape).unwrap_or_default(),
                row.type_definition.as_deref().map(escape).unwrap_or_default(),
                row.modelling_rule.as_deref().map(escape).unwrap_or_default(),
            ]
        })
        .collect();
    write_table(
        out,
        "Hierarchical references",
        &[
            "ReferenceType",
            "Forward",
            "NodeClass",
            "BrowseName",
            "DataType",
            "TypeDefinition",
            "ModellingRule",
        ],
        rows,
    );
}

fn write_non_hierarchical(out: &mut String, host: &dyn DocumentHost, rows: &[NonHierarchicalRow]) {
    if rows.is_empty() {
        return;
    }
    let rows = rows
        .iter()
        .map(|row| {
            [
                row.reference_type.to_string(),
                row.forward.to_string(),
                link(host, &row.target_id, &row.target_name),
                format!("``{}``", row.target_id),
            ]
        })
        .collect();
    write_table(
        out,
        "Non-hierarchical references",
        &["ReferenceType", "Forward", "TargetName", "TargetId"],
        rows,
    );
}

fn write_table<const N: usize>(out: &mut String, caption: &str, header: &[&str; N], rows: Vec<[String; N]>) {
    let _ = writeln!(out, ".. list-table:: {caption}\n   :header-rows: 1\n");
    let header = header.map(str::to_string);
    for row in std::iter::once(header).chain(rows) {
        for (idx, cell) in row.iter().enumerate() {
            let bullet = if idx == 0 { "   * - " } else { "     - " };
            let _ = writeln!(out, "{bullet}{}", cell_text(cell));
        }
    }
    out.push('\n');
}

fn data_type_cell(registry: &NodeRegistry, host: &dyn DocumentHost, data_type: &str) -> String {
    let name = registry.resolve_data_type(data_type);
    link(host, data_type, &name)
}

fn link(host: &dyn DocumentHost, node_id: &str, text: &str) -> String {
    match host.resolve_xref(node_id) {
        Some(target) => format!(":ref:`{} <{}>`", escape_ref(text), target.anchor),
        None => escape(text),
    }
}

fn cell_text(cell: &str) -> String {
    cell.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '`' | '|' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

pub(crate) fn escape_ref(text: &str) -> String {
    text.replace('<', "\\<").replace('`', "\\`")
}
