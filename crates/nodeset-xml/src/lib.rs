//! Load and parse OPC UA nodeset XML using quick-xml.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Reader;
use thiserror::Error;
use tracing::{debug, info, warn};

mod source;

pub use source::ImportSource;

#[derive(Debug, Error)]
pub enum XmlError {
    #[error("xml: {0}")]
    Xml(String),
    #[error("invalid nodeset: {0}")]
    Invalid(String),
    #[error("could not load nodeset file {}", .0.display())]
    NotFound(PathBuf),
    #[error("io: {0}")]
    Io(String),
    #[error("unsupported source: {0}")]
    Unsupported(String),
}

/// Element names of the node kinds defined by the nodeset schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Object,
    Variable,
    Method,
    ObjectType,
    VariableType,
    ReferenceType,
    DataType,
    View,
}

impl NodeType {
    pub const ALL: [NodeType; 8] = [
        NodeType::Object,
        NodeType::Variable,
        NodeType::Method,
        NodeType::ObjectType,
        NodeType::VariableType,
        NodeType::ReferenceType,
        NodeType::DataType,
        NodeType::View,
    ];

    fn from_tag(tag: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().as_bytes() == tag)
    }

    /// XML element name, e.g. `UAVariable`.
    pub const fn tag(self) -> &'static str {
        match self {
            NodeType::Object => "UAObject",
            NodeType::Variable => "UAVariable",
            NodeType::Method => "UAMethod",
            NodeType::ObjectType => "UAObjectType",
            NodeType::VariableType => "UAVariableType",
            NodeType::ReferenceType => "UAReferenceType",
            NodeType::DataType => "UADataType",
            NodeType::View => "UAView",
        }
    }

    /// OPC UA node class name, e.g. `Variable`.
    pub const fn node_class(self) -> &'static str {
        match self {
            NodeType::Object => "Object",
            NodeType::Variable => "Variable",
            NodeType::Method => "Method",
            NodeType::ObjectType => "ObjectType",
            NodeType::VariableType => "VariableType",
            NodeType::ReferenceType => "ReferenceType",
            NodeType::DataType => "DataType",
            NodeType::View => "View",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

impl FromStr for NodeType {
    type Err = XmlError;

    /// Accepts either the element name (`UAObject`) or the node class
    /// (`Object`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == s || kind.node_class() == s)
            .ok_or_else(|| XmlError::Invalid(format!("unknown node type '{s}'")))
    }
}

/// Reference type of a `<Reference>` element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReferenceType {
    HasSubtype,
    Organizes,
    HasComponent,
    HasProperty,
    HasTypeDefinition,
    HasModellingRule,
    HasEncoding,
    HasDescription,
    GeneratesEvent,
    HasEventSource,
    HasNotifier,
    HasOrderedComponent,
    HasInterface,
    HasAddIn,
    /// Any reference type without a dedicated variant, kept verbatim.
    Other(String),
}

impl ReferenceType {
    pub fn from_name(name: &str) -> Self {
        match name {
            "HasSubtype" => ReferenceType::HasSubtype,
            "Organizes" => ReferenceType::Organizes,
            "HasComponent" => ReferenceType::HasComponent,
            "HasProperty" => ReferenceType::HasProperty,
            "HasTypeDefinition" => ReferenceType::HasTypeDefinition,
            "HasModellingRule" => ReferenceType::HasModellingRule,
            "HasEncoding" => ReferenceType::HasEncoding,
            "HasDescription" => ReferenceType::HasDescription,
            "GeneratesEvent" => ReferenceType::GeneratesEvent,
            "HasEventSource" => ReferenceType::HasEventSource,
            "HasNotifier" => ReferenceType::HasNotifier,
            "HasOrderedComponent" => ReferenceType::HasOrderedComponent,
            "HasInterface" => ReferenceType::HasInterface,
            "HasAddIn" => ReferenceType::HasAddIn,
            other => ReferenceType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ReferenceType::HasSubtype => "HasSubtype",
            ReferenceType::Organizes => "Organizes",
            ReferenceType::HasComponent => "HasComponent",
            ReferenceType::HasProperty => "HasProperty",
            ReferenceType::HasTypeDefinition => "HasTypeDefinition",
            ReferenceType::HasModellingRule => "HasModellingRule",
            ReferenceType::HasEncoding => "HasEncoding",
            ReferenceType::HasDescription => "HasDescription",
            ReferenceType::GeneratesEvent => "GeneratesEvent",
            ReferenceType::HasEventSource => "HasEventSource",
            ReferenceType::HasNotifier => "HasNotifier",
            ReferenceType::HasOrderedComponent => "HasOrderedComponent",
            ReferenceType::HasInterface => "HasInterface",
            ReferenceType::HasAddIn => "HasAddIn",
            ReferenceType::Other(name) => name,
        }
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ReferenceType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NodeType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

/// A single `<Reference>` owned by a node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Reference {
    pub reference_type: ReferenceType,
    /// Target token as written: numeric id, alias, or full node id.
    pub target: String,
    pub forward: bool,
}

/// `<Field>` of a data type `<Definition>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DefinitionField {
    pub name: String,
    pub data_type: Option<String>,
    pub value: Option<i64>,
    pub value_rank: Option<i32>,
    pub description: Option<String>,
}

/// Node declaration extracted from the nodeset.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeDecl {
    pub node_type: NodeType,
    pub node_id: String,
    /// Qualified browse name as written, e.g. `1:Pump`.
    pub browse_name: String,
    pub display_name: String,
    pub description: Option<String>,
    pub symbolic_name: Option<String>,
    pub parent_id: Option<String>,
    /// Reference type linking the node to its parent.
    pub parent_link: Option<ReferenceType>,
    pub type_definition: Option<String>,
    pub data_type: Option<String>,
    pub value_rank: i32,
    pub array_dimensions: Option<String>,
    pub is_abstract: bool,
    pub inverse_name: Option<String>,
    pub definition: Vec<DefinitionField>,
    pub references: Vec<Reference>,
}

impl NodeDecl {
    fn new(node_type: NodeType, node_id: String, browse_name: String) -> Self {
        NodeDecl {
            node_type,
            node_id,
            browse_name,
            display_name: String::new(),
            description: None,
            symbolic_name: None,
            parent_id: None,
            parent_link: None,
            type_definition: None,
            data_type: None,
            value_rank: -1,
            array_dimensions: None,
            is_abstract: false,
            inverse_name: None,
            definition: Vec::new(),
            references: Vec::new(),
        }
    }

    /// Browse name without the namespace index prefix.
    pub fn unqualified_name(&self) -> &str {
        unqualified(&self.browse_name)
    }

    pub fn node_class(&self) -> &'static str {
        self.node_type.node_class()
    }
}

/// Alias declared in `<Aliases>`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Alias {
    pub name: String,
    pub target: String,
}

/// Everything a nodeset file declares.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodesetModel {
    pub namespaces: Vec<String>,
    pub aliases: Vec<Alias>,
    pub nodes: Vec<NodeDecl>,
}

/// Strip a `<ns>:` prefix from a qualified name.
pub fn unqualified(name: &str) -> &str {
    match name.split_once(':') {
        Some((prefix, rest)) if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) => {
            rest
        }
        _ => name,
    }
}

/// Read and parse a nodeset file.
pub fn load_nodeset(path: &Path) -> Result<NodesetModel, XmlError> {
    if !path.exists() {
        return Err(XmlError::NotFound(path.to_path_buf()));
    }
    info!(path = %path.display(), "import nodeset");
    let xml = std::fs::read_to_string(path)
        .map_err(|err| XmlError::Io(format!("{}: {err}", path.display())))?;
    parse(&xml)
}

/// Load a nodeset from an import source; live servers are rejected.
pub fn load(source: &ImportSource) -> Result<NodesetModel, XmlError> {
    match source {
        ImportSource::File(path) => load_nodeset(path),
        ImportSource::Server(url) => {
            info!(%url, "browse nodeset");
            Err(XmlError::Unsupported(format!(
                "browsing an OPC UA server is not implemented ({url})"
            )))
        }
    }
}

// Elements whose content never contributes to the model.
const SKIPPED: &[&[u8]] = &[b"Value", b"Extensions", b"Models", b"ServerUris", b"Documentation"];

/// Parse a nodeset document held in memory.
pub fn parse(xml: &str) -> Result<NodesetModel, XmlError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut buf = Vec::new();
    let mut skip_buf = Vec::new();
    let mut state = ParseState::default();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if SKIPPED.contains(&e.local_name().as_ref()) {
                    let name = e.name().as_ref().to_vec();
                    debug!(element = %String::from_utf8_lossy(&name), "skip element");
                    reader
                        .read_to_end_into(QName(&name), &mut skip_buf)
                        .map_err(|err| XmlError::Xml(err.to_string()))?;
                    skip_buf.clear();
                } else {
                    state.start(&e)?;
                }
            }
            Ok(Event::Empty(e)) => {
                if !SKIPPED.contains(&e.local_name().as_ref()) {
                    state.start(&e)?;
                    state.end()?;
                }
            }
            Ok(Event::Text(t)) => {
                let text = t.unescape().map_err(|err| XmlError::Xml(err.to_string()))?;
                state.text.push_str(&text);
            }
            Ok(Event::CData(c)) => {
                let bytes = c.into_inner();
                let text = std::str::from_utf8(&bytes)
                    .map_err(|err| XmlError::Xml(format!("invalid UTF-8 in CDATA: {err}")))?;
                state.text.push_str(text);
            }
            Ok(Event::End(_)) => state.end()?,
            Ok(Event::Eof) => break,
            Err(err) => return Err(XmlError::Xml(err.to_string())),
            _ => {}
        }
        buf.clear();
    }

    if state.current.is_some() {
        return Err(XmlError::Xml("unterminated node element".into()));
    }
    let model = state.model;
    info!(
        nodes = model.nodes.len(),
        aliases = model.aliases.len(),
        namespaces = model.namespaces.len(),
        "parsed nodeset"
    );
    Ok(model)
}

#[derive(Default)]
struct ParseState {
    model: NodesetModel,
    stack: Vec<Vec<u8>>,
    text: String,
    current: Option<NodeDecl>,
    pending_alias: Option<String>,
    pending_reference: Option<Reference>,
    pending_field: Option<DefinitionField>,
}

impl ParseState {
    fn start(&mut self, event: &BytesStart<'_>) -> Result<(), XmlError> {
        let name = event.local_name().as_ref().to_vec();
        self.text.clear();
        match name.as_slice() {
            b"Alias" => {
                self.pending_alias = attribute_value(event, b"Alias")?;
            }
            b"Reference" if self.current.is_some() => {
                let reference_type = attribute_value(event, b"ReferenceType")?
                    .ok_or_else(|| self.invalid("reference without ReferenceType"))?;
                let forward = attribute_value(event, b"IsForward")?
                    .map(|value| !value.eq_ignore_ascii_case("false"))
                    .unwrap_or(true);
                self.pending_reference = Some(Reference {
                    reference_type: ReferenceType::from_name(&reference_type),
                    target: String::new(),
                    forward,
                });
            }
            b"Field" if self.current.is_some() => {
                let value = attribute_value(event, b"Value")?
                    .map(|value| parse_int::<i64>(&value, "Value"))
                    .transpose()?;
                let value_rank = attribute_value(event, b"ValueRank")?
                    .map(|value| parse_int::<i32>(&value, "ValueRank"))
                    .transpose()?;
                self.pending_field = Some(DefinitionField {
                    name: attribute_value(event, b"Name")?.unwrap_or_default(),
                    data_type: attribute_value(event, b"DataType")?,
                    value,
                    value_rank,
                    description: None,
                });
            }
            tag => {
                if let Some(node_type) = NodeType::from_tag(tag) {
                    self.current = Some(node_from_attributes(node_type, event)?);
                }
            }
        }
        self.stack.push(name);
        Ok(())
    }

    fn end(&mut self) -> Result<(), XmlError> {
        let Some(name) = self.stack.pop() else {
            return Err(XmlError::Xml("unbalanced end tag".into()));
        };
        let text = std::mem::take(&mut self.text);
        let in_field = self.pending_field.is_some();
        match name.as_slice() {
            b"Uri" => self.model.namespaces.push(text),
            b"Alias" => {
                match self.pending_alias.take() {
                    Some(alias) => self.model.aliases.push(Alias {
                        name: alias,
                        target: text,
                    }),
                    None => warn!(target = %text, "alias without name skipped"),
                }
            }
            b"Reference" => {
                if let (Some(mut reference), Some(node)) =
                    (self.pending_reference.take(), self.current.as_mut())
                {
                    if text.is_empty() {
                        warn!(node = %node.node_id, "reference without target skipped");
                    } else {
                        reference.target = text;
                        node.references.push(reference);
                    }
                }
            }
            b"Field" => {
                if let (Some(field), Some(node)) = (self.pending_field.take(), self.current.as_mut())
                {
                    node.definition.push(field);
                }
            }
            b"Description" if in_field => {
                if let Some(field) = self.pending_field.as_mut() {
                    field.description.get_or_insert(text);
                }
            }
            b"Description" => {
                if let Some(node) = self.current.as_mut() {
                    node.description.get_or_insert(text);
                }
            }
            b"DisplayName" if !in_field => {
                if let Some(node) = self.current.as_mut() {
                    if node.display_name.is_empty() {
                        node.display_name = text;
                    }
                }
            }
            b"InverseName" => {
                if let Some(node) = self.current.as_mut() {
                    node.inverse_name.get_or_insert(text);
                }
            }
            tag => {
                if NodeType::from_tag(tag).is_some() {
                    if let Some(node) = self.current.take() {
                        self.model.nodes.push(finish_node(node));
                    }
                }
            }
        }
        Ok(())
    }

    fn invalid(&self, msg: &str) -> XmlError {
        let node = self
            .current
            .as_ref()
            .map(|node| node.node_id.as_str())
            .unwrap_or("?");
        XmlError::Invalid(format!("{msg} in node {node}"))
    }
}

fn node_from_attributes(node_type: NodeType, event: &BytesStart<'_>) -> Result<NodeDecl, XmlError> {
    let node_id = attribute_value(event, b"NodeId")?
        .ok_or_else(|| XmlError::Invalid(format!("{node_type} without NodeId")))?;
    let browse_name = attribute_value(event, b"BrowseName")?.unwrap_or_default();
    let mut node = NodeDecl::new(node_type, node_id, browse_name);
    node.parent_id = attribute_value(event, b"ParentNodeId")?;
    node.data_type = attribute_value(event, b"DataType")?;
    node.symbolic_name = attribute_value(event, b"SymbolicName")?;
    node.array_dimensions = attribute_value(event, b"ArrayDimensions")?;
    node.is_abstract = attribute_value(event, b"IsAbstract")?
        .map(|value| value.eq_ignore_ascii_case("true") || value == "1")
        .unwrap_or(false);
    if let Some(rank) = attribute_value(event, b"ValueRank")? {
        node.value_rank = rank.parse().map_err(|err| {
            XmlError::Invalid(format!(
                "invalid ValueRank '{rank}' in node {}: {err}",
                node.node_id
            ))
        })?;
    }
    Ok(node)
}

fn finish_node(mut node: NodeDecl) -> NodeDecl {
    let mut inverse_parent = None;
    for reference in &node.references {
        if reference.reference_type == ReferenceType::HasTypeDefinition {
            node.type_definition = Some(reference.target.clone());
        } else if !reference.forward {
            inverse_parent = Some((reference.target.clone(), reference.reference_type.clone()));
        }
    }
    match &node.parent_id {
        Some(parent) => {
            node.parent_link = node
                .references
                .iter()
                .find(|r| {
                    !r.forward
                        && &r.target == parent
                        && r.reference_type != ReferenceType::HasTypeDefinition
                })
                .map(|r| r.reference_type.clone());
        }
        None => {
            if let Some((target, link)) = inverse_parent {
                node.parent_id = Some(target);
                node.parent_link = Some(link);
            }
        }
    }
    if node.display_name.is_empty() {
        node.display_name = node.unqualified_name().to_string();
    }
    node
}

fn parse_int<T: FromStr>(value: &str, what: &str) -> Result<T, XmlError>
where
    T::Err: fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|err| XmlError::Invalid(format!("invalid {what} '{value}': {err}")))
}

fn attribute_value(event: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>, XmlError> {
    for attr in event.attributes() {
        let attr = attr.map_err(|err| XmlError::Xml(err.to_string()))?;
        if attr.key.as_ref() == name {
            let value = attr
                .unescape_value()
                .map_err(|err| XmlError::Xml(err.to_string()))?;
            let trimmed = value.trim().to_string();
            if trimmed.is_empty() {
                return Ok(None);
            }
            return Ok(Some(trimmed));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
        <UANodeSet xmlns="http://opcfoundation.org/UA/2011/03/UANodeSet.xsd">
            <NamespaceUris>
                <Uri>http://example.com/pumps/</Uri>
            </NamespaceUris>
            <Models>
                <Model ModelUri="http://example.com/pumps/" />
            </Models>
            <Aliases>
                <Alias Alias="Double">i=11</Alias>
                <Alias Alias="HasComponent">i=47</Alias>
            </Aliases>
            <UAObjectType NodeId="ns=1;i=1000" BrowseName="1:PumpType" IsAbstract="true">
                <DisplayName>PumpType</DisplayName>
                <References>
                    <Reference ReferenceType="HasSubtype" IsForward="false">i=58</Reference>
                </References>
            </UAObjectType>
            <UAVariable NodeId="ns=1;i=1001" BrowseName="1:Speed" ParentNodeId="ns=1;i=1000" DataType="Double" ValueRank="1" ArrayDimensions="3">
                <DisplayName>Speed &amp; rate</DisplayName>
                <Description>Rotational speed</Description>
                <References>
                    <Reference ReferenceType="HasTypeDefinition">i=63</Reference>
                    <Reference ReferenceType="HasModellingRule">i=78</Reference>
                    <Reference ReferenceType="HasComponent" IsForward="false">ns=1;i=1000</Reference>
                </References>
                <Value>
                    <ListOfDouble xmlns="http://opcfoundation.org/UA/2008/02/Types.xsd">
                        <Double>1.0</Double>
                    </ListOfDouble>
                </Value>
            </UAVariable>
            <UAObject NodeId="ns=1;i=2000" BrowseName="1:Pump1">
                <References>
                    <Reference ReferenceType="Organizes" IsForward="false">i=85</Reference>
                    <Reference ReferenceType="HasTypeDefinition">ns=1;i=1000</Reference>
                </References>
            </UAObject>
            <UADataType NodeId="ns=1;i=3000" BrowseName="1:PumpMode">
                <DisplayName>PumpMode</DisplayName>
                <Definition Name="1:PumpMode">
                    <Field Name="Off" Value="0">
                        <Description>Stopped</Description>
                    </Field>
                    <Field Name="On" Value="1" />
                </Definition>
            </UADataType>
            <UAReferenceType NodeId="ns=1;i=4000" BrowseName="1:Feeds">
                <InverseName>FedBy</InverseName>
            </UAReferenceType>
        </UANodeSet>
    "#;

    #[test]
    fn parse_fixture_tables() {
        let model = parse(FIXTURE).expect("parse nodeset");
        assert_eq!(model.namespaces, vec!["http://example.com/pumps/".to_string()]);
        assert_eq!(model.aliases.len(), 2);
        assert_eq!(model.aliases[0].name, "Double");
        assert_eq!(model.aliases[0].target, "i=11");
        assert_eq!(model.nodes.len(), 5);
        let ids: Vec<_> = model.nodes.iter().map(|n| n.node_id.as_str()).collect();
        assert_eq!(
            ids,
            ["ns=1;i=1000", "ns=1;i=1001", "ns=1;i=2000", "ns=1;i=3000", "ns=1;i=4000"]
        );
    }

    #[test]
    fn parse_variable_attributes() {
        let model = parse(FIXTURE).expect("parse nodeset");
        let speed = &model.nodes[1];
        assert_eq!(speed.node_type, NodeType::Variable);
        assert_eq!(speed.browse_name, "1:Speed");
        assert_eq!(speed.unqualified_name(), "Speed");
        assert_eq!(speed.display_name, "Speed & rate");
        assert_eq!(speed.description.as_deref(), Some("Rotational speed"));
        assert_eq!(speed.data_type.as_deref(), Some("Double"));
        assert_eq!(speed.value_rank, 1);
        assert_eq!(speed.array_dimensions.as_deref(), Some("3"));
        assert_eq!(speed.parent_id.as_deref(), Some("ns=1;i=1000"));
        assert_eq!(speed.parent_link, Some(ReferenceType::HasComponent));
        assert_eq!(speed.type_definition.as_deref(), Some("i=63"));
        assert_eq!(speed.references.len(), 3);
        assert!(!speed.references[2].forward);
        assert!(speed.references[0].forward);
    }

    #[test]
    fn parent_from_inverse_reference() {
        let model = parse(FIXTURE).expect("parse nodeset");
        let pump = &model.nodes[2];
        assert_eq!(pump.parent_id.as_deref(), Some("i=85"));
        assert_eq!(pump.parent_link, Some(ReferenceType::Organizes));
        assert_eq!(pump.display_name, "Pump1");
        assert_eq!(pump.type_definition.as_deref(), Some("ns=1;i=1000"));
        let pump_type = &model.nodes[0];
        assert!(pump_type.is_abstract);
        assert_eq!(pump_type.parent_link, Some(ReferenceType::HasSubtype));
    }

    #[test]
    fn parse_definition_and_inverse_name() {
        let model = parse(FIXTURE).expect("parse nodeset");
        let mode = &model.nodes[3];
        assert_eq!(mode.definition.len(), 2);
        assert_eq!(mode.definition[0].name, "Off");
        assert_eq!(mode.definition[0].value, Some(0));
        assert_eq!(mode.definition[0].description.as_deref(), Some("Stopped"));
        assert_eq!(mode.description, None);
        assert_eq!(mode.definition[1].value, Some(1));
        assert_eq!(model.nodes[4].inverse_name.as_deref(), Some("FedBy"));
    }

    #[test]
    fn reject_bad_value_rank() {
        let xml = r#"<UANodeSet><UAVariable NodeId="ns=1;i=1" BrowseName="1:X" ValueRank="many"/></UANodeSet>"#;
        let err = parse(xml).unwrap_err();
        assert!(matches!(err, XmlError::Invalid(msg) if msg.contains("ns=1;i=1")));
    }

    #[test]
    fn skip_empty_reference_and_nameless_alias() {
        let xml = r#"<UANodeSet>
            <Aliases><Alias>i=11</Alias></Aliases>
            <UAObject NodeId="ns=1;i=1" BrowseName="1:X">
                <References>
                    <Reference ReferenceType="Organizes" IsForward="false"></Reference>
                    <Reference ReferenceType="HasTypeDefinition">i=58</Reference>
                </References>
            </UAObject>
        </UANodeSet>"#;
        let model = parse(xml).expect("parse");
        assert!(model.aliases.is_empty());
        assert_eq!(model.nodes[0].references.len(), 1);
        assert_eq!(model.nodes[0].parent_id, None);
    }

    #[test]
    fn cdata_text_and_numeric_booleans() {
        let xml = r#"<UANodeSet>
            <UAObjectType NodeId="ns=1;i=10" BrowseName="1:ValveType" IsAbstract="1">
                <DisplayName>Valve</DisplayName>
                <Description><![CDATA[Opens <fast> & closes]]></Description>
            </UAObjectType>
            <UAObjectType NodeId="ns=1;i=11" BrowseName="1:GateType" IsAbstract="0" />
        </UANodeSet>"#;
        let model = parse(xml).expect("parse");
        assert!(model.nodes[0].is_abstract);
        assert_eq!(
            model.nodes[0].description.as_deref(),
            Some("Opens <fast> & closes")
        );
        assert!(!model.nodes[1].is_abstract);
    }

    #[test]
    fn reject_node_without_id() {
        let xml = r#"<UANodeSet><UAObject BrowseName="1:X"/></UANodeSet>"#;
        assert!(matches!(parse(xml).unwrap_err(), XmlError::Invalid(_)));
    }

    #[test]
    fn node_type_names() {
        assert_eq!("UAObject".parse::<NodeType>().unwrap(), NodeType::Object);
        assert_eq!("Variable".parse::<NodeType>().unwrap(), NodeType::Variable);
        assert!("Widget".parse::<NodeType>().is_err());
        assert_eq!(
            ReferenceType::from_name("HasCause"),
            ReferenceType::Other("HasCause".into())
        );
        assert_eq!(ReferenceType::from_name("HasCause").as_str(), "HasCause");
        assert_eq!(unqualified("2:Motor"), "Motor");
        assert_eq!(unqualified("Motor"), "Motor");
        assert_eq!(unqualified("a:b"), "a:b");
    }

    #[test]
    fn missing_file_reports_path() {
        let path = Path::new("/definitely/not/here.xml");
        let err = load_nodeset(path).unwrap_err();
        assert!(matches!(&err, XmlError::NotFound(p) if p == path));
        assert!(err.to_string().contains("/definitely/not/here.xml"));
    }
}
