//! Well-known OPC UA node ids (namespace 0) and their symbolic names.
//!
//! Names follow the `NodeIds.csv` convention used by the OPC Foundation
//! stacks: instance declarations below a standard object are joined with `_`
//! (`Server_ServerStatus`), modelling rules carry the `ModellingRule_` prefix.

mod table;

use table::WELL_KNOWN;

/// `Server` object.
pub const SERVER: u32 = 2253;
/// `ObjectsFolder` object.
pub const OBJECTS_FOLDER: u32 = 85;
/// `ModellingRule_Mandatory` object.
pub const MODELLING_RULE_MANDATORY: u32 = 78;
/// `ModellingRule_Optional` object.
pub const MODELLING_RULE_OPTIONAL: u32 = 80;
/// `BaseObjectType` object type.
pub const BASE_OBJECT_TYPE: u32 = 58;
/// `FolderType` object type.
pub const FOLDER_TYPE: u32 = 61;

/// Prefix carried by the symbolic names of the modelling rule objects.
pub const MODELLING_RULE_PREFIX: &str = "ModellingRule_";

/// Return the symbolic name of a well-known numeric id.
pub fn name_of(id: u32) -> Option<&'static str> {
    WELL_KNOWN
        .binary_search_by_key(&id, |(key, _)| *key)
        .ok()
        .map(|idx| WELL_KNOWN[idx].1)
}

/// Extract the integer of a token of the form `i=<digits>...`.
///
/// Only the leading digits after `i=` are considered, so `i=85` and
/// `i=85 ` both yield `85`. Tokens with a namespace prefix (`ns=1;i=5`) do
/// not match.
pub fn parse_numeric(token: &str) -> Option<u32> {
    let rest = token.strip_prefix("i=")?;
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    rest[..end].parse().ok()
}

/// Resolve a token of the form `i=<digits>` to its well-known name.
pub fn lookup_token(token: &str) -> Option<&'static str> {
    parse_numeric(token).and_then(name_of)
}

/// Strip the `ModellingRule_` prefix from a modelling rule name.
pub fn strip_modelling_rule(name: &str) -> &str {
    name.strip_prefix(MODELLING_RULE_PREFIX).unwrap_or(name)
}
