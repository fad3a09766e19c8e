//! Classification of `import` arguments into files and live servers.

use std::path::{Path, PathBuf};

/// Where a nodeset should be loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSource {
    /// Nodeset XML file on disk.
    File(PathBuf),
    /// Address of a running OPC UA server, e.g. `opc.tcp://host:4840`.
    Server(String),
}

impl ImportSource {
    /// Classify an argument: anything with both a URL scheme and a host is a
    /// server address, everything else a path.
    pub fn parse(arg: &str) -> Self {
        if is_url(arg) {
            ImportSource::Server(arg.to_string())
        } else {
            ImportSource::File(PathBuf::from(arg))
        }
    }

    /// Like [`ImportSource::parse`], resolving relative file paths the way
    /// documentation sources reference them: relative to the directory of
    /// `docname`, or to `src_dir` when the path starts with `/`.
    pub fn from_document(src_dir: &Path, docname: &str, arg: &str) -> Self {
        match Self::parse(arg) {
            ImportSource::File(_) => ImportSource::File(resolve_import_path(src_dir, docname, arg)),
            server => server,
        }
    }
}

/// Resolve an import path given the documentation source directory and the
/// name of the document containing the import.
///
/// Relative paths are taken relative to the directory of the document;
/// paths starting with `/` are relative to the source directory root.
pub(crate) fn resolve_import_path(src_dir: &Path, docname: &str, arg: &str) -> PathBuf {
    if let Some(rooted) = arg.strip_prefix('/') {
        src_dir.join(rooted)
    } else {
        let doc_dir = Path::new(docname).parent().unwrap_or_else(|| Path::new(""));
        src_dir.join(doc_dir).join(arg)
    }
}

fn is_url(arg: &str) -> bool {
    let Some((scheme, rest)) = arg.split_once("://") else {
        return false;
    };
    let scheme_ok = scheme
        .chars()
        .next()
        .map(|c| c.is_ascii_alphabetic())
        .unwrap_or(false)
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    let host = rest.split('/').next().unwrap_or("");
    scheme_ok && !host.is_empty()
}
