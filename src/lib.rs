pub mod constants;
pub mod context;
pub mod diagnostic;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod node;
pub mod options;
pub mod reference;
pub mod v2;

use std::io::Read;

use serde_json::Value;

pub use crate::context::{DeferredValue, DeferredValues, ParseContext};
pub use crate::diagnostic::{Diagnostic, DiagnosticKind};
pub use crate::error::{Error, ErrorKind};
pub use crate::model::Document;
pub use crate::node::{Location, NodeKind, ParseNode};
pub use crate::options::ReadOptions;
pub use crate::reference::{ReferenceRegistry, ReferenceTarget};

pub type Result<T> = std::result::Result<T, Error>;

/// A loaded document with everything the load noticed but did not fail on.
#[derive(Debug, Clone)]
pub struct ReadResult {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
    pub references: ReferenceRegistry,
}

impl ReadResult {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

pub fn load_document(root: &Value) -> Result<ReadResult> {
    load_document_with_options(root, &ReadOptions::default())
}

pub fn load_document_with_options(root: &Value, options: &ReadOptions) -> Result<ReadResult> {
    log::debug!("loading swagger document");
    let mut ctx = ParseContext::new(options.clone());
    let document = v2::load_openapi(&ParseNode::root(root), &mut ctx)?;
    let (diagnostics, references) = ctx.into_parts();
    log::debug!(
        "loaded swagger document: {} paths, {} servers, {} diagnostics",
        document.paths.len(),
        document.servers.len(),
        diagnostics.len()
    );
    Ok(ReadResult {
        document,
        diagnostics,
        references,
    })
}

/// Loads each root with its own context, in parallel.
#[cfg(feature = "parallel")]
pub fn load_documents(roots: &[Value], options: &ReadOptions) -> Vec<Result<ReadResult>> {
    use rayon::prelude::*;

    roots
        .par_iter()
        .map(|root| load_document_with_options(root, options))
        .collect()
}

pub fn from_str(input: &str) -> Result<ReadResult> {
    from_str_with_options(input, &ReadOptions::default())
}

pub fn from_str_with_options(input: &str, options: &ReadOptions) -> Result<ReadResult> {
    let root: Value =
        serde_json::from_str(input).map_err(|err| Error::syntax(format!("invalid json: {err}")))?;
    load_document_with_options(&root, options)
}

pub fn from_slice(input: &[u8]) -> Result<ReadResult> {
    from_slice_with_options(input, &ReadOptions::default())
}

pub fn from_slice_with_options(input: &[u8], options: &ReadOptions) -> Result<ReadResult> {
    let root: Value = serde_json::from_slice(input)
        .map_err(|err| Error::syntax(format!("invalid json: {err}")))?;
    load_document_with_options(&root, options)
}

pub fn from_reader<R: Read>(reader: R) -> Result<ReadResult> {
    from_reader_with_options(reader, &ReadOptions::default())
}

pub fn from_reader_with_options<R: Read>(mut reader: R, options: &ReadOptions) -> Result<ReadResult> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|err| Error::io(format!("read failed: {err}")))?;
    from_slice_with_options(&buf, options)
}
