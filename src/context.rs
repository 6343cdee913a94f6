//! Per-document parse state.
//!
//! A [`ParseContext`] lives exactly as long as one top-level load. Values that
//! only make sense once the whole document has been seen (host, basePath,
//! schemes, global media types) are parked in [`DeferredValues`] by field
//! handlers and read back by the post-process step.

use crate::diagnostic::Diagnostic;
use crate::node::Location;
use crate::reference::ReferenceRegistry;
use crate::{Error, ReadOptions, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredValue {
    Host(String),
    BasePath(String),
    Schemes(Vec<String>),
    Consumes(Vec<String>),
    Produces(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeferredValues {
    host: Option<String>,
    base_path: Option<String>,
    schemes: Option<Vec<String>>,
    consumes: Option<Vec<String>>,
    produces: Option<Vec<String>>,
}

impl DeferredValues {
    /// Stores `value` in its slot, replacing anything recorded earlier.
    pub fn set(&mut self, value: DeferredValue) {
        match value {
            DeferredValue::Host(host) => self.host = Some(host),
            DeferredValue::BasePath(base_path) => self.base_path = Some(base_path),
            DeferredValue::Schemes(schemes) => self.schemes = Some(schemes),
            DeferredValue::Consumes(consumes) => self.consumes = Some(consumes),
            DeferredValue::Produces(produces) => self.produces = Some(produces),
        }
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    pub fn schemes(&self) -> Option<&[String]> {
        self.schemes.as_deref()
    }

    pub fn consumes(&self) -> Option<&[String]> {
        self.consumes.as_deref()
    }

    pub fn produces(&self) -> Option<&[String]> {
        self.produces.as_deref()
    }
}

#[derive(Debug)]
pub struct ParseContext {
    options: ReadOptions,
    deferred: DeferredValues,
    diagnostics: Vec<Diagnostic>,
    references: ReferenceRegistry,
    depth: usize,
}

impl ParseContext {
    pub fn new(options: ReadOptions) -> Self {
        Self {
            options,
            deferred: DeferredValues::default(),
            diagnostics: Vec::new(),
            references: ReferenceRegistry::default(),
            depth: 0,
        }
    }

    pub fn set_deferred(&mut self, value: DeferredValue) {
        self.deferred.set(value);
    }

    pub fn deferred(&self) -> &DeferredValues {
        &self.deferred
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn references(&self) -> &ReferenceRegistry {
        &self.references
    }

    pub fn references_mut(&mut self) -> &mut ReferenceRegistry {
        &mut self.references
    }

    pub(crate) fn enter(&mut self, location: &Location) -> Result<()> {
        if self.depth >= self.options.max_depth {
            return Err(Error::depth_limit(self.options.max_depth, location));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn into_parts(self) -> (Vec<Diagnostic>, ReferenceRegistry) {
        (self.diagnostics, self.references)
    }
}
