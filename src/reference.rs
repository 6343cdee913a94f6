//! Pointer registration for reference-qualified maps such as `definitions`.
//!
//! Loading an entry and registering its pointer are separate steps; nothing
//! here follows a `$ref` or replaces a loaded value with its target.

use indexmap::IndexMap;

use crate::context::ParseContext;
use crate::node::ParseNode;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceTarget {
    /// The pointer names a value defined in place.
    Inline,
    /// The entry is itself a `$ref` marker pointing elsewhere.
    Alias(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceRegistry {
    entries: IndexMap<String, ReferenceTarget>,
}

impl ReferenceRegistry {
    pub fn register(&mut self, pointer: String, target: ReferenceTarget) {
        log::debug!("registered reference {pointer} ({target:?})");
        self.entries.insert(pointer, target);
    }

    pub fn get(&self, pointer: &str) -> Option<&ReferenceTarget> {
        self.entries.get(pointer)
    }

    pub fn contains(&self, pointer: &str) -> bool {
        self.entries.contains_key(pointer)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReferenceTarget)> {
        self.entries
            .iter()
            .map(|(pointer, target)| (pointer.as_str(), target))
    }

    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(pointer, target)| match target {
                ReferenceTarget::Alias(to) => Some((pointer.as_str(), to.as_str())),
                ReferenceTarget::Inline => None,
            })
    }
}

impl<'a> ParseNode<'a> {
    /// Builds a map like [`ParseNode::create_map`] and registers
    /// `prefix + key` for every entry.
    pub fn create_map_with_reference<T>(
        &self,
        prefix: &str,
        ctx: &mut ParseContext,
        mut load: impl FnMut(&ParseNode<'a>, &mut ParseContext) -> Result<T>,
    ) -> Result<IndexMap<String, T>> {
        let map = self.check_map()?;
        let mut out = IndexMap::with_capacity(map.len());
        for (key, child) in map.iter() {
            let value = load(&child, ctx)?;
            out.insert(key.to_string(), value);

            let target = match child.reference_pointer() {
                Some(pointer) => ReferenceTarget::Alias(pointer.to_string()),
                None => ReferenceTarget::Inline,
            };
            ctx.references_mut()
                .register(format!("{prefix}{key}"), target);
        }
        Ok(out)
    }
}
