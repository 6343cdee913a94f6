//! Table-driven field dispatch.
//!
//! Each target type owns a [`FixedFieldMap`] (exact key → handler) and a
//! [`PatternFieldMap`] (ordered predicate → handler). Handlers for nested
//! objects call back into [`load_object`] with the nested type's tables, so
//! the walk is recursive descent driven by lookups rather than per-type code.

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::constants::is_extension_key;
use crate::context::ParseContext;
use crate::diagnostic::Diagnostic;
use crate::model::Extensible;
use crate::node::{MapNode, ParseNode};
use crate::Result;

pub type FixedFieldHandler<T> = fn(&mut T, &ParseNode<'_>, &mut ParseContext) -> Result<()>;

pub type PatternFieldHandler<T> =
    fn(&mut T, &str, &ParseNode<'_>, &mut ParseContext) -> Result<()>;

pub type KeyPredicate = fn(&str) -> bool;

pub struct FixedFieldMap<T> {
    handlers: IndexMap<&'static str, FixedFieldHandler<T>>,
}

impl<T> FixedFieldMap<T> {
    pub fn new() -> Self {
        Self {
            handlers: IndexMap::new(),
        }
    }

    pub fn field(mut self, name: &'static str, handler: FixedFieldHandler<T>) -> Self {
        self.handlers.insert(name, handler);
        self
    }

    pub fn get(&self, key: &str) -> Option<(&'static str, FixedFieldHandler<T>)> {
        self.handlers
            .get_key_value(key)
            .map(|(name, handler)| (*name, *handler))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.handlers.contains_key(key)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<T> Default for FixedFieldMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Consulted only when no fixed field matches; the first predicate to accept
/// the key wins.
pub struct PatternFieldMap<T> {
    entries: Vec<(KeyPredicate, PatternFieldHandler<T>)>,
}

impl<T> PatternFieldMap<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn pattern(mut self, predicate: KeyPredicate, handler: PatternFieldHandler<T>) -> Self {
        self.entries.push((predicate, handler));
        self
    }

    pub fn find(&self, key: &str) -> Option<PatternFieldHandler<T>> {
        self.entries
            .iter()
            .find(|(predicate, _)| predicate(key))
            .map(|(_, handler)| *handler)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Extensible> PatternFieldMap<T> {
    /// `x-` keys stored verbatim in the target's extension map.
    pub fn extensions() -> Self {
        Self::new().pattern(is_extension_key, |target, key, node, _| {
            target.add_extension(key, node.create_any());
            Ok(())
        })
    }
}

impl<T> Default for PatternFieldMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Keys of one map that found a handler.
#[derive(Debug, Clone, Default)]
pub struct SeenFields<'a> {
    fixed: SmallVec<[&'static str; 16]>,
    pattern: SmallVec<[&'a str; 4]>,
}

impl<'a> SeenFields<'a> {
    pub fn contains_fixed(&self, name: &str) -> bool {
        self.fixed.iter().any(|seen| *seen == name)
    }

    pub fn fixed(&self) -> &[&'static str] {
        &self.fixed
    }

    pub fn pattern(&self) -> &[&'a str] {
        &self.pattern
    }
}

pub fn parse_map<'a, T>(
    map: &MapNode<'a>,
    target: &mut T,
    fixed: &FixedFieldMap<T>,
    patterns: &PatternFieldMap<T>,
    ctx: &mut ParseContext,
) -> Result<SeenFields<'a>> {
    let mut seen = SeenFields::default();
    for (key, node) in map.iter() {
        if let Some((name, handler)) = fixed.get(key) {
            handler(target, &node, ctx)?;
            seen.fixed.push(name);
        } else if let Some(handler) = patterns.find(key) {
            handler(target, key, &node, ctx)?;
            seen.pattern.push(key);
        } else {
            log::trace!("ignoring unknown field {}", node.location());
        }
    }
    Ok(seen)
}

/// Reports every name in `required` that no fixed field matched. Never fails.
pub fn report_missing(
    map: &MapNode<'_>,
    required: &[&str],
    seen: &SeenFields<'_>,
    ctx: &mut ParseContext,
) {
    for name in required {
        if !seen.contains_fixed(name) {
            log::debug!("missing required field `{name}` at {}", map.location());
            ctx.report(Diagnostic::missing_required_field(name, map.location()));
        }
    }
}

/// Checks the node is a map, dispatches it into `target`, then reports
/// missing required fields.
pub fn load_into<T>(
    node: &ParseNode<'_>,
    target: &mut T,
    fixed: &FixedFieldMap<T>,
    patterns: &PatternFieldMap<T>,
    required: &[&str],
    ctx: &mut ParseContext,
) -> Result<()> {
    let map = node.check_map()?;
    ctx.enter(map.location())?;
    let seen = parse_map(&map, target, fixed, patterns, ctx);
    ctx.leave();
    report_missing(&map, required, &seen?, ctx);
    Ok(())
}

pub fn load_object<T: Default>(
    node: &ParseNode<'_>,
    fixed: &FixedFieldMap<T>,
    patterns: &PatternFieldMap<T>,
    required: &[&str],
    ctx: &mut ParseContext,
) -> Result<T> {
    let mut target = T::default();
    load_into(node, &mut target, fixed, patterns, required, ctx)?;
    Ok(target)
}
