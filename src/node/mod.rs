//! Borrowed views over an already parsed `serde_json::Value` tree.
//!
//! Map keys iterate in document order because `serde_json` is built with
//! `preserve_order`. Every view carries the JSON pointer of the node it wraps,
//! so structural errors and diagnostics can name where they happened.

mod location;

use std::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Value};

pub use location::Location;

use crate::constants::REFERENCE_KEY;
use crate::context::ParseContext;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Map,
    List,
    Scalar,
}

impl NodeKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => NodeKind::Map,
            Value::Array(_) => NodeKind::List,
            _ => NodeKind::Scalar,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Map => "map",
            NodeKind::List => "list",
            NodeKind::Scalar => "scalar",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct ParseNode<'a> {
    value: &'a Value,
    location: Location,
}

impl<'a> ParseNode<'a> {
    pub fn new(value: &'a Value, location: Location) -> Self {
        Self { value, location }
    }

    pub fn root(value: &'a Value) -> Self {
        Self::new(value, Location::root())
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::of(self.value)
    }

    pub fn check_map(&self) -> Result<MapNode<'a>> {
        match self.value {
            Value::Object(map) => Ok(MapNode {
                map,
                location: self.location.clone(),
            }),
            other => Err(Error::structural(
                NodeKind::Map,
                NodeKind::of(other),
                &self.location,
            )),
        }
    }

    pub fn check_list(&self) -> Result<ListNode<'a>> {
        match self.value {
            Value::Array(items) => Ok(ListNode {
                items,
                location: self.location.clone(),
            }),
            other => Err(Error::structural(
                NodeKind::List,
                NodeKind::of(other),
                &self.location,
            )),
        }
    }

    /// Text of a scalar node. Null reads as the empty string.
    pub fn get_scalar_value(&self) -> Result<String> {
        match self.value {
            Value::String(text) => Ok(text.clone()),
            Value::Number(number) => Ok(number.to_string()),
            Value::Bool(flag) => Ok(flag.to_string()),
            Value::Null => Ok(String::new()),
            other => Err(Error::structural(
                NodeKind::Scalar,
                NodeKind::of(other),
                &self.location,
            )),
        }
    }

    pub fn get_bool(&self) -> Result<bool> {
        if let Value::Bool(flag) = self.value {
            return Ok(*flag);
        }
        let text = self.get_scalar_value()?;
        match text.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(Error::invalid_scalar("boolean", &text, &self.location)),
        }
    }

    pub fn get_integer(&self) -> Result<i64> {
        if let Some(number) = self.value.as_i64() {
            return Ok(number);
        }
        let text = self.get_scalar_value()?;
        text.trim()
            .parse()
            .map_err(|_| Error::invalid_scalar("integer", &text, &self.location))
    }

    pub fn get_number(&self) -> Result<f64> {
        if let Some(number) = self.value.as_f64() {
            return Ok(number);
        }
        let text = self.get_scalar_value()?;
        text.trim()
            .parse()
            .map_err(|_| Error::invalid_scalar("number", &text, &self.location))
    }

    /// Target of a `{"$ref": "..."}` marker, if this node is one.
    pub fn reference_pointer(&self) -> Option<&'a str> {
        self.value
            .as_object()
            .and_then(|map| map.get(REFERENCE_KEY))
            .and_then(Value::as_str)
    }

    pub fn is_reference_marker(&self) -> bool {
        self.reference_pointer().is_some()
    }

    /// Extension payloads are kept verbatim.
    pub fn create_any(&self) -> Value {
        self.value.clone()
    }

    pub fn create_simple_list<T>(
        &self,
        mut extract: impl FnMut(&ParseNode<'a>) -> Result<T>,
    ) -> Result<Vec<T>> {
        let list = self.check_list()?;
        list.iter().map(|item| extract(&item)).collect()
    }

    pub fn create_list<T>(
        &self,
        ctx: &mut ParseContext,
        mut load: impl FnMut(&ParseNode<'a>, &mut ParseContext) -> Result<T>,
    ) -> Result<Vec<T>> {
        let list = self.check_list()?;
        let mut out = Vec::with_capacity(list.len());
        for item in list.iter() {
            out.push(load(&item, ctx)?);
        }
        Ok(out)
    }

    pub fn create_map<T>(
        &self,
        ctx: &mut ParseContext,
        mut load: impl FnMut(&ParseNode<'a>, &mut ParseContext) -> Result<T>,
    ) -> Result<IndexMap<String, T>> {
        let map = self.check_map()?;
        let mut out = IndexMap::with_capacity(map.len());
        for (key, child) in map.iter() {
            let value = load(&child, ctx)?;
            out.insert(key.to_string(), value);
        }
        Ok(out)
    }
}

#[derive(Debug, Clone)]
pub struct MapNode<'a> {
    map: &'a Map<String, Value>,
    location: Location,
}

impl<'a> MapNode<'a> {
    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<ParseNode<'a>> {
        self.map
            .get(key)
            .map(|value| ParseNode::new(value, self.location.child(key)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, ParseNode<'a>)> + '_ {
        self.map.iter().map(move |(key, value)| {
            (
                key.as_str(),
                ParseNode::new(value, self.location.child(key)),
            )
        })
    }
}

#[derive(Debug, Clone)]
pub struct ListNode<'a> {
    items: &'a [Value],
    location: Location,
}

impl<'a> ListNode<'a> {
    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ParseNode<'a>> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(move |(index, value)| ParseNode::new(value, self.location.index(index)))
    }
}
