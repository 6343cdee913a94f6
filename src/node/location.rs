use std::fmt;

use memchr::memchr2;
use serde::Serialize;

/// JSON pointer to a node, rooted at `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Location {
    pointer: String,
}

impl Location {
    pub fn root() -> Self {
        Self {
            pointer: String::from("#"),
        }
    }

    pub fn child(&self, key: &str) -> Self {
        let mut pointer = String::with_capacity(self.pointer.len() + key.len() + 1);
        pointer.push_str(&self.pointer);
        pointer.push('/');
        push_escaped(&mut pointer, key);
        Self { pointer }
    }

    pub fn index(&self, index: usize) -> Self {
        let mut buffer = itoa::Buffer::new();
        let segment = buffer.format(index);
        let mut pointer = String::with_capacity(self.pointer.len() + segment.len() + 1);
        pointer.push_str(&self.pointer);
        pointer.push('/');
        pointer.push_str(segment);
        Self { pointer }
    }

    pub fn as_str(&self) -> &str {
        &self.pointer
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pointer)
    }
}

fn push_escaped(out: &mut String, key: &str) {
    if memchr2(b'~', b'/', key.as_bytes()).is_none() {
        out.push_str(key);
        return;
    }
    for ch in key.chars() {
        match ch {
            '~' => out.push_str("~0"),
            '/' => out.push_str("~1"),
            other => out.push(other),
        }
    }
}
