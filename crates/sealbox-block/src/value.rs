use serde::{Deserialize, Serialize};

use crate::block::HashedBlock;

/// A leaf value stored in a container.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Text(String),
    Bytes(Vec<u8>),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

/// A tree node: a leaf value or a nested block.
///
/// Each nested block is exclusively owned by its parent, so the tree cannot
/// contain cycles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entry {
    /// A leaf value.
    Value(Value),
    /// A nested container.
    Block(HashedBlock),
}

impl Entry {
    /// The leaf value, if this entry is one.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Block(_) => None,
        }
    }

    /// The nested block, if this entry is one.
    pub fn as_block(&self) -> Option<&HashedBlock> {
        match self {
            Self::Value(_) => None,
            Self::Block(block) => Some(block),
        }
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<HashedBlock> for Entry {
    fn from(block: HashedBlock) -> Self {
        Self::Block(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_impls() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i64), Value::Int(42));
        assert_eq!(Value::from("text"), Value::Text("text".into()));
        assert_eq!(Value::from(vec![1u8, 2]), Value::Bytes(vec![1, 2]));
    }

    #[test]
    fn entry_accessors() {
        let leaf = Entry::from(Value::Int(7));
        assert_eq!(leaf.as_value(), Some(&Value::Int(7)));
        assert!(leaf.as_block().is_none());

        let nested = Entry::from(HashedBlock::new());
        assert!(nested.as_value().is_none());
        assert_eq!(nested.as_block(), Some(&HashedBlock::new()));
    }

    #[test]
    fn serde_roundtrip() {
        let entry = Entry::from(Value::from("round trip"));
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, parsed);
    }
}
