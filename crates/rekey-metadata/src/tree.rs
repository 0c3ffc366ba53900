use std::collections::BTreeMap;

use serde_json::{Map, Value};

use rekey_types::ObjectKey;

use crate::error::{MetadataError, MetadataResult};

/// Marker field distinguishing a leaf from a container on the wire.
const LEAF_MARKER: &str = "k";

/// One node of a record's metadata tree.
///
/// A container maps names to child nodes (arbitrary depth and branching);
/// a leaf references a single object in the archive's object directory,
/// or nothing at all (a null reference).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// A mapping from name to child node.
    Container(BTreeMap<String, Node>),
    /// A reference to an object by key, or a null reference.
    Leaf(Option<ObjectKey>),
}

impl Node {
    /// An empty container.
    pub fn empty() -> Self {
        Node::Container(BTreeMap::new())
    }

    /// Parse a metadata blob into a tree.
    pub fn parse(blob: &str) -> MetadataResult<Self> {
        let value: Value = serde_json::from_str(blob)
            .map_err(|e| MetadataError::Malformed(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Serialize the tree back to a metadata blob.
    pub fn serialize(&self) -> MetadataResult<String> {
        Ok(serde_json::to_string(&self.to_value())?)
    }

    /// Rebuild the tree with every non-null leaf key passed through
    /// `translate`. Null leaves and empty containers pass through unchanged.
    pub fn rewrite<E>(
        &self,
        translate: &mut impl FnMut(&ObjectKey) -> Result<ObjectKey, E>,
    ) -> Result<Node, E> {
        match self {
            Node::Leaf(None) => Ok(Node::Leaf(None)),
            Node::Leaf(Some(key)) => Ok(Node::Leaf(Some(translate(key)?))),
            Node::Container(children) => {
                let mut rewritten = BTreeMap::new();
                for (name, child) in children {
                    rewritten.insert(name.clone(), child.rewrite(translate)?);
                }
                Ok(Node::Container(rewritten))
            }
        }
    }

    /// All non-null leaf keys in the tree, in name order.
    pub fn leaf_keys(&self) -> Vec<&ObjectKey> {
        let mut keys = Vec::new();
        self.collect_leaf_keys(&mut keys);
        keys
    }

    fn collect_leaf_keys<'a>(&'a self, keys: &mut Vec<&'a ObjectKey>) {
        match self {
            Node::Leaf(Some(key)) => keys.push(key),
            Node::Leaf(None) => {}
            Node::Container(children) => {
                for child in children.values() {
                    child.collect_leaf_keys(keys);
                }
            }
        }
    }

    fn from_value(value: &Value) -> MetadataResult<Self> {
        let object = value.as_object().ok_or_else(|| {
            MetadataError::Malformed(format!("expected an object, got {value}"))
        })?;

        if object.contains_key(LEAF_MARKER) {
            if object.len() != 1 {
                return Err(MetadataError::Malformed(format!(
                    "leaf node carries fields besides {LEAF_MARKER:?}"
                )));
            }
            return match &object[LEAF_MARKER] {
                Value::Null => Ok(Node::Leaf(None)),
                Value::String(key) => {
                    let key = ObjectKey::new(key.clone())
                        .map_err(|e| MetadataError::Malformed(e.to_string()))?;
                    Ok(Node::Leaf(Some(key)))
                }
                other => Err(MetadataError::Malformed(format!(
                    "leaf key must be a string or null, got {other}"
                ))),
            };
        }

        let mut children = BTreeMap::new();
        for (name, child) in object {
            children.insert(name.clone(), Self::from_value(child)?);
        }
        Ok(Node::Container(children))
    }

    fn to_value(&self) -> Value {
        match self {
            Node::Leaf(key) => {
                let mut object = Map::with_capacity(1);
                object.insert(
                    LEAF_MARKER.to_string(),
                    match key {
                        Some(key) => Value::String(key.as_str().to_string()),
                        None => Value::Null,
                    },
                );
                Value::Object(object)
            }
            Node::Container(children) => {
                let mut object = Map::with_capacity(children.len());
                for (name, child) in children {
                    object.insert(name.clone(), child.to_value());
                }
                Value::Object(object)
            }
        }
    }
}
