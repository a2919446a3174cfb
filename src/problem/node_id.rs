use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Identifier of a node in a search problem. For grids this is derived from
/// the cell coordinates, see [`NodeId::from_coords`]; for graphs it is the
/// identifier the user gave the node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Encode a grid coordinate as `"{row}-{col}"`.
    pub fn from_coords(row: usize, col: usize) -> Self {
        Self(format!("{}-{}", row, col))
    }

    /// Decode a grid coordinate, returns [`None`] if the identifier was not
    /// produced by [`NodeId::from_coords`].
    pub fn to_coords(&self) -> Option<(usize, usize)> {
        let (row, col) = self.0.split_once('-')?;
        Some((row.parse().ok()?, col.parse().ok()?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
