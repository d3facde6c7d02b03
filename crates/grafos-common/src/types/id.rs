//! Identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a vertex within one graph.
///
/// Ids are handed out monotonically by the graph that owns the vertex and are
/// never reused while that graph lives, so a stale id simply fails to resolve
/// instead of aliasing a newer vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct VertexId(u32);

impl VertexId {
    /// Invalid/sentinel vertex id.
    pub const INVALID: VertexId = VertexId(u32::MAX);

    /// Creates a new vertex id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns `true` unless this is the sentinel id.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id_basics() {
        let id = VertexId::new(7);
        assert_eq!(id.as_u32(), 7);
        assert!(id.is_valid());
        assert!(!VertexId::INVALID.is_valid());
        assert_eq!(id.to_string(), "#7");
        assert_eq!(VertexId::from(7u32), id);
    }

    #[test]
    fn test_vertex_id_ordering() {
        assert!(VertexId::new(1) < VertexId::new(2));
    }
}
