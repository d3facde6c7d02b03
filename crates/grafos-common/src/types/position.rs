//! Opaque display position attached to vertices.

use serde::{Deserialize, Serialize};

/// Where a collaborator placed a vertex on its canvas.
///
/// Carried along with the vertex for the caller's convenience; no algorithm reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Position {
    /// Creates a position from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
