//! Graph configuration.

/// Configuration for a [`Graph`](super::Graph).
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Whether edges are directed.
    pub directed: bool,
    /// Whether `add_edge` accepts negative weights.
    ///
    /// Shortest-path results are undefined on graphs holding negative weights.
    pub allow_negative_weights: bool,
    /// Prefix for generated vertex names (`V1`, `V2`, ...).
    pub name_prefix: String,
    /// Initial capacity for vertices.
    pub initial_vertex_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            allow_negative_weights: false,
            name_prefix: "V".to_string(),
            initial_vertex_capacity: 64,
        }
    }
}

impl GraphConfig {
    /// Configuration for a directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::default().with_directed(true)
    }

    /// Sets the direction mode.
    #[must_use]
    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Accepts or rejects negative weights.
    #[must_use]
    pub fn with_negative_weights(mut self, allow: bool) -> Self {
        self.allow_negative_weights = allow;
        self
    }

    /// Sets the prefix used for generated vertex names.
    #[must_use]
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Sets the initial vertex capacity.
    #[must_use]
    pub fn with_initial_vertex_capacity(mut self, capacity: usize) -> Self {
        self.initial_vertex_capacity = capacity;
        self
    }
}
