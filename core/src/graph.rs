use thiserror::Error;

/// Zero-based dense index identifying a vertex in the store.
pub type VertexId = usize;

/// Non-negative arc weight. [`Graph::RESERVED_WEIGHT`] is never stored.
pub type Weight = u32;

/// Errors surfaced by the adjacency store and the shortest-path engine.
///
/// Every mutating operation validates its indices before touching the
/// store, so a failed call leaves the graph exactly as it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A supplied vertex index does not exist in the current store.
    #[error("vertex {vertex} is out of range (graph has {vertex_count} vertices)")]
    OutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// The supplied weight is the reserved value and cannot be stored.
    #[error("weight {0} is reserved and cannot be assigned to an arc")]
    InvalidWeight(Weight),

    /// A lookup or removal targeted an arc that does not exist.
    #[error("no arc from vertex {from} to vertex {to}")]
    ArcNotFound { from: VertexId, to: VertexId },
}

/// A directed weighted arc. The source vertex is implied by which
/// adjacency list owns the arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc {
    pub target: VertexId,
    pub weight: Weight,
}

/// In-memory weighted directed graph over per-vertex adjacency lists.
///
/// Vertices are dense zero-based indices and carry no attributes of their
/// own. Arcs are owned by their source vertex and kept in insertion order.
/// Parallel arcs (same endpoints, any weights) may coexist and are never
/// deduplicated; [`Graph::remove_arc`] and [`Graph::weight`] scan the list
/// in opposite directions, so with parallel arcs they may act on different
/// arcs of the same pair — see their docs.
///
/// The store is single-threaded: concurrent read-only queries are fine,
/// but any mutation must be externally serialized against both readers
/// and other writers.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<Arc>>,
}

impl Graph {
    /// The one weight value that can never be stored on an arc.
    ///
    /// Keeping it reserved guarantees that a genuine arc weight can never
    /// collide with a caller-side "no arc" marker.
    pub const RESERVED_WEIGHT: Weight = Weight::MAX;

    /// A graph of `vertex_count` vertices with empty adjacency lists.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Set the vertex count to `vertex_count`.
    ///
    /// Growing appends vertices with empty adjacency lists. Shrinking
    /// drops the highest-indexed vertices together with their outgoing
    /// arcs, and additionally prunes arcs in retained vertices whose
    /// target fell out of range — the store never holds a dangling arc.
    pub fn resize(&mut self, vertex_count: usize) {
        let shrinking = vertex_count < self.adjacency.len();
        self.adjacency.resize(vertex_count, Vec::new());
        if shrinking {
            for arcs in &mut self.adjacency {
                arcs.retain(|arc| arc.target < vertex_count);
            }
        }
    }

    /// Append an arc `from → to` with the given weight.
    ///
    /// Later insertions land at the end of the list, so insertion order is
    /// observable through [`Graph::weight`] and [`Graph::remove_arc`].
    pub fn add_arc(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if weight == Self::RESERVED_WEIGHT {
            return Err(GraphError::InvalidWeight(weight));
        }
        self.adjacency[from].push(Arc { target: to, weight });
        Ok(())
    }

    /// Remove one arc `from → to`. The vertex `from` itself is kept.
    ///
    /// With parallel arcs the **most recently inserted** match is removed
    /// (the list is scanned tail-first). Lookup scans head-first, the
    /// opposite direction.
    pub fn remove_arc(&mut self, from: VertexId, to: VertexId) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        let arcs = &mut self.adjacency[from];
        match arcs.iter().rposition(|arc| arc.target == to) {
            Some(index) => {
                arcs.remove(index);
                Ok(())
            }
            None => Err(GraphError::ArcNotFound { from, to }),
        }
    }

    /// The weight of the **first-inserted** arc `from → to` (the list is
    /// scanned head-first; removal scans tail-first).
    pub fn weight(&self, from: VertexId, to: VertexId) -> Result<Weight, GraphError> {
        self.check_vertex(from)?;
        self.adjacency[from]
            .iter()
            .find(|arc| arc.target == to)
            .map(|arc| arc.weight)
            .ok_or(GraphError::ArcNotFound { from, to })
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of stored arcs, summed over all adjacency lists.
    pub fn arc_count(&self) -> usize {
        self.adjacency.iter().map(|arcs| arcs.len()).sum()
    }

    /// Outgoing arcs of `vertex`, in insertion order.
    ///
    /// Out-of-range vertices yield an empty slice so that read-only
    /// traversals need no error plumbing.
    pub fn arcs(&self, vertex: VertexId) -> &[Arc] {
        self.adjacency
            .get(vertex)
            .map(|arcs| arcs.as_slice())
            .unwrap_or(&[])
    }

    pub(crate) fn check_vertex(&self, vertex: VertexId) -> Result<(), GraphError> {
        if vertex < self.adjacency.len() {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                vertex,
                vertex_count: self.adjacency.len(),
            })
        }
    }
}
