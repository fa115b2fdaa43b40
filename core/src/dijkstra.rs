use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};
use std::fmt;

use crate::graph::{Graph, GraphError, VertexId};

/// A shortest-path distance from the query origin.
///
/// `Unreachable` orders above every finite value, so the minimum of a set
/// of tentative distances is always the closest reachable vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Distance {
    Finite(u64),
    Unreachable,
}

impl Distance {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Distance::Unreachable)
    }

    /// The finite value, or `None` when unreachable.
    pub fn finite(&self) -> Option<u64> {
        match *self {
            Distance::Finite(d) => Some(d),
            Distance::Unreachable => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Frontier structure used to pick the next vertex to settle.
///
/// All three strategies run the same relaxation loop and return identical
/// distances; they differ in extraction cost and, when several minimum-
/// weight paths exist, possibly in which of them is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Binary heap with lazy invalidation of stale entries. O((V+E) log E).
    #[default]
    BinaryHeap,
    /// Balanced ordered set; the stale entry is removed eagerly before the
    /// improved one is reinserted. O((V+E) log V).
    OrderedSet,
    /// Linear scan of the unsettled vertices each iteration. O(V² + E).
    /// Reference implementation; slow on large graphs.
    LinearScan,
}

/// Outcome of a single-pair shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    pub distance: Distance,
    /// Vertices from origin to destination inclusive, origin first.
    /// A single-vertex `[destination]` when the destination is the origin
    /// or is unreachable.
    pub path: Vec<VertexId>,
}

/// Shortest path from `origin` to `destination` over non-negative arc
/// weights, using the given frontier [`Strategy`].
///
/// This is a single-pair query: the search stops as soon as `destination`
/// is settled, so distances to vertices off its shortest path are not
/// computed. Unreachability is a normal outcome, reported as
/// `Distance::Unreachable` with the degenerate path `[destination]` —
/// never as an error.
///
/// Fails with [`GraphError::OutOfRange`] when either endpoint is not a
/// vertex of the graph.
pub fn shortest_path(
    graph: &Graph,
    origin: VertexId,
    destination: VertexId,
    strategy: Strategy,
) -> Result<PathResult, GraphError> {
    match strategy {
        Strategy::BinaryHeap => run::<HeapFrontier>(graph, origin, destination),
        Strategy::OrderedSet => run::<SetFrontier>(graph, origin, destination),
        Strategy::LinearScan => run::<ScanFrontier>(graph, origin, destination),
    }
}

/// The one relaxation loop shared by all strategies.
fn run<F: Frontier>(
    graph: &Graph,
    origin: VertexId,
    destination: VertexId,
) -> Result<PathResult, GraphError> {
    graph.check_vertex(origin)?;
    graph.check_vertex(destination)?;

    if origin == destination {
        return Ok(PathResult {
            distance: Distance::Finite(0),
            path: vec![destination],
        });
    }

    let vertex_count = graph.vertex_count();
    let mut dist = vec![Distance::Unreachable; vertex_count];
    let mut pred: Vec<Option<VertexId>> = vec![None; vertex_count];
    dist[origin] = Distance::Finite(0);

    let mut frontier = F::seed(vertex_count, origin);
    while let Some((settled_dist, settled)) = frontier.pop_min(&dist) {
        if settled == destination {
            break;
        }

        for arc in graph.arcs(settled) {
            let candidate = settled_dist + u64::from(arc.weight);
            if Distance::Finite(candidate) < dist[arc.target] {
                let previous = dist[arc.target];
                dist[arc.target] = Distance::Finite(candidate);
                pred[arc.target] = Some(settled);
                frontier.improved(arc.target, previous, candidate);
            }
        }
    }

    if pred[destination].is_none() {
        return Ok(PathResult {
            distance: Distance::Unreachable,
            path: vec![destination],
        });
    }

    let mut path = vec![destination];
    let mut current = destination;
    while let Some(parent) = pred[current] {
        path.push(parent);
        current = parent;
    }
    path.reverse();

    Ok(PathResult {
        distance: dist[destination],
        path,
    })
}

/// How a frontier hands out the closest unsettled vertex.
///
/// `pop_min` receives the tentative-distance table so lazy strategies can
/// recognize stale entries; it returns `None` once no reachable unsettled
/// vertex remains. `improved` is invoked exactly when a relaxation lowers
/// a vertex's tentative distance.
trait Frontier {
    fn seed(vertex_count: usize, origin: VertexId) -> Self;
    fn pop_min(&mut self, dist: &[Distance]) -> Option<(u64, VertexId)>;
    fn improved(&mut self, vertex: VertexId, previous: Distance, new_dist: u64);
}

/// Binary-heap frontier. Improvements push a new entry and leave the old
/// one behind; stale entries are skipped at pop time by comparing against
/// the current tentative distance.
struct HeapFrontier {
    heap: BinaryHeap<Reverse<(u64, VertexId)>>,
}

impl Frontier for HeapFrontier {
    fn seed(_vertex_count: usize, origin: VertexId) -> Self {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0, origin)));
        Self { heap }
    }

    fn pop_min(&mut self, dist: &[Distance]) -> Option<(u64, VertexId)> {
        while let Some(Reverse((d, vertex))) = self.heap.pop() {
            // Stale entry: the vertex was improved after this was queued.
            if Distance::Finite(d) > dist[vertex] {
                continue;
            }
            return Some((d, vertex));
        }
        None
    }

    fn improved(&mut self, vertex: VertexId, _previous: Distance, new_dist: u64) {
        self.heap.push(Reverse((new_dist, vertex)));
    }
}

/// Ordered-set frontier. Each vertex has at most one live entry: the old
/// one is removed before the improved one is inserted.
struct SetFrontier {
    set: BTreeSet<(u64, VertexId)>,
}

impl Frontier for SetFrontier {
    fn seed(_vertex_count: usize, origin: VertexId) -> Self {
        let mut set = BTreeSet::new();
        set.insert((0, origin));
        Self { set }
    }

    fn pop_min(&mut self, _dist: &[Distance]) -> Option<(u64, VertexId)> {
        self.set.pop_first()
    }

    fn improved(&mut self, vertex: VertexId, previous: Distance, new_dist: u64) {
        if let Distance::Finite(d) = previous {
            self.set.remove(&(d, vertex));
        }
        self.set.insert((new_dist, vertex));
    }
}

/// Linear-scan frontier. Every vertex starts unsettled; each pop scans the
/// tentative-distance table for the minimum finite entry.
struct ScanFrontier {
    unsettled: Vec<bool>,
}

impl Frontier for ScanFrontier {
    fn seed(vertex_count: usize, _origin: VertexId) -> Self {
        Self {
            unsettled: vec![true; vertex_count],
        }
    }

    fn pop_min(&mut self, dist: &[Distance]) -> Option<(u64, VertexId)> {
        let mut best: Option<(u64, VertexId)> = None;
        for (vertex, &pending) in self.unsettled.iter().enumerate() {
            if !pending {
                continue;
            }
            if let Distance::Finite(d) = dist[vertex] {
                if best.map_or(true, |(min, _)| d < min) {
                    best = Some((d, vertex));
                }
            }
        }
        // Only unreachable vertices left: the search is over.
        let (d, vertex) = best?;
        self.unsettled[vertex] = false;
        Some((d, vertex))
    }

    fn improved(&mut self, _vertex: VertexId, _previous: Distance, _new_dist: u64) {}
}
