use crate::graph::{Graph, VertexId};

/// Whether the graph contains any directed cycle.
///
/// Depth-first search over every vertex (the graph need not be connected)
/// with two per-vertex flags: `visited` marks vertices whose exploration
/// has started, `on_path` marks vertices on the active search path. An
/// arc into an `on_path` vertex is a back edge and answers `true`
/// immediately; a full scan without one answers `false`, as does the
/// empty graph. Self-loops count as cycles.
///
/// The traversal keeps an explicit stack of (vertex, next-arc-cursor)
/// frames instead of recursing, so auxiliary stack usage is independent
/// of graph diameter. Never errors; runs in O(V + E).
pub fn is_cyclic(graph: &Graph) -> bool {
    let vertex_count = graph.vertex_count();
    let mut visited = vec![false; vertex_count];
    let mut on_path = vec![false; vertex_count];
    let mut stack: Vec<(VertexId, usize)> = Vec::new();

    for root in 0..vertex_count {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        on_path[root] = true;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (vertex, cursor) = *frame;
            match graph.arcs(vertex).get(cursor) {
                Some(arc) => {
                    frame.1 += 1;
                    let next = arc.target;
                    if on_path[next] {
                        return true;
                    }
                    if !visited[next] {
                        visited[next] = true;
                        on_path[next] = true;
                        stack.push((next, 0));
                    }
                }
                None => {
                    // Neighbors exhausted: leave the active path but stay visited.
                    on_path[vertex] = false;
                    stack.pop();
                }
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_from(vertex_count: usize, arcs: &[(VertexId, VertexId)]) -> Graph {
        let mut g = Graph::new(vertex_count);
        for &(from, to) in arcs {
            g.add_arc(from, to, 1).unwrap();
        }
        g
    }

    // --- Cyclic graphs ---

    #[test]
    fn test_triangle_is_cyclic() {
        let g = graph_from(3, &[(0, 1), (1, 2), (2, 0)]);
        assert!(is_cyclic(&g));
    }

    #[test]
    fn test_self_loop_is_cyclic() {
        let g = graph_from(2, &[(0, 1), (1, 1)]);
        assert!(is_cyclic(&g));
    }

    #[test]
    fn test_two_vertex_cycle() {
        let g = graph_from(2, &[(0, 1), (1, 0)]);
        assert!(is_cyclic(&g));
    }

    #[test]
    fn test_cycle_in_unreached_component() {
        // Component {0,1} is acyclic; the cycle lives in {2,3}, reachable
        // from no earlier root, so the all-roots scan must still find it.
        let g = graph_from(4, &[(0, 1), (2, 3), (3, 2)]);
        assert!(is_cyclic(&g));
    }

    #[test]
    fn test_cycle_deep_in_long_tail() {
        let mut g = Graph::new(6);
        for i in 0..5 {
            g.add_arc(i, i + 1, 1).unwrap();
        }
        g.add_arc(5, 3, 1).unwrap();
        assert!(is_cyclic(&g));
    }

    // --- Acyclic graphs ---

    #[test]
    fn test_chain_is_acyclic() {
        let g = graph_from(3, &[(0, 1), (1, 2)]);
        assert!(!is_cyclic(&g));
    }

    #[test]
    fn test_empty_graph_is_acyclic() {
        assert!(!is_cyclic(&Graph::new(0)));
        assert!(!is_cyclic(&Graph::new(5)));
    }

    #[test]
    fn test_diamond_sharing_is_not_a_cycle() {
        // 1 and 2 both feed 3: vertex 3 is reached twice, but all arcs
        // point forward, so no back edge exists.
        let g = graph_from(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        assert!(!is_cyclic(&g));
    }

    #[test]
    fn test_parallel_arcs_are_not_a_cycle() {
        let g = graph_from(2, &[(0, 1), (0, 1)]);
        assert!(!is_cyclic(&g));
    }

    #[test]
    fn test_disconnected_dags() {
        let g = graph_from(6, &[(0, 1), (2, 3), (4, 5)]);
        assert!(!is_cyclic(&g));
    }

    #[test]
    fn test_deep_chain_does_not_exhaust_the_stack() {
        // A path this long would overflow the call stack under naive
        // recursion; the explicit work stack must handle it.
        let vertex_count = 200_000;
        let mut g = Graph::new(vertex_count);
        for i in 0..vertex_count - 1 {
            g.add_arc(i, i + 1, 1).unwrap();
        }
        assert!(!is_cyclic(&g));
        g.add_arc(vertex_count - 1, 0, 1).unwrap();
        assert!(is_cyclic(&g));
    }

    // --- Interaction with mutation ---

    #[test]
    fn test_removing_back_arc_breaks_cycle() {
        let mut g = graph_from(3, &[(0, 1), (1, 2), (2, 0)]);
        assert!(is_cyclic(&g));
        g.remove_arc(2, 0).unwrap();
        assert!(!is_cyclic(&g));
    }

    #[test]
    fn test_shrink_can_break_cycle() {
        // Dropping vertex 2 removes both its own arcs and the pruned
        // arc 1→2, leaving only 0→1.
        let mut g = graph_from(3, &[(0, 1), (1, 2), (2, 0)]);
        g.resize(2);
        assert!(!is_cyclic(&g));
    }
}
