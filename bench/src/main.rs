use std::time::Instant;

use arcgraph_core::{is_cyclic, shortest_path, Graph, Strategy};

/// Above this vertex count the quadratic linear-scan strategy is skipped.
const LINEAR_SCAN_LIMIT: usize = 20_000;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let vertex_count: usize = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(100_000)
        .max(2);

    if mode == "help" || mode == "--help" {
        println!("Usage: arcgraph-bench [mode] [vertex_count]");
        println!();
        println!("Modes:");
        println!("  all       Run all generators and benchmark each (default)");
        println!("  chain     Single weighted path (deep, worst case for path length)");
        println!("  random    Erdos-Renyi uniform random arcs");
        println!("  barbell   Two dense clusters connected by a thin bridge");
        println!("  lattice   Ring lattice with random shortcut arcs");
        println!();
        println!("Default vertex_count: 100000");
        return;
    }

    println!("arcgraph-bench");
    println!("==============");
    println!();

    let generators: Vec<(&str, fn(usize) -> Graph)> = match mode {
        "chain" => vec![("Weighted chain", gen_chain)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "barbell" => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        "lattice" => vec![("Ring lattice + shortcuts", gen_lattice)],
        "all" => vec![
            ("Weighted chain", gen_chain as fn(usize) -> Graph),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
            ("Ring lattice + shortcuts", gen_lattice),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, vertex_count);
    }
}

fn run_benchmark(name: &str, generator: fn(usize) -> Graph, vertex_count: usize) {
    println!("--- {} ---", name);

    let t = Instant::now();
    let graph = generator(vertex_count);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s — {} vertices, {} arcs",
        gen_time.as_secs_f64(),
        graph.vertex_count(),
        graph.arc_count()
    );

    // Same single-pair query under every frontier strategy; the reported
    // distances must agree, only the timing differs.
    let origin = 0;
    let destination = graph.vertex_count() - 1;
    println!();
    println!("{:>12} {:>14} {:>8} {:>10}", "strategy", "distance", "hops", "time");
    println!("{:->12} {:->14} {:->8} {:->10}", "", "", "", "");

    let strategies = [
        ("binary-heap", Strategy::BinaryHeap),
        ("ordered-set", Strategy::OrderedSet),
        ("linear-scan", Strategy::LinearScan),
    ];

    let mut reference = None;
    for (label, strategy) in strategies {
        if strategy == Strategy::LinearScan && graph.vertex_count() > LINEAR_SCAN_LIMIT {
            println!("{:>12} {:>14}", label, "(skipped)");
            continue;
        }

        let t = Instant::now();
        let result = shortest_path(&graph, origin, destination, strategy)
            .expect("bench endpoints are always in range");
        let elapsed = t.elapsed();

        println!(
            "{:>12} {:>14} {:>8} {:>8.1}ms",
            label,
            result.distance.to_string(),
            result.path.len().saturating_sub(1),
            elapsed.as_secs_f64() * 1000.0
        );

        match reference {
            None => reference = Some(result.distance),
            Some(expected) => assert_eq!(
                result.distance, expected,
                "strategies disagree on {}",
                name
            ),
        }
    }

    let t = Instant::now();
    let cyclic = is_cyclic(&graph);
    let elapsed = t.elapsed();
    println!();
    println!(
        "is_cyclic: {} in {:.1}ms",
        cyclic,
        elapsed.as_secs_f64() * 1000.0
    );
    println!();
}

// ---------------------------------------------------------------------------
// Generators — all O(V + E), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn weight(&mut self) -> u32 {
        1 + self.next(100) as u32
    }
}

/// Single path 0→1→…→n-1 with random weights: the longest possible
/// shortest path, and the deepest input the cycle detector sees.
fn gen_chain(vertex_count: usize) -> Graph {
    let mut graph = Graph::new(vertex_count);
    let mut rng = FastRng::new(42);

    for i in 0..vertex_count.saturating_sub(1) {
        graph
            .add_arc(i, i + 1, rng.weight())
            .expect("chain arcs stay in range");
    }
    graph
}

/// Erdos-Renyi: ~8 uniform random arcs per vertex. Baseline topology
/// with no structure; almost certainly cyclic.
fn gen_random(vertex_count: usize) -> Graph {
    let mut graph = Graph::new(vertex_count);
    let mut rng = FastRng::new(54321);

    let target_arcs = vertex_count * 8;
    for _ in 0..target_arcs {
        let from = rng.next(vertex_count as u64) as usize;
        let to = rng.next(vertex_count as u64) as usize;
        if from != to {
            graph
                .add_arc(from, to, rng.weight())
                .expect("sampled endpoints stay in range");
        }
    }
    graph
}

/// Two dense clusters joined by a thin bridge chain: every route from one
/// side to the other funnels through the bottleneck.
fn gen_barbell(vertex_count: usize) -> Graph {
    let bridge_len = 10.min(vertex_count / 3);
    let cluster = (vertex_count - bridge_len) / 2;
    let mut graph = Graph::new(vertex_count);
    let mut rng = FastRng::new(99999);

    // Cluster A: vertices 0..cluster, ~10 random arcs each.
    for i in 0..cluster {
        for _ in 0..10 {
            let to = rng.next(cluster as u64) as usize;
            if to != i {
                graph.add_arc(i, to, rng.weight()).expect("cluster A in range");
            }
        }
    }

    // Bridge: chain from the last A vertex through the middle section.
    let bridge_start = cluster;
    for i in 0..bridge_len {
        let id = bridge_start + i;
        let prev = if i == 0 { cluster.saturating_sub(1) } else { id - 1 };
        graph.add_arc(prev, id, rng.weight()).expect("bridge in range");
    }

    // Cluster B: the rest, chained into the bridge end.
    let b_start = bridge_start + bridge_len;
    if b_start > 0 && b_start < vertex_count {
        graph
            .add_arc(b_start - 1, b_start, rng.weight())
            .expect("bridge exit in range");
    }
    for i in b_start..vertex_count {
        for _ in 0..10 {
            let to = b_start + rng.next((vertex_count - b_start) as u64) as usize;
            if to != i {
                graph.add_arc(i, to, rng.weight()).expect("cluster B in range");
            }
        }
    }

    graph
}

/// Ring lattice: each vertex points at its next 4 ring neighbors, plus a
/// 5% chance of a random long-range shortcut. Short paths everywhere.
fn gen_lattice(vertex_count: usize) -> Graph {
    let mut graph = Graph::new(vertex_count);
    let mut rng = FastRng::new(67890);

    for i in 0..vertex_count {
        for j in 1..=4usize {
            let neighbor = (i + j) % vertex_count;
            if neighbor != i {
                graph
                    .add_arc(i, neighbor, rng.weight())
                    .expect("ring neighbors in range");
            }
        }
        if rng.next(20) == 0 {
            let shortcut = rng.next(vertex_count as u64) as usize;
            if shortcut != i {
                graph
                    .add_arc(i, shortcut, rng.weight())
                    .expect("shortcut in range");
            }
        }
    }

    graph
}
