use criterion::{black_box, criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use articulation::{
    articulation::{IterativeDfs, RecursiveDfs},
    generate, ArticulationAnalyzer, CutVertexFinder, Graph,
};
use flexi_logger::Logger;
use rand::{Rng, SeedableRng};
use std::sync::{LazyLock, Mutex};

#[derive(Clone, Copy, Debug)]
enum Shape {
    /// About as many edges as vertices, lots of cut vertices.
    Sparse,
    /// Average degree 8, few cut vertices.
    Dense,
    Path,
}

impl Shape {
    fn build(&self, n: usize, seed: u64) -> Graph {
        match self {
            Self::Sparse => generate::random_graph(n, n, seed),
            Self::Dense => generate::random_graph(n, 4 * n, seed),
            Self::Path => generate::path(n),
        }
    }
}

fn analyze_impl<F: CutVertexFinder>(b: &mut Bencher, g: &Graph) {
    b.iter(|| black_box(ArticulationAnalyzer::<F>::analyze(black_box(g))));
}

fn per_shape(c: &mut Criterion) {
    let _ = &*LOGGER;
    let mut g = c.benchmark_group("Analyze N = 10^4");
    let mut rng = rand::rngs::StdRng::seed_from_u64(4815162342);
    const N: usize = 10000;
    for shape in [Shape::Sparse, Shape::Dense, Shape::Path] {
        let seed = rng.gen();
        log::debug!("Using seed {seed}");
        let graph = shape.build(N, seed);
        g.throughput(criterion::Throughput::Elements(
            (graph.vertex_count() + graph.edge_count()) as u64,
        ));
        let input_str = format!("{shape:?}").to_lowercase();
        g.bench_with_input(BenchmarkId::new("recursive", &input_str), &graph, |b, graph| {
            analyze_impl::<RecursiveDfs>(b, graph)
        });
        g.bench_with_input(BenchmarkId::new("iterative", &input_str), &graph, |b, graph| {
            analyze_impl::<IterativeDfs>(b, graph)
        });
    }
    g.finish();
}

fn incremental(c: &mut Criterion) {
    let _ = &*LOGGER;
    let mut g = c.benchmark_group("Add edge then analyze");
    for n in [100usize, 1000] {
        g.bench_with_input(BenchmarkId::new("iterative", n), &n, |b, &n| {
            b.iter(|| {
                let mut graph = Graph::new();
                let mut rng = rand::rngs::StdRng::seed_from_u64(n as u64);
                for _ in 0..n {
                    let u = rng.gen_range(0..n).to_string();
                    let v = rng.gen_range(0..n).to_string();
                    graph.add_edge(&u, &v);
                    black_box(graph.analyze());
                }
            })
        });
    }
    g.finish();
}

criterion_group!(benches, per_shape, incremental);
criterion_main!(benches);

pub static LOGGER: LazyLock<Mutex<flexi_logger::LoggerHandle>> = LazyLock::new(|| {
    Mutex::new(
        Logger::try_with_env_or_str("info")
            .unwrap()
            .write_mode(flexi_logger::WriteMode::SupportCapture)
            .log_to_stdout()
            .format(|w, now, record| {
                write!(
                    w,
                    "{} [{}] {}",
                    now.format("%H:%M:%S"),
                    &record.level().as_str()[0..1],
                    record.args(),
                )
            })
            .start()
            .unwrap(),
    )
});
