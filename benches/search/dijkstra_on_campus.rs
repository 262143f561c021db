use campus_core::{
    graph::Graph,
    search::dijkstra::Dijkstra,
    util::campus_map::{campus_edges, campus_graph},
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

criterion_group!(benches, criterion_benchmark, build_graph);
criterion_main!(benches);

pub fn criterion_benchmark(c: &mut Criterion) {
    let campus = campus_graph();

    let mut group = c.benchmark_group("dijkstra_on_campus");
    for (start, end) in [
        ("Library South", "Aderhold"),
        ("Library South", "Petit Science Center"),
        ("University Lofts", "55 Park Place"),
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{start} -> {end}")),
            &campus,
            |b, g| {
                b.iter(|| {
                    let mut dijkstra = Dijkstra::new(g);
                    dijkstra.search(black_box(start), black_box(end))
                })
            },
        );
    }
    group.finish();
}

fn build_graph(c: &mut Criterion) {
    c.bench_function("build_campus_graph", |b| {
        b.iter(|| Graph::build(black_box(campus_edges())))
    });
}
