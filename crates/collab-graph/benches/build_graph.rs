use collab_core::rng::RngHandle;
use collab_graph::gen_gnp;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_graph_bench(c: &mut Criterion) {
    c.bench_function("gnp_989_0.03", |b| {
        b.iter(|| {
            let mut rng = RngHandle::from_seed(4071);
            let graph = gen_gnp(989, 0.03, &mut rng).unwrap();
            black_box(graph);
        });
    });
}

criterion_group!(benches, build_graph_bench);
criterion_main!(benches);
