use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tangle::{AttributeMap, GraphStore, GraphType};

/// Benchmark node insertion throughput
fn bench_node_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("node_insertion");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut store = GraphStore::new(GraphType::Mixed, false);
                for i in 0..size {
                    let mut attributes = AttributeMap::new();
                    attributes.insert("name".to_string(), format!("node-{}", i).into());
                    store.add_node(format!("n{}", i), attributes).unwrap();
                }
                store
            });
        });
    }
    group.finish();
}

/// Benchmark parallel-edge attach/detach under heavy fan-out on one pair
fn bench_parallel_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_fanout");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut store = GraphStore::new(GraphType::Directed, true);
                let a = store.add_node("a", AttributeMap::new()).unwrap();
                let b_node = store.add_node("b", AttributeMap::new()).unwrap();

                for i in 0..size {
                    store
                        .add_edge(format!("e{}", i), a, b_node, false, AttributeMap::new())
                        .unwrap();
                }
                for i in (0..size).rev() {
                    store.remove_edge(&format!("e{}", i)).unwrap();
                }
                store
            });
        });
    }
    group.finish();
}

/// Benchmark edge lookup between connected pairs
fn bench_edge_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_lookup");

    for size in [1000, 10_000].iter() {
        // Setup: a ring of directed edges
        let mut store = GraphStore::new(GraphType::Directed, false);
        let ids: Vec<_> = (0..*size)
            .map(|i| store.add_node(format!("n{}", i), AttributeMap::new()).unwrap())
            .collect();
        for i in 0..*size {
            let next = (i + 1) % size;
            store
                .add_edge(format!("e{}", i), ids[i], ids[next], false, AttributeMap::new())
                .unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut hits = 0usize;
                for i in 0..size {
                    let next = (i + 1) % size;
                    if store.edge_connecting(ids[i], ids[next]).is_some() {
                        hits += 1;
                    }
                }
                hits
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_node_insertion,
    bench_parallel_fanout,
    bench_edge_lookup
);
criterion_main!(benches);
