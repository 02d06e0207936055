//! 四种策略在同一随机图上的运行耗时

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flowsim::algorithm::endpoints::{farthest_vertex, random_source};
use flowsim::{generate_graph, GeneratorConfig, SimulationRunner, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_strategies(c: &mut Criterion) {
    let config = GeneratorConfig {
        vertices: 200,
        radius: 0.2,
        upper_cap: 50,
    };
    let mut rng = StdRng::seed_from_u64(17);
    let graph = generate_graph(&config, &mut rng).unwrap();
    let source = random_source(&graph, &mut rng).unwrap();
    let (sink, _) = farthest_vertex(&graph, source).unwrap();
    let runner = SimulationRunner::new(&graph, source, sink);

    let mut group = c.benchmark_group("max_flow");
    for strategy in Strategy::ALL {
        group.bench_function(strategy.name(), |b| {
            let mut rng = StdRng::seed_from_u64(5);
            b.iter(|| black_box(runner.run_strategy(strategy, &mut rng).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
