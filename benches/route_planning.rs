use env_logger::Env;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use delivery_route::prelude::*;
use nanorand::{Rng, WyRand};

/// A corridor grid of `size * size` junctions, each connected to its right and upper neighbor
/// in both directions. Weights vary a little so there are few ties.
fn corridor_grid(size: usize) -> MapModel {
    let mut rng = WyRand::new_seed(4);
    let label = |x: usize, y: usize| format!("N{}_{}", x, y);

    let mut builder = MapBuilder::new();
    for x in 0..size {
        for y in 0..size {
            builder = builder.node(&label(x, y), (x as f64, y as f64));
            let weight = 1.0 + rng.generate_range(0_u32..10) as f64 / 10.0;
            if x + 1 < size {
                builder = builder.two_way(&label(x, y), &label(x + 1, y), weight);
            }
            if y + 1 < size {
                builder = builder.two_way(&label(x, y), &label(x, y + 1), weight);
            }
        }
    }
    builder.build().expect("generated weights are positive")
}

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info") // Change this to trace to see every expansion.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_floor_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("Floor plan");
    init();

    let map = MapModel::floor_plan();
    let config = NavigationConfig::default();

    group.bench_function("find_path START -> 12B", |b| {
        b.iter(|| find_path(&map, black_box("START"), black_box("12B")))
    });
    group.bench_function("delivery plan START -> 11A", |b| {
        b.iter(|| DeliveryPlan::plan(&map, black_box("11A"), &config))
    });
    group.bench_function("route table from START", |b| {
        b.iter(|| RouteTable::from_origin(&map, black_box("START")))
    });
}

fn bench_corridor_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("Corridor grid");
    group.sample_size(10);

    for size in [16, 64] {
        let map = corridor_grid(size);
        let labels: Vec<String> = map.labels().map(str::to_owned).collect();
        let mut rng = WyRand::new_seed(7);
        let pairs: Vec<(usize, usize)> = (0..32)
            .map(|_| {
                (
                    rng.generate_range(0..labels.len()),
                    rng.generate_range(0..labels.len()),
                )
            })
            .collect();

        let id = format!("Random pairs, Grid Size: ({}, {})", size, size);
        group.bench_function(&id, |b| {
            b.iter(|| {
                for &(start, goal) in pairs.iter() {
                    let route = find_path(&map, &labels[start], &labels[goal]);
                    let _ = black_box(route.map(|route| generate_instructions(&route.path, &map)));
                }
            })
        });

        #[cfg(feature = "parallel")]
        let id = format!("Route table, Parallel, Grid Size: ({}, {})", size, size);
        #[cfg(not(feature = "parallel"))]
        let id = format!("Route table, Single Threaded, Grid Size: ({}, {})", size, size);
        group.bench_function(&id, |b| b.iter(|| RouteTable::from_origin(&map, &labels[0])));
    }
}

criterion_group!(benches, bench_floor_plan, bench_corridor_grid);
criterion_main!(benches);
