use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use noisegraph::module::{
    Add, Billow, Perlin, RidgedMulti, ScaleBias, Select, Turbulence, Voronoi,
};
use noisegraph::{
    ModuleCollection, ModuleGraph, ModuleId, NoiseGenerator, PlaneBuilder, RenderImage,
    RollingParticle, SpawnShape,
};

const SIZE: usize = 257;
const SEED: i32 = 2025;

// Select between ridged mountains and flattened billows, then turbulence
fn terrain_graph() -> (ModuleGraph, ModuleId) {
    let mut graph = ModuleGraph::new();
    let mountains = graph.add(RidgedMulti::new(SEED, 1.5, 2.0, 6));
    let billow = graph.add(Billow::new(SEED, 2.0, 0.5, 4));
    let plains = graph.add(ScaleBias::new(0.125, -0.75));
    let control = graph.add(Perlin::new(SEED + 1, 0.5, 0.25, 3));
    let select = graph.add(Select::new(0.0, 1000.0, 0.125));
    let terrain = graph.add(Turbulence::new(SEED + 2, 4.0, 0.125, 4));

    graph.connect(plains, &[billow]).unwrap();
    graph.connect(select, &[plains, mountains, control]).unwrap();
    graph.connect(terrain, &[select]).unwrap();
    (graph, terrain)
}

fn bench_generators(c: &mut Criterion) {
    let perlin = Perlin::new(SEED, 1.0, 0.5, 6);
    c.bench_function("Perlin 6 octaves, single sample", |b| {
        b.iter(|| perlin.get3(black_box(1.25), black_box(-0.5), black_box(3.75)))
    });

    let voronoi = Voronoi::new(SEED, 1.0, 1.0, true);
    c.bench_function("Voronoi with distance, single sample", |b| {
        b.iter(|| voronoi.get3(black_box(1.25), black_box(-0.5), black_box(3.75)))
    });
}

fn bench_graph_evaluation(c: &mut Criterion) {
    let mut graph = ModuleGraph::new();
    let a = graph.add(Perlin::new(SEED, 1.0, 0.5, 6));
    let b = graph.add(Perlin::new(SEED + 1, 2.0, 0.5, 6));
    let add = graph.add(Add);
    graph.connect(add, &[a, b]).unwrap();
    c.bench_function("Add(Perlin, Perlin) through the graph", |bench| {
        bench.iter(|| graph.get_value(add, black_box(1.25), black_box(-0.5), black_box(3.75)))
    });

    let (graph, terrain) = terrain_graph();
    c.bench_function("terrain graph, single sample", |bench| {
        bench.iter(|| graph.get_value(terrain, black_box(1.25), black_box(-0.5), black_box(3.75)))
    });
}

fn bench_plane_builder(c: &mut Criterion) {
    let (graph, terrain) = terrain_graph();
    c.bench_function("terrain graph, 257x257 plane", |b| {
        b.iter(|| PlaneBuilder::new(&graph, terrain, SIZE, SIZE).build_map().unwrap())
    });
    c.bench_function("terrain graph, 257x257 seamless plane", |b| {
        b.iter(|| {
            PlaneBuilder::new(&graph, terrain, SIZE, SIZE)
                .with_seamless(true)
                .build_map()
                .unwrap()
        })
    });
}

fn bench_collection_and_render(c: &mut Criterion) {
    let json = r#"[
        { "name": "base", "type": "Perlin", "parameters": ["octaveCount=6"] },
        { "name": "terraced", "type": "Terrace", "parameters": ["terraceCount=6"],
          "sourceModules": ["base"] }
    ]"#;
    c.bench_function("collection from JSON", |b| {
        b.iter(|| ModuleCollection::from_json(black_box(json)).unwrap())
    });

    let collection = ModuleCollection::from_json(json).unwrap();
    let map = PlaneBuilder::new(collection.graph(), collection.get("terraced").unwrap(), SIZE, SIZE)
        .build_map()
        .unwrap();
    let mut render = RenderImage::new();
    render.build_terrain_gradient();
    render.light_enabled = true;
    c.bench_function("render 257x257 lit terrain", |b| {
        b.iter(|| render.render(black_box(&map)).unwrap())
    });
}

fn bench_rolling_particle(c: &mut Criterion) {
    let particles = RollingParticle::new(128, 128, 7, SpawnShape::Circle, 0.6, 40, 2000);
    c.bench_function("rolling particle 128x128, 2000 particles", |b| {
        b.iter(|| particles.generate())
    });
}

criterion_group!(
    noise_benchmarks,
    bench_generators,
    bench_graph_evaluation,
    bench_plane_builder,
    bench_collection_and_render,
    bench_rolling_particle
);
criterion_main!(noise_benchmarks);
