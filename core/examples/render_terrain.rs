// Builds a small terrain graph in code, renders it lit and unlit, and
// writes an island mask from the rolling particle generator.
//
//     RUST_LOG=debug cargo run --example render_terrain

use glam::DVec2;
use noisegraph::module::{Billow, Perlin, RidgedMulti, ScaleBias, Select, Turbulence};
use noisegraph::{ModuleGraph, PlaneBuilder, RenderImage, RollingParticle, SpawnShape};
use palette::LinSrgb;
use tracing_subscriber::EnvFilter;

const WIDTH: usize = 512;
const HEIGHT: usize = 256;
const SEED: i32 = 2025;

fn main() -> noisegraph::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut graph = ModuleGraph::new();

    // mountains where the control is high, gentle billows elsewhere
    let mountains = graph.add(RidgedMulti::new(SEED, 1.5, 2.0, 6));
    let billow = graph.add(Billow::new(SEED, 2.0, 0.5, 4));
    let plains = graph.add(ScaleBias::new(0.125, -0.75));
    graph.connect(plains, &[billow])?;

    let control = graph.add(Perlin::new(SEED + 1, 0.5, 0.25, 3));
    let select = graph.add(Select::new(0.0, 1000.0, 0.125));
    graph.connect(select, &[plains, mountains, control])?;

    let terrain = graph.add(Turbulence::new(SEED + 2, 4.0, 0.125, 4));
    graph.connect(terrain, &[select])?;

    let map = PlaneBuilder::new(&graph, terrain, WIDTH, HEIGHT)
        .with_bounds(DVec2::new(6.0, 1.0), DVec2::new(10.0, 3.0))
        .build_map()?;

    let mut render = RenderImage::new();
    render.build_terrain_gradient();
    render.save(&map, "terrain_flat.png")?;
    render.light_enabled = true;
    render.set_light_contrast(3.0);
    render.save(&map, "terrain_lit.png")?;

    let mut island = RollingParticle::new(256, 256, SEED as u64, SpawnShape::Circle, 0.6, 60, 6000);
    island.value_auto_max = true;
    let mut mask = island.generate();
    mask.apply_gamma(0.5);
    // the mask lies in [0, 1]
    let mut gray = RenderImage::new();
    gray.clear_gradient();
    gray.add_gradient_point(0.0, LinSrgb::new(0.0, 0.0, 0.0));
    gray.add_gradient_point(1.0, LinSrgb::new(1.0, 1.0, 1.0));
    gray.save(&mask, "island_mask.png")?;

    println!("wrote terrain_flat.png, terrain_lit.png, island_mask.png");
    Ok(())
}
