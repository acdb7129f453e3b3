// Loads a module graph from a JSON description and renders it.
//
//     cargo run --example collection_demo -- graph.json out.png
//
// Without arguments the built-in description below is used.

use std::env;
use std::fs;

use noisegraph::{ModuleCollection, PlaneBuilder, RenderImage};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_GRAPH: &str = r#"[
    { "name": "continents", "type": "Perlin",
      "parameters": ["seed=7", "frequency=0.75", "persistence=0.55", "octaveCount=8"] },
    { "name": "shaped", "type": "Curve",
      "parameters": ["point=-2,-1.625", "point=-1,-1.375", "point=0,-0.375",
                     "point=0.0625,0.125", "point=0.25,0.5", "point=1,0.75", "point=2,1"],
      "sourceModules": ["continents"] },
    { "name": "cells", "type": "Voronoi",
      "parameters": ["seed=7", "frequency=4", "enableDistance=true", "displacement=0"] },
    { "name": "cracks", "type": "ScaleBias", "parameters": ["scale=-0.1"],
      "sourceModules": ["cells"] },
    { "name": "final", "type": "Add", "sourceModules": ["shaped", "cracks"] }
]"#;

fn main() -> noisegraph::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let json = match args.next() {
        Some(path) => fs::read_to_string(&path).unwrap_or_else(|err| {
            eprintln!("cannot read {path}: {err}");
            std::process::exit(1);
        }),
        None => DEFAULT_GRAPH.to_string(),
    };
    let out = args.next().unwrap_or_else(|| "collection.png".to_string());

    let collection = ModuleCollection::from_json(&json)?;
    for warning in collection.warnings() {
        warn!("{warning}");
    }

    let Some(id) = collection.get("final") else {
        eprintln!("description has no module named `final`");
        std::process::exit(1);
    };
    info!(modules = collection.graph().len(), "collection loaded");

    let map = PlaneBuilder::new(collection.graph(), id, 512, 512)
        .with_seamless(true)
        .build_map()?;

    let mut render = RenderImage::new();
    render.build_terrain_gradient();
    render.light_enabled = true;
    render.wrap_enabled = true;
    render.save(&map, &out)?;
    println!("wrote {out}");
    Ok(())
}
