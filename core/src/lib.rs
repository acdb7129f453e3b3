// noisegraph: composable coherent-noise modules, plus the builders,
// renderer and particle generator that turn them into terrain maps
pub mod builder;
pub mod collection;
pub mod error;
pub mod graph;
pub mod interpolate;
pub mod map;
pub mod module;
pub mod noisegen;
pub mod particle;
pub mod registry;
pub mod render;
pub mod simplex;
mod vectors;

pub use builder::{CubeBuilder, PlaneBuilder};
pub use collection::{ModuleCollection, ModuleInfo};
pub use error::{NoiseError, Result};
pub use graph::{ModuleGraph, ModuleId};
pub use interpolate::Quality;
pub use map::{Map2D, Map3D, NoiseMap2D, NoiseMap3D};
pub use module::{Module, ModuleKind};
pub use particle::{RollingParticle, SpawnShape};
pub use registry::ModuleRegistry;
pub use render::{GradientPoint, RenderImage};

// Self-contained noise generator that can be sampled without a graph.
// Generators without sources implement this next to `Module`.
pub trait NoiseGenerator {
    // Sample 3D noise at (x, y, z).
    fn get3(&self, x: f64, y: f64, z: f64) -> f64;

    // Sample the y = 0 plane, the way the plane builder does.
    fn get2(&self, x: f64, y: f64) -> f64 {
        self.get3(x, 0.0, y)
    }
}
