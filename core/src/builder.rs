use glam::{DVec2, DVec3};
use tracing::debug;

use crate::error::Result;
use crate::graph::{ModuleGraph, ModuleId};
use crate::interpolate::linear;
use crate::map::{Map2D, Map3D, NoiseMap2D, NoiseMap3D};

// Samples a module over a rectangle of the y = 0 plane: map cell (x, y)
// reads the module at (u, 0, v) with u along x and v along y.
pub struct PlaneBuilder<'a> {
    pub graph: &'a ModuleGraph,
    pub module: ModuleId,
    pub width: usize,
    pub height: usize,
    pub bounds_min: DVec2,
    pub bounds_max: DVec2,
    // blend opposite edges so the map tiles
    pub seamless: bool,
}

impl<'a> PlaneBuilder<'a> {
    pub fn new(graph: &'a ModuleGraph, module: ModuleId, width: usize, height: usize) -> Self {
        Self {
            graph,
            module,
            width,
            height,
            bounds_min: DVec2::splat(-1.0),
            bounds_max: DVec2::splat(1.0),
            seamless: false,
        }
    }

    pub fn with_bounds(mut self, min: DVec2, max: DVec2) -> Self {
        self.bounds_min = min;
        self.bounds_max = max;
        self
    }

    pub fn with_seamless(mut self, seamless: bool) -> Self {
        self.seamless = seamless;
        self
    }

    fn size(&self) -> DVec2 {
        self.bounds_max - self.bounds_min
    }

    // Plane position of map cell (x, y)
    fn position(&self, x: usize, y: usize) -> DVec2 {
        let delta = self.size() / DVec2::new(self.width as f64, self.height as f64);
        self.bounds_min + delta * DVec2::new(x as f64, y as f64)
    }

    fn sample(&self, p: DVec2) -> Result<f64> {
        self.graph.get_value(self.module, p.x, 0.0, p.y)
    }

    // Mixes the value at p with its copies one bounds-width (and height)
    // away, weighted so the far edge matches the near edge.
    fn seamless_sample(&self, p: DVec2) -> Result<f64> {
        let size = self.size();
        let sw = self.sample(p)?;
        let se = self.sample(p + DVec2::new(size.x, 0.0))?;
        let nw = self.sample(p + DVec2::new(0.0, size.y))?;
        let ne = self.sample(p + size)?;

        let blend = DVec2::ONE - (p - self.bounds_min) / size;
        let v0 = linear(sw, se, blend.x);
        let v1 = linear(nw, ne, blend.x);
        Ok(linear(v0, v1, blend.y))
    }

    // Fills the whole destination, resizing it first
    pub fn build<M: Map2D>(&self, dest: &mut M) -> Result<()> {
        debug!(width = self.width, height = self.height, seamless = self.seamless, "building plane");
        dest.resize(self.width, self.height);
        self.build_region(dest, 0, 0, self.width, self.height)?;
        debug!("plane built");
        Ok(())
    }

    pub fn build_map(&self) -> Result<NoiseMap2D> {
        let mut map = NoiseMap2D::default();
        self.build(&mut map)?;
        Ok(map)
    }

    // Fills a sub-rectangle of a destination that is already sized; the
    // region is cut to the destination.
    pub fn build_region<M: Map2D>(
        &self,
        dest: &mut M,
        x0: usize,
        y0: usize,
        width: usize,
        height: usize,
    ) -> Result<()> {
        let x1 = x0.saturating_add(width).min(self.width).min(dest.width());
        let y1 = y0.saturating_add(height).min(self.height).min(dest.height());
        for y in y0..y1 {
            for x in x0..x1 {
                let p = self.position(x, y);
                let value = if self.seamless {
                    self.seamless_sample(p)?
                } else {
                    self.sample(p)?
                };
                dest.set(x, y, value as f32);
            }
        }
        Ok(())
    }
}

// Samples a module over an axis-aligned box; map cell (x, y, z) reads the
// module at the matching point of the box.
pub struct CubeBuilder<'a> {
    pub graph: &'a ModuleGraph,
    pub module: ModuleId,
    pub width: usize,
    pub height: usize,
    pub depth: usize,
    pub bounds_min: DVec3,
    pub bounds_max: DVec3,
    pub seamless: bool,
}

impl<'a> CubeBuilder<'a> {
    pub fn new(
        graph: &'a ModuleGraph,
        module: ModuleId,
        width: usize,
        height: usize,
        depth: usize,
    ) -> Self {
        Self {
            graph,
            module,
            width,
            height,
            depth,
            bounds_min: DVec3::splat(-1.0),
            bounds_max: DVec3::splat(1.0),
            seamless: false,
        }
    }

    pub fn with_bounds(mut self, min: DVec3, max: DVec3) -> Self {
        self.bounds_min = min;
        self.bounds_max = max;
        self
    }

    pub fn with_seamless(mut self, seamless: bool) -> Self {
        self.seamless = seamless;
        self
    }

    fn size(&self) -> DVec3 {
        self.bounds_max - self.bounds_min
    }

    fn position(&self, x: usize, y: usize, z: usize) -> DVec3 {
        let cells = DVec3::new(self.width as f64, self.height as f64, self.depth as f64);
        self.bounds_min + self.size() / cells * DVec3::new(x as f64, y as f64, z as f64)
    }

    // Blend over x and z at a fixed height
    fn corner_blend(&self, p: DVec3) -> Result<f64> {
        let size = self.size();
        let get = |q: DVec3| self.graph.get_value_vec(self.module, q);
        let sw = get(p)?;
        let se = get(p + DVec3::new(size.x, 0.0, 0.0))?;
        let nw = get(p + DVec3::new(0.0, 0.0, size.z))?;
        let ne = get(p + DVec3::new(size.x, 0.0, size.z))?;

        let x_blend = 1.0 - (p.x - self.bounds_min.x) / size.x;
        let z_blend = 1.0 - (p.z - self.bounds_min.z) / size.z;
        let v0 = linear(sw, se, x_blend);
        let v1 = linear(nw, ne, x_blend);
        Ok(linear(v0, v1, z_blend))
    }

    fn seamless_sample(&self, p: DVec3) -> Result<f64> {
        let size = self.size();
        let bottom = self.corner_blend(p)?;
        let top = self.corner_blend(p + DVec3::new(0.0, size.y, 0.0))?;
        let y_blend = 1.0 - (p.y - self.bounds_min.y) / size.y;
        Ok(linear(bottom, top, y_blend))
    }

    pub fn build<M: Map3D>(&self, dest: &mut M) -> Result<()> {
        debug!(
            width = self.width,
            height = self.height,
            depth = self.depth,
            seamless = self.seamless,
            "building cube"
        );
        dest.resize(self.width, self.height, self.depth);
        self.build_region(dest, [0, 0, 0], [self.width, self.height, self.depth])
    }

    pub fn build_map(&self) -> Result<NoiseMap3D> {
        let mut map = NoiseMap3D::default();
        self.build(&mut map)?;
        Ok(map)
    }

    // Fills the box starting at `origin` with extent `size` (x, y, z)
    pub fn build_region<M: Map3D>(&self, dest: &mut M, origin: [usize; 3], size: [usize; 3]) -> Result<()> {
        let x1 = origin[0].saturating_add(size[0]).min(self.width).min(dest.width());
        let y1 = origin[1].saturating_add(size[1]).min(self.height).min(dest.height());
        let z1 = origin[2].saturating_add(size[2]).min(self.depth).min(dest.depth());
        for y in origin[1]..y1 {
            for z in origin[2]..z1 {
                for x in origin[0]..x1 {
                    let p = self.position(x, y, z);
                    let value = if self.seamless {
                        self.seamless_sample(p)?
                    } else {
                        self.graph.get_value_vec(self.module, p)?
                    };
                    dest.set(x, y, z, value as f32);
                }
            }
        }
        Ok(())
    }
}
