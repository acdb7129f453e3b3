use crate::interpolate::{Quality, linear};

// Row-major nested height map, access as `map[y][x]`.
pub type HeightMap2D = Vec<Vec<f32>>;

// Destination of a plane builder
pub trait Map2D {
    fn resize(&mut self, width: usize, height: usize);
    fn set(&mut self, x: usize, y: usize, value: f32);
    fn get(&self, x: usize, y: usize) -> f32;
    fn width(&self) -> usize;
    fn height(&self) -> usize;
}

// Destination of a cube builder
pub trait Map3D {
    fn resize(&mut self, width: usize, height: usize, depth: usize);
    fn set(&mut self, x: usize, y: usize, z: usize, value: f32);
    fn get(&self, x: usize, y: usize, z: usize) -> f32;
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn depth(&self) -> usize;
}

// Dense 2D grid of samples, stored row-major in one Vec.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoiseMap2D {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl NoiseMap2D {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    pub fn from_rows(rows: &HeightMap2D) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut map = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().take(width).enumerate() {
                map.data[y * width + x] = v;
            }
        }
        map
    }

    pub fn to_rows(&self) -> HeightMap2D {
        self.rows().map(<[f32]>::to_vec).collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks(self.width.max(1)).take(self.height)
    }

    // flatten into a single row-major Vec<f32>
    // e.g. for converting to an image buffer
    pub fn flatten(&self) -> Vec<f32> {
        self.data.clone()
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn min_max(&self) -> Option<(f32, f32)> {
        self.data.iter().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    // Rescale all samples into [0, 1]
    pub fn normalize(&mut self) {
        let Some((min, max)) = self.min_max() else {
            return;
        };
        let range = (max - min).max(0.001); // prevent zero-division
        for v in &mut self.data {
            *v = (*v - min) / range;
        }
    }

    // Gamma curve for contrast; expects samples already in [0, 1]
    pub fn apply_gamma(&mut self, gamma: f32) {
        for v in &mut self.data {
            *v = v.max(0.0).powf(gamma);
        }
    }

    // Sample with edge clamping
    fn at(&self, x: isize, y: isize) -> f32 {
        let x = x.clamp(0, self.width as isize - 1) as usize;
        let y = y.clamp(0, self.height as isize - 1) as usize;
        self.data[y * self.width + x]
    }

    // Reads the map as if it were resized by (`sx`, `sy`): output cell (x, y)
    // maps to (x / sx, y / sy) here, blended between the four surrounding
    // samples with the given quality curve.
    pub fn sample_scaled(&self, x: usize, y: usize, sx: f64, sy: f64, quality: Quality) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }
        let fx = x as f64 / sx;
        let fy = y as f64 / sy;
        let x0 = fx.floor();
        let y0 = fy.floor();
        let tx = quality.shape(fx - x0);
        let ty = quality.shape(fy - y0);
        let (x0, y0) = (x0 as isize, y0 as isize);

        let top = linear(self.at(x0, y0) as f64, self.at(x0 + 1, y0) as f64, tx);
        let bottom = linear(self.at(x0, y0 + 1) as f64, self.at(x0 + 1, y0 + 1) as f64, tx);
        linear(top, bottom, ty) as f32
    }

    // Like `sample_scaled`, with the scale chosen so
    // this map stretches over `dim_width` x `dim_height` cells.
    pub fn sample_dim(&self, x: usize, y: usize, dim_width: usize, dim_height: usize, quality: Quality) -> f32 {
        let sx = dim_width as f64 / self.width.max(1) as f64;
        let sy = dim_height as f64 / self.height.max(1) as f64;
        self.sample_scaled(x, y, sx, sy, quality)
    }
}

impl Map2D for NoiseMap2D {
    // Keeps the buffer when the size is unchanged
    fn resize(&mut self, width: usize, height: usize) {
        if self.width != width || self.height != height {
            *self = Self::new(width, height);
        }
    }

    fn set(&mut self, x: usize, y: usize, value: f32) {
        self.data[y * self.width + x] = value;
    }

    fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }
}

// Dense 3D grid, x fastest, then y, then z
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoiseMap3D {
    width: usize,
    height: usize,
    depth: usize,
    data: Vec<f32>,
}

impl NoiseMap3D {
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
            data: vec![0.0; width * height * depth],
        }
    }

    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.height + y) * self.width + x
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    // One z slice as a 2D map
    pub fn slice(&self, z: usize) -> NoiseMap2D {
        let start = self.index(0, 0, z);
        NoiseMap2D {
            width: self.width,
            height: self.height,
            data: self.data[start..start + self.width * self.height].to_vec(),
        }
    }
}

impl Map3D for NoiseMap3D {
    fn resize(&mut self, width: usize, height: usize, depth: usize) {
        if self.width != width || self.height != height || self.depth != depth {
            *self = Self::new(width, height, depth);
        }
    }

    fn set(&mut self, x: usize, y: usize, z: usize, value: f32) {
        let i = self.index(x, y, z);
        self.data[i] = value;
    }

    fn get(&self, x: usize, y: usize, z: usize) -> f32 {
        self.data[self.index(x, y, z)]
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn depth(&self) -> usize {
        self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ramp(width: usize, height: usize) -> NoiseMap2D {
        let mut map = NoiseMap2D::new(width, height);
        for y in 0..height {
            for x in 0..width {
                map.set(x, y, (x + 10 * y) as f32);
            }
        }
        map
    }

    #[test]
    fn rows_round_trip() {
        let map = ramp(3, 2);
        let rows = map.to_rows();
        assert_eq!(rows, vec![vec![0.0, 1.0, 2.0], vec![10.0, 11.0, 12.0]]);
        assert_eq!(NoiseMap2D::from_rows(&rows), map);
        assert_eq!(map.flatten(), vec![0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
    }

    #[test]
    fn normalize_into_unit_range() {
        let mut map = ramp(4, 4);
        map.normalize();
        let (min, max) = map.min_max().unwrap();
        assert_abs_diff_eq!(min, 0.0);
        assert_abs_diff_eq!(max, 1.0);
    }

    #[test]
    fn normalize_flat_map_is_safe() {
        let mut map = NoiseMap2D::new(3, 3);
        map.normalize();
        assert!(map.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn resize_keeps_or_reallocates() {
        let mut map = ramp(2, 2);
        map.resize(2, 2);
        assert_eq!(map.get(1, 1), 11.0);
        map.resize(3, 1);
        assert_eq!((map.width(), map.height()), (3, 1));
        assert_eq!(map.get(2, 0), 0.0);
    }

    #[test]
    fn scaled_sampling_interpolates() {
        let map = ramp(3, 3);
        // doubling: cell 1 lies halfway between source cells 0 and 1
        assert_abs_diff_eq!(map.sample_scaled(1, 0, 2.0, 2.0, Quality::Linear), 0.5);
        assert_abs_diff_eq!(map.sample_scaled(2, 2, 2.0, 2.0, Quality::Cubic), 11.0);
        // clamped past the edge
        assert_abs_diff_eq!(map.sample_scaled(9, 0, 2.0, 2.0, Quality::Linear), 2.0);
        assert_abs_diff_eq!(map.sample_dim(3, 0, 6, 6, Quality::Linear), 1.5);
    }

    #[test]
    fn map3d_indexing() {
        let mut map = NoiseMap3D::new(2, 3, 4);
        map.set(1, 2, 3, 7.0);
        assert_eq!(map.get(1, 2, 3), 7.0);
        assert_eq!(map.data().iter().filter(|&&v| v != 0.0).count(), 1);
        assert_eq!(map.slice(3).get(1, 2), 7.0);
    }
}
