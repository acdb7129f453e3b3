use std::path::Path;

use image::{Rgb, RgbImage};
use palette::{Gradient, LinSrgb};
use tracing::{debug, warn};

use crate::error::{NoiseError, Result};
use crate::map::{Map2D, NoiseMap2D};

// A color stop; positions are noise values, usually in [-1, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientPoint {
    pub pos: f32,
    pub color: LinSrgb,
}

// Colorizes a noise map through a gradient, optionally shaded by a
// directional light that reads the slope from neighbouring samples.
#[derive(Debug, Clone)]
pub struct RenderImage {
    gradient: Vec<GradientPoint>,
    pub light_enabled: bool,
    pub light_color: LinSrgb,
    // neighbours across the map edge come from the opposite edge
    pub wrap_enabled: bool,
    light_azimuth: f32,
    light_elevation: f32,
    light_contrast: f32,
    light_brightness: f32,
}

impl Default for RenderImage {
    fn default() -> Self {
        let mut render = Self {
            gradient: Vec::new(),
            light_enabled: false,
            light_color: LinSrgb::new(1.0, 1.0, 1.0),
            wrap_enabled: false,
            light_azimuth: 45.0,
            light_elevation: 45.0,
            light_contrast: 1.0,
            light_brightness: 1.0,
        };
        render.build_grayscale_gradient();
        render
    }
}

// Precomputed light terms for one render
struct Light {
    io: f32,
    ix: f32,
    iy: f32,
    brightness: f32,
}

impl Light {
    // Lambert-style shading from the slope between the neighbours
    fn intensity(&self, left: f32, right: f32, down: f32, up: f32) -> f32 {
        let i = self.ix * (left - right) + self.iy * (down - up) + self.io;
        i.max(0.0) * self.brightness
    }
}

impl RenderImage {
    // Starts with the black-to-white gradient
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gradient(&self) -> &[GradientPoint] {
        &self.gradient
    }

    // Inserts a stop in position order; a stop at the same position is replaced
    pub fn add_gradient_point(&mut self, pos: f32, color: LinSrgb) {
        let point = GradientPoint { pos, color };
        match self.gradient.iter().position(|g| g.pos >= pos) {
            Some(i) if self.gradient[i].pos == pos => self.gradient[i] = point,
            Some(i) => self.gradient.insert(i, point),
            None => self.gradient.push(point),
        }
    }

    pub fn clear_gradient(&mut self) {
        self.gradient.clear();
    }

    pub fn build_grayscale_gradient(&mut self) {
        self.clear_gradient();
        self.add_gradient_point(-1.0, LinSrgb::new(0.0, 0.0, 0.0));
        self.add_gradient_point(1.0, LinSrgb::new(1.0, 1.0, 1.0));
    }

    // deep water, shallows, sand, grass, dirt, rock, snow
    pub fn build_terrain_gradient(&mut self) {
        self.clear_gradient();
        let stops = [
            (-1.00, [0, 0, 128]),
            (-0.20, [32, 64, 128]),
            (-0.04, [64, 96, 192]),
            (-0.02, [192, 192, 128]),
            (0.00, [0, 192, 0]),
            (0.25, [192, 192, 0]),
            (0.50, [160, 96, 64]),
            (0.75, [128, 255, 255]),
            (1.00, [255, 255, 255]),
        ];
        for (pos, [r, g, b]) in stops {
            let color = LinSrgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
            self.add_gradient_point(pos, color);
        }
    }

    pub fn light_azimuth(&self) -> f32 {
        self.light_azimuth
    }

    // Degrees, counter-clockwise from +x
    pub fn set_light_azimuth(&mut self, degrees: f32) {
        self.light_azimuth = degrees;
    }

    pub fn light_elevation(&self) -> f32 {
        self.light_elevation
    }

    // Degrees above the horizon; 90 lights straight down
    pub fn set_light_elevation(&mut self, degrees: f32) {
        self.light_elevation = degrees;
    }

    pub fn light_contrast(&self) -> f32 {
        self.light_contrast
    }

    // Must be positive, other values are ignored
    pub fn set_light_contrast(&mut self, contrast: f32) {
        if contrast <= 0.0 {
            warn!(contrast, "ignoring non-positive light contrast");
            return;
        }
        self.light_contrast = contrast;
    }

    pub fn light_brightness(&self) -> f32 {
        self.light_brightness
    }

    pub fn set_light_brightness(&mut self, brightness: f32) {
        self.light_brightness = brightness;
    }

    fn light(&self) -> Light {
        let (sin_az, cos_az) = self.light_azimuth.to_radians().sin_cos();
        let (sin_el, cos_el) = self.light_elevation.to_radians().sin_cos();
        let sqrt2 = std::f32::consts::SQRT_2;
        let io = sqrt2 * sin_el / 2.0;
        let slope = (1.0 - io) * self.light_contrast * sqrt2 * cos_el;
        Light {
            io,
            ix: slope * cos_az,
            iy: slope * sin_az,
            brightness: self.light_brightness,
        }
    }

    // Left, right, down and up neighbours of (x, y)
    fn neighbours(&self, map: &NoiseMap2D, x: usize, y: usize) -> [f32; 4] {
        let (w, h) = (map.width(), map.height());
        let center = map.get(x, y);
        let wrap = self.wrap_enabled;

        let left = if x > 0 {
            map.get(x - 1, y)
        } else if wrap {
            map.get(w - 1, y)
        } else {
            center
        };
        let right = if x + 1 < w {
            map.get(x + 1, y)
        } else if wrap {
            map.get(0, y)
        } else {
            center
        };
        let down = if y + 1 < h {
            map.get(x, y + 1)
        } else if wrap {
            map.get(x, 0)
        } else {
            center
        };
        let up = if y > 0 {
            map.get(x, y - 1)
        } else if wrap {
            map.get(x, h - 1)
        } else {
            center
        };
        [left, right, down, up]
    }

    // Colorizes `map` into a new image of the same size
    pub fn render(&self, map: &NoiseMap2D) -> Result<RgbImage> {
        if self.gradient.len() < 2 {
            return Err(NoiseError::EmptyGradient);
        }
        let gradient = Gradient::with_domain(
            self.gradient.iter().map(|g| (g.pos, g.color)).collect::<Vec<_>>(),
        );
        let light = self.light();
        debug!(width = map.width(), height = map.height(), lit = self.light_enabled, "rendering image");

        let mut img = RgbImage::new(map.width() as u32, map.height() as u32);
        for y in 0..map.height() {
            for x in 0..map.width() {
                let mut color: LinSrgb = gradient.get(map.get(x, y));
                if self.light_enabled {
                    let [left, right, down, up] = self.neighbours(map, x, y);
                    let i = light.intensity(left, right, down, up);
                    color = LinSrgb::new(
                        color.red * i * self.light_color.red,
                        color.green * i * self.light_color.green,
                        color.blue * i * self.light_color.blue,
                    );
                }
                let clamped = LinSrgb::new(
                    color.red.clamp(0.0, 1.0),
                    color.green.clamp(0.0, 1.0),
                    color.blue.clamp(0.0, 1.0),
                );
                let rgb = clamped.into_format::<u8>();
                img.put_pixel(x as u32, y as u32, Rgb([rgb.red, rgb.green, rgb.blue]));
            }
        }
        Ok(img)
    }

    // Renders and writes the image; the format follows the file extension
    pub fn save(&self, map: &NoiseMap2D, path: impl AsRef<Path>) -> Result<()> {
        self.render(map)?.save(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "saved image");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_from(rows: &[&[f32]]) -> NoiseMap2D {
        NoiseMap2D::from_rows(&rows.iter().map(|r| r.to_vec()).collect())
    }

    #[test]
    fn grayscale_endpoints() {
        let render = RenderImage::new();
        let img = render.render(&map_from(&[&[-1.0, 1.0, 5.0]])).unwrap();
        assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(1, 0), &Rgb([255, 255, 255]));
        // past the last stop clamps to it
        assert_eq!(img.get_pixel(2, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn gradient_points_sorted_and_replaced() {
        let mut render = RenderImage::new();
        render.add_gradient_point(0.0, LinSrgb::new(1.0, 0.0, 0.0));
        render.add_gradient_point(0.0, LinSrgb::new(0.0, 1.0, 0.0));
        render.add_gradient_point(-2.0, LinSrgb::new(0.0, 0.0, 1.0));
        let positions: Vec<f32> = render.gradient().iter().map(|g| g.pos).collect();
        assert_eq!(positions, vec![-2.0, -1.0, 0.0, 1.0]);
        assert_eq!(render.gradient()[2].color, LinSrgb::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn terrain_gradient_has_water_and_snow() {
        let mut render = RenderImage::new();
        render.build_terrain_gradient();
        let img = render.render(&map_from(&[&[-1.0, 1.0]])).unwrap();
        let water = img.get_pixel(0, 0).0;
        assert_eq!(&water[..2], &[0, 0]);
        assert!(water[2].abs_diff(128) <= 1);
        assert_eq!(img.get_pixel(1, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn needs_two_stops() {
        let mut render = RenderImage::new();
        render.clear_gradient();
        render.add_gradient_point(0.0, LinSrgb::new(1.0, 1.0, 1.0));
        assert!(matches!(
            render.render(&NoiseMap2D::new(2, 2)),
            Err(NoiseError::EmptyGradient)
        ));
    }

    #[test]
    fn flat_map_lit_from_above() {
        let mut render = RenderImage::new();
        render.light_enabled = true;
        render.set_light_elevation(90.0);
        let img = render.render(&map_from(&[&[1.0, 1.0], &[1.0, 1.0]])).unwrap();
        // straight-down light on a flat map: sqrt(2) / 2 of full white
        let expected = (std::f32::consts::FRAC_1_SQRT_2 * 255.0).round() as u8;
        for p in img.pixels() {
            assert!(p.0[0].abs_diff(expected) <= 1);
        }
    }

    #[test]
    fn slopes_facing_the_light_are_brighter() {
        let mut render = RenderImage::new();
        render.light_enabled = true;
        render.set_light_azimuth(0.0);
        // height falls towards +x on the left half, rises on the right
        let row: &[f32] = &[0.8, 0.6, 0.4, 0.6, 0.8];
        let img = render.render(&map_from(&[row, row, row])).unwrap();
        let facing = img.get_pixel(1, 1).0[0];
        let away = img.get_pixel(3, 1).0[0];
        assert!(facing > away, "{facing} <= {away}");
    }

    #[test]
    fn contrast_must_be_positive() {
        let mut render = RenderImage::new();
        render.set_light_contrast(0.0);
        assert_eq!(render.light_contrast(), 1.0);
        render.set_light_contrast(2.0);
        assert_eq!(render.light_contrast(), 2.0);
    }
}
