use tracing::debug;

use crate::map::{Map2D, NoiseMap2D};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpawnShape {
    #[default]
    Square,
    Circle,
}

// Deposits value by letting particles roll across a grid. Each particle
// starts inside (or around) a spawn area and for `life` steps raises the
// cell it sits on, then moves to a random neighbour that is no higher.
// Many particles pile up a rounded mound, useful as an island mask.
#[derive(Debug, Clone)]
pub struct RollingParticle {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub spawn_shape: SpawnShape,
    // spawn in a ring around the area instead of inside it; the area
    // itself starts filled at `value_max`
    pub spawn_outside: bool,
    // spawn area size relative to half the map
    pub spawn_scale: f32,
    // ring thickness when spawning outside, relative to half the map
    pub spawn_outer_scale: f32,
    pub life: usize,
    pub population: usize,
    pub value_inc: f32,
    pub value_max: f32,
    // normalize by the highest value reached instead of `value_max`;
    // disables the cap
    pub value_auto_max: bool,
    pub value_cap_to_max: bool,
}

impl Default for RollingParticle {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            seed: 0,
            spawn_shape: SpawnShape::Square,
            spawn_outside: false,
            spawn_scale: 0.75,
            spawn_outer_scale: 0.1,
            life: 50,
            population: 4000,
            value_inc: 1.0,
            value_max: 256.0,
            value_auto_max: false,
            value_cap_to_max: true,
        }
    }
}

// Inclusive cell bounds of the square spawn area
#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_x: usize,
    max_x: usize,
    min_y: usize,
    max_y: usize,
}

impl Bounds {
    fn contains(&self, x: usize, y: usize) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }
}

struct XorShift(u64);

impl XorShift {
    fn new(seed: u64) -> Self {
        // a zero state would stay zero
        Self((seed ^ 0xCAFEBABE12345678) | 1)
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    // [0, 1)
    fn unit(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    // [-1, 1)
    fn signed(&mut self) -> f32 {
        self.unit() * 2.0 - 1.0
    }

    // [lo, hi]
    fn range(&mut self, lo: usize, hi: usize) -> usize {
        if hi <= lo {
            return lo;
        }
        lo + (self.next_u64() % (hi - lo + 1) as u64) as usize
    }

    fn coin(&mut self) -> bool {
        self.next_u64() & 1 == 1
    }
}

impl RollingParticle {
    pub fn new(
        width: usize,
        height: usize,
        seed: u64,
        spawn_shape: SpawnShape,
        spawn_scale: f32,
        life: usize,
        population: usize,
    ) -> Self {
        Self {
            width,
            height,
            seed,
            spawn_shape,
            spawn_scale,
            life,
            population,
            ..Self::default()
        }
    }

    fn half(&self) -> (f32, f32) {
        (self.width as f32 * 0.5, self.height as f32 * 0.5)
    }

    fn radius(&self, scale: f32) -> f32 {
        let (hw, hh) = self.half();
        scale * hw.min(hh)
    }

    fn bounds(&self, scale: f32) -> Bounds {
        let (hw, hh) = self.half();
        let clamp = |v: f32, len: usize| (v.round().max(0.0) as usize).min(len - 1);
        Bounds {
            min_x: clamp(hw - scale * hw, self.width),
            max_x: clamp(hw + scale * hw, self.width),
            min_y: clamp(hh - scale * hh, self.height),
            max_y: clamp(hh + scale * hh, self.height),
        }
    }

    fn in_circle(&self, x: usize, y: usize, r: f32) -> bool {
        let (hw, hh) = self.half();
        let (dx, dy) = (x as f32 - hw, y as f32 - hh);
        dx * dx + dy * dy <= r * r
    }

    // Inside the spawn area proper
    fn in_area(&self, x: usize, y: usize) -> bool {
        match self.spawn_shape {
            SpawnShape::Square => self.bounds(self.spawn_scale).contains(x, y),
            SpawnShape::Circle => self.in_circle(x, y, self.radius(self.spawn_scale)),
        }
    }

    fn cell(&self, x: f32, y: f32) -> (usize, usize) {
        let x = (x.round().max(0.0) as usize).min(self.width - 1);
        let y = (y.round().max(0.0) as usize).min(self.height - 1);
        (x, y)
    }

    fn spawn(&self, rng: &mut XorShift) -> (usize, usize) {
        let (hw, hh) = self.half();
        match (self.spawn_shape, self.spawn_outside) {
            (SpawnShape::Square, false) => {
                let b = self.bounds(self.spawn_scale);
                (rng.range(b.min_x, b.max_x), rng.range(b.min_y, b.max_y))
            }
            (SpawnShape::Square, true) => {
                let inner = self.bounds(self.spawn_scale);
                let outer = self.bounds(self.spawn_scale + self.spawn_outer_scale);
                let x = if rng.coin() {
                    rng.range(outer.min_x, inner.min_x)
                } else {
                    rng.range(inner.max_x, outer.max_x)
                };
                let y = if rng.coin() {
                    rng.range(outer.min_y, inner.min_y)
                } else {
                    rng.range(inner.max_y, outer.max_y)
                };
                (x, y)
            }
            (SpawnShape::Circle, false) => {
                let r = self.radius(self.spawn_scale);
                // rejection sample the unit disc
                loop {
                    let (dx, dy) = (rng.signed(), rng.signed());
                    if dx * dx + dy * dy <= 1.0 {
                        return self.cell(hw + dx * r, hh + dy * r);
                    }
                }
            }
            (SpawnShape::Circle, true) => {
                let r = self.radius(self.spawn_scale);
                let ring = self.radius(self.spawn_outer_scale);
                let angle = rng.unit() * std::f32::consts::TAU;
                let dist = r + rng.unit() * ring;
                self.cell(hw + angle.cos() * dist, hh + angle.sin() * dist)
            }
        }
    }

    // A neighbour the particle may roll onto from a cell holding `val`
    fn can_roll(&self, map: &NoiseMap2D, x: usize, y: usize, val: f32, cap: bool, max: f32) -> bool {
        if self.spawn_outside && self.in_area(x, y) {
            return false;
        }
        map.get(x, y) <= val && (!cap || val < max)
    }

    fn step(
        &self,
        map: &NoiseMap2D,
        rng: &mut XorShift,
        (x, y): (usize, usize),
        cap: bool,
        max: f32,
    ) -> (usize, usize) {
        let val = map.get(x, y);
        let mut picks = [(0, 0); 4];
        let mut count = 0;
        let neighbours = [
            (x > 0).then(|| (x - 1, y)),
            (x + 1 < self.width).then(|| (x + 1, y)),
            (y > 0).then(|| (x, y - 1)),
            (y + 1 < self.height).then(|| (x, y + 1)),
        ];
        for (nx, ny) in neighbours.into_iter().flatten() {
            if self.can_roll(map, nx, ny, val, cap, max) {
                picks[count] = (nx, ny);
                count += 1;
            }
        }
        if count == 0 {
            return (x, y);
        }
        picks[rng.range(0, count - 1)]
    }

    // Runs the simulation and returns the map scaled by the maximum value,
    // so samples land in [0, 1].
    pub fn generate(&self) -> NoiseMap2D {
        let mut map = NoiseMap2D::new(self.width, self.height);
        if self.width == 0 || self.height == 0 {
            return map;
        }

        let cap = self.value_cap_to_max && !self.value_auto_max;
        let mut max = self.value_max;
        let mut rng = XorShift::new(self.seed);

        if self.spawn_outside {
            for y in 0..self.height {
                for x in 0..self.width {
                    if self.in_area(x, y) {
                        map.set(x, y, max);
                    }
                }
            }
        }

        for _ in 0..self.population {
            let mut pos = self.spawn(&mut rng);
            for _ in 0..self.life {
                let (x, y) = pos;
                let current = map.get(x, y);
                if !cap || current < max {
                    let mut val = current + self.value_inc;
                    if cap {
                        val = val.min(max);
                    }
                    map.set(x, y, val);
                    if self.value_auto_max {
                        max = max.max(val);
                    }
                }
                pos = self.step(&map, &mut rng, pos, cap, max);
            }
        }

        debug!(
            width = self.width,
            height = self.height,
            population = self.population,
            max,
            "rolled particles"
        );

        let scale = if max > 0.0 { max } else { 1.0 };
        let mut out = NoiseMap2D::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                out.set(x, y, map.get(x, y) / scale);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn island(seed: u64) -> RollingParticle {
        RollingParticle::new(32, 32, seed, SpawnShape::Square, 0.5, 20, 300)
    }

    #[test]
    fn same_seed_same_map() {
        assert_eq!(island(7).generate(), island(7).generate());
        assert_ne!(island(7).generate(), island(8).generate());
    }

    #[test]
    fn output_is_normalized() {
        let map = island(1).generate();
        let (min, max) = map.min_max().unwrap();
        assert!(min >= 0.0);
        assert!(max <= 1.0);
        assert!(max > 0.0);
    }

    #[test]
    fn auto_max_reaches_one() {
        let mut particles = island(3);
        particles.value_auto_max = true;
        particles.value_max = 1.0;
        let (_, max) = particles.generate().min_max().unwrap();
        assert!((max - 1.0).abs() < 1e-6);
    }

    #[test]
    fn mass_stays_near_the_spawn_area() {
        let mut particles = island(5);
        particles.life = 4;
        particles.spawn_scale = 0.25;
        let map = particles.generate();
        // particles travel at most `life - 1` cells from a spawn inside [12, 20]
        assert_eq!(map.get(0, 0), 0.0);
        assert_eq!(map.get(31, 31), 0.0);
        let center: f32 = (12..=20).flat_map(|y| (12..=20).map(move |x| (x, y))).map(|(x, y)| map.get(x, y)).sum();
        assert!(center > 0.0);
    }

    #[test]
    fn circle_spawn_stays_in_the_disc() {
        let mut particles = RollingParticle::new(41, 41, 2, SpawnShape::Circle, 0.5, 1, 500);
        particles.value_max = 1.0;
        let map = particles.generate();
        for y in 0..41 {
            for x in 0..41 {
                if map.get(x, y) > 0.0 {
                    // radius 10.25 around (20.5, 20.5), plus rounding
                    let (dx, dy) = (x as f32 - 20.5, y as f32 - 20.5);
                    assert!((dx * dx + dy * dy).sqrt() <= 11.0, "({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn outside_spawn_fills_the_area() {
        let mut particles = island(4);
        particles.spawn_outside = true;
        particles.population = 50;
        let map = particles.generate();
        // the filled area sits at the cap, so it normalizes to one
        assert_eq!(map.get(16, 16), 1.0);
        assert!(map.get(0, 0) < 1.0);
    }

    #[test]
    fn empty_map() {
        let particles = RollingParticle::new(0, 5, 0, SpawnShape::Circle, 0.5, 10, 10);
        assert_eq!(particles.generate().data().len(), 0);
    }
}
