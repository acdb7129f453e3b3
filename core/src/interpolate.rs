use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

// Which S-curve shapes the fractional lattice offset before blending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quality {
    // no shaping, plain trilinear blend
    Linear,
    // slightly less curvy than Cubic, cheaper
    Cosine,
    #[default]
    Cubic,
    Quint,
}

impl Quality {
    // Map a fractional offset in [0, 1] through this quality's S-curve
    #[inline]
    pub fn shape(self, t: f64) -> f64 {
        match self {
            Quality::Linear => t,
            Quality::Cosine => curve_cos(t),
            Quality::Cubic => curve_cubic(t),
            Quality::Quint => curve_quint(t),
        }
    }
}

impl FromStr for Quality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "fast" => Ok(Quality::Linear),
            "cosine" | "cos" => Ok(Quality::Cosine),
            "cubic" | "standard" => Ok(Quality::Cubic),
            "quint" | "quintic" | "best" => Ok(Quality::Quint),
            other => Err(format!("unknown quality `{other}`")),
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quality::Linear => "Linear",
            Quality::Cosine => "Cosine",
            Quality::Cubic => "Cubic",
            Quality::Quint => "Quint",
        };
        f.write_str(name)
    }
}

// Linear interpolation: t = 0 gives n0, t = 1 gives n1
#[inline]
pub fn linear(n0: f64, n1: f64, t: f64) -> f64 {
    (1.0 - t) * n0 + t * n1
}

// Cubic interpolation between n1 and n2.
// n0 is the value before n1, n3 the value after n2.
#[inline]
pub fn cubic(n0: f64, n1: f64, n2: f64, n3: f64, t: f64) -> f64 {
    let p = (n3 - n2) - (n0 - n1);
    let q = (n0 - n1) - p;
    let r = n2 - n0;
    let s = n1;
    p * t * t * t + q * t * t + r * t + s
}

#[inline]
pub fn curve_cos(t: f64) -> f64 {
    (1.0 - (t * PI).cos()) * 0.5
}

// 3t^2 - 2t^3
#[inline]
pub fn curve_cubic(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

// 6t^5 - 15t^4 + 10t^3, first and second derivatives vanish at 0 and 1
#[inline]
pub fn curve_quint(t: f64) -> f64 {
    let t3 = t * t * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    6.0 * t5 - 15.0 * t4 + 10.0 * t3
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const CURVES: [fn(f64) -> f64; 3] = [curve_cos, curve_cubic, curve_quint];

    #[test]
    fn linear_endpoints() {
        assert_eq!(linear(3.0, -7.0, 0.0), 3.0);
        assert_eq!(linear(3.0, -7.0, 1.0), -7.0);
        assert_abs_diff_eq!(linear(0.0, 10.0, 0.25), 2.5);
    }

    #[test]
    fn cubic_passes_through_inner_points() {
        assert_abs_diff_eq!(cubic(-1.0, 0.0, 0.5, 1.0, 0.0), 0.0);
        assert_abs_diff_eq!(cubic(-1.0, 0.0, 0.5, 1.0, 1.0), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(cubic(-1.0, 0.0, 0.5, 1.0, 0.5), 0.3125, epsilon = 1e-12);
    }

    #[test]
    fn s_curves_fix_endpoints() {
        for curve in CURVES {
            assert_abs_diff_eq!(curve(0.0), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(curve(1.0), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn s_curves_are_monotonic() {
        for curve in CURVES {
            let mut prev = curve(0.0);
            for i in 1..=1000 {
                let v = curve(i as f64 / 1000.0);
                assert!(v >= prev - 1e-12, "curve decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn quality_shapes() {
        assert_eq!(Quality::Linear.shape(0.3), 0.3);
        assert_abs_diff_eq!(Quality::Cubic.shape(0.5), 0.5);
        assert_abs_diff_eq!(Quality::Quint.shape(0.5), 0.5);
        assert_abs_diff_eq!(Quality::Cosine.shape(0.5), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn quality_parses_case_insensitively() {
        assert_eq!("cubic".parse::<Quality>(), Ok(Quality::Cubic));
        assert_eq!(" Quint ".parse::<Quality>(), Ok(Quality::Quint));
        assert_eq!("LINEAR".parse::<Quality>(), Ok(Quality::Linear));
        assert!("smooth".parse::<Quality>().is_err());
    }
}
