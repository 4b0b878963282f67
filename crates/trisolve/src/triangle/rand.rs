//! Random valid solver inputs (angle-first sampling + replay tokens).
//!
//! Model
//! - Draw three angles that respect a minimum angle, draw side b from the
//!   configured range, derive a and c by the Law of Sines, then read off the
//!   three raw inputs the chosen `Method` expects.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so a sample can be regenerated from its token alone.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Method;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Range for side b. Other sides follow from the angles.
    pub side_min: f64,
    pub side_max: f64,
    /// Smallest angle (degrees) any corner may get. Clamped to [0.01, 59].
    pub min_angle_deg: f64,
    /// Fixed method, or `None` to draw one uniformly.
    pub method: Option<Method>,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            side_min: 0.5,
            side_max: 10.0,
            min_angle_deg: 5.0,
            method: None,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// One drawn input triple, ready for `solve`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampledInputs {
    pub method: Method,
    pub inputs: [f64; 3],
    pub replay: ReplayToken,
}

/// Draw one valid input triple for `cfg`.
pub fn draw_inputs(cfg: SampleCfg, tok: ReplayToken) -> SampledInputs {
    let mut rng = tok.to_std_rng();
    let method = match cfg.method {
        Some(m) => m,
        None => Method::ALL[rng.gen_range(0..Method::ALL.len())],
    };
    let min = cfg.min_angle_deg.clamp(0.01, 59.0);
    let lo = cfg.side_min.max(1e-9);
    let hi = cfg.side_max.max(lo);

    // A in [min, 180 - 2 min], C in [min, 180 - A - min], B takes the rest (>= min).
    let angle_a = rng.gen_range(min..=180.0 - 2.0 * min);
    let angle_c = rng.gen_range(min..=180.0 - angle_a - min);
    let angle_b = 180.0 - angle_a - angle_c;
    let b = if hi > lo { rng.gen_range(lo..hi) } else { lo };

    let ratio = b / angle_b.to_radians().sin();
    let a = ratio * angle_a.to_radians().sin();
    let c = ratio * angle_c.to_radians().sin();

    let inputs = match method {
        Method::Ssa => [a, b, angle_c],
        Method::Aas => [angle_a, angle_c, b],
        Method::Sss => [a, b, c],
    };
    SampledInputs {
        method,
        inputs,
        replay: tok,
    }
}

/// `count` consecutive draws starting at index 0 for `seed`.
pub fn draw_batch(cfg: SampleCfg, seed: u64, count: usize) -> Vec<SampledInputs> {
    (0..count as u64)
        .map(|index| draw_inputs(cfg, ReplayToken { seed, index }))
        .collect()
}
