//! The three classic solving configurations.
//!
//! - `from_ssa`: sides a, b and included angle C. Corner B is projected onto
//!   line CA; c is the hypotenuse of that projection and A its `atan2`, so
//!   obtuse A stays obtuse and slivers keep their digits. B from the angle sum.
//! - `from_aas`: angles A, C and side b; angle sum for B, Law of Sines for a, c
//!   with `sin B = sin(A + C)`.
//! - `from_sss`: half-angle form of the Law of Cosines (`util::angles_from_sides`).
//!
//! Input angles are in degrees; everything inside and in `TriangleSpec` is radians.
//! Every path ends in `util::assemble`, which runs the post-hoc check, so a
//! caller either gets a complete triangle or an error.
//!
//! Code cross-refs: `types::{Method,TriangleSpec,SolveCfg}`, `util::check_spec`
use std::f64::consts::PI;

use super::types::{InvalidTriangleError, Method, SolveCfg, TriangleSpec};
use super::util::{
    angles_from_sides, assemble, check_sides, deg_to_rad, ensure_open_angle_deg, ensure_positive,
    rad_to_deg,
};

/// Solve a triangle from three raw inputs with default tolerances.
///
/// Input order per method:
/// - `Ssa`: `(a, b, angle_c_deg)`
/// - `Aas`: `(angle_a_deg, angle_c_deg, b)`
/// - `Sss`: `(a, b, c)`
pub fn solve(
    method: Method,
    input1: f64,
    input2: f64,
    input3: f64,
) -> Result<TriangleSpec, InvalidTriangleError> {
    solve_with_cfg(method, [input1, input2, input3], SolveCfg::default())
}

/// Same as `solve` with explicit tolerances.
pub fn solve_with_cfg(
    method: Method,
    inputs: [f64; 3],
    cfg: SolveCfg,
) -> Result<TriangleSpec, InvalidTriangleError> {
    for (what, x) in method.input_names().into_iter().zip(inputs) {
        if !x.is_finite() {
            return Err(InvalidTriangleError::NonFinite { what });
        }
    }
    let [i1, i2, i3] = inputs;
    match method {
        Method::Ssa => from_ssa(i1, i2, i3, &cfg),
        Method::Aas => from_aas(i1, i2, i3, &cfg),
        Method::Sss => from_sss(i1, i2, i3, &cfg),
    }
}

/// Two sides and the included angle C (degrees).
pub fn from_ssa(
    a: f64,
    b: f64,
    angle_c_deg: f64,
    cfg: &SolveCfg,
) -> Result<TriangleSpec, InvalidTriangleError> {
    ensure_positive("side a", a)?;
    ensure_positive("side b", b)?;
    ensure_open_angle_deg("angle C", angle_c_deg)?;
    let gamma = deg_to_rad(angle_c_deg);

    // B seen from A: `dx = b - a·cos C` along CA, `dy = a·sin C` across it.
    // `1 - cos C = 2·sin²(C/2)` avoids cancellation for small C.
    let half = (gamma / 2.0).sin();
    let dx = (b - a) + 2.0 * a * half * half;
    let dy = a * gamma.sin();
    let c = dx.hypot(dy);
    ensure_positive("side c", c)?;

    let alpha = dy.atan2(dx);
    let beta = PI - alpha - gamma;
    assemble([a, b, c], [alpha, beta, gamma], cfg)
}

/// Angles A and C (degrees) and side b, opposite the remaining angle B.
pub fn from_aas(
    angle_a_deg: f64,
    angle_c_deg: f64,
    b: f64,
    cfg: &SolveCfg,
) -> Result<TriangleSpec, InvalidTriangleError> {
    ensure_open_angle_deg("angle A", angle_a_deg)?;
    ensure_open_angle_deg("angle C", angle_c_deg)?;
    ensure_positive("side b", b)?;
    if angle_a_deg + angle_c_deg >= 180.0 {
        return Err(InvalidTriangleError::AngleSum {
            degrees: angle_a_deg + angle_c_deg,
        });
    }
    let alpha = deg_to_rad(angle_a_deg);
    let gamma = deg_to_rad(angle_c_deg);
    let beta = PI - alpha - gamma;
    if beta <= 0.0 {
        return Err(InvalidTriangleError::AngleSum {
            degrees: rad_to_deg(alpha + gamma),
        });
    }

    let ratio = b / (alpha + gamma).sin();
    let a = ratio * alpha.sin();
    let c = ratio * gamma.sin();
    assemble([a, b, c], [alpha, beta, gamma], cfg)
}

/// Three sides.
pub fn from_sss(a: f64, b: f64, c: f64, cfg: &SolveCfg) -> Result<TriangleSpec, InvalidTriangleError> {
    check_sides([a, b, c])?;
    let angles = angles_from_sides([a, b, c]);
    assemble([a, b, c], angles, cfg)
}
