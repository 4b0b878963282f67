//! Pure helpers shared by the three solvers: derived quantities,
//! classification, vertex placement and the post-hoc consistency check.

use nalgebra::Vector2;
use std::f64::consts::PI;

use super::types::{InvalidTriangleError, SolveCfg, TriangleSpec, TypeByAngles, TypeBySides};

#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

#[inline]
pub fn perimeter(sides: [f64; 3]) -> f64 {
    sides[0] + sides[1] + sides[2]
}

/// Sine-area formula from sides a, b and their included angle C.
#[inline]
pub fn area(sides: [f64; 3], angles: [f64; 3]) -> f64 {
    sides[0] * sides[1] * angles[2].sin() / 2.0
}

#[inline]
pub fn inradius(area: f64, perimeter: f64) -> f64 {
    area / (perimeter / 2.0)
}

#[inline]
pub fn circumradius(side_a: f64, angle_a: f64) -> f64 {
    side_a / (2.0 * angle_a.sin())
}

#[inline]
fn approx_eq_rel(x: f64, y: f64, rel: f64) -> bool {
    (x - y).abs() <= rel * x.abs().max(y.abs())
}

/// Classify by side equality. Invalid side triples yield `NotATriangle`.
pub fn classify_by_sides(sides: [f64; 3], cfg: &SolveCfg) -> TypeBySides {
    if check_sides(sides).is_err() {
        return TypeBySides::NotATriangle;
    }
    let [a, b, c] = sides;
    let eq = |x, y| approx_eq_rel(x, y, cfg.eps_side_rel);
    let (ab, bc, ac) = (eq(a, b), eq(b, c), eq(a, c));
    if ab && bc && ac {
        TypeBySides::Equilateral
    } else if ab || bc || ac {
        TypeBySides::Isosceles
    } else {
        TypeBySides::Scalene
    }
}

/// Classify by angles (radians in, compared in degrees).
///
/// Right wins over Oblique when an angle sits within `eps_right_deg` of 90°.
pub fn classify_by_angles(angles: [f64; 3], cfg: &SolveCfg) -> TypeByAngles {
    if check_angles(angles, cfg).is_err() {
        return TypeByAngles::NotATriangle;
    }
    let deg = angles.map(rad_to_deg);
    if deg.iter().any(|d| (d - 90.0).abs() <= cfg.eps_right_deg) {
        TypeByAngles::Right
    } else if deg.iter().any(|&d| d > 90.0) {
        TypeByAngles::Oblique
    } else {
        TypeByAngles::Acute
    }
}

/// Corner A at the origin, corner B on the positive x-axis, corner C above it.
///
/// `|AB| = c`, `|AC| = b`, `|BC| = a`, and the interior angle at each corner
/// equals the angle of the same index.
pub fn place_vertices(sides: [f64; 3], angles: [f64; 3]) -> [Vector2<f64>; 3] {
    let [_, b, c] = sides;
    let alpha = angles[0];
    [
        Vector2::new(0.0, 0.0),
        Vector2::new(c, 0.0),
        Vector2::new(b * alpha.cos(), b * alpha.sin()),
    ]
}

pub(crate) fn ensure_positive(what: &'static str, value: f64) -> Result<f64, InvalidTriangleError> {
    if !value.is_finite() {
        return Err(InvalidTriangleError::NonFinite { what });
    }
    if value <= 0.0 {
        return Err(InvalidTriangleError::NonPositive { what, value });
    }
    Ok(value)
}

/// Input angle in degrees, strictly inside (0, 180).
pub(crate) fn ensure_open_angle_deg(
    what: &'static str,
    degrees: f64,
) -> Result<f64, InvalidTriangleError> {
    if !degrees.is_finite() {
        return Err(InvalidTriangleError::NonFinite { what });
    }
    if degrees <= 0.0 || degrees >= 180.0 {
        return Err(InvalidTriangleError::AngleOutOfRange { what, degrees });
    }
    Ok(degrees)
}

/// Angles opposite each side, from the half-angle form of the Law of Cosines:
/// `tan(A/2) = sqrt((s-b)(s-c) / (s(s-a)))`.
///
/// Sides are first scaled by a power of two (exact) so the products stay in
/// range, then sorted so the semiperimeter differences can be formed without
/// cancellation (Kahan's ordering). Callers must pass valid sides.
pub(crate) fn angles_from_sides(sides: [f64; 3]) -> [f64; 3] {
    let max = sides[0].max(sides[1]).max(sides[2]);
    let scale = 2f64.powi(max.log2().floor() as i32);
    let s = sides.map(|x| x / scale);

    let mut order = [0usize, 1, 2];
    order.sort_by(|&i, &j| s[j].total_cmp(&s[i]));
    let [x, y, z] = order.map(|i| s[i]);
    // 2s, 2(s-x), 2(s-y), 2(s-z) for x >= y >= z
    let p = x + (y + z);
    let px = z - (x - y);
    let py = z + (x - y);
    let pz = x + (y - z);

    let half = |num: f64, den: f64| 2.0 * num.max(0.0).sqrt().atan2(den.max(0.0).sqrt());
    let mut angles = [0.0; 3];
    angles[order[0]] = half(py * pz, p * px);
    angles[order[1]] = half(px * pz, p * py);
    angles[order[2]] = half(px * py, p * pz);
    angles
}

/// Finite, strictly positive sides satisfying the strict triangle inequality.
pub fn check_sides(sides: [f64; 3]) -> Result<(), InvalidTriangleError> {
    for (what, s) in ["side a", "side b", "side c"].into_iter().zip(sides) {
        ensure_positive(what, s)?;
    }
    let [a, b, c] = sides;
    if a + b <= c || a + c <= b || b + c <= a {
        return Err(InvalidTriangleError::TriangleInequality { sides });
    }
    Ok(())
}

/// Finite angles strictly inside (0, π) whose sum is π within `cfg.eps_angle_sum`.
pub fn check_angles(angles: [f64; 3], cfg: &SolveCfg) -> Result<(), InvalidTriangleError> {
    for (what, t) in ["angle A", "angle B", "angle C"].into_iter().zip(angles) {
        if !t.is_finite() {
            return Err(InvalidTriangleError::NonFinite { what });
        }
        if t <= 0.0 || t >= PI {
            return Err(InvalidTriangleError::AngleOutOfRange {
                what,
                degrees: rad_to_deg(t),
            });
        }
    }
    let sum = angles[0] + angles[1] + angles[2];
    if (sum - PI).abs() > cfg.eps_angle_sum {
        return Err(InvalidTriangleError::AngleSum {
            degrees: rad_to_deg(sum),
        });
    }
    Ok(())
}

/// Post-hoc sanity check of a candidate triangle.
///
/// Verifies the side and angle invariants, that every derived field matches
/// its formula, that the labels match a fresh classification, and that the
/// placed vertices reproduce the sides and the area.
pub fn check_spec(t: &TriangleSpec, cfg: &SolveCfg) -> Result<(), InvalidTriangleError> {
    check_sides(t.sides)?;
    check_angles(t.angles, cfg)?;

    if t.perimeter != perimeter(t.sides) {
        return Err(InvalidTriangleError::inconsistent(
            "perimeter differs from the side sum",
        ));
    }
    let rel = cfg.eps_consistency;
    let derived = [
        ("area", t.area, area(t.sides, t.angles)),
        ("inradius", t.inradius, inradius(t.area, t.perimeter)),
        (
            "circumradius",
            t.circumradius,
            circumradius(t.sides[0], t.angles[0]),
        ),
    ];
    for (what, stored, expected) in derived {
        // Sides near the ends of the f64 range can push the area out of it.
        ensure_positive(what, stored)?;
        if !approx_eq_rel(stored, expected, rel) {
            return Err(InvalidTriangleError::inconsistent(format!(
                "{what} {stored} does not match {expected}"
            )));
        }
    }

    if t.type_by_sides != classify_by_sides(t.sides, cfg) {
        return Err(InvalidTriangleError::inconsistent(format!(
            "side label {} does not match the sides",
            t.type_by_sides
        )));
    }
    if t.type_by_angles != classify_by_angles(t.angles, cfg) {
        return Err(InvalidTriangleError::inconsistent(format!(
            "angle label {} does not match the angles",
            t.type_by_angles
        )));
    }

    // Vertex coordinates are only as precise as the largest side, so edge
    // lengths are compared against that scale.
    let [va, vb, vc] = t.vertices;
    let longest = t.sides[0].max(t.sides[1]).max(t.sides[2]);
    let edges = [("BC", (vc - vb).norm()), ("AC", (vc - va).norm()), ("AB", (vb - va).norm())];
    for ((name, len), side) in edges.into_iter().zip(t.sides) {
        if (len - side).abs() > rel * longest {
            return Err(InvalidTriangleError::inconsistent(format!(
                "edge {name} has length {len}, expected {side}"
            )));
        }
    }
    let vertex_area = crate::parallelogram_area(vb - va, vc - va).abs() / 2.0;
    if !approx_eq_rel(vertex_area, t.area, rel) {
        return Err(InvalidTriangleError::inconsistent(format!(
            "vertex area {vertex_area} does not match {}",
            t.area
        )));
    }
    Ok(())
}

/// Build a `TriangleSpec` from consistent sides and angles, then check it.
pub(crate) fn assemble(
    sides: [f64; 3],
    angles: [f64; 3],
    cfg: &SolveCfg,
) -> Result<TriangleSpec, InvalidTriangleError> {
    check_sides(sides)?;
    check_angles(angles, cfg)?;
    let perimeter = perimeter(sides);
    let area = area(sides, angles);
    let spec = TriangleSpec {
        sides,
        angles,
        vertices: place_vertices(sides, angles),
        perimeter,
        area,
        inradius: inradius(area, perimeter),
        circumradius: circumradius(sides[0], angles[0]),
        type_by_sides: classify_by_sides(sides, cfg),
        type_by_angles: classify_by_angles(angles, cfg),
    };
    check_spec(&spec, cfg)?;
    Ok(spec)
}
