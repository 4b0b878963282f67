//! Value types for solved triangles.
//!
//! - `Method`: which three measurements were given (SSA, AAS, SSS).
//! - `SolveCfg`: centralizes tolerances for classification and the post-hoc check.
//! - `TriangleSpec`: immutable solved triangle. Only the solvers (or a checked
//!   `TriangleData` conversion) can build one.
//! - `TriangleData`: plain wire shape used for serialization.
//!
//! Code cross-refs: `solvers::{solve,solve_with_cfg}`, `util::check_spec`

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Solving configuration: which three raw numbers the caller supplies.
///
/// - `Ssa`: sides a, b and the included angle C (degrees).
/// - `Aas`: angles A, C (degrees) and side b.
/// - `Sss`: sides a, b, c.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "sidesAndAngle")]
    Ssa,
    #[serde(rename = "anglesAndSide")]
    Aas,
    #[serde(rename = "sides")]
    Sss,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Ssa, Method::Aas, Method::Sss];

    /// Names of the three raw inputs, in call order.
    pub fn input_names(self) -> [&'static str; 3] {
        match self {
            Method::Ssa => ["side a", "side b", "angle C"],
            Method::Aas => ["angle A", "angle C", "side b"],
            Method::Sss => ["side a", "side b", "side c"],
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Method::Ssa => "SSA",
            Method::Aas => "AAS",
            Method::Sss => "SSS",
        };
        f.write_str(s)
    }
}

/// Unknown solving method name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseMethodError(pub String);

impl fmt::Display for ParseMethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown solving method `{}` (expected ssa, aas or sss)", self.0)
    }
}

impl std::error::Error for ParseMethodError {}

impl FromStr for Method {
    type Err = ParseMethodError;

    /// Accepts the short tags (`ssa`, `aas`, `sss`, any case) and the wire names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ssa" | "sidesandangle" => Ok(Method::Ssa),
            "aas" | "anglesandside" => Ok(Method::Aas),
            "sss" | "sides" => Ok(Method::Sss),
            _ => Err(ParseMethodError(s.to_string())),
        }
    }
}

/// Classification by side-length equality pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeBySides {
    Equilateral,
    Isosceles,
    Scalene,
    #[serde(rename = "Not a triangle")]
    NotATriangle,
}

impl fmt::Display for TypeBySides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TypeBySides::Equilateral => "Equilateral",
            TypeBySides::Isosceles => "Isosceles",
            TypeBySides::Scalene => "Scalene",
            TypeBySides::NotATriangle => "Not a triangle",
        };
        f.write_str(s)
    }
}

/// Classification by the largest angle's relation to 90°.
///
/// `Oblique` marks a triangle with one angle above 90°.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeByAngles {
    Right,
    Oblique,
    Acute,
    #[serde(rename = "Not a triangle")]
    NotATriangle,
}

impl fmt::Display for TypeByAngles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TypeByAngles::Right => "Right",
            TypeByAngles::Oblique => "Oblique",
            TypeByAngles::Acute => "Acute",
            TypeByAngles::NotATriangle => "Not a triangle",
        };
        f.write_str(s)
    }
}

/// Solver configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct SolveCfg {
    /// Max deviation of the angle sum from π, in radians.
    pub eps_angle_sum: f64,
    /// Relative tolerance for side equality when classifying.
    pub eps_side_rel: f64,
    /// Distance from 90° (in degrees) still classified as Right.
    pub eps_right_deg: f64,
    /// Relative tolerance for derived-quantity cross checks (vertex distances, area).
    pub eps_consistency: f64,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            eps_angle_sum: 1e-6,
            eps_side_rel: 1e-9,
            eps_right_deg: 1e-7,
            eps_consistency: 1e-6,
        }
    }
}

/// Geometrically invalid input or result. No partial triangle accompanies it.
#[derive(Clone, Debug, PartialEq)]
pub enum InvalidTriangleError {
    NonFinite { what: &'static str },
    NonPositive { what: &'static str, value: f64 },
    AngleOutOfRange { what: &'static str, degrees: f64 },
    AngleSum { degrees: f64 },
    TriangleInequality { sides: [f64; 3] },
    Inconsistent { reason: String },
}

impl InvalidTriangleError {
    pub(crate) fn inconsistent(reason: impl Into<String>) -> Self {
        Self::Inconsistent {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InvalidTriangleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { what } => write!(f, "{what} is not a finite number"),
            Self::NonPositive { what, value } => write!(f, "{what} must be > 0 (got {value})"),
            Self::AngleOutOfRange { what, degrees } => {
                write!(f, "{what} must lie strictly between 0° and 180° (got {degrees}°)")
            }
            Self::AngleSum { degrees } => {
                write!(f, "angle sum of {degrees}° does not fit a triangle")
            }
            Self::TriangleInequality { sides } => write!(
                f,
                "sides {} / {} / {} violate the triangle inequality",
                sides[0], sides[1], sides[2]
            ),
            Self::Inconsistent { reason } => write!(f, "inconsistent triangle: {reason}"),
        }
    }
}

impl std::error::Error for InvalidTriangleError {}

/// A fully solved triangle.
///
/// Index `i` of `sides` is the side opposite `angles[i]`; `vertices[i]` is the
/// corner carrying `angles[i]`. Angles are in radians. All derived fields are
/// computed once by the solver and cannot be changed afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "TriangleData", try_from = "TriangleData")]
pub struct TriangleSpec {
    pub(crate) sides: [f64; 3],
    pub(crate) angles: [f64; 3],
    pub(crate) vertices: [Vector2<f64>; 3],
    pub(crate) perimeter: f64,
    pub(crate) area: f64,
    pub(crate) inradius: f64,
    pub(crate) circumradius: f64,
    pub(crate) type_by_sides: TypeBySides,
    pub(crate) type_by_angles: TypeByAngles,
}

impl TriangleSpec {
    #[inline]
    pub fn sides(&self) -> [f64; 3] {
        self.sides
    }
    #[inline]
    pub fn angles(&self) -> [f64; 3] {
        self.angles
    }
    /// Angles converted to degrees, for display.
    pub fn angles_deg(&self) -> [f64; 3] {
        self.angles.map(f64::to_degrees)
    }
    #[inline]
    pub fn vertices(&self) -> [Vector2<f64>; 3] {
        self.vertices
    }
    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }
    #[inline]
    pub fn inradius(&self) -> f64 {
        self.inradius
    }
    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }
    #[inline]
    pub fn type_by_sides(&self) -> TypeBySides {
        self.type_by_sides
    }
    #[inline]
    pub fn type_by_angles(&self) -> TypeByAngles {
        self.type_by_angles
    }
}

impl fmt::Display for TriangleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.sides;
        let [da, db, dc] = self.angles_deg();
        writeln!(f, "sides:        a={a:.6} b={b:.6} c={c:.6}")?;
        writeln!(f, "angles [°]:   A={da:.6} B={db:.6} C={dc:.6}")?;
        writeln!(f, "perimeter:    {:.6}", self.perimeter)?;
        writeln!(f, "area:         {:.6}", self.area)?;
        writeln!(f, "inradius:     {:.6}", self.inradius)?;
        writeln!(f, "circumradius: {:.6}", self.circumradius)?;
        writeln!(f, "by sides:     {}", self.type_by_sides)?;
        write!(f, "by angles:    {}", self.type_by_angles)
    }
}

/// Serialized shape of a `TriangleSpec` (camelCase JSON, vertices as `[x, y]`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriangleData {
    pub sides: [f64; 3],
    pub angles: [f64; 3],
    pub vertices: [[f64; 2]; 3],
    pub perimeter: f64,
    pub area: f64,
    pub inradius: f64,
    pub circumradius: f64,
    pub type_by_sides: TypeBySides,
    pub type_by_angles: TypeByAngles,
}

impl From<TriangleSpec> for TriangleData {
    fn from(t: TriangleSpec) -> Self {
        Self {
            sides: t.sides,
            angles: t.angles,
            vertices: t.vertices.map(|v| [v.x, v.y]),
            perimeter: t.perimeter,
            area: t.area,
            inradius: t.inradius,
            circumradius: t.circumradius,
            type_by_sides: t.type_by_sides,
            type_by_angles: t.type_by_angles,
        }
    }
}

impl TryFrom<TriangleData> for TriangleSpec {
    type Error = InvalidTriangleError;

    /// Re-runs `check_spec` with default tolerances; stored values are kept as is.
    fn try_from(d: TriangleData) -> Result<Self, Self::Error> {
        let spec = TriangleSpec {
            sides: d.sides,
            angles: d.angles,
            vertices: d.vertices.map(|[x, y]| Vector2::new(x, y)),
            perimeter: d.perimeter,
            area: d.area,
            inradius: d.inradius,
            circumradius: d.circumradius,
            type_by_sides: d.type_by_sides,
            type_by_angles: d.type_by_angles,
        };
        super::util::check_spec(&spec, &SolveCfg::default())?;
        Ok(spec)
    }
}
