//! Triangle solving from three measurements.
//!
//! Purpose
//! - Turn a minimal set of measurements (SSA, AAS or SSS) into a complete,
//!   immutable `TriangleSpec`: sides, angles, vertices, perimeter, area,
//!   inradius, circumradius and both classifications.
//! - Keep it pure: no I/O, no shared state, one call either yields a checked
//!   triangle or an `InvalidTriangleError`.
//!
//! Conventions
//! - `sides[i]` is opposite `angles[i]`; angles are radians internally, the
//!   raw solver inputs take angles in degrees.
//! - Vertex A sits at the origin and vertex B on the positive x-axis.
//!
//! Code cross-refs: `solve`, `TriangleSpec`, `SolveCfg`, `check_spec`

pub mod rand;
mod solvers;
mod types;
mod util;

pub use solvers::{from_aas, from_sss, from_ssa, solve, solve_with_cfg};
pub use types::{
    InvalidTriangleError, Method, ParseMethodError, SolveCfg, TriangleData, TriangleSpec,
    TypeByAngles, TypeBySides,
};
pub use util::{
    area, check_angles, check_sides, check_spec, circumradius, classify_by_angles,
    classify_by_sides, deg_to_rad, inradius, perimeter, place_vertices, rad_to_deg,
};

#[cfg(test)]
mod tests;
