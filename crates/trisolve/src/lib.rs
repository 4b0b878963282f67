//! Triangle solving and the plumbing around it.
//!
//! - `triangle`: pure solver from three measurements to a checked `TriangleSpec`.
//! - `form`: decides which solving method a partially filled form allows.
//! - `record`: JSON envelope used when persisting a solved triangle.
//!
//! Everything here is synchronous and free of I/O; callers may solve from
//! many threads at once.

pub mod form;
pub mod record;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::form::{FormError, InputShapeError, SolvePlan, TriangleForm};
    pub use crate::record::TriangleRecord;
    pub use crate::triangle::rand::{draw_batch, draw_inputs, ReplayToken, SampleCfg};
    pub use crate::triangle::{
        check_spec, solve, solve_with_cfg, InvalidTriangleError, Method, SolveCfg, TriangleSpec,
        TypeByAngles, TypeBySides,
    };
    pub use nalgebra::Vector2 as Vec2;
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
