//! Measurement form: shape validation and method dispatch.
//!
//! A form carries a name plus up to three sides and three angles (degrees),
//! each possibly blank. The dispatcher decides whether the filled-in values
//! are enough to solve, which `Method` applies, and in which order the values
//! are handed to `triangle::solve`.
//!
//! Order of checks: name, at least one side, exactly three values including a
//! side, then one-side-two-angles (AAS), two-sides-one-angle (SSA), three
//! sides (SSS). Present values are taken in a, b, c / A, B, C order.

use std::fmt;

use crate::triangle::{solve, InvalidTriangleError, Method, TriangleSpec};

/// Form values as entered. `None` means the field was left blank.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleForm {
    pub name: String,
    pub sides: [Option<f64>; 3],
    pub angles: [Option<f64>; 3],
}

/// Method plus the three raw inputs in `solve` order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolvePlan {
    pub method: Method,
    pub inputs: [f64; 3],
}

impl SolvePlan {
    pub fn solve(&self) -> Result<TriangleSpec, InvalidTriangleError> {
        let [i1, i2, i3] = self.inputs;
        solve(self.method, i1, i2, i3)
    }
}

/// The filled-in values do not describe a solvable configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputShapeError {
    MissingName,
    NoSide,
    WrongCount { given: usize },
    NotANumber { field: &'static str, text: String },
}

impl fmt::Display for InputShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => f.write_str("Please enter name!"),
            Self::NoSide => f.write_str("Please provide at least one side!"),
            Self::WrongCount { given } => write!(
                f,
                "Please provide three values including one side! ({given} given)"
            ),
            Self::NotANumber { field, text } => write!(f, "{field}: `{text}` is not a number"),
        }
    }
}

impl std::error::Error for InputShapeError {}

/// Either the form shape was wrong or the triangle itself is invalid.
#[derive(Clone, Debug, PartialEq)]
pub enum FormError {
    Shape(InputShapeError),
    Geometry(InvalidTriangleError),
}

impl FormError {
    /// Short message for end users; details stay in `Display`.
    pub fn user_message(&self) -> String {
        match self {
            Self::Shape(e) => e.to_string(),
            Self::Geometry(_) => "Generated triangle is not valid. Check input data!".to_string(),
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape(e) => write!(f, "{e}"),
            Self::Geometry(e) => write!(f, "invalid triangle: {e}"),
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Shape(e) => Some(e),
            Self::Geometry(e) => Some(e),
        }
    }
}

impl From<InputShapeError> for FormError {
    fn from(e: InputShapeError) -> Self {
        Self::Shape(e)
    }
}

impl From<InvalidTriangleError> for FormError {
    fn from(e: InvalidTriangleError) -> Self {
        Self::Geometry(e)
    }
}

const SIDE_FIELDS: [&str; 3] = ["side a", "side b", "side c"];
const ANGLE_FIELDS: [&str; 3] = ["angle A", "angle B", "angle C"];

fn parse_field(field: &'static str, text: &str) -> Result<Option<f64>, InputShapeError> {
    let t = text.trim();
    if t.is_empty() {
        return Ok(None);
    }
    t.parse::<f64>()
        .map(Some)
        .map_err(|_| InputShapeError::NotANumber {
            field,
            text: text.to_string(),
        })
}

impl TriangleForm {
    /// Build a form from raw text fields; whitespace-only fields count as blank.
    pub fn parse(
        name: &str,
        sides: [&str; 3],
        angles: [&str; 3],
    ) -> Result<Self, InputShapeError> {
        let mut form = TriangleForm {
            name: name.trim().to_string(),
            ..TriangleForm::default()
        };
        for i in 0..3 {
            form.sides[i] = parse_field(SIDE_FIELDS[i], sides[i])?;
            form.angles[i] = parse_field(ANGLE_FIELDS[i], angles[i])?;
        }
        Ok(form)
    }

    fn present_sides(&self) -> impl Iterator<Item = f64> + '_ {
        self.sides.iter().flatten().copied()
    }

    fn present_angles(&self) -> impl Iterator<Item = f64> + '_ {
        self.angles.iter().flatten().copied()
    }

    pub fn side_count(&self) -> usize {
        self.present_sides().count()
    }

    pub fn angle_count(&self) -> usize {
        self.present_angles().count()
    }

    /// Pick the solving method and order its inputs.
    pub fn plan(&self) -> Result<SolvePlan, InputShapeError> {
        if self.name.is_empty() {
            return Err(InputShapeError::MissingName);
        }
        if !side_present(self) {
            return Err(InputShapeError::NoSide);
        }
        if !three_values_one_side(self) {
            return Err(InputShapeError::WrongCount {
                given: self.side_count() + self.angle_count(),
            });
        }
        let sides: Vec<f64> = self.present_sides().collect();
        let angles: Vec<f64> = self.present_angles().collect();
        let plan = if one_side_two_angles(self) {
            SolvePlan {
                method: Method::Aas,
                inputs: [angles[0], angles[1], sides[0]],
            }
        } else if two_sides_one_angle(self) {
            SolvePlan {
                method: Method::Ssa,
                inputs: [sides[0], sides[1], angles[0]],
            }
        } else {
            SolvePlan {
                method: Method::Sss,
                inputs: [sides[0], sides[1], sides[2]],
            }
        };
        Ok(plan)
    }

    /// Plan and solve in one go.
    pub fn generate(&self) -> Result<(SolvePlan, TriangleSpec), FormError> {
        let plan = self.plan()?;
        let triangle = plan.solve()?;
        Ok((plan, triangle))
    }
}

pub fn side_present(form: &TriangleForm) -> bool {
    form.side_count() > 0
}

/// Exactly three values are filled in and at least one is a side.
pub fn three_values_one_side(form: &TriangleForm) -> bool {
    form.side_count() + form.angle_count() == 3 && side_present(form)
}

pub fn one_side_two_angles(form: &TriangleForm) -> bool {
    form.side_count() == 1 && form.angle_count() == 2
}

pub fn two_sides_one_angle(form: &TriangleForm) -> bool {
    form.side_count() == 2 && form.angle_count() == 1
}

pub fn three_sides(form: &TriangleForm) -> bool {
    form.side_count() == 3 && form.angle_count() == 0
}
