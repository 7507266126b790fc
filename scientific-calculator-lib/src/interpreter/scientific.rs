use crate::interpreter::error::CalcError;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// Results of `cos` and `tan` closer to zero than this are reported as exactly zero.
const SNAP_TO_ZERO_THRESHOLD: f64 = 1e-10;

/// 171! no longer fits in an `f64`.
const LARGEST_FINITE_FACTORIAL: f64 = 170.0;

/// The unit angles are given in (for `sin`, `cos`, `tan`) or returned in (for their inverses).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    pub fn from_degrees_flag(use_degrees: bool) -> AngleUnit {
        if use_degrees {
            AngleUnit::Degrees
        } else {
            AngleUnit::Radians
        }
    }

    fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Degrees => angle.to_radians(),
            AngleUnit::Radians => angle,
        }
    }

    fn from_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Degrees => angle.to_degrees(),
            AngleUnit::Radians => angle,
        }
    }
}

/// A unary function applied to the number currently being entered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ScientificFunction {
    Sine,
    Cosine,
    Tangent,
    ArcSine,
    ArcCosine,
    ArcTangent,
    CommonLogarithm,
    NaturalLogarithm,
    Exponential,
    SquareRoot,
    CubeRoot,
    Square,
    Reciprocal,
    AbsoluteValue,
    Factorial,
}

impl ScientificFunction {
    pub fn name(&self) -> &'static str {
        match self {
            ScientificFunction::Sine => "sin",
            ScientificFunction::Cosine => "cos",
            ScientificFunction::Tangent => "tan",
            ScientificFunction::ArcSine => "asin",
            ScientificFunction::ArcCosine => "acos",
            ScientificFunction::ArcTangent => "atan",
            ScientificFunction::CommonLogarithm => "log",
            ScientificFunction::NaturalLogarithm => "ln",
            ScientificFunction::Exponential => "exp",
            ScientificFunction::SquareRoot => "sqrt",
            ScientificFunction::CubeRoot => "cbrt",
            ScientificFunction::Square => "pow2",
            ScientificFunction::Reciprocal => "inv",
            ScientificFunction::AbsoluteValue => "abs",
            ScientificFunction::Factorial => "fact",
        }
    }

    pub fn evaluate(&self, value: f64, unit: AngleUnit) -> Result<f64, CalcError> {
        let result = match self {
            ScientificFunction::Sine => unit.to_radians(value).sin(),
            ScientificFunction::Cosine => snap_to_zero(unit.to_radians(value).cos()),
            ScientificFunction::Tangent => snap_to_zero(unit.to_radians(value).tan()),
            ScientificFunction::ArcSine => unit.from_radians(value.asin()),
            ScientificFunction::ArcCosine => unit.from_radians(value.acos()),
            ScientificFunction::ArcTangent => unit.from_radians(value.atan()),
            ScientificFunction::CommonLogarithm => value.log10(),
            ScientificFunction::NaturalLogarithm => value.ln(),
            ScientificFunction::Exponential => value.exp(),
            ScientificFunction::SquareRoot => {
                if value < 0.0 {
                    return Err(CalcError::ImaginaryResult);
                }
                value.sqrt()
            }
            ScientificFunction::CubeRoot => value.cbrt(),
            ScientificFunction::Square => value * value,
            ScientificFunction::Reciprocal => {
                if value == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                1.0 / value
            }
            ScientificFunction::AbsoluteValue => value.abs(),
            ScientificFunction::Factorial => factorial(value),
        };
        Ok(result)
    }
}

fn snap_to_zero(value: f64) -> f64 {
    if value.abs() < SNAP_TO_ZERO_THRESHOLD {
        0.0
    } else {
        value
    }
}

/// Factorial of the integer part of `value`. Negative input yields NaN instead of an error.
fn factorial(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        return f64::NAN;
    }
    let n = value.trunc();
    if n > LARGEST_FINITE_FACTORIAL {
        return f64::INFINITY;
    }
    (2..=n as u32).fold(1.0, |product, factor| product * factor as f64)
}

impl str::FromStr for ScientificFunction {
    type Err = CalcError;

    fn from_str(input: &str) -> Result<ScientificFunction, Self::Err> {
        match input {
            "sin" => Ok(ScientificFunction::Sine),
            "cos" => Ok(ScientificFunction::Cosine),
            "tan" => Ok(ScientificFunction::Tangent),
            "asin" => Ok(ScientificFunction::ArcSine),
            "acos" => Ok(ScientificFunction::ArcCosine),
            "atan" => Ok(ScientificFunction::ArcTangent),
            "log" => Ok(ScientificFunction::CommonLogarithm),
            "ln" => Ok(ScientificFunction::NaturalLogarithm),
            "exp" => Ok(ScientificFunction::Exponential),
            "sqrt" => Ok(ScientificFunction::SquareRoot),
            "cbrt" => Ok(ScientificFunction::CubeRoot),
            "pow2" => Ok(ScientificFunction::Square),
            "inv" => Ok(ScientificFunction::Reciprocal),
            "abs" => Ok(ScientificFunction::AbsoluteValue),
            "fact" => Ok(ScientificFunction::Factorial),
            name => Err(CalcError::UnsupportedFunction(name.to_string())),
        }
    }
}

impl fmt::Display for ScientificFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
