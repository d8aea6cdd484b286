// Domain value objects representing core math concepts

use std::fmt;

/// Kind of problem a solver handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemKind {
    /// Single-variable linear equation (ax + b = c)
    Linear,
    /// Quadratic equation (ax² + bx + c = 0)
    Quadratic,
    /// Square root with radical simplification
    SquareRoot,
    /// Free-form arithmetic expression
    Expression,
}

impl ProblemKind {
    pub const ALL: [ProblemKind; 4] = [
        ProblemKind::Linear,
        ProblemKind::Quadratic,
        ProblemKind::SquareRoot,
        ProblemKind::Expression,
    ];
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemKind::Linear => write!(f, "Linear"),
            ProblemKind::Quadratic => write!(f, "Quadratic"),
            ProblemKind::SquareRoot => write!(f, "Square Root"),
            ProblemKind::Expression => write!(f, "Expression"),
        }
    }
}

/// Root of a quadratic equation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Root {
    /// Real root (x ∈ ℝ)
    Real(f64),
    /// Complex root re + im·i
    Complex { re: f64, im: f64 },
}

impl Root {
    pub fn is_real(&self) -> bool {
        matches!(self, Root::Real(_))
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            Root::Real(x) => Some(*x),
            Root::Complex { .. } => None,
        }
    }

    /// Complex conjugate; real roots are their own conjugate
    pub fn conjugate(&self) -> Root {
        match *self {
            Root::Real(x) => Root::Real(x),
            Root::Complex { re, im } => Root::Complex { re, im: -im },
        }
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Root::Real(x) => write!(f, "{}", x + 0.0),
            Root::Complex { re, im } => {
                let sign = if im.is_sign_negative() && im != 0.0 { '-' } else { '+' };
                write!(f, "{} {} {}i", fixed4(re), sign, fixed4(im.abs()))
            }
        }
    }
}

/// Turning point of a parabola
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", fixed4(self.x), fixed4(self.y))
    }
}

/// Simplified radical k√m
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radical {
    pub coefficient: u64,
    pub radicand: u64,
}

impl fmt::Display for Radical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}√{}", self.coefficient, self.radicand)
    }
}

/// Format a number with four decimals, printing negative zero as zero.
pub fn fixed4(value: f64) -> String {
    // -0.0 + 0.0 == +0.0
    format!("{:.4}", value + 0.0)
}

/// Render ax² + bx + c = 0 with signed terms.
pub fn quadratic_equation(a: f64, b: f64, c: f64) -> String {
    format!("{}x² {}x {} = 0", a, signed(b), signed(c))
}

/// Render ax + b = c with a signed constant term.
pub fn linear_equation(a: f64, b: f64, c: f64) -> String {
    format!("{}x {} = {}", a, signed(b), c)
}

fn signed(value: f64) -> String {
    if value.is_sign_negative() && value != 0.0 {
        format!("- {}", -value)
    } else {
        format!("+ {}", value + 0.0)
    }
}
