use super::value_objects::{quadratic_equation, ProblemKind, Radical, Root, Vertex};

/// Solution of a linear equation ax + b = c
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSolution {
    pub solution: f64,
    pub coefficient: f64,
    pub constant: f64,
    pub rhs: f64,
    pub steps: Vec<String>,
}

/// Pair of roots of a quadratic equation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticRoots {
    pub x1: Root,
    pub x2: Root,
}

/// Solution of a quadratic equation ax² + bx + c = 0
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticSolution {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub discriminant: f64,
    pub roots: QuadraticRoots,
    pub vertex: Vertex,
    pub axis_of_symmetry: f64,
    pub steps: Vec<String>,
}

impl QuadraticSolution {
    pub fn has_real_roots(&self) -> bool {
        self.discriminant >= 0.0
    }
}

/// Square root of a non-negative number
#[derive(Debug, Clone, PartialEq)]
pub struct SqrtSolution {
    pub value: f64,
    /// Integer string for perfect squares, otherwise `√value`
    pub exact: String,
    pub decimal: f64,
    /// Reduced radical when the value has a perfect-square factor
    pub simplified: Option<Radical>,
    pub steps: Vec<String>,
}

impl SqrtSolution {
    /// `exact` holds the integer root only for perfect squares
    pub fn is_perfect_square(&self) -> bool {
        !self.exact.starts_with('√')
    }
}

/// Problem submitted to a solver
#[derive(Debug, Clone, PartialEq)]
pub enum MathProblem {
    Linear { equation: String },
    Quadratic { a: f64, b: f64, c: f64 },
    SquareRoot { value: f64 },
    Expression { expression: String },
}

impl MathProblem {
    pub fn linear(equation: impl Into<String>) -> Self {
        MathProblem::Linear {
            equation: equation.into(),
        }
    }

    pub fn quadratic(a: f64, b: f64, c: f64) -> Self {
        MathProblem::Quadratic { a, b, c }
    }

    pub fn square_root(value: f64) -> Self {
        MathProblem::SquareRoot { value }
    }

    pub fn expression(expression: impl Into<String>) -> Self {
        MathProblem::Expression {
            expression: expression.into(),
        }
    }

    /// Classify free text the way the quick-solve box does: `√N` or
    /// `sqrt(N)` with a numeric N is a square root, anything containing `=`
    /// is a linear equation, everything else is an expression.
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();

        let radicand = trimmed.strip_prefix('√').or_else(|| {
            trimmed
                .strip_prefix("sqrt(")
                .and_then(|rest| rest.strip_suffix(')'))
        });
        if let Some(value) = radicand.and_then(|r| r.trim().parse::<f64>().ok()) {
            return MathProblem::square_root(value);
        }

        if trimmed.contains('=') {
            MathProblem::linear(trimmed)
        } else {
            MathProblem::expression(trimmed)
        }
    }

    pub fn kind(&self) -> ProblemKind {
        match self {
            MathProblem::Linear { .. } => ProblemKind::Linear,
            MathProblem::Quadratic { .. } => ProblemKind::Quadratic,
            MathProblem::SquareRoot { .. } => ProblemKind::SquareRoot,
            MathProblem::Expression { .. } => ProblemKind::Expression,
        }
    }

    /// Human-readable form of the problem as entered
    pub fn describe(&self) -> String {
        match self {
            MathProblem::Linear { equation } => equation.clone(),
            MathProblem::Quadratic { a, b, c } => quadratic_equation(*a, *b, *c),
            MathProblem::SquareRoot { value } => format!("√{}", value),
            MathProblem::Expression { expression } => expression.clone(),
        }
    }
}

/// Result of solving a [`MathProblem`]
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    Linear(LinearSolution),
    Quadratic(QuadraticSolution),
    SquareRoot(SqrtSolution),
    Value(f64),
}

impl Solution {
    pub fn kind(&self) -> ProblemKind {
        match self {
            Solution::Linear(_) => ProblemKind::Linear,
            Solution::Quadratic(_) => ProblemKind::Quadratic,
            Solution::SquareRoot(_) => ProblemKind::SquareRoot,
            Solution::Value(_) => ProblemKind::Expression,
        }
    }

    /// Derivation steps; expression values carry none
    pub fn steps(&self) -> &[String] {
        match self {
            Solution::Linear(s) => &s.steps,
            Solution::Quadratic(s) => &s.steps,
            Solution::SquareRoot(s) => &s.steps,
            Solution::Value(_) => &[],
        }
    }

    /// One-line answer used in history and log output
    pub fn summary(&self) -> String {
        match self {
            Solution::Linear(s) => format!("x = {}", s.solution),
            Solution::Quadratic(s) => format!("x₁ = {}, x₂ = {}", s.roots.x1, s.roots.x2),
            Solution::SquareRoot(s) if s.is_perfect_square() => {
                format!("√{} = {}", s.value, s.exact)
            }
            Solution::SquareRoot(s) => format!("√{} ≈ {:.6}", s.value, s.decimal),
            Solution::Value(v) => v.to_string(),
        }
    }
}

/// Recently solved problem
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: u64,
    pub kind: ProblemKind,
    pub input: String,
    pub summary: String,
    pub recorded_at_ms: u64,
}
