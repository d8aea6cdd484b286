// Square root solver with radical simplification

use crate::domain::{
    models::{MathProblem, Solution, SqrtSolution},
    solver_service::{Result, SolverError, SolverService},
    value_objects::{ProblemKind, Radical},
};

/// Largest integer an f64 holds exactly
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Square root of `value` with an exact form when one exists.
///
/// `exact` is the integer root for perfect squares and `√value` otherwise.
/// For integral values the largest perfect-square factor is pulled out of
/// the radical and reported in `simplified` and the steps.
pub fn solve_sqrt(value: f64) -> Result<SqrtSolution> {
    SquareRootSolver::new().validate(&MathProblem::square_root(value))?;

    let mut steps = vec![format!("Calculate √{}", value)];

    let decimal = value.sqrt();
    let exact_root = perfect_square_root(value, decimal);
    let is_exact = exact_root.is_some();

    let mut simplified = None;
    if is_exact {
        steps.push(format!("{} is a perfect square", value));
        steps.push(format!("√{} = {}", value, decimal));
    } else {
        steps.push(format!("{} is not a perfect square", value));
        steps.push(format!("√{} ≈ {:.6}", value, decimal));

        simplified = as_integer(value).and_then(largest_square_factor);
        match simplified {
            Some(radical) => {
                let square = radical.coefficient * radical.coefficient;
                steps.push(format!(
                    "Simplify: √{} = √({} × {}) = {}",
                    value, square, radical.radicand, radical
                ));
            }
            None => steps.push("Cannot simplify further".to_string()),
        }
    }

    let exact = match exact_root {
        Some(k) => k.to_string(),
        None => format!("√{}", value),
    };

    Ok(SqrtSolution {
        value,
        exact,
        decimal,
        simplified,
        steps,
    })
}

fn as_integer(value: f64) -> Option<u64> {
    (value.fract() == 0.0 && value <= MAX_EXACT_INTEGER).then_some(value as u64)
}

/// Integer root of `value` when it is a perfect square. Checked in integers
/// since `f64::sqrt` rounds large non-squares onto whole numbers.
fn perfect_square_root(value: f64, decimal: f64) -> Option<u64> {
    let n = as_integer(value)?;
    let k = decimal.round() as u64;
    (k.checked_mul(k) == Some(n)).then_some(k)
}

/// Pull the largest k² out of n, giving k√(n / k²). `None` when n has no
/// square factor above 1.
pub fn largest_square_factor(n: u64) -> Option<Radical> {
    let mut best = None;
    let mut i: u64 = 2;
    while let Some(square) = i.checked_mul(i).filter(|sq| *sq <= n) {
        if n % square == 0 {
            best = Some(i);
        }
        i += 1;
    }

    best.map(|k| Radical {
        coefficient: k,
        radicand: n / (k * k),
    })
}

/// Solver adapter for square roots
pub struct SquareRootSolver;

impl SquareRootSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SquareRootSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for SquareRootSolver {
    fn solve(&self, problem: &MathProblem) -> Result<Solution> {
        match problem {
            MathProblem::SquareRoot { value } => solve_sqrt(*value).map(Solution::SquareRoot),
            other => Err(SolverError::InvalidProblem(format!(
                "{} solver cannot solve a {} problem",
                self.kind(),
                other.kind()
            ))),
        }
    }

    fn name(&self) -> &str {
        "Square Root Solver"
    }

    fn kind(&self) -> ProblemKind {
        ProblemKind::SquareRoot
    }

    fn capabilities(&self) -> Vec<String> {
        vec![
            "Perfect square detection".to_string(),
            "Radical simplification k√m".to_string(),
        ]
    }
}
