// Linear equation solver
// Template-matching parser for equations shaped like `ax + b = c`

use crate::domain::{
    models::{LinearSolution, MathProblem, Solution},
    solver_service::{Result, SolverError, SolverService},
    value_objects::{linear_equation, ProblemKind},
};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// `[coefficient]x [± constant]`, whitespace allowed around the sign
static LEFT_SIDE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([-+]?\d*\.?\d*)x\s*(?:([-+])\s*(\d+\.?\d*))?\s*$")
        .expect("linear equation pattern is valid")
});

/// Solve a linear equation of the form `ax + b = c` for `x`.
///
/// Returns `None` when the input does not have exactly one `=`, when the
/// left side is not a single `x` term with an optional constant, or when
/// the right side is not a number. A zero coefficient is not rejected here;
/// the solution is then non-finite.
pub fn solve_linear(equation: &str) -> Option<LinearSolution> {
    let parts: Vec<&str> = equation.split('=').map(str::trim).collect();
    if parts.len() != 2 {
        debug!(equation, "expected exactly one '='");
        return None;
    }

    let c = parse_number(parts[1])?;
    let (a, b) = parse_left_side(parts[0])?;

    let mut steps = Vec::with_capacity(4);
    steps.push(format!("Original equation: {}", equation.trim()));
    steps.push(format!("Identified: {}", linear_equation(a, b, c)));
    steps.push(format!("Subtract {} from both sides: {}x = {}", b, a, c - b));

    let solution = (c - b) / a;
    steps.push(format!("Divide by {}: x = {}", a, solution));

    Some(LinearSolution {
        solution,
        coefficient: a,
        constant: b,
        rhs: c,
        steps,
    })
}

fn parse_left_side(left: &str) -> Option<(f64, f64)> {
    let Some(caps) = LEFT_SIDE.captures(left) else {
        debug!(left, "left side is not of the form ax + b");
        return None;
    };

    let a = match caps.get(1).map_or("", |m| m.as_str()) {
        "" | "+" => 1.0,
        "-" => -1.0,
        raw => parse_number(raw)?,
    };

    let b = match (caps.get(2), caps.get(3)) {
        (Some(sign), Some(magnitude)) => {
            let magnitude = parse_number(magnitude.as_str())?;
            if sign.as_str() == "-" {
                -magnitude
            } else {
                magnitude
            }
        }
        _ => 0.0,
    };

    Some((a, b))
}

fn parse_number(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            debug!(raw, "not a finite number");
            None
        }
    }
}

/// Solver adapter for linear equations
pub struct LinearSolver;

impl LinearSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LinearSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for LinearSolver {
    fn solve(&self, problem: &MathProblem) -> Result<Solution> {
        self.validate(problem)?;

        let MathProblem::Linear { equation } = problem else {
            return Err(SolverError::InvalidProblem(
                "Expected a linear equation".to_string(),
            ));
        };

        let solution = solve_linear(equation).ok_or_else(|| {
            SolverError::MalformedEquation(format!(
                "'{}' is not a linear equation like 3x + 5 = 14",
                equation.trim()
            ))
        })?;

        if solution.coefficient == 0.0 {
            return Err(SolverError::InvalidDomain(
                "Coefficient of x cannot be zero".to_string(),
            ));
        }
        if !solution.solution.is_finite() {
            return Err(SolverError::InvalidDomain(format!(
                "x = {} / {} overflows",
                solution.rhs - solution.constant,
                solution.coefficient
            )));
        }

        Ok(Solution::Linear(solution))
    }

    fn name(&self) -> &str {
        "Linear Equation Solver"
    }

    fn kind(&self) -> ProblemKind {
        ProblemKind::Linear
    }

    fn capabilities(&self) -> Vec<String> {
        vec![
            "Equations of the form ax + b = c".to_string(),
            "Implicit coefficients (x, -x)".to_string(),
            "Step-by-step isolation of x".to_string(),
        ]
    }
}
