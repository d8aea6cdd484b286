// Domain service interface for solving math problems
// Every solver adapter implements this contract

use super::models::{MathProblem, Solution};
use super::value_objects::ProblemKind;

/// Error types for the solver service
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolverError {
    #[error("Malformed equation: {0}")]
    MalformedEquation(String),

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    #[error("Invalid problem: {0}")]
    InvalidProblem(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Domain service interface for math solvers
///
/// Each implementation handles exactly one [`ProblemKind`].
pub trait SolverService: Send + Sync {
    /// Solve a problem
    fn solve(&self, problem: &MathProblem) -> Result<Solution>;

    /// Validate a problem without solving it
    fn validate(&self, problem: &MathProblem) -> Result<()> {
        if problem.kind() != self.kind() {
            return Err(SolverError::InvalidProblem(format!(
                "{} solver cannot solve a {} problem",
                self.kind(),
                problem.kind()
            )));
        }

        match problem {
            MathProblem::Linear { equation } if equation.trim().is_empty() => Err(
                SolverError::InvalidProblem("Please enter a linear equation".to_string()),
            ),
            MathProblem::Expression { expression } if expression.trim().is_empty() => Err(
                SolverError::InvalidProblem("Please enter an expression".to_string()),
            ),
            MathProblem::Quadratic { a, b, c } => {
                if !(a.is_finite() && b.is_finite() && c.is_finite()) {
                    return Err(SolverError::InvalidDomain(
                        "Coefficients a, b and c must be finite numbers".to_string(),
                    ));
                }
                if *a == 0.0 {
                    return Err(SolverError::InvalidDomain(
                        "Coefficient 'a' cannot be zero in a quadratic equation".to_string(),
                    ));
                }
                Ok(())
            }
            MathProblem::SquareRoot { value } if !value.is_finite() || *value < 0.0 => Err(
                SolverError::InvalidDomain("Please enter a non-negative number".to_string()),
            ),
            _ => Ok(()),
        }
    }

    /// Get the name of this solver
    fn name(&self) -> &str;

    /// Kind of problem this solver handles
    fn kind(&self) -> ProblemKind;

    /// Short capability descriptions
    fn capabilities(&self) -> Vec<String> {
        Vec::new()
    }
}
