// Arithmetic expression evaluator backed by meval

use crate::domain::{
    models::{MathProblem, Solution},
    solver_service::{Result, SolverError, SolverService},
    value_objects::ProblemKind,
};
use std::f64::consts::PI;
use tracing::debug;

/// Evaluate an infix arithmetic expression.
///
/// Supports `+ - * / % ^`, parentheses, unary minus, the constants `pi`,
/// `e` and `tau`, and meval's built-in functions. Parse failures, unknown
/// names and non-finite results are all reported as
/// [`SolverError::InvalidExpression`].
pub fn evaluate_expression(expression: &str) -> Result<f64> {
    if expression.trim().is_empty() {
        return Err(SolverError::InvalidExpression("empty expression".to_string()));
    }

    let parsed = expression.parse::<meval::Expr>().map_err(|e| {
        debug!(expression, error = %e, "expression did not parse");
        SolverError::InvalidExpression(expression.trim().to_string())
    })?;

    let mut ctx = meval::Context::new();
    ctx.var("tau", 2.0 * PI);

    let value = parsed.eval_with_context(ctx).map_err(|e| {
        debug!(expression, error = %e, "expression did not evaluate");
        SolverError::InvalidExpression(expression.trim().to_string())
    })?;

    if !value.is_finite() {
        debug!(expression, value, "expression has no finite value");
        return Err(SolverError::InvalidExpression(expression.trim().to_string()));
    }

    Ok(value)
}

/// Solver adapter for free-form expressions
pub struct ExpressionEvaluator;

impl ExpressionEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExpressionEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for ExpressionEvaluator {
    fn solve(&self, problem: &MathProblem) -> Result<Solution> {
        self.validate(problem)?;

        match problem {
            MathProblem::Expression { expression } => {
                evaluate_expression(expression).map(Solution::Value)
            }
            _ => Err(SolverError::InvalidProblem(
                "Expected an arithmetic expression".to_string(),
            )),
        }
    }

    fn name(&self) -> &str {
        "Expression Evaluator"
    }

    fn kind(&self) -> ProblemKind {
        ProblemKind::Expression
    }

    fn capabilities(&self) -> Vec<String> {
        vec![
            "Operators + - * / % ^ with standard precedence".to_string(),
            "Constants pi, e, tau".to_string(),
            "Functions sqrt, abs, exp, ln, sin, cos, tan, ...".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn respects_operator_precedence() {
        assert_eq!(evaluate_expression("2 + 2 * 5").unwrap(), 12.0);
        assert_eq!(evaluate_expression("(2 + 2) * 5").unwrap(), 20.0);
        assert_eq!(evaluate_expression("10 - 4 - 3").unwrap(), 3.0);
        assert_eq!(evaluate_expression("2 ^ 3 ^ 2").unwrap(), 512.0);
        assert_eq!(evaluate_expression("-3 + 8 / 4").unwrap(), -1.0);
    }

    #[test]
    fn constants_and_functions() {
        assert_relative_eq!(evaluate_expression("2 * pi").unwrap(), 2.0 * PI);
        assert_relative_eq!(evaluate_expression("tau").unwrap(), 2.0 * PI);
        assert_relative_eq!(evaluate_expression("sqrt(16) + abs(-2)").unwrap(), 6.0);
    }

    #[test]
    fn malformed_input_fails() {
        for bad in ["not math", "", "2 +", "(1 + 2", "1 / 0", "x + 1"] {
            let err = evaluate_expression(bad).unwrap_err();
            assert!(matches!(err, SolverError::InvalidExpression(_)), "{bad}");
        }
    }

    #[test]
    fn adapter_rejects_blank_expressions() {
        let err = ExpressionEvaluator::new()
            .solve(&MathProblem::expression("   "))
            .unwrap_err();
        assert!(matches!(err, SolverError::InvalidProblem(_)));
    }
}
