use crate::domain::{
    models::MathProblem, solver_service::SolverService, value_objects::ProblemKind,
};
use crate::solver::{ExpressionEvaluator, LinearSolver, QuadraticSolver, SquareRootSolver};
use std::sync::Arc;

/// Factory for creating solver instances based on the problem kind
pub struct SolverFactory;

impl SolverFactory {
    /// Create the solver that handles this problem
    pub fn create_solver(problem: &MathProblem) -> Arc<dyn SolverService> {
        Self::create_for_kind(problem.kind())
    }

    /// Create a solver for a specific problem kind
    pub fn create_for_kind(kind: ProblemKind) -> Arc<dyn SolverService> {
        match kind {
            ProblemKind::Linear => Arc::new(LinearSolver::new()),
            ProblemKind::Quadratic => Arc::new(QuadraticSolver::new()),
            ProblemKind::SquareRoot => Arc::new(SquareRootSolver::new()),
            ProblemKind::Expression => Arc::new(ExpressionEvaluator::new()),
        }
    }

    /// One solver per supported problem kind
    pub fn available() -> Vec<Arc<dyn SolverService>> {
        ProblemKind::ALL
            .into_iter()
            .map(Self::create_for_kind)
            .collect()
    }
}
