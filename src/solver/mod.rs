// Solver adapters: one SolverService implementation per problem kind

pub mod expression;
pub mod factory;
pub mod linear;
pub mod quadratic;
pub mod sqrt;

pub use expression::{evaluate_expression, ExpressionEvaluator};
pub use factory::SolverFactory;
pub use linear::{solve_linear, LinearSolver};
pub use quadratic::{solve_quadratic, QuadraticSolver};
pub use sqrt::{solve_sqrt, SquareRootSolver};
