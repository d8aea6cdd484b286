// Domain layer: math models, value objects and the solver contract
pub mod domain;

// Solver adapters: one SolverService per problem kind
pub mod solver;

// Application layer: gRPC service, mapping and history
pub mod application;

// Infrastructure layer: server configuration and lifecycle
#[cfg(feature = "server")]
pub mod infrastructure;

// Re-export commonly used types
pub use domain::{
    HistoryEntry, LinearSolution, MathProblem, ProblemKind, QuadraticRoots, QuadraticSolution,
    Radical, Root, Solution, SolverError, SolverService, SqrtSolution, Vertex,
};

pub use solver::{
    evaluate_expression, solve_linear, solve_quadratic, solve_sqrt, ExpressionEvaluator,
    LinearSolver, QuadraticSolver, SolverFactory, SquareRootSolver,
};

pub use application::{GrpcMathSolverService, SolveHistory};

#[cfg(feature = "server")]
pub use infrastructure::{start_server, ServerConfig};
