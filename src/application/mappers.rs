// Mappers: Convert between gRPC protobuf types and domain models
// Keeps protobuf types out of the solver layer

use crate::domain::{
    models::{HistoryEntry, MathProblem, Solution},
    value_objects::{ProblemKind, Radical, Root},
};
use tonic::Status;

pub mod math_solver {
    tonic::include_proto!("math_solver");
}

use math_solver as proto;

/// Convert protobuf MathProblem to domain MathProblem
pub fn proto_to_domain_problem(
    proto_problem: proto::MathProblem,
) -> std::result::Result<MathProblem, Box<Status>> {
    use proto::math_problem::Problem;

    match proto_problem.problem {
        Some(Problem::Linear(p)) => Ok(MathProblem::linear(p.equation)),
        Some(Problem::Quadratic(p)) => Ok(MathProblem::quadratic(p.a, p.b, p.c)),
        Some(Problem::SquareRoot(p)) => Ok(MathProblem::square_root(p.value)),
        Some(Problem::Expression(p)) => Ok(MathProblem::expression(p.expression)),
        Some(Problem::Text(text)) if text.trim().is_empty() => Err(Box::new(
            Status::invalid_argument("Problem text is empty"),
        )),
        Some(Problem::Text(text)) => Ok(MathProblem::from_text(&text)),
        None => Err(Box::new(Status::invalid_argument("Problem is required"))),
    }
}

pub fn domain_to_proto_kind(kind: ProblemKind) -> proto::ProblemKind {
    match kind {
        ProblemKind::Linear => proto::ProblemKind::Linear,
        ProblemKind::Quadratic => proto::ProblemKind::Quadratic,
        ProblemKind::SquareRoot => proto::ProblemKind::SquareRoot,
        ProblemKind::Expression => proto::ProblemKind::Expression,
    }
}

/// Convert domain Root to protobuf Root, keeping the display string
pub fn domain_to_proto_root(root: Root) -> proto::Root {
    let value = match root {
        Root::Real(x) => proto::root::Value::Real(x),
        Root::Complex { re, im } => proto::root::Value::Complex(proto::ComplexNumber { re, im }),
    };

    proto::Root {
        value: Some(value),
        display: root.to_string(),
    }
}

fn domain_to_proto_radical(radical: Radical) -> proto::Radical {
    proto::Radical {
        coefficient: radical.coefficient,
        radicand: radical.radicand,
    }
}

/// Convert domain Solution to protobuf SolveResult
pub fn domain_to_proto_solution(solution: Solution, solver_name: &str) -> proto::SolveResult {
    use proto::solve_result::Solution as ProtoSolution;

    let kind = domain_to_proto_kind(solution.kind()) as i32;
    let message = solution.summary();
    let steps = solution.steps().to_vec();

    let solution = match solution {
        Solution::Linear(s) => ProtoSolution::Linear(proto::LinearSolution {
            solution: s.solution,
            coefficient: s.coefficient,
            constant: s.constant,
            rhs: s.rhs,
        }),
        Solution::Quadratic(s) => ProtoSolution::Quadratic(proto::QuadraticSolution {
            a: s.a,
            b: s.b,
            c: s.c,
            discriminant: s.discriminant,
            x1: Some(domain_to_proto_root(s.roots.x1)),
            x2: Some(domain_to_proto_root(s.roots.x2)),
            vertex: Some(proto::Point {
                x: s.vertex.x,
                y: s.vertex.y,
            }),
            axis_of_symmetry: s.axis_of_symmetry,
        }),
        Solution::SquareRoot(s) => ProtoSolution::SquareRoot(proto::SquareRootSolution {
            value: s.value,
            exact: s.exact,
            decimal: s.decimal,
            simplified: s.simplified.map(domain_to_proto_radical),
        }),
        Solution::Value(v) => ProtoSolution::Value(v),
    };

    proto::SolveResult {
        status: proto::SolveStatus::Solved as i32,
        kind,
        message,
        solver: solver_name.to_string(),
        steps,
        solution: Some(solution),
    }
}

/// In-band result for a problem that could not be solved
pub fn rejected_result(
    kind: Option<ProblemKind>,
    solver_name: &str,
    message: impl Into<String>,
) -> proto::SolveResult {
    proto::SolveResult {
        status: proto::SolveStatus::Rejected as i32,
        kind: kind.map_or(0, |k| domain_to_proto_kind(k) as i32),
        message: message.into(),
        solver: solver_name.to_string(),
        steps: Vec::new(),
        solution: None,
    }
}

/// Convert domain HistoryEntry to protobuf HistoryEntry
pub fn domain_to_proto_history(entry: HistoryEntry) -> proto::HistoryEntry {
    proto::HistoryEntry {
        id: entry.id,
        kind: domain_to_proto_kind(entry.kind) as i32,
        input: entry.input,
        summary: entry.summary,
        recorded_at_ms: entry.recorded_at_ms,
    }
}
