// Example client demonstrating how to use the MathMind gRPC service
//
// Solves one problem of each kind and prints the step-by-step derivation:
//   - linear equation   3x + 5 = 14
//   - quadratic         x² - 3x + 2 = 0
//   - square root       √72
//   - expression        2 + 2 * 5
//
// Start the server first: cargo run --features server

use tonic::Request;

pub mod math_solver {
    tonic::include_proto!("math_solver");
}

use math_solver::{
    math_problem::Problem, math_solver_client::MathSolverClient, solve_result::Solution,
    ExpressionProblem, HistoryRequest, LinearProblem, MathProblem, QuadraticProblem,
    SolveResult, SquareRootProblem,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Connect to the gRPC server
    let mut client = MathSolverClient::connect("http://127.0.0.1:50051").await?;

    let problems = vec![
        Problem::Linear(LinearProblem {
            equation: "3x + 5 = 14".to_string(),
        }),
        Problem::Quadratic(QuadraticProblem {
            a: 1.0,
            b: -3.0,
            c: 2.0,
        }),
        Problem::SquareRoot(SquareRootProblem { value: 72.0 }),
        Problem::Expression(ExpressionProblem {
            expression: "2 + 2 * 5".to_string(),
        }),
    ];

    for problem in problems {
        let request = Request::new(MathProblem {
            problem: Some(problem),
        });

        match client.solve_problem(request).await {
            Ok(response) => print_result(&response.into_inner()),
            Err(status) => println!("✗ {}\n", status.message()),
        }
    }

    // Show what the server remembers
    let history = client
        .get_history(Request::new(HistoryRequest { limit: 10 }))
        .await?
        .into_inner();

    println!("=== History ===");
    for entry in history.entries {
        println!("  #{} {} → {}", entry.id, entry.input, entry.summary);
    }

    Ok(())
}

fn print_result(result: &SolveResult) {
    println!("=== {} ===", result.solver);
    for (i, step) in result.steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    match &result.solution {
        Some(Solution::Quadratic(q)) => {
            if let (Some(x1), Some(x2)) = (&q.x1, &q.x2) {
                println!("  Roots: {} and {}", x1.display, x2.display);
            }
        }
        Some(Solution::SquareRoot(s)) => {
            if let Some(r) = &s.simplified {
                println!("  Simplified: {}√{}", r.coefficient, r.radicand);
            }
        }
        _ => {}
    }

    println!("✓ {}\n", result.message);
}
