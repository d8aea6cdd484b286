// Example: solving a worksheet of free-text problems over a gRPC stream
//
// Each line is sent as-is and classified by the server:
//   - "√N" or "sqrt(N)" → square root
//   - anything with "="  → linear equation
//   - everything else    → arithmetic expression
//
// Problems that cannot be solved come back in-band as REJECTED results,
// so one bad line does not end the stream.

use futures::stream;
use tonic::Request;

pub mod math_solver {
    tonic::include_proto!("math_solver");
}

use math_solver::{math_problem::Problem, math_solver_client::MathSolverClient, MathProblem, SolveStatus};

const WORKSHEET: &[&str] = &[
    "2x - 3 = 7",
    "-x + 4 = 0",
    "0.5x + 1.5 = 2.5",
    "√144",
    "sqrt(48)",
    "2 ^ 10 - 24",
    "sin(pi / 2) + 1",
    "x^2 = 4",
    "1 / 0",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut client = MathSolverClient::connect("http://127.0.0.1:50051").await?;

    println!("=== Worksheet ({} problems, streamed) ===\n", WORKSHEET.len());

    let outbound = stream::iter(WORKSHEET.iter().map(|line| MathProblem {
        problem: Some(Problem::Text(line.to_string())),
    }));

    let mut inbound = client
        .solve_problem_stream(Request::new(outbound))
        .await?
        .into_inner();

    let mut solved = 0;
    let mut index = 0;
    while let Some(result) = inbound.message().await? {
        let line = WORKSHEET.get(index).copied().unwrap_or("?");
        index += 1;

        if result.status == SolveStatus::Solved as i32 {
            solved += 1;
            println!("✓ {:<20} {}", line, result.message);
        } else {
            println!("✗ {:<20} {}", line, result.message);
        }
    }

    println!("\n{} of {} solved", solved, WORKSHEET.len());

    Ok(())
}
