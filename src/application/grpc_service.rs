use std::pin::Pin;
use std::sync::{Arc, Mutex};

use futures::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status, Streaming};
use tracing::{info, warn};

use super::history::SolveHistory;
use super::mappers::{self, math_solver};
use crate::domain::{
    models::{MathProblem, Solution},
    solver_service::Result as DomainResult,
};
use crate::solver::SolverFactory;

/// Results buffered per streaming call before back-pressure applies
const STREAM_BUFFER: usize = 32;

type ResultStream =
    Pin<Box<dyn Stream<Item = Result<math_solver::SolveResult, Status>> + Send + 'static>>;

/// gRPC service implementation
pub struct GrpcMathSolverService {
    history: Arc<Mutex<SolveHistory>>,
}

impl GrpcMathSolverService {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            history: Arc::new(Mutex::new(SolveHistory::new(history_capacity))),
        }
    }
}

impl Default for GrpcMathSolverService {
    fn default() -> Self {
        Self::new(super::history::DEFAULT_HISTORY_CAPACITY)
    }
}

/// Solve with the matching solver and record successes in the history.
/// Returns the solver name alongside the outcome.
fn solve_and_record(
    history: &Mutex<SolveHistory>,
    problem: &MathProblem,
) -> (String, DomainResult<Solution>) {
    let solver = SolverFactory::create_solver(problem);
    info!(solver = solver.name(), problem = %problem.describe(), "solving problem");

    let outcome = solver.solve(problem);
    match &outcome {
        Ok(solution) => {
            info!(answer = %solution.summary(), "solved");
            match history.lock() {
                Ok(mut history) => {
                    history.record(problem, solution);
                }
                Err(_) => warn!("history lock poisoned, entry not recorded"),
            }
        }
        Err(e) => info!(error = %e, "problem rejected"),
    }

    (solver.name().to_string(), outcome)
}

/// Run [`solve_and_record`] on the blocking pool. Radical simplification is
/// O(√n), so large radicands would otherwise stall a runtime worker.
async fn solve_blocking(
    history: Arc<Mutex<SolveHistory>>,
    problem: MathProblem,
) -> Result<(String, DomainResult<Solution>), Status> {
    tokio::task::spawn_blocking(move || solve_and_record(&history, &problem))
        .await
        .map_err(|e| {
            warn!(error = %e, "solver task failed");
            Status::internal("solver task failed")
        })
}

#[tonic::async_trait]
impl math_solver::math_solver_server::MathSolver for GrpcMathSolverService {
    async fn solve_problem(
        &self,
        request: Request<math_solver::MathProblem>,
    ) -> Result<Response<math_solver::SolveResult>, Status> {
        // Convert protobuf to domain model
        let problem = mappers::proto_to_domain_problem(request.into_inner()).map_err(|e| *e)?;

        let (solver_name, outcome) = solve_blocking(Arc::clone(&self.history), problem).await?;
        let solution = outcome.map_err(|e| Status::invalid_argument(e.to_string()))?;

        Ok(Response::new(mappers::domain_to_proto_solution(
            solution,
            &solver_name,
        )))
    }

    type SolveProblemStreamStream = ResultStream;

    async fn solve_problem_stream(
        &self,
        request: Request<Streaming<math_solver::MathProblem>>,
    ) -> Result<Response<Self::SolveProblemStreamStream>, Status> {
        let mut inbound = request.into_inner();
        let history = Arc::clone(&self.history);
        let (tx, rx) = mpsc::channel(STREAM_BUFFER);

        tokio::spawn(async move {
            let mut count = 0usize;
            loop {
                let proto_problem = match inbound.message().await {
                    Ok(Some(p)) => p,
                    Ok(None) => break,
                    Err(status) => {
                        let _ = tx.send(Err(status)).await;
                        break;
                    }
                };
                count += 1;

                // Failures are reported in-band so the stream keeps going
                let result = match mappers::proto_to_domain_problem(proto_problem) {
                    Ok(problem) => {
                        let kind = problem.kind();
                        match solve_blocking(Arc::clone(&history), problem).await {
                            Ok((name, Ok(solution))) => {
                                mappers::domain_to_proto_solution(solution, &name)
                            }
                            Ok((name, Err(e))) => {
                                mappers::rejected_result(Some(kind), &name, e.to_string())
                            }
                            Err(status) => mappers::rejected_result(Some(kind), "", status.message()),
                        }
                    }
                    Err(status) => mappers::rejected_result(None, "", status.message()),
                };

                if tx.send(Ok(result)).await.is_err() {
                    warn!("client went away mid-stream");
                    break;
                }
            }
            info!(count, "problem stream finished");
        });

        Ok(Response::new(Box::pin(ReceiverStream::new(rx))))
    }

    async fn validate_problem(
        &self,
        request: Request<math_solver::MathProblem>,
    ) -> Result<Response<math_solver::ValidationResult>, Status> {
        let problem = mappers::proto_to_domain_problem(request.into_inner()).map_err(|e| *e)?;
        let solver = SolverFactory::create_solver(&problem);

        let errors = match solver.validate(&problem) {
            Ok(()) => Vec::new(),
            Err(e) => vec![e.to_string()],
        };

        Ok(Response::new(math_solver::ValidationResult {
            is_valid: errors.is_empty(),
            kind: mappers::domain_to_proto_kind(problem.kind()) as i32,
            errors,
        }))
    }

    async fn get_available_solvers(
        &self,
        _request: Request<math_solver::Empty>,
    ) -> Result<Response<math_solver::AvailableSolvers>, Status> {
        let solvers = SolverFactory::available()
            .iter()
            .map(|solver| math_solver::SolverInfo {
                name: solver.name().to_string(),
                kind: mappers::domain_to_proto_kind(solver.kind()) as i32,
                capabilities: solver.capabilities(),
            })
            .collect();

        Ok(Response::new(math_solver::AvailableSolvers { solvers }))
    }

    async fn get_history(
        &self,
        request: Request<math_solver::HistoryRequest>,
    ) -> Result<Response<math_solver::HistoryResponse>, Status> {
        let limit = request.into_inner().limit as usize;
        let entries = self
            .history
            .lock()
            .map_err(|_| Status::internal("history is unavailable"))?
            .recent(limit);

        Ok(Response::new(math_solver::HistoryResponse {
            entries: entries
                .into_iter()
                .map(mappers::domain_to_proto_history)
                .collect(),
        }))
    }
}
