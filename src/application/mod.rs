// Application layer: gRPC service, protobuf mapping and solve history

pub mod grpc_service;
pub mod history;
pub mod mappers;

pub use grpc_service::GrpcMathSolverService;
pub use history::{SolveHistory, DEFAULT_HISTORY_CAPACITY};
