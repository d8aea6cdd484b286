// Infrastructure: Server setup and configuration

use std::net::SocketAddr;

use clap::Parser;
use tonic::transport::Server;
use tracing::info;

use crate::application::mappers::math_solver::math_solver_server::MathSolverServer;
use crate::application::{GrpcMathSolverService, DEFAULT_HISTORY_CAPACITY};
use crate::solver::SolverFactory;

/// Server settings, read from the command line with environment fallbacks
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mathmind-server",
    about = "Step-by-step math solver over gRPC",
    version
)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "MATHMIND_ADDRESS", default_value = "0.0.0.0:50051")]
    pub address: SocketAddr,

    /// Number of solved problems kept in memory (0 disables history)
    #[arg(long = "history", env = "MATHMIND_HISTORY", default_value_t = DEFAULT_HISTORY_CAPACITY)]
    pub history_capacity: usize,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let service = GrpcMathSolverService::new(config.history_capacity);

    log_banner(&config);

    Server::builder()
        .add_service(MathSolverServer::new(service))
        .serve(config.address)
        .await?;

    Ok(())
}

fn log_banner(config: &ServerConfig) {
    info!("MathMind - step-by-step math solver");
    info!(address = %config.address, history = config.history_capacity, "listening");
    for solver in SolverFactory::available() {
        info!(kind = %solver.kind(), "  {}", solver.name());
    }
}
