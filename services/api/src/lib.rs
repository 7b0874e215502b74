mod cli;
mod commands;
mod demo;
mod infra;
mod render;
mod routes;
mod server;

use workforce_intel::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
