mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use boss_vent::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
