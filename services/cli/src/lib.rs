mod cli;
mod commands;
mod infra;

use roadside_intake::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
