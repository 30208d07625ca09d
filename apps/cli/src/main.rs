//! Rental Desk entry point.

use std::process::ExitCode;

use clap::Parser;

use rental_desk::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    rental_desk::init_tracing();

    match rental_desk::run(cli).await {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
