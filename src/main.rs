//! Matching engine binary.
//!
//! By default reads instructions from `BOOK_INPUT` (or stdin) and writes trades and
//! the book to stdout. With `BOOK_HTTP_PORT` set it serves the REST API instead.

use iceberg_matching_engine::{api, run_stream, Config, Engine};
use log::{error, info};
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = env_logger::try_init();
    let config = Config::from_env();

    if let Some(port) = config.http_port {
        let addr = format!("0.0.0.0:{}", port);
        let listener = match TcpListener::bind(&addr).await {
            Ok(l) => l,
            Err(e) => {
                error!("bind {} failed: {}", addr, e);
                return ExitCode::FAILURE;
            }
        };
        info!("listening on http://{}", addr);
        if let Err(e) = axum::serve(listener, api::create_router().into_make_service()).await {
            error!("server error: {}", e);
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let mut engine = Engine::new();
    let stdout = io::stdout();
    let result = match &config.input {
        Some(path) => match File::open(path) {
            Ok(file) => run_stream(&mut engine, BufReader::new(file), stdout.lock(), &config),
            Err(e) => {
                error!("cannot open {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => run_stream(&mut engine, io::stdin().lock(), stdout.lock(), &config),
    };
    match result {
        Ok(summary) => {
            info!(
                "stream finished processed={} skipped={} trades={}",
                summary.processed, summary.skipped, summary.trades
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("stream aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}
