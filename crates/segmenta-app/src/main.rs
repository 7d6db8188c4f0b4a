//! Main application entry point (native).

use std::process::ExitCode;

#[cfg(feature = "native")]
fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting Segmenta demo");

    match segmenta_app::App::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "native"))]
fn main() -> ExitCode {
    eprintln!("Native feature not enabled. Use `cargo run --features native`");
    ExitCode::FAILURE
}
