// File: services/bookify_widget/src/main.rs
use bookify_common::{log_error, log_result, logging};
use bookify_config::load_config;
use bookify_widget::{error_text, parse_command, AppState, Flow};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let _log_guard = logging::init_from_config(&config.logging);

    let started = log_result(
        AppState::from_config(config),
        "Widget components ready",
        "Failed to start widget",
    );
    let Ok(mut state) = started else {
        return ExitCode::FAILURE;
    };

    println!("{}", state.render());
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                return ExitCode::FAILURE;
            }
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match state.execute(command).await {
            Ok(Flow::Continue(text)) => println!("{}", text),
            Ok(Flow::Quit) => break,
            Err(e) => {
                println!("{}", error_text(&e));
                log_error(e, "Command failed");
            }
        }
    }

    info!("Widget stopped");
    ExitCode::SUCCESS
}
