use std::process::ExitCode;
use backend::{config::ServiceConfig, telemetry};
use tracing::{error, info};

#[rocket::main]
async fn main() -> ExitCode {
    let figment = ServiceConfig::figment();
    let config = match ServiceConfig::from_figment(&figment) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = telemetry::init(&config.log_filter) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    info!("🚀 Starting record server on {}:{}", config.address, config.port);
    if config.strict_ids {
        info!("Strict id parsing enabled");
    }

    match backend::build(figment, &config).launch().await {
        Ok(_) => {
            info!("Server stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Server failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
