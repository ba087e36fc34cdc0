use clap::Parser;
use colored::*;
use std::env;
use tracing::{info, Level};
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use error_common::{log_error, Result, ServiceError};
use logger_redacted::LoggerConfig;
use tokenline_server::{create_app, Settings, TokenLineServer};

/// TokenLine HTTP Server
#[derive(Parser, Debug)]
#[command(name = "tokenline-server")]
#[command(about = "Daily appointment token line: IVR webhook and admin API")]
struct Args {
    /// Server bind address, overrides the config file
    #[arg(long, env = "TOKENLINE_HOST")]
    host: Option<String>,

    /// Server port, overrides the config file
    #[arg(short, long, env = "TOKENLINE_PORT")]
    port: Option<u16>,

    /// Configuration file path
    #[arg(short, long, default_value = "tokenline.yaml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut settings = Settings::load(&args.config)
        .map_err(|e| ServiceError::ConfigError(format!("Failed to load {}: {}", args.config, e)))?;
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }

    init_tracing(&settings.logging, args.verbose);

    info!("📞 {}", "Starting TokenLine server".bright_cyan());
    info!("📋 Version: {}", env!("CARGO_PKG_VERSION").bright_white());
    info!("🌐 Bind address: {}", settings.bind_address().bright_yellow());

    let addr = settings.bind_address();
    let server = TokenLineServer::new(settings);
    let policy = server.ledger.policy();
    info!(
        capacity = policy.capacity,
        slot_minutes = policy.slot_minutes,
        start_hour = policy.start_hour,
        "Ledger ready"
    );

    let app = create_app(server);

    let listener = tokio::net::TcpListener::bind(addr.as_str())
        .await
        .map_err(|e| ServiceError::NetworkError(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("🚀 {}", format!("TokenLine running on http://{}", addr).bright_green());
    info!("📋 {}", format!("IVR webhook: POST http://{}/call", addr).bright_blue());
    info!("📋 {}", format!("Admin view: GET http://{}/admin", addr).bright_blue());

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServiceError::ServerError(format!("HTTP server error: {}", e)));

    if let Err(err) = &result {
        log_error("serve", err);
    }
    info!("TokenLine server stopped");
    result
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

fn init_tracing(config: &LoggerConfig, verbose: bool) {
    let level = if verbose {
        Level::DEBUG
    } else {
        config.log_level.parse().unwrap_or(Level::INFO)
    };

    let is_development = env::var("TOKENLINE_ENV").unwrap_or_else(|_| "development".to_string()) == "development";
    let use_colors = env::var("NO_COLOR").is_err() && atty::is(atty::Stream::Stdout);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "tokenline_server={},booking_ledger={},tower_http=info",
            level, level
        )
        .into()
    });

    if is_development && use_colors && !config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_names(true)
                    .with_line_number(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(true)
                    .with_level(true),
            )
            .init();

        print_startup_banner();
    } else {
        // Structured JSON logging for production
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .json(),
            )
            .init();
    }
}

fn print_startup_banner() {
    println!("{}", "╔══════════════════════════════════════════════════════════════╗".bright_cyan());
    println!("{}", "║                         📞 TOKENLINE                         ║".bright_cyan());
    println!("{}", "║                 Daily Appointment Token Line                 ║".bright_cyan());
    println!("{}", "╚══════════════════════════════════════════════════════════════╝".bright_cyan());
    println!();
}
