use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use vg_api::routes::{otp, AppState};
use vg_core::services::otp::{OtpPolicyConfig, OtpPolicyService, OtpStore};
use vg_infra::provider::create_verification_provider;
use vg_shared::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize the subscriber; `log` records from the HTTP layer pass
    // through the tracing-log bridge
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting VerifyGate API server");

    let server_config = ServerConfig::from_env();
    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    // One-time provider initialization with account credentials
    let provider = create_verification_provider();

    // The OTP and block state lives for the lifetime of the process;
    // a restart clears it
    let store = Arc::new(OtpStore::new());
    let otp_service = Arc::new(OtpPolicyService::new(
        provider,
        store,
        OtpPolicyConfig::from_env(),
    ));

    let state = web::Data::new(AppState { otp_service });

    HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(state.clone())
            // Health check endpoint
            .route("/health", web::get().to(health_check))
            // OTP routes
            .service(
                web::scope("/api/otp")
                    .route("/send", web::post().to(otp::send::send_otp))
                    .route("/verify", web::post().to(otp::verify::verify_otp)),
            )
    })
    .bind(bind_address)?
    .run()
    .await
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "verify-gate-api"
    }))
}
