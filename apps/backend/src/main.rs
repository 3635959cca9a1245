use actix_web::{web, App, HttpServer};
use backend::config::admin_emails::AdminEmails;
use backend::domain::RoundRules;
use backend::infra::state::build_state;
use backend::middleware::{
    cors_middleware, RequestTrace, SecurityHeaders, StructuredLogger, TraceSpan,
};
use backend::routes;
use backend::state::security_config::SecurityConfig;
use db_infra::db::{DbKind, RuntimeEnv};
use tracing::{error, info};

mod telemetry;

fn exit_with(message: &str) -> ! {
    error!("{message}");
    eprintln!("❌ {message}");
    std::process::exit(1);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment (env file,
    // container env, or exported in the shell).
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| exit_with("BACKEND_PORT must be a valid port number"));

    let security_config =
        SecurityConfig::from_env().unwrap_or_else(|e| exit_with(&e.to_string()));
    let rules = RoundRules::from_env().unwrap_or_else(|e| exit_with(&e.to_string()));
    let db_kind = DbKind::from_env().unwrap_or_else(|e| exit_with(&e.to_string()));
    let admin_emails = AdminEmails::from_env();

    let app_state = build_state()
        .with_env(RuntimeEnv::Prod)
        .with_db(db_kind)
        .with_security(security_config)
        .with_rules(rules)
        .with_admin_emails(admin_emails)
        .build()
        .await
        .unwrap_or_else(|e| exit_with(&format!("Failed to build application state: {e}")));

    info!(%host, port, "🚀 Starting Guessword backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(SecurityHeaders)
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
