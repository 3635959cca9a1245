use actix_web::web;

use crate::middleware::JwtExtract;

pub mod admin;
pub mod auth;
pub mod health;
pub mod leaderboard;
pub mod me;
pub mod play;
pub mod stats;

/// Register every route. Scopes that need an identity are wrapped in
/// [`JwtExtract`]; request-wide middleware is applied by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));

    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Public API: /api/auth/**, /api/leaderboard
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));
    cfg.service(web::scope("/api/leaderboard").configure(leaderboard::configure_routes));

    // Bearer-protected API
    cfg.service(
        web::scope("/api/me")
            .wrap(JwtExtract)
            .configure(me::configure_routes),
    );
    cfg.service(
        web::scope("/api/play")
            .wrap(JwtExtract)
            .configure(play::configure_routes),
    );
    cfg.service(
        web::scope("/api/stats")
            .wrap(JwtExtract)
            .configure(stats::configure_routes),
    );
    cfg.service(
        web::scope("/api/admin")
            .wrap(JwtExtract)
            .configure(admin::configure_routes),
    );
}
