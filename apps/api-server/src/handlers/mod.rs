//! HTTP handlers and route configuration.

mod health;
mod posts;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check));

    cfg.service(
        web::scope("/posts")
            .route("", web::get().to(posts::list))
            .route("", web::post().to(posts::create))
            // Fixed-prefix route; three segments, so it never collides with
            // the single-segment delete below.
            .route("/reset/{username}/{password}", web::delete().to(posts::reset))
            .route("/{post_id}", web::get().to(posts::get))
            .route("/{post_id}", web::delete().to(posts::delete))
            .route("/{post_id}/{poster}", web::put().to(posts::update)),
    );
}
