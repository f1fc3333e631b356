use actix_web::web;

pub mod auth;
pub mod carts;
pub mod health;
pub mod menu;
pub mod payments;
pub mod reviews;
pub mod stats;
pub mod users;

/// Configure application routes under /api/v1, mirroring the paths the
/// storefront already calls.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes).service(
        web::scope("/api/v1")
            .configure(auth::configure_routes)
            .configure(payments::configure_intent_route)
            .configure(stats::configure_routes)
            .service(web::scope("/users").configure(users::configure_routes))
            .service(web::scope("/menu").configure(menu::configure_routes))
            .service(web::scope("/reviews").configure(reviews::configure_routes))
            .service(web::scope("/carts").configure(carts::configure_routes))
            .service(web::scope("/payments").configure(payments::configure_routes)),
    );
}
