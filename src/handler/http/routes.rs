use actix_web::Scope;
use actix_web::web;

use super::handlers::analytics_by_form;
use super::handlers::analytics_by_path;
use super::handlers::health;

pub fn analytics_routes() -> Scope {
    web::scope("/analytics")
        .route("", web::post().to(analytics_by_form))
        .route("/{wallet}", web::get().to(analytics_by_path))
}

pub fn health_routes() -> Scope { web::scope("/health").route("", web::get().to(health)) }
