pub mod handlers;
pub mod routes;

use std::sync::Arc;

use actix_web::web;

pub use handlers::AnalyticsRequest;
pub use handlers::ErrorResponse;
pub use handlers::HealthResponse;
pub use routes::analytics_routes;
pub use routes::health_routes;

use crate::handler::query::QueryHandler;

// AppState containing the query handler shared by every worker
#[derive(Debug, Clone)]
pub struct AppState {
    pub query_handler: Arc<QueryHandler>,
}

impl AppState {
    pub fn new(query_handler: QueryHandler) -> Self {
        Self {
            query_handler: Arc::new(query_handler),
        }
    }
}

/// Registers every API route; static files are mounted by the caller after
/// this so they never shadow the API.
pub fn configure_api(cfg: &mut web::ServiceConfig) { cfg.service(analytics_routes()).service(health_routes()); }
