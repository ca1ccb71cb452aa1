use std::time::Duration;

use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use serde::Deserialize;
use serde::Serialize;
use tracing::error;
use tracing::info;
use tracing::warn;

use super::AppState;
use crate::Result;
use crate::constants::WALLET_NOT_FOUND_MESSAGE;
use crate::err_with_loc;
use crate::error::EngineError;
use crate::error::is_wallet_not_found;
use crate::handler::query::WalletReport;

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyticsRequest {
    pub wallet_address: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status:  String,
    pub nodes:   usize,
    pub edges:   usize,
    pub records: usize,
}

// Form submission from the index page
pub async fn analytics_by_form(
    data: web::Data<AppState>,
    form: web::Form<AnalyticsRequest>,
) -> impl Responder {
    respond_with_report(data, form.into_inner().wallet_address).await
}

pub async fn analytics_by_path(
    data: web::Data<AppState>,
    wallet: web::Path<String>,
) -> impl Responder {
    respond_with_report(data, wallet.into_inner()).await
}

pub async fn health(data: web::Data<AppState>) -> impl Responder {
    let ledger = &data.query_handler.ledger;
    HttpResponse::Ok().json(HealthResponse {
        status:  "ok".to_string(),
        nodes:   ledger.graph.node_count(),
        edges:   ledger.graph.edge_count(),
        records: ledger.table.len(),
    })
}

async fn respond_with_report(
    data: web::Data<AppState>,
    raw_wallet: String,
) -> HttpResponse {
    if !data.query_handler.contains(&raw_wallet) {
        info!("analytics::wallet_not_found::{}", raw_wallet.trim());
        return not_found();
    }

    match build_report(data, raw_wallet).await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) if is_wallet_not_found(&e) => not_found(),
        Err(e) => match e.chain().find_map(|cause| cause.downcast_ref::<EngineError>()) {
            Some(EngineError::TimeoutError(ms)) => {
                warn!("analytics::timeout::{}ms", ms);
                HttpResponse::ServiceUnavailable().json(ErrorResponse { error: e.root_cause().to_string() })
            },
            _ => {
                error!("analytics::failed: {:#}", e);
                HttpResponse::InternalServerError().json(ErrorResponse { error: e.root_cause().to_string() })
            },
        },
    }
}

/// Runs the CPU-bound query on the blocking pool, bounded by the configured
/// centrality timeout. A timed-out computation is abandoned, not interrupted.
async fn build_report(
    data: web::Data<AppState>,
    raw_wallet: String,
) -> Result<WalletReport> {
    let handler = data.query_handler.clone();
    let task = web::block(move || handler.report(&raw_wallet));

    let joined = match data.query_handler.analytics.centrality_timeout_ms {
        Some(ms) => tokio::time::timeout(Duration::from_millis(ms), task)
            .await
            .map_err(|_| err_with_loc!(EngineError::TimeoutError(ms)))?,
        None => task.await,
    };

    joined.map_err(|e| err_with_loc!(EngineError::BlockingError(e.to_string())))?
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: WALLET_NOT_FOUND_MESSAGE.to_string(),
    })
}
