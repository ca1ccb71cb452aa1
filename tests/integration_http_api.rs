mod common;

use actix_web::App;
use actix_web::http::StatusCode;
use actix_web::test;
use actix_web::web;
use mizan::chart::is_png;
use mizan::config::AnalyticsConfig;
use mizan::config::ChartConfig;
use mizan::handler::QueryHandler;
use mizan::handler::WalletReport;
use mizan::handler::http::AnalyticsRequest;
use mizan::handler::http::AppState;
use mizan::handler::http::ErrorResponse;
use mizan::handler::http::HealthResponse;
use mizan::handler::http::configure_api;
use mizan::model::TransactionTable;
use mizan::storage::Ledger;
use pretty_assertions::assert_eq;

use common::TestFixtures;

fn state(handler: QueryHandler) -> web::Data<AppState> { web::Data::new(AppState::new(handler)) }

fn basic_state() -> web::Data<AppState> {
    let fixtures = TestFixtures::new();
    state(fixtures.query_handler(fixtures.basic_table()))
}

#[actix_web::test]
async fn test_form_query_returns_analytics_and_chart() {
    let app = test::init_service(App::new().app_data(basic_state()).configure(configure_api)).await;

    let req = test::TestRequest::post()
        .uri("/analytics")
        .set_form(AnalyticsRequest {
            wallet_address: "  A ".to_string(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let report: WalletReport = test::read_body_json(resp).await;
    assert_eq!(report.analytics.num_outgoing, 2);
    assert_eq!(report.analytics.num_incoming, 1);
    assert_eq!(report.analytics.avg_outgoing_value, 7.5);
    assert_eq!(report.analytics.top_counterparties.len(), 1);

    let plot = report.trend_plot.expect("A has a trend");
    let png = {
        use base64::Engine as _;
        base64::engine::general_purpose::STANDARD.decode(plot).expect("valid base64")
    };
    assert!(is_png(&png));
}

#[actix_web::test]
async fn test_path_query_matches_form_query() {
    let app = test::init_service(App::new().app_data(basic_state()).configure(configure_api)).await;

    let by_path: WalletReport =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/analytics/a").to_request()).await;
    let by_form: WalletReport = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/analytics")
            .set_form(AnalyticsRequest {
                wallet_address: "A".to_string(),
            })
            .to_request(),
    )
    .await;

    assert_eq!(by_path, by_form);
}

#[actix_web::test]
async fn test_unknown_wallet_is_404() {
    let app = test::init_service(App::new().app_data(basic_state()).configure(configure_api)).await;

    let req = test::TestRequest::post()
        .uri("/analytics")
        .set_form(AnalyticsRequest {
            wallet_address: "0xdeadbeef".to_string(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Wallet address not found");
}

#[actix_web::test]
async fn test_missing_form_field_is_400() {
    let app = test::init_service(App::new().app_data(basic_state()).configure(configure_api)).await;

    let req = test::TestRequest::post()
        .uri("/analytics")
        .insert_header(("content-type", "application/x-www-form-urlencoded"))
        .set_payload("wallet=A")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_health_reports_ledger_size() {
    let app = test::init_service(App::new().app_data(basic_state()).configure(configure_api)).await;

    let health: HealthResponse =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/health").to_request()).await;

    assert_eq!(health.status, "ok");
    assert_eq!(health.nodes, 3);
    assert_eq!(health.edges, 2);
    assert_eq!(health.records, 3);
}

#[actix_web::test]
async fn test_slow_centrality_times_out_with_503() {
    let fixtures = TestFixtures::new();
    let n = 1_500;
    let table: TransactionTable = (0..n)
        .flat_map(|i| {
            [
                fixtures.record(&format!("0x{i}"), &format!("0x{}", (i + 1) % n), 1.0, 1),
                fixtures.record(&format!("0x{i}"), &format!("0x{}", (i * 7 + 3) % n), 2.0, 2),
            ]
        })
        .collect();
    let analytics = AnalyticsConfig {
        centrality_timeout_ms: Some(1),
        ..AnalyticsConfig::default()
    };
    let handler = QueryHandler::new(Ledger::new(table, true), analytics, ChartConfig::default());
    let app = test::init_service(App::new().app_data(state(handler)).configure(configure_api)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/analytics/0x0").to_request()).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert!(body.error.contains("timed out"), "{}", body.error);
}
