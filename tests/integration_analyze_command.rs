mod common;

use base64::Engine as _;
use base64::engine::general_purpose;
use mizan::chart::is_png;
use mizan::config::parse_config;
use mizan::engine::Mizan;
use pretty_assertions::assert_eq;

use common::TestFixtures;

#[test]
fn test_report_png_matches_embedded_plot() {
    let fixtures = TestFixtures::new();
    let handler = fixtures.query_handler(fixtures.basic_table());

    let (report, png) = handler.report_with_png(" A ").expect("A is known");

    let png = png.expect("A has a trend");
    assert!(is_png(&png));
    assert_eq!(report.trend_plot, Some(general_purpose::STANDARD.encode(&png)));
    assert_eq!(handler.report("a").expect("A is known"), report);
}

#[test]
fn test_analyze_writes_the_reported_chart() {
    let fixtures = TestFixtures::new();
    let dir = tempfile::tempdir().expect("temp dir");
    let dataset = dir.path().join("ledger.csv");
    std::fs::write(
        &dataset,
        fixtures.csv(&[
            "0x1,2023-04-16 00:00:00,0xAA,0xBB,10",
            "0x2,2023-04-17 00:00:00,0xAA,0xBB,5",
            "0x3,2023-04-16 02:00:00,0xCC,0xAA,3",
        ]),
    )
    .expect("write csv");
    let config = parse_config(&format!("[dataset]\npath = {:?}\n", dataset.to_string_lossy())).expect("valid config");
    let mizan = Mizan::new(config).expect("ledger loads");
    let chart = dir.path().join("chart.png");

    mizan.analyze_once("0xaa", Some(chart.as_path())).expect("analyze succeeds");

    let written = std::fs::read(&chart).expect("chart written");
    let report = mizan.query_handler.report("0xAA").expect("known wallet");
    assert_eq!(report.trend_plot, Some(general_purpose::STANDARD.encode(&written)));
}

#[test]
fn test_analyze_unknown_wallet_fails_without_chart() {
    let fixtures = TestFixtures::new();
    let dir = tempfile::tempdir().expect("temp dir");
    let dataset = dir.path().join("ledger.csv");
    std::fs::write(&dataset, fixtures.csv(&["0x1,2023-04-16 00:00:00,0xAA,0xBB,10"])).expect("write csv");
    let config = parse_config(&format!("[dataset]\npath = {:?}\n", dataset.to_string_lossy())).expect("valid config");
    let mizan = Mizan::new(config).expect("ledger loads");
    let chart = dir.path().join("chart.png");

    let err = mizan.analyze_once("0xdead", Some(chart.as_path())).expect_err("unknown wallet");

    assert!(mizan::error::is_wallet_not_found(&err));
    assert!(!chart.exists());
}
