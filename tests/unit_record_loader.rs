mod common;

use std::io::Write;

use chrono::TimeZone;
use chrono::Utc;
use mizan::config::DatasetConfig;
use mizan::error::LoaderError;
use mizan::storage::LoadReport;
use mizan::storage::loader::load_table;
use mizan::storage::loader::parse_timestamp;
use mizan::storage::loader::parse_value;
use mizan::storage::loader::read_table;
use rstest::*;

use common::TestFixtures;

fn dataset() -> DatasetConfig { DatasetConfig::new("unused.csv") }

mod record_loader_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_clean_rows_are_kept_in_input_order() {
        let fixtures = TestFixtures::new();
        let csv = fixtures.csv(&[
            "0x1,2023-04-16 00:00:00,0xAA,0xBB,10",
            "0x2,2023-04-17 00:00:00,0xaa,0xbb,5",
            "0x3,2023-04-16 02:00:00,0xCC,0xAA,3",
        ]);

        let (table, report) = read_table(csv.as_bytes(), &dataset()).expect("load succeeds");

        assert_eq!(report, LoadReport { total_rows: 3, kept_rows: 3, dropped_rows: 0 });
        let values: Vec<f64> = table.iter().map(|record| record.value).collect();
        assert_eq!(values, vec![10.0, 5.0, 3.0]);
        assert_eq!(table.records()[0].from, fixtures.wallet("0xaa"));
        assert_eq!(table.records()[1].from, fixtures.wallet("0xAA"));
    }

    #[test]
    fn test_defective_rows_are_dropped_not_zero_filled() {
        let fixtures = TestFixtures::new();
        let csv = fixtures.csv(&[
            "0x1,2023-04-16 00:00:00,0xAA,0xBB,10",
            "0x2,2023-04-16 00:00:00,0xAA,0xBB,not-a-number",
            "0x3,2023-04-16 00:00:00,0xAA,,4",
            "0x4,,0xAA,0xBB,4",
            "0x5,2023-04-16 00:00:00,0xAA,0xBB,",
            "0x6,yesterday,0xAA,0xBB,4",
            "0x7,2023-04-16 00:00:00,0xAA,0xBB,-1",
            "0x8,2023-04-16 00:00:00,   ,0xBB,4",
        ]);

        let (table, report) = read_table(csv.as_bytes(), &dataset()).expect("load succeeds");

        assert_eq!(report.total_rows, 8);
        assert_eq!(report.kept_rows, 1);
        assert_eq!(report.dropped_rows, 7);
        assert_eq!(table.len(), 1);
        assert_eq!(table.total_value(), 10.0);
    }

    #[test]
    fn test_short_rows_are_dropped() {
        let fixtures = TestFixtures::new();
        let csv = fixtures.csv(&["0x1,2023-04-16 00:00:00,0xAA,0xBB,10", "0x2,2023-04-16 00:00:00,0xAA"]);

        let (table, report) = read_table(csv.as_bytes(), &dataset()).expect("load succeeds");

        assert_eq!(table.len(), 1);
        assert_eq!(report.dropped_rows, 1);
    }

    #[test]
    fn test_missing_column_fails_the_load() {
        let csv = "Txhash,DateTime (UTC),From,To\n0x1,2023-04-16 00:00:00,0xAA,0xBB\n";

        let err = read_table(csv.as_bytes(), &dataset()).expect_err("value column is required");

        let missing = err.chain().find_map(|cause| cause.downcast_ref::<LoaderError>());
        assert!(
            matches!(missing, Some(LoaderError::MissingColumn(column)) if column == "Value_OUT(ETH)"),
            "unexpected error: {err:#}"
        );
    }

    #[test]
    fn test_custom_column_names() {
        let mut config = dataset();
        config.from_column = "sender".to_string();
        config.to_column = "receiver".to_string();
        config.value_column = "amount".to_string();
        config.timestamp_column = "time".to_string();
        let csv = "time,sender,receiver,amount\n2023-04-16,0xAA,0xBB,1.5\n";

        let (table, _) = read_table(csv.as_bytes(), &config).expect("load succeeds");

        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].value, 1.5);
    }

    #[test]
    fn test_load_from_file() {
        let fixtures = TestFixtures::new();
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(fixtures.csv(&["0x1,2023-04-16 00:00:00,0xAA,0xBB,10"]).as_bytes()).expect("write csv");

        let config = DatasetConfig::new(file.path().to_string_lossy());
        let (table, report) = load_table(&config).expect("load succeeds");

        assert_eq!(table.len(), 1);
        assert_eq!(report.kept_rows, 1);
    }

    #[test]
    fn test_unreadable_source_is_fatal() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = DatasetConfig::new(dir.path().join("missing.csv").to_string_lossy());

        let err = load_table(&config).expect_err("missing file must fail");

        assert!(matches!(
            err.chain().find_map(|cause| cause.downcast_ref::<LoaderError>()),
            Some(LoaderError::OpenFileError(_))
        ));
    }
}

mod field_parsing_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[rstest]
    #[case("10", Some(10.0))]
    #[case(" 0.25 ", Some(0.25))]
    #[case("0", Some(0.0))]
    #[case("1e3", Some(1000.0))]
    #[case("", None)]
    #[case("abc", None)]
    #[case("-3", None)]
    #[case("NaN", None)]
    #[case("inf", None)]
    fn test_parse_value(
        #[case] raw: &str,
        #[case] expected: Option<f64>,
    ) {
        assert_eq!(parse_value(raw), expected);
    }

    #[rstest]
    #[case("2023-04-16 08:30:00")]
    #[case("2023-04-16T08:30:00")]
    #[case("2023-04-16T08:30:00Z")]
    #[case("2023-04-16T10:30:00+02:00")]
    #[case("2023-04-16 08:30")]
    #[case("1681633800")]
    fn test_parse_timestamp_formats(#[case] raw: &str) {
        let expected = Utc.with_ymd_and_hms(2023, 4, 16, 8, 30, 0).single();
        assert_eq!(parse_timestamp(raw), expected);
    }

    #[test]
    fn test_parse_timestamp_bare_date_is_midnight() {
        assert_eq!(parse_timestamp("2023-04-16"), Utc.with_ymd_and_hms(2023, 4, 16, 0, 0, 0).single());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("16/04/2023")]
    #[case("2023-13-01")]
    #[case("20230416")]
    #[case("42")]
    #[case("+1681633800")]
    fn test_parse_timestamp_rejects(#[case] raw: &str) {
        assert_eq!(parse_timestamp(raw), None);
    }
}
