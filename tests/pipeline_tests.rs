// End-to-end conversion from an in-memory sheet, and config loading.
use coursecal::ScheduleError;
use coursecal::config::{Config, ErrorPolicy};
use coursecal::context::{AppContext, TestContext};
use coursecal::loader::ScheduleTable;
use coursecal::pipeline::{build_from_table, convert, convert_table};
use std::fs;
use std::path::PathBuf;

const LECTURE: &str = "2024-01-16 - 2024-05-06 | Mon Wed Fri | 10:00 a.m.-10:50 a.m. | Room 101";
const LAB: &str = "2024-01-16 - 2024-05-06 | Thu | 1:05 p.m.-1:55 p.m. | Lab 2";

fn table(patterns: &[(&str, String)]) -> ScheduleTable {
    let mut rows = vec![
        vec!["Course Listing".to_string(), String::new(), String::new()],
        vec![String::new(), "Section".to_string(), "Meeting Patterns".to_string()],
    ];
    for (section, cell) in patterns {
        rows.push(vec![String::new(), section.to_string(), cell.clone()]);
    }
    ScheduleTable { rows }
}

#[test]
fn test_convert_table_writes_one_event_per_pattern() {
    let ctx = TestContext::new();
    let sheet = table(&[
        ("CS101 - Intro", format!("{LECTURE}\n\n{LAB}")),
        ("MATH200 - Calculus", LECTURE.to_string()),
        ("ART100 - Online", String::new()),
    ]);

    let report = convert_table(&sheet, &ctx.root, ErrorPolicy::Abort, None).unwrap();
    assert_eq!(report.event_count, 3);
    assert!(report.skipped.is_empty());

    let ics = fs::read_to_string(&report.output_path).unwrap();
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 3);
    assert_eq!(ics.matches("SUMMARY:CS101").count(), 2);
    assert!(ics.contains("SUMMARY:MATH200"));
    assert!(!ics.contains("ART100"));
    assert!(ics.contains("DTSTART:20240116T130500"));
    assert!(ics.contains("RRULE:FREQ=WEEKLY;BYDAY=TH;UNTIL=20240507T000000"));
}

#[test]
fn test_abort_policy_stops_on_first_bad_row() {
    let ctx = TestContext::new();
    let sheet = table(&[
        ("CS101", LECTURE.to_string()),
        ("CS102", "2024-01-16 - 2024-05-06 | Mon | Room 9".to_string()),
    ]);

    let err = convert_table(&sheet, &ctx.root, ErrorPolicy::Abort, None).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ScheduleError>(),
        Some(ScheduleError::Format { .. })
    ));
    assert!(!ctx.root.join("courses.ics").exists());
}

#[test]
fn test_skip_policy_collects_bad_rows() {
    let sheet = table(&[
        ("CS101", LECTURE.to_string()),
        ("CS102", "2024-01-16 - 2024-05-06 | Mon | Room 9".to_string()),
        (
            "CS103",
            "2024-01-16 - 2024-05-06 | Mon Xyz | 10:00 a.m.-10:50 a.m. | R".to_string(),
        ),
        ("CS104", LAB.to_string()),
    ]);

    let outcome = build_from_table(&sheet, ErrorPolicy::Skip).unwrap();
    assert_eq!(outcome.events.len(), 2);
    assert_eq!(outcome.skipped.len(), 2);
    assert_eq!(outcome.skipped[0].row.section, "CS102");
    assert!(matches!(outcome.skipped[0].error, ScheduleError::Format { .. }));
    assert!(matches!(
        outcome.skipped[1].error,
        ScheduleError::UnknownWeekday { .. }
    ));
}

#[test]
fn test_skip_policy_still_fails_on_missing_column() {
    let sheet = ScheduleTable::from_rows(vec![vec!["Section", "Days"]]);
    let err = build_from_table(&sheet, ErrorPolicy::Skip).unwrap_err();
    assert!(matches!(err, ScheduleError::MissingColumn { .. }));
}

#[test]
fn test_convert_reports_missing_input() {
    let ctx = TestContext::new();
    let config = Config {
        input_path: ctx.root.join("missing.xlsx"),
        output_dir: ctx.root.clone(),
        ..Config::default()
    };
    let err = convert(&config).unwrap_err();
    assert!(err.to_string().contains("missing.xlsx"));
}

#[test]
fn test_config_load_uses_defaults_without_file() {
    let ctx = TestContext::new();
    assert_eq!(Config::load(&ctx).unwrap(), Config::default());
}

#[test]
fn test_config_load_reads_toml() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    fs::write(
        &path,
        "input_path = \"fall.ods\"\noutput_dir = \"cal\"\nerror_policy = \"skip\"\n",
    )
    .unwrap();

    let config = Config::load(&ctx).unwrap();
    assert_eq!(config.input_path, PathBuf::from("fall.ods"));
    assert_eq!(config.output_dir, PathBuf::from("cal"));
    assert_eq!(config.error_policy, ErrorPolicy::Skip);
}

#[test]
fn test_config_load_rejects_invalid_toml() {
    let ctx = TestContext::new();
    fs::write(ctx.get_config_file_path().unwrap(), "input_path = [").unwrap();
    let err = Config::load(&ctx).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_convert_reads_workbook_and_writes_calendar() {
    let ctx = TestContext::new();
    let config = Config {
        input_path: PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("schedule.ods"),
        output_dir: ctx.root.clone(),
        ..Config::default()
    };

    let report = convert(&config).unwrap();
    assert_eq!(report.event_count, 2);
    assert!(report.skipped.is_empty());
    assert_eq!(report.output_path, ctx.root.join("courses.ics"));

    let ics = fs::read_to_string(&report.output_path).unwrap();
    assert_eq!(ics.matches("SUMMARY:CS101-001").count(), 2);
    assert!(ics.contains("RRULE:FREQ=WEEKLY;BYDAY=MO,WE,FR;UNTIL=20240507T000000"));
    assert!(ics.contains("RRULE:FREQ=WEEKLY;BYDAY=TH;UNTIL=20240507T000000"));
    assert!(ics.contains("DTSTART:20240116T130500"));
    assert!(ics.contains("LOCATION:Science Hall 101"));
    assert!(!ics.contains("ART100"));
}
