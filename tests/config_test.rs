use ai_type_quiz::config::{AuditParams, QuizConfig, SessionParams};
use ai_type_quiz::error::QuizError;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::fs;
use std::time::Duration;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: QuizConfig,
}

fn parse(args: &[&str]) -> (QuizConfig, clap::ArgMatches) {
    let matches = TestCli::command()
        .try_get_matches_from(std::iter::once("quiz").chain(args.iter().copied()))
        .expect("valid arguments");
    let cli = TestCli::from_arg_matches(&matches).expect("parsed");
    (cli.config, matches)
}

fn write_config(body: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("quiz.json");
    fs::write(&path, body).unwrap();
    (dir, path)
}

#[test]
fn defaults_match_cli_defaults() {
    let (from_cli, _) = parse(&[]);
    assert_eq!(from_cli, QuizConfig::default());
    assert_eq!(
        QuizConfig::default().session.loading_delay(),
        Duration::from_millis(1500)
    );
    assert_eq!(QuizConfig::default().audit.audit_seed, 42);
}

#[test]
fn partial_file_keeps_remaining_defaults() {
    let (_dir, path) = write_config(r#"{ "audit": { "audit_seed": 7 } }"#);
    let config = QuizConfig::load_from_file(&path).unwrap();

    assert_eq!(config.audit.audit_seed, 7);
    assert_eq!(config.audit.audit_samples, AuditParams::default().audit_samples);
    assert_eq!(config.session, SessionParams::default());
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = QuizConfig::load_from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, QuizError::Config(_)));
}

#[test]
fn malformed_file_is_rejected() {
    let (_dir, path) = write_config("{ session: ");
    let err = QuizConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, QuizError::Json(_)));
}

#[test]
fn zero_samples_are_rejected() {
    let (_dir, path) = write_config(r#"{ "audit": { "audit_samples": 0 } }"#);
    let err = QuizConfig::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("audit_samples"));
}

#[test]
fn explicit_flags_override_file_values() {
    let (_dir, path) = write_config(
        r#"{ "session": { "loading_delay_ms": 10 }, "audit": { "audit_seed": 9, "audit_samples": 50 } }"#,
    );
    let mut config = QuizConfig::load_from_file(&path).unwrap();

    let (cli, matches) = parse(&["--audit-seed", "3"]);
    config.merge_from_cli(&cli, &matches);

    assert_eq!(config.audit.audit_seed, 3);
    // Flags left at their default do not clobber the file.
    assert_eq!(config.audit.audit_samples, 50);
    assert_eq!(config.session.loading_delay_ms, 10);
}

#[test]
fn explicit_default_value_still_overrides() {
    let (_dir, path) = write_config(r#"{ "session": { "loading_delay_ms": 10 } }"#);
    let mut config = QuizConfig::load_from_file(&path).unwrap();

    let (cli, matches) = parse(&["--loading-delay-ms", "1500"]);
    config.merge_from_cli(&cli, &matches);
    assert_eq!(config.session.loading_delay_ms, 1500);
}
