//! End-to-end logging scenarios against real files

use std::fs;
use std::sync::Arc;

use shush_logs::{FixedClock, LogFile, LogLevel, Logger, LoggerConfig, RecordingDiagnostics};
use tempfile::{tempdir, TempDir};

const DATE: &str = "2024-03-05";

fn clock() -> FixedClock {
    FixedClock::from_ymd_hms(2024, 3, 5, 9, 30, 0)
}

fn config(tmp: &TempDir, project: &str) -> LoggerConfig {
    LoggerConfig::new(project).with_directory(format!("{}/", tmp.path().display()))
}

fn build(config: LoggerConfig, file: &LogFile) -> Logger {
    Logger::builder(config).file(file.clone()).clock(clock()).build()
}

fn lines(file: &LogFile) -> Vec<String> {
    fs::read_to_string(file.path())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn greeting_then_log_line() {
    let tmp = tempdir().unwrap();
    let file = LogFile::new();
    let mut logger = build(config(&tmp, "demo"), &file);

    logger.log("hello");

    assert_eq!(file.path(), tmp.path().join(format!("demo-{}.log", DATE)));
    assert_eq!(
        fs::read_to_string(file.path()).unwrap(),
        format!(
            "{DATE} | LOG: STARTED LOGGING {{project-name}}\n{DATE} | LOG: hello\n"
        )
    );
}

#[test]
fn greeting_expands_when_caller_defines_hyphenated_name() {
    let tmp = tempdir().unwrap();
    let file = LogFile::new();
    let _logger = build(config(&tmp, "demo").with_variable("project-name", "Demo App"), &file);

    assert_eq!(lines(&file), vec![format!("{DATE} | LOG: STARTED LOGGING Demo App")]);
}

#[test]
fn dbg_is_silent_at_log_level() {
    let tmp = tempdir().unwrap();
    let file = LogFile::new();
    let mut logger = build(config(&tmp, "demo").with_level(LogLevel::Log), &file);

    for _ in 0..10 {
        logger.dbg("x");
    }

    assert_eq!(lines(&file).len(), 1);
}

#[test]
fn dbg_writes_one_line_at_debug_level() {
    let tmp = tempdir().unwrap();
    let file = LogFile::new();
    let mut logger = build(config(&tmp, "demo"), &file);

    logger.dbg("x");

    assert_eq!(lines(&file)[1..], [format!("{DATE} | DBG: x")]);
}

#[test]
fn log_writes_regardless_of_level() {
    let tmp = tempdir().unwrap();
    let file = LogFile::new();
    let mut logger = build(config(&tmp, "demo"), &file);

    logger.log("a");
    logger.set_log_level(0);
    logger.log("b");
    logger.set_log_level(5);
    logger.log("c");

    assert_eq!(logger.level(), LogLevel::Log);
    assert_eq!(
        lines(&file)[1..],
        [
            format!("{DATE} | LOG: a"),
            format!("{DATE} | LOG: b"),
            format!("{DATE} | LOG: c"),
        ]
    );
}

#[test]
fn golden_output_for_custom_templates() {
    let tmp = tempdir().unwrap();
    let file = LogFile::new();
    let cfg = config(&tmp, "demo")
        .with_variable("host", "alpha")
        .with_variable("tag", "<{host}>")
        .with_line_template("{tag} {prefix}{LOG}{suffix}");
    let mut logger = build(cfg, &file);

    logger.set_log_prefix("{time} L ");
    logger.set_dbg_prefix("{time} D ");
    logger.set_dbg_suffix(" (dbg)\n");
    logger.log("one");
    logger.dbg("two");

    // {tag} resolves to <{host}> in the first pass and to <alpha> in the second
    assert_eq!(
        fs::read_to_string(file.path()).unwrap(),
        [
            "<alpha> 2024-03-05 | LOG: STARTED LOGGING {project-name}\n",
            "<alpha> 09:30:00 L one\n",
            "<alpha> 09:30:00 D two (dbg)\n",
        ]
        .concat()
    );
}

#[test]
fn second_logger_reuses_the_open_file() {
    let tmp = tempdir().unwrap();
    let file = LogFile::new();
    let mut first = build(config(&tmp, "first"), &file);
    let first_path = file.path();

    // Different project, directory and name: ignored while the file is open
    let other_dir = tempdir().unwrap();
    let mut second = build(
        config(&other_dir, "second").with_file_name("elsewhere.log"),
        &file,
    );

    first.log("1");
    second.log("2");
    first.log("3");

    assert_eq!(second.path(), first_path);
    assert!(!other_dir.path().join("elsewhere.log").exists());
    assert_eq!(
        lines(&file),
        vec![
            format!("{DATE} | LOG: STARTED LOGGING {{project-name}}"),
            format!("{DATE} | LOG: STARTED LOGGING {{project-name}}"),
            format!("{DATE} | LOG: 1"),
            format!("{DATE} | LOG: 2"),
            format!("{DATE} | LOG: 3"),
        ]
    );
}

#[test]
fn surviving_logger_reopens_after_another_is_dropped() {
    let tmp = tempdir().unwrap();
    let file = LogFile::new();
    let mut keeper = build(config(&tmp, "demo"), &file);
    let short_lived = build(config(&tmp, "demo"), &file);

    drop(short_lived);
    assert!(!file.is_open());

    keeper.log("still here");

    assert!(file.is_open());
    assert_eq!(lines(&file).last().unwrap(), &format!("{DATE} | LOG: still here"));
}

#[test]
fn new_logger_opens_its_own_path_once_file_is_closed() {
    let tmp = tempdir().unwrap();
    let file = LogFile::new();
    drop(build(config(&tmp, "first"), &file));

    let second = build(config(&tmp, "second"), &file);

    assert_eq!(second.path(), tmp.path().join(format!("second-{}.log", DATE)));
}

#[test]
fn greeting_follows_every_reopen() {
    let tmp = tempdir().unwrap();
    let file = LogFile::new();
    let mut logger = build(config(&tmp, "demo"), &file);

    logger.set_file_name("renamed.log");
    logger.log("x");
    assert_eq!(lines(&file)[0], format!("{DATE} | LOG: STARTED LOGGING {{project-name}}"));

    logger.set_directory(format!("{}/sub/", tmp.path().display()));
    assert_eq!(file.path(), tmp.path().join("sub").join("renamed.log"));
    assert_eq!(
        lines(&file),
        vec![format!("{DATE} | LOG: STARTED LOGGING {{project-name}}")]
    );
}

#[test]
fn unwritable_location_is_reported_not_raised() {
    let tmp = tempdir().unwrap();
    let not_a_dir = tmp.path().join("file");
    fs::write(&not_a_dir, "").unwrap();

    let recorder = Arc::new(RecordingDiagnostics::new());
    let file = LogFile::new();
    let mut logger = Logger::builder(
        LoggerConfig::new("demo").with_directory(format!("{}/", not_a_dir.display())),
    )
    .file(file.clone())
    .clock(clock())
    .diagnostics(recorder.clone())
    .build();

    logger.log("dropped");
    assert!(!recorder.errors().is_empty());

    // Moving somewhere writable recovers
    recorder.clear();
    logger.set_directory(format!("{}/ok/", tmp.path().display()));
    logger.log("kept");

    assert!(recorder.is_empty());
    assert_eq!(lines(&file).last().unwrap(), &format!("{DATE} | LOG: kept"));
}
