//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `gradebook_core` linkage.
//! - Walk the repository through add/update/sort/delete with fixed data so
//!   output stays deterministic.
//!
//! Set `GRADEBOOK_LOG_DIR` (absolute path) to enable file logging and
//! `GRADEBOOK_LOG_LEVEL` to override the build-mode default.

use gradebook_core::{
    core_version, default_log_level, init_logging, GradeService, InMemoryGradeRepository,
    RepoResult, SortByGrade, SortById, SortOrder, StudentGrade,
};
use log::info;
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "GRADEBOOK_LOG_DIR";
const LOG_LEVEL_ENV: &str = "GRADEBOOK_LOG_LEVEL";

fn main() -> ExitCode {
    println!("gradebook_core version={}", core_version());

    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        let level =
            std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match run_walkthrough() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("walkthrough failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_walkthrough() -> RepoResult<()> {
    info!("event=walkthrough module=cli status=start");
    let mut grades = GradeService::new(InMemoryGradeRepository::new());

    grades.record_grade("A1", 15)?;
    grades.record_grade("A2", 9)?;
    print_roster(
        "by grade asc",
        &grades.roster(&SortByGrade(SortOrder::Ascending)),
    );

    let previous = grades.regrade("A1", 20)?;
    println!("regrade A1: {previous} -> {:?}", grades.grade_of("A1"));

    match grades.record_grade("A1", 5) {
        Ok(()) => println!("add A1 again: accepted"),
        Err(err) => println!("add A1 again: {err}"),
    }
    match grades.regrade("Z9", 10) {
        Ok(previous) => println!("regrade Z9: {previous}"),
        Err(err) => println!("regrade Z9: {err}"),
    }

    match grades.withdraw("A2") {
        Some(record) => println!("withdraw A2: {record}"),
        None => println!("withdraw A2: not enrolled"),
    }
    print_roster(
        "by id desc",
        &grades.roster(&SortById(SortOrder::Descending)),
    );

    info!("event=walkthrough module=cli status=ok");
    Ok(())
}

fn print_roster(label: &str, roster: &[StudentGrade]) {
    let entries: Vec<String> = roster.iter().map(ToString::to_string).collect();
    println!("roster {label}: [{}]", entries.join(", "));
}
