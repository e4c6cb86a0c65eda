use crate::common::{
    build_context, make_temp_dir, normalized_lines, read_log_contents, run_cli, write_config,
};
use weekgrid::core::types::PaletteColor;
use std::fs;

#[test]
fn no_command_prints_help() {
    let dir = make_temp_dir("cli");
    let output = run_cli(&dir, &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("import-items FILE"));
    assert!(stdout.contains("show [--auto-fit] [DAY...]"));
}

#[test]
fn unknown_command_exits_with_error() {
    let dir = make_temp_dir("cli");
    let output = run_cli(&dir, &["frobnicate"]);

    assert!(!output.status.success());
    let stderr = normalized_lines(&output.stderr);
    assert!(
        stderr.iter().any(|l| l.contains("Unknown command: 'frobnicate'")),
        "stderr was: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn unknown_flag_exits_before_touching_files() {
    let dir = make_temp_dir("cli");
    let output = run_cli(&dir, &["--verbose", "list"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!dir.join("schedule.json").exists());
}

#[test]
fn add_then_list_across_processes() {
    let dir = make_temp_dir("cli");
    write_config(&dir, "07:00-19:00", false, false);

    let added = run_cli(&dir, &["add", "Math", "monday", "9:00AM", "10:30AM", "R1"]);
    assert!(added.status.success());
    assert!(dir.join("schedule.json").exists());

    let listed = run_cli(&dir, &["list"]);
    assert!(listed.status.success());
    let lines = normalized_lines(&listed.stdout);
    assert!(lines.iter().any(|l| l == "ENTRIES"));
    assert!(
        lines
            .iter()
            .any(|l| l.starts_with("1  | Math") && l.contains("09:00-10:30")),
        "stdout was: {}",
        String::from_utf8_lossy(&listed.stdout)
    );
}

#[test]
fn separately_added_subjects_get_different_colors() {
    let dir = make_temp_dir("cli");
    write_config(&dir, "07:00-19:00", false, false);

    assert!(run_cli(&dir, &["add", "Math", "mon", "09:00", "10:00"]).status.success());
    assert!(run_cli(&dir, &["add", "Physics", "tue", "09:00", "10:00"]).status.success());
    let flagged = run_cli(&dir, &["add", "Chem", "wed", "09:00", "10:00", "--color", "pink"]);
    assert!(flagged.status.success());

    let ctx = build_context(&dir);
    let colors: Vec<PaletteColor> = ctx.store.list().iter().map(|e| e.color).collect();
    assert_eq!(
        colors,
        vec![PaletteColor::Blue, PaletteColor::Green, PaletteColor::Pink]
    );
}

#[test]
fn invalid_entry_fails_and_leaves_store_untouched() {
    let dir = make_temp_dir("cli");
    write_config(&dir, "07:00-19:00", false, false);

    let output = run_cli(&dir, &["add", "Math", "monday", "11:00", "10:00"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid entry"));
    assert!(!dir.join("schedule.json").exists());
}

#[test]
fn show_renders_cropped_week() {
    let dir = make_temp_dir("cli");
    write_config(&dir, "07:00-19:00", false, false);
    assert!(run_cli(&dir, &["add", "Math", "tue", "09:00", "10:00"]).status.success());

    let output = run_cli(&dir, &["show", "--auto-fit", "tuesday"]);
    assert!(output.status.success());
    let lines = normalized_lines(&output.stdout);

    assert!(lines.iter().any(|l| l == "WEEK"));
    assert!(lines.iter().any(|l| l.starts_with("TIME") && l.ends_with("Tuesday")));
    assert!(lines.iter().any(|l| l.starts_with("9:00AM") && l.contains("Math")));
    assert!(lines.iter().any(|l| l.starts_with("10:00AM")));
    assert!(!lines.iter().any(|l| l.starts_with("7:00AM")));
}

#[test]
fn config_change_is_saved_and_logged() {
    let dir = make_temp_dir("cli");
    write_config(&dir, "07:00-19:00", false, true);

    let output = run_cli(&dir, &["config", "grid_window", "08:00-12:00"]);
    assert!(output.status.success());

    let saved = fs::read_to_string(dir.join("config.json")).unwrap();
    assert!(saved.contains("08:00-12:00"));
    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("GRID_WINDOW"));
}

#[test]
fn disabled_file_logging_writes_no_log() {
    let dir = make_temp_dir("cli");
    write_config(&dir, "07:00-19:00", false, false);
    assert!(run_cli(&dir, &["add", "Math", "monday", "09:00", "10:00"]).status.success());
    assert!(read_log_contents(&dir).is_none());
}
