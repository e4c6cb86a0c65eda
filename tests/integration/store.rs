use weekgrid::core::types::Weekday;

use crate::common::{build_context, make_temp_dir, run_in_process, write_config};
use std::fs;

#[test]
fn entries_survive_a_new_context() {
    let dir = make_temp_dir("store");
    write_config(&dir, "07:00-19:00", false, false);

    run_in_process(&dir, &["add", "Math", "monday", "09:00", "10:00", "R1"]).unwrap();
    run_in_process(&dir, &["add", "Art", "friday", "13:00", "15:00"]).unwrap();
    run_in_process(&dir, &["delete", "1"]).unwrap();
    run_in_process(&dir, &["add", "Bio", "friday", "08:00", "09:00"]).unwrap();

    let ctx = build_context(&dir);
    let entries = ctx.store.list();
    let ids: Vec<_> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 3]);
    assert_eq!(entries[0].day, Weekday::Friday);
}

#[test]
fn legacy_array_file_is_read() {
    let dir = make_temp_dir("store");
    write_config(&dir, "07:00-19:00", false, false);
    fs::write(
        dir.join("schedule.json"),
        r#"[{"id":4,"subject":"Art","day":"Monday","startTime":"09:00","endTime":"10:00","color":"green"}]"#,
    )
    .unwrap();

    let ctx = build_context(&dir);
    assert_eq!(ctx.store.len(), 1);
    assert_eq!(ctx.store.get(4).unwrap().subject, "Art");
}

#[test]
fn newer_schema_fails_to_open() {
    let dir = make_temp_dir("store");
    write_config(&dir, "07:00-19:00", false, false);
    fs::write(dir.join("schedule.json"), r#"{"version":99,"entries":[]}"#).unwrap();
    let paths = crate::common::paths_in(&dir);

    let result = weekgrid::core::context::AppContext::new_with_paths(
        paths.config_path,
        paths.store_path,
        paths.logs_dir,
    );
    assert!(matches!(result, Err(weekgrid::errors::Error::Storage(_))));
}

#[test]
fn clear_empties_the_saved_file() {
    let dir = make_temp_dir("store");
    write_config(&dir, "07:00-19:00", false, false);
    run_in_process(&dir, &["add", "Math", "monday", "09:00", "10:00"]).unwrap();
    run_in_process(&dir, &["clear"]).unwrap();

    let saved = fs::read_to_string(dir.join("schedule.json")).unwrap();
    assert!(saved.contains("\"entries\": []"));
    assert!(build_context(&dir).store.is_empty());
}
