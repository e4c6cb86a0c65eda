use weekgrid::core::types::{PaletteColor, Weekday};

use crate::common::{build_context, make_temp_dir, run_in_process, write_config};
use std::fs;

const PAYLOAD: &str = r#"```json
[
  {"subjectCode": "CS 101", "day": "Mon, Wed", "startTime": "09:00", "endTime": "10:15", "room": "Hall A"},
  {"subjectCode": "", "subjectName": "Writing", "day": "Friday", "startTime": "1:00 PM", "endTime": "2:00 PM"},
  {"subjectCode": "CS 101", "day": "Funday", "startTime": "09:00", "endTime": "10:15"}
]
```"#;

#[test]
fn import_adds_rows_with_consistent_colors() {
    let dir = make_temp_dir("import");
    write_config(&dir, "07:00-19:00", false, false);
    let file = dir.join("payload.txt");
    fs::write(&file, PAYLOAD).unwrap();

    run_in_process(&dir, &["import", &file.to_string_lossy()]).unwrap();

    let ctx = build_context(&dir);
    let entries = ctx.store.list();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].day, Weekday::Monday);
    assert_eq!(entries[1].day, Weekday::Wednesday);
    assert_eq!(entries[0].color, PaletteColor::Blue);
    assert_eq!(entries[1].color, PaletteColor::Blue);
    assert_eq!(entries[2].subject, "Writing");
    assert_eq!(entries[2].color, PaletteColor::Green);
    assert_eq!(entries[2].start_time.to_string(), "13:00");
}

#[test]
fn reimport_skips_duplicates_and_manual_entries_reuse_colors() {
    let dir = make_temp_dir("import");
    write_config(&dir, "07:00-19:00", false, false);
    let file = dir.join("payload.txt");
    fs::write(&file, PAYLOAD).unwrap();
    let file = file.to_string_lossy().to_string();

    run_in_process(&dir, &["import", &file]).unwrap();
    run_in_process(&dir, &["import", &file]).unwrap();
    run_in_process(&dir, &["add", "Writing", "tue", "15:00", "16:00"]).unwrap();

    let ctx = build_context(&dir);
    assert_eq!(ctx.store.len(), 4);
    let manual = ctx.store.list()[3];
    assert_eq!(manual.color, PaletteColor::Green);
}

#[test]
fn parse_text_and_items_share_the_store() {
    let dir = make_temp_dir("import");
    write_config(&dir, "07:00-19:00", false, false);
    let items = dir.join("items.json");
    fs::write(
        &items,
        r#"{"type":"event","title":"Lab meeting","startDateTime":"2025-01-09T15:00:00","endDateTime":"2025-01-09T16:00:00","location":"B4"}"#,
    )
    .unwrap();

    run_in_process(&dir, &["parse", "Physics", "TTh 10:00AM-11:15AM"]).unwrap();
    run_in_process(&dir, &["import-items", &items.to_string_lossy()]).unwrap();

    let ctx = build_context(&dir);
    let entries = ctx.store.list();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].day, Weekday::Tuesday);
    assert_eq!(entries[1].day, Weekday::Thursday);
    assert_eq!(entries[2].subject, "Lab meeting");
    assert_eq!(entries[2].day, Weekday::Thursday);
    assert_eq!(entries[2].room.as_deref(), Some("B4"));
}
