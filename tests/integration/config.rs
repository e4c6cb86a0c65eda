use weekgrid::config::Config;

use crate::common::{build_context, make_temp_dir, run_in_process, write_config};

#[test]
fn context_uses_configured_grid_window() {
    let dir = make_temp_dir("config");
    write_config(&dir, "08:00-12:00", true, false);
    let ctx = build_context(&dir);

    let grid = ctx.grid().expect("window should be aligned");
    assert_eq!(grid.len(), 9);
    assert_eq!(grid.first().to_string(), "08:00");
    assert!(ctx.config.export_auto_fit());
}

#[test]
fn misaligned_window_stops_the_context() {
    let dir = make_temp_dir("config");
    write_config(&dir, "08:20-12:00", false, false);
    let paths = crate::common::paths_in(&dir);
    let result = weekgrid::core::context::AppContext::new_with_paths(
        paths.config_path,
        paths.store_path,
        paths.logs_dir,
    );
    assert!(result.is_err());
}

#[test]
fn config_command_round_trips_through_file() {
    let dir = make_temp_dir("config");
    write_config(&dir, "07:00-19:00", false, false);

    run_in_process(&dir, &["config", "export_auto_fit", "true"]).unwrap();
    let reloaded = Config::load_from(dir.join("config.json")).unwrap();
    assert!(reloaded.export_auto_fit());

    assert!(run_in_process(&dir, &["config", "grid_window", "07:10-19:00"]).is_err());
}
