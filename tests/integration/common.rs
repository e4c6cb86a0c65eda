use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

use weekgrid::core::cli::{CliArgs, CliPaths};
use weekgrid::core::context::AppContext;

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_weekgrid"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "weekgrid-{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

pub fn write_config(dir: &Path, window: &str, auto_fit: bool, file_logging: bool) {
    let bool_text = |b: bool| if b { "True" } else { "False" };
    let cfg = format!(
        r#"{{
      "grid_window": {{ "value": "{window}", "description": "Rows of the week grid" }},
      "export_auto_fit": {{ "value": "{}", "description": "Crop exports" }},
      "file_logging_enabled": {{ "value": "{}", "description": "file logging" }}
    }}"#,
        bool_text(auto_fit),
        bool_text(file_logging)
    );
    fs::write(dir.join("config.json"), cfg).unwrap();
}

pub fn paths_in(dir: &Path) -> CliPaths {
    CliPaths {
        config_path: dir.join("config.json"),
        store_path: dir.join("schedule.json"),
        logs_dir: dir.join("logs"),
    }
}

/// Runs the binary with the path flags pointing into `dir`.
pub fn run_cli(dir: &Path, args: &[&str]) -> Output {
    let paths = paths_in(dir);
    Command::new(binary_path())
        .current_dir(dir)
        .arg("--config")
        .arg(&paths.config_path)
        .arg("--store")
        .arg(&paths.store_path)
        .arg("--logs")
        .arg(&paths.logs_dir)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to run binary")
}

/// Same command line, run in-process.
pub fn run_in_process(dir: &Path, args: &[&str]) -> weekgrid::errors::Result<()> {
    let cli = CliArgs {
        paths: paths_in(dir),
        command: args.first().map(|s| s.to_string()),
        args: args.iter().skip(1).map(|s| s.to_string()).collect(),
    };
    let mut ctx = build_context(dir);
    weekgrid::run(&mut ctx, &cli)
}

pub fn build_context(dir: &Path) -> AppContext {
    let paths = paths_in(dir);
    AppContext::new_with_paths(paths.config_path, paths.store_path, paths.logs_dir)
        .expect("context should build")
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' && matches!(chars.peek(), Some('[')) {
            let _ = chars.next();
            for nc in chars.by_ref() {
                if nc.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

pub fn normalized_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(|l| strip_ansi(l).trim_end().to_string())
        .filter(|l| !l.trim().is_empty())
        .collect()
}

pub fn read_log_contents(dir: &Path) -> Option<String> {
    let logs_dir = dir.join("logs");
    let mut entries = fs::read_dir(&logs_dir).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}
