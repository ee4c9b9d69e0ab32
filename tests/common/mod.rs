use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn daylink_cmd() -> Command {
    let mut cmd = Command::cargo_bin("daylink").unwrap();
    cmd.env_remove("DAYLINK_SEARCH_WINDOW_DAYS");
    cmd.env_remove("DAYLINK_JOURNAL_DIR");
    cmd.env_remove("DAYLINK_STANDUP_DIR");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Create `journal/` and `standup/` under `root` plus a config pointing at them
#[allow(dead_code)]
pub fn setup_notes(root: &Path) -> PathBuf {
    fs::create_dir_all(root.join("journal")).unwrap();
    fs::create_dir_all(root.join("standup")).unwrap();

    let config = root.join("daylink.toml");
    fs::write(
        &config,
        format!(
            "search_window_days = 30\n\n[journal]\ndir = {:?}\n\n[standup]\ndir = {:?}\n",
            root.join("journal").to_string_lossy(),
            root.join("standup").to_string_lossy(),
        ),
    )
    .unwrap();
    config
}

#[allow(dead_code)]
pub fn write_note(root: &Path, series: &str, date: &str, content: &str) -> PathBuf {
    let path = root.join(series).join(format!("{}.md", date));
    fs::write(&path, content).unwrap();
    path
}
