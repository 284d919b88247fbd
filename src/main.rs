mod app;
mod domain;
mod infra;
mod ui;
mod usecase;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::infra::session::app_data_dir;

fn main() {
    let data_dir = app_data_dir().expect("should resolve and create application data directory");
    init_logging(&data_dir);

    let webview_data_dir = ensure_webview_data_dir(&data_dir)
        .expect("should resolve and create WebView data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("WMS 智能仓储系统"))
                .with_data_directory(webview_data_dir),
        )
        .launch(App);
}

fn init_logging(data_dir: &Path) {
    let log_path = data_dir.join("wms-admin.log");
    let level = match std::env::var("WMS_LOG").as_deref() {
        Ok("debug") => LevelFilter::Debug,
        Ok("off") => LevelFilter::Off,
        _ => LevelFilter::Info,
    };
    match File::create(&log_path) {
        Ok(file) => {
            if let Err(err) = WriteLogger::init(level, Config::default(), file) {
                eprintln!("failed to initialize logger: {err}");
            }
        }
        Err(err) => {
            eprintln!("failed to create log file {}: {err}", log_path.display());
        }
    }
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("should create WebView data directory {}", dir.display()))?;
    Ok(dir)
}
