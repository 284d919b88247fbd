use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Only the token survives a restart; the profile is re-fetched with it.
#[derive(Debug, Serialize, Deserialize)]
struct SavedSession {
    token: String,
}

pub fn app_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "wms", "wms-admin")
        .context("should resolve platform data directory")?;
    let dir = dirs.data_dir().to_path_buf();
    fs::create_dir_all(&dir)
        .with_context(|| format!("should create data directory {}", dir.display()))?;
    Ok(dir)
}

fn session_file(dir: &Path) -> PathBuf {
    dir.join("session.json")
}

pub fn load_token() -> Result<Option<String>> {
    load_token_from(&app_data_dir()?)
}

pub fn save_token(token: &str) -> Result<()> {
    save_token_to(&app_data_dir()?, token)
}

pub fn clear_token() -> Result<()> {
    clear_token_in(&app_data_dir()?)
}

pub fn load_token_from(dir: &Path) -> Result<Option<String>> {
    let file = session_file(dir);
    if !file.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(&file)
        .with_context(|| format!("should read session file {}", file.display()))?;
    let saved: SavedSession = serde_json::from_str(&text)
        .with_context(|| format!("session file {} is not valid JSON", file.display()))?;
    if saved.token.is_empty() {
        Ok(None)
    } else {
        Ok(Some(saved.token))
    }
}

pub fn save_token_to(dir: &Path, token: &str) -> Result<()> {
    let file = session_file(dir);
    let saved = SavedSession {
        token: token.to_string(),
    };
    let text = serde_json::to_string(&saved).context("session should serialize")?;
    fs::write(&file, text)
        .with_context(|| format!("should write session file {}", file.display()))?;
    Ok(())
}

pub fn clear_token_in(dir: &Path) -> Result<()> {
    let file = session_file(dir);
    if file.exists() {
        fs::remove_file(&file)
            .with_context(|| format!("should remove session file {}", file.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    fn unique_test_dir(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("wms-{prefix}-{nanos}"))
    }

    #[test]
    fn token_round_trips_through_the_session_file() {
        let dir = unique_test_dir("session-roundtrip");
        fs::create_dir_all(&dir).expect("should create temp dir");

        save_token_to(&dir, "jwt-token").expect("should save token");
        let loaded = load_token_from(&dir).expect("should load token");

        assert_eq!(loaded, Some("jwt-token".to_string()));

        fs::remove_dir_all(&dir).expect("should cleanup temp dir");
    }

    #[test]
    fn missing_session_file_loads_as_no_token() {
        let dir = unique_test_dir("session-missing");
        fs::create_dir_all(&dir).expect("should create temp dir");

        let loaded = load_token_from(&dir).expect("missing file should not error");
        assert_eq!(loaded, None);

        fs::remove_dir_all(&dir).expect("should cleanup temp dir");
    }

    #[test]
    fn clearing_removes_the_session_file() {
        let dir = unique_test_dir("session-clear");
        fs::create_dir_all(&dir).expect("should create temp dir");

        save_token_to(&dir, "jwt-token").expect("should save token");
        clear_token_in(&dir).expect("should clear token");

        assert_eq!(load_token_from(&dir).expect("should load"), None);
        clear_token_in(&dir).expect("clearing twice should be fine");

        fs::remove_dir_all(&dir).expect("should cleanup temp dir");
    }
}
