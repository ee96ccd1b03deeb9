use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::de::DeserializeOwned;

use crate::constants::FILE_PATHS;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "ysws-timer", "ysws-timer")
}

pub fn get_data_dir() -> PathBuf {
    if Path::new(".").join(FILE_PATHS.programs).exists() {
        return PathBuf::from(".");
    }

    if let Some(proj_dirs) = project_dirs() {
        let data_dir = proj_dirs.data_dir().to_path_buf();
        fs::create_dir_all(&data_dir).ok();
        data_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_config_dir() -> PathBuf {
    if Path::new(".").join(FILE_PATHS.config).exists() {
        return PathBuf::from(".");
    }

    project_dirs()
        .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn get_state_dir() -> PathBuf {
    if let Some(proj_dirs) = project_dirs() {
        if let Some(state_dir) = proj_dirs.state_dir() {
            let dir = state_dir.to_path_buf();
            fs::create_dir_all(&dir).ok();
            return dir;
        }
    }
    PathBuf::from(".")
}

pub fn get_programs_path() -> PathBuf {
    get_data_dir().join(FILE_PATHS.programs)
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join(FILE_PATHS.config)
}

pub fn get_log_path() -> PathBuf {
    get_state_dir().join(FILE_PATHS.log)
}

pub fn file_exists(path: &Path) -> bool {
    path.exists()
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&content).map_err(|e| e.to_string())
}
