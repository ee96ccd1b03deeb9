use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::Program;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgramRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub detailed_description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub slack: Option<String>,
    #[serde(default)]
    pub slack_channel: Option<String>,
    #[serde(default)]
    pub participants: Option<u64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeedDocument {
    List(Vec<ProgramRecord>),
    Sectioned {
        #[serde(rename = "limitedTime")]
        limited_time: Vec<ProgramRecord>,
    },
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Program list not found at {0}")]
    NotFound(String),
    #[error("Failed to read program list {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse program list: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn parse_programs(content: &str) -> Result<Vec<Program>, FeedError> {
    let records = match serde_json::from_str::<FeedDocument>(content)? {
        FeedDocument::List(records) => records,
        FeedDocument::Sectioned { limited_time } => limited_time,
    };

    Ok(records.into_iter().map(Program::from_record).collect())
}

pub fn load_programs(path: &Path) -> Result<Vec<Program>, FeedError> {
    if !path.exists() {
        return Err(FeedError::NotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path).map_err(|source| FeedError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let programs = parse_programs(&content)?;
    log::info!("Loaded {} programs from {}", programs.len(), path.display());
    Ok(programs)
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf, time::SystemTime};

    use super::*;
    use crate::domain::ProgramStatus;

    fn unique_path(prefix: &str, extension: &str) -> PathBuf {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        PathBuf::from(format!("/tmp/{}_{}.{}", prefix, now, extension))
    }

    #[test]
    fn test_parse_bare_array() {
        let content = r#"[
            {"name": "Arcade", "description": "hours for prizes", "status": "active",
             "deadline": "2026-08-31T23:59:59Z", "slackChannel": "arcade"},
            {"name": "Boba", "description": "drinks", "status": "ditched"}
        ]"#;

        let programs = parse_programs(content).unwrap();

        assert_eq!(programs.len(), 2);
        assert_eq!(programs[0].slack_channel.as_deref(), Some("arcade"));
        assert_eq!(programs[0].deadline(), Some("2026-08-31T23:59:59Z"));
        assert_eq!(programs[1].status, ProgramStatus::Ditched);
    }

    #[test]
    fn test_parse_sectioned_document() {
        let content = r#"{"limitedTime": [
            {"name": "Sprig", "description": "games", "deadline": "draft", "participants": 300}
        ]}"#;

        let programs = parse_programs(content).unwrap();

        assert_eq!(programs.len(), 1);
        assert_eq!(programs[0].status, ProgramStatus::Draft);
        assert_eq!(programs[0].participants, Some(300));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_programs("{not json").unwrap_err();
        assert!(matches!(err, FeedError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse program list"));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let path = unique_path("ysws_missing_programs", "json");
        let err = load_programs(&path).unwrap_err();

        assert!(matches!(err, FeedError::NotFound(_)));
        assert!(err.to_string().contains("ysws_missing_programs"));
    }

    #[test]
    fn test_load_from_file() {
        let path = unique_path("ysws_programs", "json");
        fs::write(&path, r#"[{"name": "Onboard", "status": "indefinite"}]"#).unwrap();

        let programs = load_programs(&path).unwrap();
        assert_eq!(programs[0].status, ProgramStatus::Indefinite);
        assert_eq!(programs[0].description, "");

        fs::remove_file(path).ok();
    }
}
