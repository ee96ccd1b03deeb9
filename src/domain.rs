use serde::Serialize;

use crate::feed::ProgramRecord;

const SENTINEL_STATUSES: [&str; 4] = ["draft", "indefinite", "undefined", "ditched"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProgramStatus {
    Active { deadline: Option<String> },
    Ended { deadline: Option<String> },
    Draft,
    Indefinite,
    Undefined,
    Ditched,
    Unknown { raw: String, deadline: Option<String> },
}

impl ProgramStatus {
    pub fn from_parts(status: Option<&str>, deadline: Option<&str>) -> Self {
        let deadline_text = deadline
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        match status.map(|s| s.trim().to_ascii_lowercase()) {
            Some(s) => match s.as_str() {
                "active" => ProgramStatus::Active {
                    deadline: deadline_text,
                },
                "ended" => ProgramStatus::Ended {
                    deadline: deadline_text,
                },
                "draft" => ProgramStatus::Draft,
                "indefinite" => ProgramStatus::Indefinite,
                "undefined" => ProgramStatus::Undefined,
                "ditched" => ProgramStatus::Ditched,
                _ => ProgramStatus::Unknown {
                    raw: s,
                    deadline: deadline_text,
                },
            },
            // Legacy records carried the category in the deadline field.
            None => match deadline_text.as_deref().map(str::to_ascii_lowercase) {
                Some(sentinel) if SENTINEL_STATUSES.contains(&sentinel.as_str()) => {
                    Self::from_parts(Some(&sentinel), None)
                }
                _ => ProgramStatus::Active {
                    deadline: deadline_text,
                },
            },
        }
    }

    pub fn deadline(&self) -> Option<&str> {
        match self {
            ProgramStatus::Active { deadline }
            | ProgramStatus::Ended { deadline }
            | ProgramStatus::Unknown { deadline, .. } => deadline.as_deref(),
            _ => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ProgramStatus::Active { .. } => "active",
            ProgramStatus::Ended { .. } => "ended",
            ProgramStatus::Draft => "draft",
            ProgramStatus::Indefinite => "indefinite",
            ProgramStatus::Undefined => "undefined",
            ProgramStatus::Ditched => "ditched",
            ProgramStatus::Unknown { raw, .. } => raw.as_str(),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ProgramStatus::Active { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Program {
    pub name: String,
    pub description: String,
    pub detailed_description: Option<String>,
    pub website: Option<String>,
    pub slack: Option<String>,
    pub slack_channel: Option<String>,
    pub participants: Option<u64>,
    #[serde(flatten)]
    pub status: ProgramStatus,
}

impl Program {
    pub fn from_record(record: ProgramRecord) -> Self {
        let status = ProgramStatus::from_parts(record.status.as_deref(), record.deadline.as_deref());
        Self {
            name: record.name,
            description: record.description,
            detailed_description: record.detailed_description.filter(|d| !d.is_empty()),
            website: record.website.filter(|w| !w.is_empty()),
            slack: record.slack.filter(|s| !s.is_empty()),
            slack_channel: record.slack_channel.filter(|s| !s.is_empty()),
            participants: record.participants,
            status,
        }
    }

    pub fn deadline(&self) -> Option<&str> {
        self.status.deadline()
    }

    pub fn slack_label(&self) -> &str {
        self.slack_channel.as_deref().unwrap_or("Join Slack")
    }
}

#[cfg(test)]
pub(crate) fn program(name: &str, status: ProgramStatus) -> Program {
    Program {
        name: name.to_string(),
        description: String::new(),
        detailed_description: None,
        website: None,
        slack: None,
        slack_channel: None,
        participants: None,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing_is_case_insensitive() {
        assert_eq!(
            ProgramStatus::from_parts(Some(" Draft "), Some("2026-01-01")),
            ProgramStatus::Draft
        );
        assert_eq!(
            ProgramStatus::from_parts(Some("ACTIVE"), Some("2026-01-01")),
            ProgramStatus::Active {
                deadline: Some("2026-01-01".to_string())
            }
        );
    }

    #[test]
    fn test_unknown_status_keeps_raw_value() {
        let status = ProgramStatus::from_parts(Some("paused"), None);
        assert_eq!(
            status,
            ProgramStatus::Unknown {
                raw: "paused".to_string(),
                deadline: None
            }
        );
        assert_eq!(status.label(), "paused");
    }

    #[test]
    fn test_legacy_sentinel_in_deadline_field() {
        assert_eq!(
            ProgramStatus::from_parts(None, Some("indefinite")),
            ProgramStatus::Indefinite
        );
        assert_eq!(
            ProgramStatus::from_parts(None, Some("ditched")),
            ProgramStatus::Ditched
        );
    }

    #[test]
    fn test_legacy_dated_record_is_active() {
        let status = ProgramStatus::from_parts(None, Some("2026-03-05T00:00:00Z"));
        assert!(status.is_active());
        assert_eq!(status.deadline(), Some("2026-03-05T00:00:00Z"));
    }

    #[test]
    fn test_sentinel_status_drops_deadline_echo() {
        let status = ProgramStatus::from_parts(Some("undefined"), Some("undefined"));
        assert_eq!(status.deadline(), None);
    }

    #[test]
    fn test_from_record_drops_empty_links() {
        let record = ProgramRecord {
            name: "Arcade".to_string(),
            description: "build things".to_string(),
            detailed_description: Some(String::new()),
            website: Some(String::new()),
            slack: Some("https://slack.example/arcade".to_string()),
            slack_channel: None,
            participants: Some(12),
            status: Some("ended".to_string()),
            deadline: None,
        };

        let program = Program::from_record(record);
        assert_eq!(program.website, None);
        assert_eq!(program.detailed_description, None);
        assert_eq!(program.slack_label(), "Join Slack");
        assert_eq!(program.status, ProgramStatus::Ended { deadline: None });
    }
}
