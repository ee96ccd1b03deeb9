use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    countdown::compute_remaining,
    domain::{Program, ProgramStatus},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    LimitedTime,
    UndefinedDeadline,
    Indefinite,
    Draft,
    Expired,
    Ditched,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::LimitedTime,
        Category::UndefinedDeadline,
        Category::Indefinite,
        Category::Draft,
        Category::Expired,
        Category::Ditched,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Category::LimitedTime => "Limited Time Programs",
            Category::UndefinedDeadline => "Undefined Deadline Programs",
            Category::Indefinite => "Indefinite Programs",
            Category::Draft => "Draft Programs",
            Category::Expired => "Expired Programs",
            Category::Ditched => "Ditched Programs",
        }
    }

    pub fn index(self) -> usize {
        Category::ALL
            .iter()
            .position(|&category| category == self)
            .unwrap_or(0)
    }

    fn matches(self, program: &Program, total_ms: i64) -> bool {
        let status = &program.status;
        match self {
            Category::LimitedTime => status.is_active() && total_ms > 0,
            Category::UndefinedDeadline => matches!(status, ProgramStatus::Undefined),
            Category::Indefinite => matches!(status, ProgramStatus::Indefinite),
            Category::Draft => matches!(status, ProgramStatus::Draft),
            Category::Expired => match status {
                ProgramStatus::Ended { .. } => true,
                // Active programs that stopped counting down land here too,
                // otherwise they would fall out of every bucket.
                ProgramStatus::Active { .. } | ProgramStatus::Unknown { .. } => total_ms <= 0,
                _ => false,
            },
            Category::Ditched => matches!(status, ProgramStatus::Ditched),
        }
    }

    pub fn classify(program: &Program, now: DateTime<Utc>) -> Category {
        let total_ms = compute_remaining(program.deadline(), now).total_ms;
        Self::classify_with_total(program, total_ms)
    }

    fn classify_with_total(program: &Program, total_ms: i64) -> Category {
        Category::ALL
            .into_iter()
            .find(|category| category.matches(program, total_ms))
            .unwrap_or(Category::Expired)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryBucket {
    pub category: Category,
    pub title: &'static str,
    pub programs: Vec<Program>,
}

pub fn categorize(programs: &[Program], now: DateTime<Utc>) -> Vec<CategoryBucket> {
    let mut grouped: Vec<Vec<(i64, &Program)>> = vec![Vec::new(); Category::ALL.len()];

    for program in programs {
        let total_ms = compute_remaining(program.deadline(), now).total_ms;
        let category = Category::classify_with_total(program, total_ms);
        grouped[category.index()].push((total_ms, program));
    }

    Category::ALL
        .into_iter()
        .zip(grouped)
        .filter(|(_, entries)| !entries.is_empty())
        .map(|(category, mut entries)| {
            match category {
                Category::LimitedTime => entries.sort_by_key(|(total_ms, _)| *total_ms),
                Category::Expired => entries.sort_by_key(|(total_ms, _)| Reverse(*total_ms)),
                _ => {}
            }
            CategoryBucket {
                category,
                title: category.title(),
                programs: entries
                    .into_iter()
                    .map(|(_, program)| program.clone())
                    .collect(),
            }
        })
        .collect()
}
