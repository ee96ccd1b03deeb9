use std::{
    collections::HashSet,
    path::Path,
    time::{Duration, Instant},
};

use chrono::{DateTime, Utc};

use crate::{
    catalog::{Category, CategoryBucket, categorize},
    countdown::{Cadence, LiveCountdown, RemainingTime},
    domain::Program,
    feed,
};

use super::ui_helpers;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum BoardRow {
    Header(usize),
    Card(usize, usize),
}

pub(super) struct ProgramBoard {
    programs: Vec<Program>,
    pub(super) error: Option<String>,
    pub(super) buckets: Vec<CategoryBucket>,
    collapsed: HashSet<Category>,
    countdowns: Vec<LiveCountdown>,
    pub(super) selected: usize,
    countdown_cadence: Cadence,
    pub(super) evaluated_at: DateTime<Utc>,
}

impl ProgramBoard {
    pub(super) fn load(path: &Path, tick_period: Duration, now: DateTime<Utc>, instant: Instant) -> Self {
        let mut board = Self::from_programs(Vec::new(), tick_period, now, instant);
        board.reload(path, now, instant);
        board
    }

    pub(super) fn from_programs(
        programs: Vec<Program>,
        tick_period: Duration,
        now: DateTime<Utc>,
        instant: Instant,
    ) -> Self {
        let mut board = Self {
            programs,
            error: None,
            buckets: Vec::new(),
            collapsed: HashSet::new(),
            countdowns: Vec::new(),
            selected: 0,
            countdown_cadence: Cadence::new(tick_period, instant),
            evaluated_at: now,
        };
        board.recategorize(now);
        board
    }

    pub(super) fn reload(&mut self, path: &Path, now: DateTime<Utc>, instant: Instant) {
        match feed::load_programs(path) {
            Ok(programs) => {
                self.programs = programs;
                self.error = None;
            }
            Err(e) => {
                log::error!("{}", e);
                self.programs.clear();
                self.error = Some(e.to_string());
            }
        }
        self.countdown_cadence = Cadence::new(self.countdown_cadence.period(), instant);
        self.recategorize(now);
    }

    pub(super) fn recategorize(&mut self, now: DateTime<Utc>) {
        let selected_name = self.selected_program().map(|program| program.name.clone());
        self.buckets = categorize(&self.programs, now);
        self.countdowns = self
            .bucket(Category::LimitedTime)
            .map(|bucket| {
                bucket
                    .programs
                    .iter()
                    .map(|program| LiveCountdown::new(program.deadline(), now))
                    .collect()
            })
            .unwrap_or_default();
        self.evaluated_at = now;
        if let Some(name) = selected_name {
            self.select_program_named(&name);
        }
        self.clamp_selection();
    }

    fn select_program_named(&mut self, name: &str) {
        let position = self.rows().iter().position(|row| match *row {
            BoardRow::Card(bucket_idx, program_idx) => {
                self.buckets[bucket_idx].programs[program_idx].name == name
            }
            BoardRow::Header(_) => false,
        });
        if let Some(position) = position {
            self.selected = position;
        }
    }

    pub(super) fn tick(&mut self, now: DateTime<Utc>, instant: Instant) -> bool {
        if !self.countdown_cadence.due(instant) {
            return false;
        }

        self.evaluated_at = now;
        let mut crossed_zero = false;
        for countdown in &mut self.countdowns {
            crossed_zero |= countdown.refresh(now);
        }

        if crossed_zero {
            log::info!("A countdown reached zero, regrouping programs");
            self.recategorize(now);
        }
        true
    }

    fn bucket(&self, category: Category) -> Option<&CategoryBucket> {
        self.buckets.iter().find(|bucket| bucket.category == category)
    }

    pub(super) fn program_count(&self) -> usize {
        self.programs.len()
    }

    pub(super) fn is_collapsed(&self, category: Category) -> bool {
        self.collapsed.contains(&category)
    }

    pub(super) fn rows(&self) -> Vec<BoardRow> {
        let mut rows = Vec::new();
        for (bucket_idx, bucket) in self.buckets.iter().enumerate() {
            rows.push(BoardRow::Header(bucket_idx));
            if !self.is_collapsed(bucket.category) {
                rows.extend((0..bucket.programs.len()).map(|i| BoardRow::Card(bucket_idx, i)));
            }
        }
        rows
    }

    pub(super) fn live_remaining(&self, bucket_idx: usize, program_idx: usize) -> Option<RemainingTime> {
        let bucket = self.buckets.get(bucket_idx)?;
        if bucket.category != Category::LimitedTime {
            return None;
        }
        self.countdowns.get(program_idx).map(LiveCountdown::remaining)
    }

    pub(super) fn selected_row(&self) -> Option<BoardRow> {
        self.rows().get(self.selected).copied()
    }

    pub(super) fn selected_program(&self) -> Option<&Program> {
        match self.selected_row()? {
            BoardRow::Card(bucket_idx, program_idx) => {
                self.buckets.get(bucket_idx)?.programs.get(program_idx)
            }
            BoardRow::Header(_) => None,
        }
    }

    pub(super) fn select_prev(&mut self) {
        self.selected = ui_helpers::wrap_prev_index(self.selected, self.rows().len());
    }

    pub(super) fn select_next(&mut self) {
        self.selected = ui_helpers::wrap_next_index(self.selected, self.rows().len());
    }

    pub(super) fn toggle_selected_section(&mut self) {
        let bucket_idx = match self.selected_row() {
            Some(BoardRow::Header(idx)) | Some(BoardRow::Card(idx, _)) => idx,
            None => return,
        };
        let Some(category) = self.buckets.get(bucket_idx).map(|bucket| bucket.category) else {
            return;
        };

        if !self.collapsed.remove(&category) {
            self.collapsed.insert(category);
        }

        if let Some(header_pos) = self
            .rows()
            .iter()
            .position(|row| *row == BoardRow::Header(bucket_idx))
        {
            self.selected = header_pos;
        }
    }

    fn clamp_selection(&mut self) {
        let row_count = self.rows().len();
        if row_count == 0 {
            self.selected = 0;
        } else if self.selected >= row_count {
            self.selected = row_count - 1;
        }
    }
}
