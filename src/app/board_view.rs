use chrono::Local;
use itertools::Itertools;
use ratatui::prelude::{Line, Span, Text};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::{
    catalog::CategoryBucket,
    constants::CARD_SETTINGS,
    countdown::{self, RemainingTime},
    domain::Program,
};

use super::{App, board_state::BoardRow, ui_helpers, view_style};

impl App {
    pub(super) fn draw_frame(&mut self, f: &mut Frame) {
        let size = f.size();

        if self.in_cat_screen() {
            self.render_cat_screen(f, size);
            return;
        }

        self.render_board(f, size);

        if self.in_detail_modal() {
            self.render_detail_modal(f, size);
        }
    }

    fn render_board(&self, f: &mut Frame, size: Rect) {
        let board = &self.board;
        let clock = Local::now().format("%H:%M:%S").to_string();
        let count_label = format!("{} programs", board.program_count());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(
                Line::from(Span::styled(
                    "ysws-timer",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Left),
            )
            .title(Line::from(Span::raw(clock)).alignment(Alignment::Center))
            .title(Line::from(Span::raw(count_label)).alignment(Alignment::Right))
            .border_style(Style::default().fg(Color::White));

        if let Some(error) = &board.error {
            let paragraph = Paragraph::new(vec![
                Line::from(Span::styled(
                    "Error",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::raw(error.clone()).fg(Color::Red)),
                Line::from(""),
                Line::from(Span::raw("r: reload  c: cats  q: quit").fg(Color::Gray)),
            ])
            .wrap(Wrap { trim: false })
            .block(block);
            f.render_widget(paragraph, size);
            return;
        }

        if board.buckets.is_empty() {
            let paragraph = Paragraph::new("No programs to show.")
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(paragraph, size);
            return;
        }

        let inner_width = size.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = board
            .rows()
            .into_iter()
            .enumerate()
            .map(|(row_idx, row)| {
                let is_selected = row_idx == board.selected;
                match row {
                    BoardRow::Header(bucket_idx) => {
                        self.header_item(&board.buckets[bucket_idx], is_selected)
                    }
                    BoardRow::Card(bucket_idx, program_idx) => {
                        let bucket = &board.buckets[bucket_idx];
                        let program = &bucket.programs[program_idx];
                        let live = board.live_remaining(bucket_idx, program_idx);
                        self.card_item(program, bucket, live, inner_width, is_selected)
                    }
                }
            })
            .collect();

        let mut list_state = ListState::default();
        list_state.select(Some(board.selected));

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default());
        f.render_stateful_widget(list, size, &mut list_state);
    }

    fn header_item(&self, bucket: &CategoryBucket, is_selected: bool) -> ListItem<'static> {
        let color = view_style::category_color(bucket.category);
        let arrow = if self.board.is_collapsed(bucket.category) {
            "▸ "
        } else {
            "▾ "
        };
        let title = format!("{}{} ({})", arrow, bucket.title, bucket.programs.len());

        let style = if is_selected {
            Style::default()
                .fg(view_style::text_color_for_bg(color))
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        };

        ListItem::new(Line::from(Span::styled(title, style)))
    }

    fn card_item(
        &self,
        program: &Program,
        bucket: &CategoryBucket,
        live: Option<RemainingTime>,
        inner_width: usize,
        is_selected: bool,
    ) -> ListItem<'static> {
        let now = self.board.evaluated_at;
        let running = live.is_some_and(|remaining| remaining.is_running());
        let marker_color = view_style::category_color(bucket.category);
        let marker = if is_selected { "▌ " } else { "  " };

        let mut title_spans = vec![
            Span::raw(marker).fg(marker_color),
            Span::styled(
                program.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            view_style::status_badge(&program.status, running),
        ];
        if let Some(remaining) = live {
            title_spans.push(Span::raw("  "));
            title_spans.push(
                Span::styled(
                    countdown::format_countdown(&remaining),
                    Style::default().add_modifier(Modifier::BOLD),
                )
                .fg(Color::Cyan),
            );
        }

        let mut lines = vec![Line::from(title_spans)];

        if !program.description.is_empty() {
            let max_chars = inner_width
                .saturating_sub(4)
                .min(CARD_SETTINGS.description_max_chars);
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::raw(ui_helpers::truncate_label(&program.description, max_chars))
                    .fg(Color::Gray),
            ]));
        }

        if let Some(formatted) = countdown::format_deadline(program.deadline()) {
            let mut spans = vec![
                Span::raw("    "),
                Span::raw("Deadline: ").bold(),
                Span::raw(formatted),
            ];
            if running {
                if let Some(days) = countdown::days_left(program.deadline(), now) {
                    spans.push(Span::raw("  "));
                    spans.push(
                        Span::raw(ui_helpers::days_left_label(days))
                            .fg(view_style::days_left_color(days)),
                    );
                }
            }
            lines.push(Line::from(spans));
        }

        let links = [
            program.website.as_ref().map(|_| "Website".to_string()),
            program.slack.as_ref().map(|_| program.slack_label().to_string()),
            program.participants.map(|n| format!("{} participants", n)),
        ]
        .into_iter()
        .flatten()
        .join(" · ");
        if !links.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::raw(links).fg(Color::Blue),
            ]));
        }

        ListItem::new(Text::from(lines))
    }
}
