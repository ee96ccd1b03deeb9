use ratatui::prelude::{Line, Span};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    catalog::Category,
    countdown::{self, compute_remaining},
};

use super::{App, view_style};

impl App {
    pub(super) fn render_detail_modal(&self, f: &mut Frame, terminal_size: Rect) {
        let Some(program) = self.board.selected_program() else {
            return;
        };
        let now = self.board.evaluated_at;
        let category = Category::classify(program, now);
        let border_color = view_style::category_color(category);
        let modal_rect = self.modal_rect(terminal_size);

        let mut lines = vec![
            Line::from(vec![
                Span::raw("Status: ").bold(),
                Span::raw(program.status.label().to_string()),
                Span::raw("  "),
                Span::raw(category.title()).fg(border_color),
            ]),
            Line::from(""),
            Line::from(program.description.clone()),
        ];

        if let Some(detail) = &program.detailed_description {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "More details",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::raw(detail.clone()).fg(Color::Gray)));
        }

        if let Some(formatted) = countdown::format_deadline(program.deadline()) {
            let remaining = compute_remaining(program.deadline(), now);
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::raw("Deadline: ").bold(),
                Span::raw(formatted),
                Span::raw("  "),
                Span::raw(countdown::format_countdown(&remaining)).fg(Color::Cyan),
            ]));
        }

        if let Some(website) = &program.website {
            lines.push(Line::from(vec![
                Span::raw("Website: ").bold(),
                Span::raw(website.clone()).fg(Color::Blue),
            ]));
        }

        if let Some(slack) = &program.slack {
            lines.push(Line::from(vec![
                Span::raw(format!("{}: ", program.slack_label())).bold(),
                Span::raw(slack.clone()).fg(Color::Magenta),
            ]));
        }

        if let Some(participants) = program.participants {
            lines.push(Line::from(vec![
                Span::raw("Participants: ").bold(),
                Span::raw(participants.to_string()),
            ]));
        }

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(Line::from(Span::styled(
                        program.name.clone(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )))
                    .title_alignment(Alignment::Center)
                    .border_style(Style::default().fg(border_color)),
            );

        f.render_widget(Clear, modal_rect);
        f.render_widget(paragraph, modal_rect);
    }
}
