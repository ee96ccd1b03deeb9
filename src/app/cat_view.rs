use ratatui::prelude::{Line, Span};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::App;

impl App {
    pub(super) fn render_cat_screen(&mut self, f: &mut Frame, size: Rect) {
        let Some(screen) = self.cat_screen.as_mut() else {
            return;
        };
        screen.fit_to_terminal(size.width, size.height);

        let footer = if screen.field.is_empty() {
            "space: show a cat  b: super bombardment  esc: back".to_string()
        } else {
            format!("{} cats  space: another  b: bombard  x: clear  esc: back", screen.field.len())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(
                Line::from(Span::styled(
                    "Cat Page",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
            )
            .title_bottom(Line::from(Span::raw(footer)).alignment(Alignment::Right))
            .border_style(Style::default().fg(Color::Rgb(255, 204, 0)));

        if screen.field.is_empty() {
            let paragraph = Paragraph::new(vec![
                Line::from(""),
                Line::from("Press space to see a cat!"),
                Line::from(""),
                Line::from(Span::styled(
                    "Are you ready for the super bombardment of cats? (b)",
                    Style::default().fg(Color::Gray),
                )),
            ])
            .alignment(Alignment::Center)
            .block(block);
            f.render_widget(paragraph, size);
            return;
        }

        let paragraph = Paragraph::new(screen.field.render()).block(block);
        f.render_widget(paragraph, size);
    }
}
