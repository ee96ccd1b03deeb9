use ratatui::{
    prelude::Span,
    style::{Color, Modifier, Style},
};

use crate::{
    catalog::Category,
    constants::{CARD_SETTINGS, CATEGORY_COLORS},
    domain::ProgramStatus,
};

const BADGE_ACTIVE: Color = Color::Rgb(0, 176, 80);
const BADGE_INACTIVE: Color = Color::Rgb(90, 90, 90);

pub(super) fn category_color(category: Category) -> Color {
    CATEGORY_COLORS[category.index() % CATEGORY_COLORS.len()]
}

pub(super) fn text_color_for_bg(bg_color: Color) -> Color {
    if let Color::Rgb(r, g, b) = bg_color {
        let brightness = (299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000;
        if brightness > 128 {
            Color::Black
        } else {
            Color::White
        }
    } else {
        Color::White
    }
}

pub(super) fn days_left_color(days: i64) -> Color {
    if days <= CARD_SETTINGS.urgent_days {
        Color::Red
    } else {
        Color::Yellow
    }
}

pub(super) fn status_badge(status: &ProgramStatus, running: bool) -> Span<'static> {
    let (label, bg) = match status {
        ProgramStatus::Active { .. } if running => ("Active".to_string(), BADGE_ACTIVE),
        ProgramStatus::Active { .. } | ProgramStatus::Ended { .. } => {
            ("Ended".to_string(), BADGE_INACTIVE)
        }
        other => {
            let mut label = other.label().to_string();
            if let Some(first) = label.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            (label, BADGE_INACTIVE)
        }
    };

    Span::styled(
        format!(" {} ", label),
        Style::default()
            .fg(text_color_for_bg(bg))
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )
}
