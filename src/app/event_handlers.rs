use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;

use super::{App, UiMode, board_state::BoardRow};

impl App {
    pub(super) fn handle_key(&mut self, key: KeyEvent, size: Rect) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        match self.ui_mode {
            UiMode::Board => self.handle_board_key(key, size),
            UiMode::DetailModal => {
                self.handle_detail_modal_key(key);
                false
            }
            UiMode::Cats => self.handle_cat_key(key),
        }
    }

    fn handle_board_key(&mut self, key: KeyEvent, size: Rect) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up | KeyCode::Char('k') => self.board.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.board.select_next(),
            KeyCode::Char(' ') => self.board.toggle_selected_section(),
            KeyCode::Enter => match self.board.selected_row() {
                Some(BoardRow::Card(..)) => self.open_detail_modal(),
                Some(BoardRow::Header(_)) => self.board.toggle_selected_section(),
                None => {}
            },
            KeyCode::Char('r') => self.reload_programs(),
            KeyCode::Char('c') => {
                self.open_cat_screen(size.width, size.height);
            }
            _ => return false,
        }
        self.render_needed = true;
        false
    }

    fn handle_detail_modal_key(&mut self, key: KeyEvent) {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Backspace
        ) {
            self.close_detail_modal();
        }
    }

    fn handle_cat_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc | KeyCode::Tab | KeyCode::Char('c') => {
                self.close_cat_screen();
                return false;
            }
            _ => {}
        }

        let Some(screen) = self.cat_screen.as_mut() else {
            return false;
        };
        match key.code {
            KeyCode::Char(' ') | KeyCode::Char('n') => screen.add_cat(),
            KeyCode::Char('b') => screen.super_bombardment(),
            KeyCode::Char('x') => screen.field.clear(),
            _ => return false,
        }
        self.render_needed = true;
        false
    }
}
