use std::{
    io,
    time::{Duration, Instant},
};

use chrono::{DateTime, Utc};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};

use crate::{config::Settings, constants::TIME_SETTINGS};

mod board_state;
mod board_view;
mod cat_state;
mod cat_view;
mod detail_modal_view;
mod event_handlers;
mod ui_helpers;
mod view_style;

use board_state::ProgramBoard;
use cat_state::CatScreen;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum UiMode {
    Board,
    DetailModal,
    Cats,
}

struct App {
    settings: Settings,
    board: ProgramBoard,
    cat_screen: Option<CatScreen>,
    ui_mode: UiMode,
    render_needed: bool,
}

impl App {
    fn new(settings: Settings) -> Self {
        let board = ProgramBoard::load(
            &settings.programs_path,
            Duration::from_millis(settings.tick_ms),
            Utc::now(),
            Instant::now(),
        );

        Self {
            settings,
            board,
            cat_screen: None,
            ui_mode: UiMode::Board,
            render_needed: true,
        }
    }

    fn open_detail_modal(&mut self) {
        if self.board.selected_program().is_some() {
            self.ui_mode = UiMode::DetailModal;
            self.render_needed = true;
        }
    }

    fn close_detail_modal(&mut self) {
        self.ui_mode = UiMode::Board;
        self.render_needed = true;
    }

    fn open_cat_screen(&mut self, width: u16, height: u16) {
        let frame_period = Duration::from_millis(self.settings.frame_ms);
        self.cat_screen = Some(CatScreen::new(width, height, frame_period, Instant::now()));
        self.ui_mode = UiMode::Cats;
        self.render_needed = true;
        log::info!("Opened cat screen");
    }

    fn close_cat_screen(&mut self) {
        // Dropping the screen drops its sprites and frame cadence.
        if let Some(screen) = self.cat_screen.take() {
            log::info!("Closed cat screen with {} cats", screen.field.len());
        }
        self.ui_mode = UiMode::Board;
        self.render_needed = true;
    }

    fn tick_board(&mut self, now: DateTime<Utc>, instant: Instant) -> bool {
        if !self.board.tick(now, instant) {
            return false;
        }
        if self.in_detail_modal() && self.board.selected_program().is_none() {
            self.close_detail_modal();
        }
        true
    }

    fn reload_programs(&mut self) {
        self.board.reload(&self.settings.programs_path, Utc::now(), Instant::now());
        self.render_needed = true;
    }

    fn in_detail_modal(&self) -> bool {
        matches!(self.ui_mode, UiMode::DetailModal)
    }

    fn in_cat_screen(&self) -> bool {
        matches!(self.ui_mode, UiMode::Cats)
    }

    fn modal_rect(&self, terminal_size: Rect) -> Rect {
        self.modal_rect_ratio(terminal_size, 2, 3)
    }

    fn modal_rect_ratio(&self, terminal_size: Rect, numerator: u16, denominator: u16) -> Rect {
        let target_width = terminal_size.width.saturating_mul(numerator) / denominator;
        let target_height = (terminal_size.height.saturating_mul(numerator) / denominator).max(10);

        let max_width = terminal_size.width.saturating_sub(2).max(1);
        let max_height = terminal_size.height.saturating_sub(2).max(1);

        let modal_width = target_width.clamp(1, max_width);
        let modal_height = target_height.clamp(1, max_height);

        let modal_x = (terminal_size.width.saturating_sub(modal_width)) / 2;
        let modal_y = (terminal_size.height.saturating_sub(modal_height)) / 2;

        Rect::new(modal_x, modal_y, modal_width, modal_height)
    }
}

pub fn run_ui(settings: Settings) -> Result<(), io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings);

    let render_rate = Duration::from_millis(1000 / TIME_SETTINGS.target_fps);
    let mut last_render = Instant::now();

    loop {
        let now = Instant::now();

        if app.tick_board(Utc::now(), now) {
            app.render_needed = true;
        }

        if let Some(screen) = app.cat_screen.as_mut() {
            if screen.tick(now) {
                app.render_needed = true;
            }
        }

        if last_render.elapsed() >= render_rate && app.render_needed {
            terminal.draw(|f| {
                app.draw_frame(f);
            })?;
            app.render_needed = false;
            last_render = Instant::now();
        }

        if event::poll(Duration::from_millis(1))? {
            match event::read()? {
                Event::Key(key) => {
                    let size = terminal.size()?;
                    if app.handle_key(key, size) {
                        break;
                    }
                }
                Event::Resize(_, _) => app.render_needed = true,
                _ => {}
            }
        }
    }

    app.close_cat_screen();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
