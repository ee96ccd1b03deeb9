use rand::Rng;
use ratatui::{
    prelude::{Line, Span},
    style::{Color, Stylize},
};

use crate::constants::{BOUNCE_SETTINGS, CELL_SETTINGS};

use super::{CAT_ART, Size, SpriteState};

struct Cat {
    state: SpriteState,
    art_index: usize,
}

pub struct SpriteField {
    cats: Vec<Cat>,
    pub width: u16,
    pub height: u16,
    viewport: Size,
}

impl SpriteField {
    pub fn new(width: u16, height: u16) -> Self {
        let mut field = Self {
            cats: Vec::new(),
            width: 0,
            height: 0,
            viewport: Size::default(),
        };
        field.resize(width, height);
        field
    }

    pub fn len(&self) -> usize {
        self.cats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cats.is_empty()
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        if width == self.width && height == self.height {
            return;
        }

        self.width = width;
        self.height = height;
        self.viewport = Size::new(
            width as f64 * CELL_SETTINGS.px_width,
            height as f64 * CELL_SETTINGS.px_height,
        );

        for cat in &mut self.cats {
            cat.state.fit_to(self.viewport);
        }
    }

    pub fn spawn_cat(&mut self) {
        let mut rng = rand::thread_rng();
        let art_index = rng.gen_range(0..CAT_ART.len());
        let natural = CAT_ART[art_index].natural_size();
        let state = SpriteState::spawn(natural, self.viewport, &mut rng);
        self.cats.push(Cat { state, art_index });
    }

    pub fn spawn_bombardment(&mut self) {
        for _ in 0..BOUNCE_SETTINGS.bombardment_size {
            self.spawn_cat();
        }
    }

    pub fn update(&mut self) {
        let mut rng = rand::thread_rng();
        for cat in &mut self.cats {
            cat.state.tick(self.viewport, &mut rng);
        }
    }

    pub fn clear(&mut self) {
        self.cats.clear();
    }

    pub fn render(&self) -> Vec<Line<'static>> {
        let cols = self.width as usize;
        let rows = self.height as usize;
        let mut cells: Vec<Vec<Option<(char, Color)>>> = vec![vec![None; cols]; rows];

        for cat in &self.cats {
            let art = &CAT_ART[cat.art_index];
            let art_cols = art.columns();
            let art_rows = art.lines.len();
            if art_cols == 0 || art_rows == 0 {
                continue;
            }

            let art_chars: Vec<Vec<char>> = art.lines.iter().map(|l| l.chars().collect()).collect();

            let origin_x = (cat.state.position.x / CELL_SETTINGS.px_width).round() as usize;
            let origin_y = (cat.state.position.y / CELL_SETTINGS.px_height).round() as usize;
            let box_cols = ((cat.state.size.width / CELL_SETTINGS.px_width).round() as usize).max(1);
            let box_rows =
                ((cat.state.size.height / CELL_SETTINGS.px_height).round() as usize).max(1);

            for by in 0..box_rows {
                let y = origin_y + by;
                if y >= rows {
                    break;
                }
                let src_row = &art_chars[by * art_rows / box_rows];

                for bx in 0..box_cols {
                    let x = origin_x + bx;
                    if x >= cols {
                        break;
                    }
                    let ch = src_row.get(bx * art_cols / box_cols).copied().unwrap_or(' ');
                    if ch != ' ' {
                        cells[y][x] = Some((ch, art.color));
                    }
                }
            }
        }

        cells
            .into_iter()
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .into_iter()
                    .map(|cell| match cell {
                        Some((ch, color)) => Span::raw(ch.to_string()).fg(color),
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bombardment_spawns_hundred_cats() {
        let mut field = SpriteField::new(120, 40);
        field.spawn_bombardment();
        assert_eq!(field.len(), BOUNCE_SETTINGS.bombardment_size);
    }

    #[test]
    fn test_update_keeps_cats_on_screen() {
        let mut field = SpriteField::new(80, 30);
        for _ in 0..10 {
            field.spawn_cat();
        }

        for _ in 0..500 {
            field.update();
        }

        let viewport = field.viewport;
        for sprite in field.cats.iter().map(|cat| &cat.state) {
            assert!(sprite.position.x >= 0.0);
            assert!(sprite.position.x + sprite.size.width <= viewport.width);
            assert!(sprite.position.y >= 0.0);
            assert!(sprite.position.y + sprite.size.height <= viewport.height);
        }
    }

    #[test]
    fn test_shrinking_terminal_repositions_cats() {
        let mut field = SpriteField::new(200, 60);
        for _ in 0..25 {
            field.spawn_cat();
        }

        field.resize(40, 12);

        let viewport = field.viewport;
        for sprite in field.cats.iter().map(|cat| &cat.state) {
            assert!(sprite.position.x + sprite.size.width <= viewport.width);
            assert!(sprite.position.y + sprite.size.height <= viewport.height);
        }
    }

    #[test]
    fn test_render_matches_terminal_size() {
        let mut field = SpriteField::new(50, 20);
        field.spawn_cat();

        let lines = field.render();
        assert_eq!(lines.len(), 20);
        assert!(lines.iter().all(|line| line.spans.len() == 50));
    }

    #[test]
    fn test_empty_field_renders_blank() {
        let field = SpriteField::new(10, 3);
        let lines = field.render();
        assert!(lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .all(|span| span.content == " "));
    }
}
