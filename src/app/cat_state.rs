use std::time::{Duration, Instant};

use crate::{bounce::SpriteField, countdown::Cadence};

pub(super) struct CatScreen {
    pub(super) field: SpriteField,
    frame_cadence: Cadence,
}

impl CatScreen {
    pub(super) fn new(width: u16, height: u16, frame_period: Duration, now: Instant) -> Self {
        let (inner_width, inner_height) = inner_size(width, height);
        Self {
            field: SpriteField::new(inner_width, inner_height),
            frame_cadence: Cadence::new(frame_period, now),
        }
    }

    pub(super) fn tick(&mut self, now: Instant) -> bool {
        if self.field.is_empty() || !self.frame_cadence.due(now) {
            return false;
        }
        self.field.update();
        true
    }

    pub(super) fn fit_to_terminal(&mut self, width: u16, height: u16) {
        let (inner_width, inner_height) = inner_size(width, height);
        self.field.resize(inner_width, inner_height);
    }

    pub(super) fn add_cat(&mut self) {
        self.field.spawn_cat();
        log::debug!("Cat spawned, {} on screen", self.field.len());
    }

    pub(super) fn super_bombardment(&mut self) {
        self.field.spawn_bombardment();
        log::info!("Super bombardment, {} cats on screen", self.field.len());
    }
}

fn inner_size(width: u16, height: u16) -> (u16, u16) {
    (width.saturating_sub(2), height.saturating_sub(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_screen_does_not_animate() {
        let start = Instant::now();
        let mut screen = CatScreen::new(80, 24, Duration::from_millis(16), start);

        assert!(!screen.tick(start + Duration::from_millis(100)));
    }

    #[test]
    fn test_frames_follow_cadence() {
        let start = Instant::now();
        let mut screen = CatScreen::new(80, 24, Duration::from_millis(16), start);
        screen.add_cat();

        assert!(!screen.tick(start + Duration::from_millis(10)));
        assert!(screen.tick(start + Duration::from_millis(16)));
    }

    #[test]
    fn test_field_excludes_border() {
        let screen = CatScreen::new(80, 24, Duration::from_millis(16), Instant::now());
        assert_eq!((screen.field.width, screen.field.height), (78, 22));
    }
}
