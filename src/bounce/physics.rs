use rand::Rng;

use crate::constants::BOUNCE_SETTINGS;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn scaled_to_width(self, width: f64) -> Self {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Size::new(width, width);
        }
        Size::new(width, self.height * (width / self.width))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Size,
}

fn max_offset(viewport: f64, sprite: f64) -> f64 {
    (viewport - sprite).max(0.0)
}

fn random_sign<R: Rng>(rng: &mut R) -> f64 {
    if rng.gen_bool(0.5) { 1.0 } else { -1.0 }
}

fn perturbation<R: Rng>(rng: &mut R) -> f64 {
    let half = BOUNCE_SETTINGS.perturbation;
    rng.gen_range(-half..half)
}

impl SpriteState {
    pub fn spawn<R: Rng>(natural: Size, viewport: Size, rng: &mut R) -> Self {
        let size = natural.scaled_to_width(BOUNCE_SETTINGS.sprite_width);
        let max_x = max_offset(viewport.width, size.width);
        let max_y = max_offset(viewport.height, size.height);

        let position = Vec2::new(rng.gen_range(0.0..=max_x), rng.gen_range(0.0..=max_y));
        let velocity = Vec2::new(
            random_sign(rng) * BOUNCE_SETTINGS.base_speed_x
                + rng.gen_range(0.0..BOUNCE_SETTINGS.speed_jitter),
            random_sign(rng) * BOUNCE_SETTINGS.base_speed_y
                + rng.gen_range(0.0..BOUNCE_SETTINGS.speed_jitter),
        );

        Self {
            position,
            velocity,
            size,
        }
    }

    pub fn tick<R: Rng>(&mut self, viewport: Size, rng: &mut R) {
        let max_x = max_offset(viewport.width, self.size.width);
        let max_y = max_offset(viewport.height, self.size.height);

        self.position.x = (self.position.x + self.velocity.x).clamp(0.0, max_x);
        self.position.y = (self.position.y + self.velocity.y).clamp(0.0, max_y);

        if self.position.x <= 0.0 || self.position.x >= max_x {
            self.velocity.x = -self.velocity.x;
            self.velocity.y += perturbation(rng);
        }

        if self.position.y <= 0.0 || self.position.y >= max_y {
            self.velocity.y = -self.velocity.y;
            self.velocity.x += perturbation(rng);
        }

        let limit = BOUNCE_SETTINGS.max_speed;
        self.velocity.x = self.velocity.x.clamp(-limit, limit);
        self.velocity.y = self.velocity.y.clamp(-limit, limit);
    }

    pub fn fit_to(&mut self, viewport: Size) {
        let max_x = max_offset(viewport.width, self.size.width);
        let max_y = max_offset(viewport.height, self.size.height);
        self.position.x = self.position.x.clamp(0.0, max_x);
        self.position.y = self.position.y.clamp(0.0, max_y);
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn viewport() -> Size {
        Size::new(1200.0, 800.0)
    }

    fn sprite_at(x: f64, y: f64, vx: f64, vy: f64) -> SpriteState {
        SpriteState {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            size: Size::new(200.0, 150.0),
        }
    }

    #[test]
    fn test_left_wall_reflects_and_perturbs() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut sprite = sprite_at(0.0, 300.0, -5.0, 2.0);

        sprite.tick(viewport(), &mut rng);

        assert_eq!(sprite.position.x, 0.0);
        assert_eq!(sprite.velocity.x, 5.0);
        assert_ne!(sprite.velocity.y, 2.0);
        assert!((sprite.velocity.y - 2.0).abs() <= BOUNCE_SETTINGS.perturbation);
    }

    #[test]
    fn test_bottom_wall_clamps_position() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sprite = sprite_at(500.0, 648.0, 1.0, 4.0);

        sprite.tick(viewport(), &mut rng);

        assert_eq!(sprite.position.y, 650.0);
        assert_eq!(sprite.velocity.y, -4.0);
    }

    #[test]
    fn test_free_flight_is_plain_integration() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut sprite = sprite_at(100.0, 100.0, 4.5, -3.0);

        sprite.tick(viewport(), &mut rng);

        assert_eq!(sprite.position, Vec2::new(104.5, 97.0));
        assert_eq!(sprite.velocity, Vec2::new(4.5, -3.0));
    }

    #[test]
    fn test_governor_caps_velocity() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut sprite = sprite_at(0.0, 300.0, -5.0, 5.9);

        for _ in 0..50 {
            sprite.position.x = 0.0;
            sprite.velocity.x = -sprite.velocity.x.abs();
            sprite.tick(viewport(), &mut rng);
            assert!(sprite.velocity.y.abs() <= BOUNCE_SETTINGS.max_speed);
        }
    }

    #[test]
    fn test_long_run_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let view = viewport();
        let mut sprites: Vec<SpriteState> = (0..20)
            .map(|_| SpriteState::spawn(Size::new(400.0, 300.0), view, &mut rng))
            .collect();

        for _ in 0..5_000 {
            for sprite in &mut sprites {
                sprite.tick(view, &mut rng);
                assert!(sprite.position.x >= 0.0);
                assert!(sprite.position.y >= 0.0);
                assert!(sprite.position.x <= view.width - sprite.size.width);
                assert!(sprite.position.y <= view.height - sprite.size.height);
                assert!(sprite.velocity.x.abs() <= BOUNCE_SETTINGS.max_speed);
                assert!(sprite.velocity.y.abs() <= BOUNCE_SETTINGS.max_speed);
            }
        }
    }

    #[test]
    fn test_spawn_scales_to_fixed_width() {
        let mut rng = StdRng::seed_from_u64(5);
        let sprite = SpriteState::spawn(Size::new(400.0, 300.0), viewport(), &mut rng);

        assert_eq!(sprite.size, Size::new(200.0, 150.0));
        let low = BOUNCE_SETTINGS.base_speed_x - BOUNCE_SETTINGS.speed_jitter;
        let high = BOUNCE_SETTINGS.base_speed_x + BOUNCE_SETTINGS.speed_jitter;
        assert!(sprite.velocity.x.abs() >= low);
        assert!(sprite.velocity.x.abs() < high);
    }

    #[test]
    fn test_spawn_with_degenerate_image_is_square() {
        let mut rng = StdRng::seed_from_u64(5);
        let sprite = SpriteState::spawn(Size::new(0.0, 0.0), viewport(), &mut rng);
        assert_eq!(sprite.size, Size::new(200.0, 200.0));
    }

    #[test]
    fn test_fit_to_smaller_viewport_pulls_sprite_in() {
        let mut sprite = sprite_at(1000.0, 600.0, 4.0, 3.0);

        sprite.fit_to(Size::new(600.0, 400.0));

        assert_eq!(sprite.position, Vec2::new(400.0, 250.0));
    }

    #[test]
    fn test_viewport_smaller_than_sprite_pins_to_origin() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut sprite = sprite_at(50.0, 50.0, 4.0, 3.0);
        let tiny = Size::new(100.0, 100.0);

        sprite.fit_to(tiny);
        assert_eq!(sprite.position, Vec2::new(0.0, 0.0));

        sprite.tick(tiny, &mut rng);
        assert_eq!(sprite.position, Vec2::new(0.0, 0.0));
    }
}
