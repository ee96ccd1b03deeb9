use ratatui::style::Color;

pub const CATEGORY_COLORS: [Color; 6] = [
    Color::Rgb(0, 176, 80),
    Color::Rgb(0, 153, 255),
    Color::Rgb(153, 0, 255),
    Color::Rgb(255, 204, 0),
    Color::Rgb(255, 51, 0),
    Color::Rgb(128, 128, 128),
];

pub const TIME_SETTINGS: TimeSettings = TimeSettings {
    tick_ms: 1000,
    frame_ms: 16,
    target_fps: 30,
};

pub const BOUNCE_SETTINGS: BounceSettings = BounceSettings {
    sprite_width: 200.0,
    base_speed_x: 4.0,
    base_speed_y: 3.0,
    speed_jitter: 2.0,
    perturbation: 0.5,
    max_speed: 6.0,
    bombardment_size: 100,
};

pub const CELL_SETTINGS: CellSettings = CellSettings {
    px_width: 10.0,
    px_height: 20.0,
};

pub const CARD_SETTINGS: CardSettings = CardSettings {
    urgent_days: 7,
    description_max_chars: 72,
};

pub const FILE_PATHS: FilePaths = FilePaths {
    programs: "api.json",
    config: "config.json",
    log: "ysws-timer.log",
};

pub struct TimeSettings {
    pub tick_ms: u64,
    pub frame_ms: u64,
    pub target_fps: u64,
}

pub struct BounceSettings {
    pub sprite_width: f64,
    pub base_speed_x: f64,
    pub base_speed_y: f64,
    pub speed_jitter: f64,
    pub perturbation: f64,
    pub max_speed: f64,
    pub bombardment_size: usize,
}

pub struct CellSettings {
    pub px_width: f64,
    pub px_height: f64,
}

pub struct CardSettings {
    pub urgent_days: i64,
    pub description_max_chars: usize,
}

pub struct FilePaths {
    pub programs: &'static str,
    pub config: &'static str,
    pub log: &'static str,
}
