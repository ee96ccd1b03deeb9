use ratatui::style::Color;

use crate::constants::CELL_SETTINGS;

use super::Size;

pub struct CatArt {
    pub lines: &'static [&'static str],
    pub color: Color,
}

impl CatArt {
    pub fn columns(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn natural_size(&self) -> Size {
        Size::new(
            self.columns() as f64 * CELL_SETTINGS.px_width,
            self.lines.len() as f64 * CELL_SETTINGS.px_height,
        )
    }
}

pub const CAT_ART: [CatArt; 4] = [
    CatArt {
        lines: &[
            r"   /\_/\   ",
            r"  ( o.o )  ",
            r"   > ^ <   ",
            r"  /     \  ",
            r" (_)---(_) ",
        ],
        color: Color::Rgb(255, 204, 0),
    },
    CatArt {
        lines: &[
            r" |\---/| ",
            r" | o_o | ",
            r"  \_^_/  ",
        ],
        color: Color::Rgb(255, 153, 0),
    },
    CatArt {
        lines: &[
            r"  /\_/\  (",
            r" ( ^.^ ) _)",
            r"   \~(*)~/ ",
            r"    // \\  ",
        ],
        color: Color::Rgb(0, 255, 255),
    },
    CatArt {
        lines: &[
            r"      |\      _,,,---,,_     ",
            r"ZZZzz /,`.-'`'    -.  ;-;;,_ ",
            r"     |,4-  ) )-,_. ,\ (  `'-'",
            r"    '---''(_/--'  `-'\_)     ",
        ],
        color: Color::Rgb(153, 0, 255),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_size_uses_cell_pixels() {
        let art = &CAT_ART[1];
        let size = art.natural_size();
        assert_eq!(size.width, 9.0 * CELL_SETTINGS.px_width);
        assert_eq!(size.height, 3.0 * CELL_SETTINGS.px_height);
    }

    #[test]
    fn test_every_cat_has_a_body() {
        assert!(CAT_ART.iter().all(|art| !art.lines.is_empty() && art.columns() > 0));
    }
}
