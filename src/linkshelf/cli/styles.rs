use console::Style;
use linkshelf::model::Theme;
use linkshelf::palette::CardColor;

/// Terminal styles for one theme.
pub struct ShelfStyles {
    pub name: Style,
    pub url: Style,
    pub index: Style,
    pub dim: Style,
}

impl ShelfStyles {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                name: Style::new().bold(),
                url: Style::new().blue().underlined(),
                index: Style::new().yellow(),
                dim: Style::new().dim(),
            },
            Theme::Dark => Self {
                name: Style::new().bold().white(),
                url: Style::new().cyan().underlined(),
                index: Style::new().color256(rgb_to_ansi256((250, 200, 90))),
                dim: Style::new().color256(rgb_to_ansi256((140, 140, 140))),
            },
            Theme::Sepia => Self {
                name: Style::new().bold().color256(rgb_to_ansi256((94, 60, 30))),
                url: Style::new()
                    .color256(rgb_to_ansi256((140, 90, 40)))
                    .underlined(),
                index: Style::new().color256(rgb_to_ansi256((170, 120, 60))),
                dim: Style::new().color256(rgb_to_ansi256((160, 140, 110))).italic(),
            },
        }
    }

    pub fn card(&self, color: CardColor) -> Style {
        Style::new().color256(rgb_to_ansi256(color.rgb))
    }
}

pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greys_map_to_the_grey_ramp() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert!(rgb_to_ansi256((128, 128, 128)) >= 232);
    }

    #[test]
    fn colors_map_to_the_cube() {
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
    }
}
