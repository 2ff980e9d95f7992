use rand::seq::SliceRandom;
use rand::Rng;

/// A card color, as a CSS hex string plus its RGB triple for terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardColor {
    pub hex: &'static str,
    pub rgb: (u8, u8, u8),
}

const fn color(hex: &'static str, r: u8, g: u8, b: u8) -> CardColor {
    CardColor { hex, rgb: (r, g, b) }
}

pub const BASE_COLORS: [CardColor; 8] = [
    color("#ff6b6b", 0xff, 0x6b, 0x6b),
    color("#feca57", 0xfe, 0xca, 0x57),
    color("#48dbfb", 0x48, 0xdb, 0xfb),
    color("#1dd1a1", 0x1d, 0xd1, 0xa1),
    color("#5f27cd", 0x5f, 0x27, 0xcd),
    color("#ff9ff3", 0xff, 0x9f, 0xf3),
    color("#54a0ff", 0x54, 0xa0, 0xff),
    color("#00d2d3", 0x00, 0xd2, 0xd3),
];

/// The card palette for one session. Permuted at startup, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<CardColor>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: BASE_COLORS.to_vec(),
        }
    }
}

impl Palette {
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut colors = BASE_COLORS.to_vec();
        colors.shuffle(rng);
        Self { colors }
    }

    pub fn colors(&self) -> &[CardColor] {
        &self.colors
    }

    /// Color for the card at `index`, cycling through the palette.
    pub fn color_at(&self, index: usize) -> CardColor {
        self.colors[index % self.colors.len()]
    }
}
