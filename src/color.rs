// Simple color struct, three 8-bit channels shared by every particle of one
// explosion. Converts to the rgb() string form the 2d context expects.

use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    // Each channel uniform over [0, 256)
    pub fn random<R: Rng>(rng: &mut R) -> Color {
        Color {
            r: rng.gen::<u8>(),
            g: rng.gen::<u8>(),
            b: rng.gen::<u8>(),
        }
    }

    pub fn to_css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_string_matches_channels() {
        assert_eq!(Color::new(255, 0, 128).to_css(), "rgb(255,0,128)");
        assert_eq!(Color::BLACK.to_css(), "rgb(0,0,0)");
    }
}
