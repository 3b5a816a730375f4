#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const BLUE: Self = Self { r: 0, g: 0, b: 255 };

    /// `#rrggbb`, as used by the SVG presenter.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(Colour::BLACK.to_hex(), "#000000");
        assert_eq!(Colour::WHITE.to_hex(), "#ffffff");
        assert_eq!(Colour::BLUE.to_hex(), "#0000ff");
        let colour = Colour {
            r: 18,
            g: 171,
            b: 5,
        };

        assert_eq!(colour.to_hex(), "#12ab05");
    }
}
