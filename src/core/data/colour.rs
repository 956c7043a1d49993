#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn grey(level: u8) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
        }
    }

    #[must_use]
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grey_sets_all_channels() {
        assert_eq!(Colour::grey(25), Colour { r: 25, g: 25, b: 25 });
    }

    #[test]
    fn default_is_black() {
        assert_eq!(Colour::default(), Colour::BLACK);
        assert_eq!(Colour::BLACK.to_rgb(), [0, 0, 0]);
    }
}
