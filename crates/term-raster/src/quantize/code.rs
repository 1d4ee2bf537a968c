use std::fmt;

/// A color as it appears on the wire.
///
/// Indexed modes send a palette index, truecolor sends the three 8-bit
/// channels. `Display` gives the exact text placed after the escape
/// prefix: `"9"` or `"255;128;0"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCode {
    Index(u8),
    Rgb([u8; 3]),
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorCode::Index(idx) => write!(f, "{}", idx),
            ColorCode::Rgb([r, g, b]) => write!(f, "{};{};{}", r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ColorCode::Index(0).to_string(), "0");
        assert_eq!(ColorCode::Index(98).to_string(), "98");
        assert_eq!(ColorCode::Rgb([255, 128, 0]).to_string(), "255;128;0");
    }
}
