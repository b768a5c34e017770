//! Indentation unit for emitted source.

const SPACES: &str = "                ";

/// Text written once per indentation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width, at most 16.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Four spaces, the default.
    pub const FOUR_SPACES: Self = Self::Spaces(4);

    /// Two spaces.
    pub const TWO_SPACES: Self = Self::Spaces(2);

    /// The string for one indentation level.
    ///
    /// Widths above 16 are clamped to 16.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(width) => &SPACES[..usize::from(*width).min(SPACES.len())],
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR_SPACES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Spaces(3).as_str(), "   ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_wide_indent_is_clamped() {
        assert_eq!(Indent::Spaces(40).as_str().len(), 16);
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::Spaces(4));
    }
}
