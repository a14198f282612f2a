//! Contains the ANSI escape sequences used to style diagnostics printed to a terminal.

use std::fmt::Display;

/// Represents a text style that can be applied to a displayable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Style {
    Bold,
    Underline,
}

impl Style {
    /// Applies the style to the given displayable object.
    pub fn with<T>(self, display: T) -> Styled<T> {
        let code = match self {
            Self::Bold => "\x1B[1m",
            Self::Underline => "\x1B[4m",
        };

        Styled { code, display }
    }
}

/// Represents a foreground color that can be applied to a displayable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Yellow,
    Cyan,
}

impl Color {
    /// Applies the color to the given displayable object.
    pub fn with<T>(self, display: T) -> Styled<T> {
        let code = match self {
            Self::Red => "\x1B[31m",
            Self::Yellow => "\x1B[33m",
            Self::Cyan => "\x1B[36m",
        };

        Styled { code, display }
    }
}

/// Is a struct implementing [`Display`] that wraps a displayable object in an escape sequence
/// and resets the terminal attributes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Styled<T> {
    code: &'static str,

    /// The displayable object being styled.
    pub display: T,
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}\x1B[0m", self.code, self.display)
    }
}
