//! Contains all kinds of lexical errors that can occur while scanning the source code.

use std::fmt::{Debug, Display};

use derive_more::From;
use enum_as_inner::EnumAsInner;
use glox_base::{
    diagnostic::Handler,
    log::{Message, Severity, SourceCodeDisplay},
    source_file::Span,
};

/// The source code contains a string literal whose closing `"` is never found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnterminatedString {
    /// The span of the opening `"` of the string.
    pub span: Span,

    /// The line the string starts on.
    pub line: usize,
}

impl Display for UnterminatedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "found an unterminated string literal"),
            SourceCodeDisplay::new(&self.span, Some("this string is never closed"))
        )
    }
}

/// The source code contains a character that does not start any token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnexpectedCharacter {
    /// The span of the character.
    pub span: Span,

    /// The unexpected character itself.
    pub character: char,

    /// The line the character is on.
    pub line: usize,
}

impl UnexpectedCharacter {
    fn message(&self) -> String {
        format!(
            "unexpected character `{}` (U+{:04X})",
            self.character.escape_debug(),
            u32::from(self.character)
        )
    }
}

impl Display for UnexpectedCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, self.message()),
            SourceCodeDisplay::new(&self.span, Option::<i32>::None)
        )
    }
}

/// A run of digits could not be converted into a number value.
///
/// The digit runs accepted by the scanner always convert, so this is reported with warning
/// severity and does not fail the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidNumericLiteral {
    /// The span of the numeric literal.
    pub span: Span,

    /// The line the literal is on.
    pub line: usize,
}

impl Display for InvalidNumericLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Warning,
                format!("unable to parse `{}` into a number", self.span.str())
            ),
            SourceCodeDisplay::new(&self.span, Option::<i32>::None)
        )
    }
}

/// Is an enumeration containing all kinds of lexical errors that can occur while scanning the
/// source code.
#[derive(Debug, Clone, PartialEq, Eq, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    UnterminatedString(UnterminatedString),
    UnexpectedCharacter(UnexpectedCharacter),
    InvalidNumericLiteral(InvalidNumericLiteral),
}

impl Error {
    /// Gets the span of the source code the error points at.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::UnterminatedString(error) => &error.span,
            Self::UnexpectedCharacter(error) => &error.span,
            Self::InvalidNumericLiteral(error) => &error.span,
        }
    }

    /// Gets the line (starting at 1) the error is reported on.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::UnterminatedString(error) => error.line,
            Self::UnexpectedCharacter(error) => error.line,
            Self::InvalidNumericLiteral(error) => error.line,
        }
    }

    /// Gets how serious the error is. Only [`Severity::Error`] diagnostics make a scan count as
    /// failed.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::UnterminatedString(..) | Self::UnexpectedCharacter(..) => Severity::Error,
            Self::InvalidNumericLiteral(..) => Severity::Warning,
        }
    }

    /// Gets the plain, uncolored description of the error.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UnterminatedString(..) => "unterminated string literal".to_string(),
            Self::UnexpectedCharacter(error) => error.message(),
            Self::InvalidNumericLiteral(error) => {
                format!("unable to parse `{}` into a number", error.span.str())
            }
        }
    }

    /// Gets the `path:line:column` location the error points at.
    #[must_use]
    pub fn location(&self) -> String {
        let span = self.span();
        format!(
            "{}:{}",
            span.source_file().full_path().display(),
            span.start_location()
        )
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString(err) => write!(f, "{err}"),
            Self::UnexpectedCharacter(err) => write!(f, "{err}"),
            Self::InvalidNumericLiteral(err) => write!(f, "{err}"),
        }
    }
}

/// Is a [`Handler`] that forwards every lexical error to a `report(line, location, message)`
/// callback.
pub struct Reporter<F> {
    report: F,
}

impl<F> Reporter<F>
where
    F: Fn(usize, &str, &str),
{
    /// Creates a [`Reporter`] that calls `report` once per received error.
    pub fn new(report: F) -> Self { Self { report } }
}

impl<F> Debug for Reporter<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reporter").finish_non_exhaustive()
    }
}

impl<F> Handler<Error> for Reporter<F>
where
    F: Fn(usize, &str, &str),
{
    fn receive(&self, error: Error) {
        (self.report)(error.line(), &error.location(), &error.message());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use glox_base::{diagnostic::Handler, log::Severity, source_file::SourceFile};

    use super::{Error, InvalidNumericLiteral, Reporter, UnexpectedCharacter};
    use crate::scanner::Scanner;

    #[test]
    fn unexpected_character_mentions_code_point() {
        let source_file = SourceFile::from_string("a @", "test.lox");
        let mut iter = source_file.iter();
        iter.nth(1);
        let (start, character) = iter.next().unwrap();

        let error = Error::from(UnexpectedCharacter {
            span: iter.span_from(start),
            character,
            line: 1,
        });

        assert_eq!(error.message(), "unexpected character `@` (U+0040)");
        assert_eq!(error.location(), "test.lox:1:3");
        assert_eq!(error.severity(), Severity::Error);
        assert!(error.to_string().contains("U+0040"));
    }

    #[test]
    fn invalid_numeric_literal_is_a_warning() {
        let source_file = SourceFile::from_string("12", "test.lox");
        let mut iter = source_file.iter();
        iter.by_ref().for_each(drop);

        let error = Error::from(InvalidNumericLiteral {
            span: iter.span_from(0),
            line: 1,
        });

        assert_eq!(error.severity(), Severity::Warning);
        assert!(error.to_string().contains("[warning]:"));
    }

    #[test]
    fn reporter_receives_line_location_and_message() {
        let source_file = SourceFile::from_string("\"ok\"\n\n  \"open", "script.lox");
        let reports = RefCell::new(Vec::new());
        let reporter = Reporter::new(|line, location: &str, message: &str| {
            reports
                .borrow_mut()
                .push((line, location.to_owned(), message.to_owned()));
        });

        let tokens = Scanner::new(&source_file).scan_tokens(&reporter);

        assert_eq!(tokens.len(), 1);
        assert_eq!(reports.into_inner(), vec![(
            3,
            "script.lox:3:3".to_owned(),
            "unterminated string literal".to_owned()
        )]);
    }

    #[test]
    fn reporter_is_a_handler() {
        fn assert_handler(_: &dyn Handler<Error>) {}

        assert_handler(&Reporter::new(|_, _: &str, _: &str| {}));
    }
}
