//! Provides the functions related to rendering messages and diagnostics for the console.

use std::fmt::{Display, Write};

use derive_new::new;
use formatting::{Color, Style};

use crate::source_file::Span;

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = Style::Bold.with(match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        });

        let message_part = Style::Bold.with(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

fn get_digit(mut number: usize) -> usize {
    let mut digit = 0;

    while number > 0 {
        number /= 10;
        digit += 1;
    }

    digit
}

/// Gets the number of terminal columns a character takes up; tabs are expanded to 4 spaces.
fn display_width(character: char) -> usize {
    if character == '\t' {
        4
    } else {
        1
    }
}

/// Structure implementing [`Display`] that prints the source line a span starts on and
/// underlines the span.
///
/// A span that continues onto later lines is underlined up to the end of its first line.
#[derive(Debug, Clone, Copy, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed next to the underline.
    pub help_display: Option<T>,
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let location = self.span.start_location();
        let source_file = self.span.source_file();
        let gutter = get_digit(location.line);
        let pipe = Style::Bold.with(Color::Cyan.with("┃"));

        let line = source_file
            .get_line(location.line)
            .unwrap_or_default()
            .trim_end_matches(|character: char| character == '\n' || character == '\r');

        // prints the source location
        writeln!(
            f,
            "{:gutter$}{} {}:{location}",
            "",
            Style::Bold.with(Color::Cyan.with("-->")),
            source_file.full_path().display(),
        )?;
        writeln!(f, "{:gutter$} {pipe}", "")?;

        // prints the line itself
        write!(
            f,
            "{} {pipe} ",
            Style::Bold.with(Color::Cyan.with(location.line))
        )?;
        for character in line.chars() {
            if character == '\t' {
                f.write_str("    ")?;
            } else {
                f.write_char(character)?;
            }
        }
        writeln!(f)?;

        // prints the underline below the span
        let offset: usize = line
            .chars()
            .take(location.column.saturating_sub(1))
            .map(display_width)
            .sum();
        let width: usize = self
            .span
            .str()
            .split('\n')
            .next()
            .unwrap_or_default()
            .trim_end_matches('\r')
            .chars()
            .map(display_width)
            .sum();

        write!(
            f,
            "{:gutter$} {pipe} {:offset$}{}",
            "",
            "",
            Style::Bold.with(Color::Red.with("^".repeat(width.max(1))))
        )?;

        if let Some(help_display) = &self.help_display {
            write!(f, " {}: {help_display}", Style::Bold.with("help"))?;
        }

        writeln!(f)?;
        write!(f, "{:gutter$} {pipe}", "")
    }
}
