//! Contains the code related to the source code input.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    fs::File,
    iter::Peekable,
    ops::Range,
    path::{Path, PathBuf},
    str::CharIndices,
    sync::Arc,
};

use getset::{CopyGetters, Getters};
use memmap::MmapOptions;
use ouroboros::self_referencing;
use thiserror::Error;

/// Represents an error that occurs when loading/creating a source file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Utf8Error(#[from] std::str::Utf8Error),
}

/// Represents a unit of source code handed to the scanner: a whole script file or a single
/// line typed at the prompt.
#[derive(Getters)]
pub struct SourceFile {
    content: Content,

    /// Gets the path that the source file is displayed with in diagnostics.
    #[get = "pub"]
    full_path: PathBuf,

    lines: Vec<Range<usize>>,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("full_path", &self.full_path)
            .field("lines", &self.lines)
            .finish()
    }
}

enum Content {
    Mapped(MappedSource),
    Owned(String),
}

impl Content {
    fn as_str(&self) -> &str {
        match self {
            Self::Mapped(mapped) => mapped.content(),
            Self::Owned(string) => string,
        }
    }
}

#[self_referencing]
struct MappedSource {
    file: File,
    mapped: Option<memmap::Mmap>,

    #[borrows(mapped)]
    mapped_str: &'this str,
}

impl MappedSource {
    fn create(file: File) -> Result<Self, Error> {
        // mapping a zero-length file fails on most platforms
        let mapped = if file.metadata()?.len() == 0 {
            None
        } else {
            Some(unsafe { MmapOptions::new().map(&file)? })
        };

        MappedSourceTryBuilder {
            file,
            mapped,
            mapped_str_builder: |mapped| {
                mapped
                    .as_ref()
                    .map_or(Ok(""), |mapped| std::str::from_utf8(mapped).map_err(Error::from))
            },
        }
        .try_build()
    }

    fn content(&self) -> &str { self.borrow_mapped_str() }
}

impl SourceFile {
    fn new(full_path: PathBuf, content: Content) -> Arc<Self> {
        let lines = get_line_byte_positions(content.as_str());
        Arc::new(Self {
            content,
            full_path,
            lines,
        })
    }

    /// Gets the content of the source file.
    #[must_use]
    pub fn content(&self) -> &str { self.content.as_str() }

    /// Gets the line of the source file at the given line number, including its line
    /// terminator.
    ///
    /// The line number starts at 1.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }

        self.lines
            .get(line - 1)
            .map(|range| &self.content()[range.clone()])
    }

    /// Gets the [`Iterator`] for the source file.
    #[must_use]
    pub fn iter<'a>(self: &'a Arc<Self>) -> Iterator<'a> {
        Iterator {
            source_file: self,
            iterator: self.content().char_indices().peekable(),
        }
    }

    /// Gets the number of lines in the source file.
    #[must_use]
    pub fn line_number(&self) -> usize { self.lines.len() }

    /// Loads the source file from an already opened file by mapping it into memory.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when mapping the file to memory.
    /// - [`Error::Utf8Error`]: Error occurred when converting the mapped bytes to a string.
    pub fn load(file: File, path: PathBuf) -> Result<Arc<Self>, Error> {
        let source = MappedSource::create(file)?;
        Ok(Self::new(path, Content::Mapped(source)))
    }

    /// Opens and loads the source file at the given path.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when opening or mapping the file.
    /// - [`Error::Utf8Error`]: The file is not valid UTF-8.
    pub fn open(path: impl AsRef<Path>) -> Result<Arc<Self>, Error> {
        let path = path.as_ref();
        Self::load(File::open(path)?, path.to_owned())
    }

    /// Creates a source file that lives only in memory, e.g. a line read from the prompt.
    #[must_use]
    pub fn from_string(content: impl Into<String>, path: impl Into<PathBuf>) -> Arc<Self> {
        Self::new(path.into(), Content::Owned(content.into()))
    }

    /// Creates a temporary source file and writes the given displayable object to it.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when creating the temporary file, writing to, and
    ///   mapping it to memory.
    /// - [`Error::Utf8Error`]: Error occurred when converting the mapped bytes to a string.
    pub fn temp(display: impl Display) -> Result<Arc<Self>, Error> {
        use std::io::Write;

        let mut tempfile = tempfile::Builder::new()
            .prefix("glox")
            .suffix(".lox")
            .tempfile()?;

        write!(tempfile.as_file_mut(), "{display}")?;
        let path = tempfile.path().to_owned();

        Self::load(tempfile.into_file(), path)
    }

    /// Gets the [`Location`] of the given byte index.
    ///
    /// The index one past the last byte resolves to the end of the last line.
    #[must_use]
    pub fn get_location(&self, byte_index: ByteIndex) -> Option<Location> {
        if !self.content().is_char_boundary(byte_index) {
            return None;
        }

        let line = if byte_index == self.content().len() {
            self.lines.len() - 1
        } else {
            // gets the line number by binary searching the line ranges
            self.lines
                .binary_search_by(|range| {
                    if range.contains(&byte_index) {
                        Ordering::Equal
                    } else if byte_index < range.start {
                        Ordering::Greater
                    } else {
                        Ordering::Less
                    }
                })
                .ok()?
        };

        let line_start = self.lines[line].start;

        // columns count utf-8 characters and start at 1
        let column = self.content()[line_start..byte_index].chars().count() + 1;

        Some(Location {
            line: line + 1,
            column,
        })
    }
}

/// Is an unsigned integer that represents a byte index in the source code.
pub type ByteIndex = usize;

/// Represents a range of characters in a source file.
#[derive(Clone, Getters, CopyGetters)]
pub struct Span {
    /// Gets the start byte index of the span.
    #[get_copy = "pub"]
    start: ByteIndex,

    /// Gets the end byte index of the span (exclusive).
    #[get_copy = "pub"]
    end: ByteIndex,

    /// Gets the source file that the span is located in.
    #[get = "pub"]
    source_file: Arc<SourceFile>,
}

impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("content", &self.str())
            .finish()
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source_file, &other.source_file)
            && self.start == other.start
            && self.end == other.end
    }
}

impl Eq for Span {}

/// Is a struct pointing to a particular location in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// The line number of the location (starts at 1).
    pub line: usize,

    /// The column number of the location (starts at 1).
    pub column: usize,
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Span {
    /// Creates a span from the given start and end byte indices in the source file.
    ///
    /// Returns [`None`] if the range is reversed, out of bounds, or does not lie on character
    /// boundaries.
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>, start: ByteIndex, end: ByteIndex) -> Option<Self> {
        let content = source_file.content();

        if start > end || !content.is_char_boundary(start) || !content.is_char_boundary(end) {
            return None;
        }

        Some(Self {
            start,
            end,
            source_file,
        })
    }

    /// Gets the string slice of the source code that the span represents.
    #[must_use]
    pub fn str(&self) -> &str { &self.source_file.content()[self.start..self.end] }

    /// Gets the starting [`Location`] of the span.
    #[must_use]
    pub fn start_location(&self) -> Location {
        self.source_file
            .get_location(self.start)
            .unwrap_or_default()
    }
}

/// Represents an element that is located within a source file.
pub trait SourceElement {
    /// Gets the span location of the element.
    fn span(&self) -> Span;
}

/// Is an iterator iterating over the characters in a source file that can look ahead by up to
/// two characters.
#[derive(Debug, Clone, CopyGetters)]
pub struct Iterator<'a> {
    /// Gets the source file that the iterator is iterating over.
    #[get_copy = "pub"]
    source_file: &'a Arc<SourceFile>,
    iterator: Peekable<CharIndices<'a>>,
}

impl<'a> Iterator<'a> {
    /// Peeks at the next character in the source file.
    pub fn peek(&mut self) -> Option<(ByteIndex, char)> { self.iterator.peek().copied() }

    /// Peeks at the character after the next one without consuming anything.
    #[must_use]
    pub fn peek_second(&self) -> Option<(ByteIndex, char)> {
        let mut lookahead = self.iterator.clone();
        lookahead.next();
        lookahead.next()
    }

    /// Consumes the next character only if it equals `expected`.
    pub fn next_if_eq(&mut self, expected: char) -> bool {
        self.iterator
            .next_if(|(_, character)| *character == expected)
            .is_some()
    }

    /// Gets the byte index of the next character, or the length of the source when the
    /// iterator is exhausted.
    pub fn offset(&mut self) -> ByteIndex {
        let end = self.source_file.content().len();
        self.iterator.peek().map_or(end, |(index, _)| *index)
    }

    /// Creates a span from the given start index up to the current position of the iterator.
    ///
    /// `start` must be an index previously yielded by this iterator.
    pub fn span_from(&mut self, start: ByteIndex) -> Span {
        Span {
            start,
            end: self.offset(),
            source_file: self.source_file.clone(),
        }
    }
}

impl<'a> std::iter::Iterator for Iterator<'a> {
    type Item = (ByteIndex, char);

    fn next(&mut self) -> Option<Self::Item> { self.iterator.next() }
}

fn get_line_byte_positions(text: &str) -> Vec<Range<usize>> {
    let mut current_position = 0;
    let mut results = Vec::new();

    // a lone `\r` does not end a line, `\r\n` ends at its `\n`
    for (byte, _) in text.match_indices('\n') {
        #[allow(clippy::range_plus_one)]
        results.push(current_position..byte + 1);

        current_position = byte + 1;
    }

    results.push(current_position..text.len());

    results
}

#[cfg(test)]
mod tests;
