//! Is a module containing the [`Token`] type and all of its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use derive_more::From;
use derive_new::new;
use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use glox_base::source_file::{SourceElement, Span};
use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

/// Is an enumeration representing the reserved words of Lox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    And,
    Class,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    /// Looks the word up in the keyword table. The match is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_KEYWORD_MAP: HashMap<&'static str, KeywordKind> = {
                let mut map = HashMap::new();

                for keyword in KeywordKind::iter() {
                    map.insert(keyword.as_str(), keyword);
                }

                map
            };
        }
        STRING_KEYWORD_MAP.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Class => "class",
            Self::Else => "else",
            Self::False => "false",
            Self::For => "for",
            Self::Fun => "fun",
            Self::If => "if",
            Self::Nil => "nil",
            Self::Or => "or",
            Self::Print => "print",
            Self::Return => "return",
            Self::Super => "super",
            Self::This => "this",
            Self::True => "true",
            Self::Var => "var",
            Self::While => "while",
        }
    }
}

/// Is an enumeration of every kind of token a Lox source can be scanned into.
///
/// This set is closed: a parser built on top of the scanner can match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
#[allow(missing_docs)]
pub enum TokenKind {
    // single-character punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Star,
    Slash,

    // one or two character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // literals
    String,
    Number,
    Identifier,

    Keyword(KeywordKind),
}

impl TokenKind {
    /// Classifies an identifier-shaped word: a reserved word yields its [`Self::Keyword`], any
    /// other word is an [`Self::Identifier`].
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        KeywordKind::from_str(word).map_or(Self::Identifier, Self::Keyword)
    }

    /// Gets the fixed spelling of the token kind, if it has one.
    ///
    /// Literal kinds ([`Self::String`], [`Self::Number`], and [`Self::Identifier`]) have no
    /// fixed spelling and return [`None`].
    #[must_use]
    pub fn as_str(self) -> Option<&'static str> {
        let spelling = match self {
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Minus => "-",
            Self::Plus => "+",
            Self::Semicolon => ";",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Bang => "!",
            Self::BangEqual => "!=",
            Self::Equal => "=",
            Self::EqualEqual => "==",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Keyword(keyword) => keyword.as_str(),
            Self::String | Self::Number | Self::Identifier => return None,
        };

        Some(spelling)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Semicolon => "SEMICOLON",
            Self::Star => "STAR",
            Self::Slash => "SLASH",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::Identifier => "IDENTIFIER",
            Self::Keyword(keyword) => return f.write_str(&keyword.as_str().to_ascii_uppercase()),
        };

        f.write_str(name)
    }
}

/// Is the decoded value of a literal token.
#[derive(Debug, Clone, PartialEq, PartialOrd, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Literal {
    /// The text between the quotes of a string literal.
    String(String),
    Number(f64),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(string) => f.write_str(string),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Represents a single classified lexeme of the source code.
///
/// Tokens are immutable: every field is only reachable through its getter.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters, new)]
pub struct Token {
    /// Gets the kind of the token.
    #[get_copy = "pub"]
    kind: TokenKind,

    /// Gets the span of the source code the token was scanned from.
    #[get = "pub"]
    span: Span,

    /// Gets the decoded value of a string or number token.
    #[get = "pub"]
    literal: Option<Literal>,

    /// Gets the line (starting at 1) that the token starts on.
    #[get_copy = "pub"]
    line: usize,
}

impl Token {
    /// Gets the exact source text of the token, quotes included for strings.
    #[must_use]
    pub fn lexeme(&self) -> &str { self.span.str() }
}

impl SourceElement for Token {
    fn span(&self) -> Span { self.span.clone() }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.kind, self.lexeme())?;

        if let Some(literal) = &self.literal {
            write!(f, " {literal}")?;
        }

        write!(f, " (line {})", self.line)
    }
}
