//! Contains the [`TokenStream`] struct.

use std::sync::Arc;

use derive_more::{Deref, From};
use glox_base::{diagnostic::Handler, source_file::SourceFile};

use crate::{error, scanner::Scanner, token::Token};

/// Is the list of tokens scanned from one unit of source code, in source order.
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// next stage of the toolchain. It is fully materialized: the whole source is scanned before the
/// stream is handed out.
#[derive(Debug, Clone, PartialEq, Default, Deref, From)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Scans the given source file with a fresh [`Scanner`].
    ///
    /// Lexical errors are sent to the `handler`; the stream contains every token that could be
    /// produced regardless.
    #[must_use]
    pub fn tokenize(source_file: &Arc<SourceFile>, handler: &dyn Handler<error::Error>) -> Self {
        Scanner::new(source_file).scan_tokens(handler)
    }

    /// Dissolves this struct into the underlying list of tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> { self.tokens }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter { self.tokens.iter() }
}
