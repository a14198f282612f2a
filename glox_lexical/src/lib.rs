//! This crate implements the lexical analysis phase of glox. This phase is responsible for
//! scanning the source code of a Lox script into a flat list of tokens.
//!
//! The final output of this phase is a [`token_stream::TokenStream`], produced by
//! [`scanner::Scanner::scan_tokens`]. Lexical errors never stop the scan; they are reported
//! to a [`glox_base::diagnostic::Handler`] and scanning continues with the next character.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod error;
pub mod scanner;
pub mod token;
pub mod token_stream;
