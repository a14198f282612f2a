//! Contains the helpers shared by the property based tests of the glox crates.

#![deny(
    missing_docs,
    missing_debug_implementations,
    clippy::all,
    rustdoc::broken_intra_doc_links
)]

pub mod input;
