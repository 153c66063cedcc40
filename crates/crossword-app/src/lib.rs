//! Shared library module for the Crossword app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod app;
pub mod settings;
pub mod ui;
pub mod version;
