//! Parser test suite.
//!
//! One file per grammar area, with shared parse/extraction helpers in
//! [`utils`].

mod utils;

mod directive_tests;
mod document_tests;
mod error_tests;
mod extension_tests;
mod mapping_tests;
mod selection_tests;
mod stream_tests;
mod type_tests;
