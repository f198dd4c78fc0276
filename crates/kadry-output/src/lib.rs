#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod sink;

pub use export::ArrayExporter;
pub use sink::{ArraySink, CsvArraySink, ExportError, X_FILENAME, Y_FILENAME};
