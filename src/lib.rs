//! localizable-sheets
//!
//! Generates a Swift enum, `.strings` and `.stringsdict` files from a
//! translation spreadsheet: keys, text per language and a plural table.

pub mod config;
pub mod input;
pub mod ir;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use pipeline::{
    GenerateError,
    GenerationReport,
    Pipeline,
    PipelineError,
    generate,
};
